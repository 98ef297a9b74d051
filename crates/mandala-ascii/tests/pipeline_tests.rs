use std::time::Duration;

use crossbeam::channel::{bounded, Receiver};
use mandala_ascii::*;
use mandala_core::{AsciiSettings, PatternType, Settings};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ── Helpers ──────────────────────────────────────────────────────

/// Asserts that `rects` cover every bright pixel exactly once and no dark one.
fn assert_partition(bitmap: &Bitmap, rects: &[Rect]) {
    let (w, h) = (bitmap.width(), bitmap.height());
    let mut cover = vec![0u32; w as usize * h as usize];
    for rect in rects {
        assert!(rect.width > 0 && rect.height > 0, "degenerate {rect:?}");
        assert!(rect.x + rect.width <= w && rect.y + rect.height <= h, "{rect:?} out of bounds");
        for y in rect.y..rect.y + rect.height {
            for x in rect.x..rect.x + rect.width {
                cover[(y * w + x) as usize] += 1;
            }
        }
    }
    for y in 0..h {
        for x in 0..w {
            let expected = u32::from(bitmap.get(x, y));
            assert_eq!(cover[(y * w + x) as usize], expected, "pixel ({x}, {y})");
        }
    }
}

fn pool_position(ch: char) -> usize {
    mandala_core::settings::DEFAULT_CHARSET.chars().position(|c| c == ch).unwrap()
}

/// Pipeline plus the ASCII and glyph receivers.
fn pipeline_with<R: Rasterizer + Send + Sync + 'static>(
    rasterizer: R,
) -> (AsciiPipeline<R>, Receiver<Artifact>, Receiver<Artifact>) {
    let (ascii_slot, ascii_rx) = output_slot();
    let (glyph_slot, glyph_rx) = output_slot();
    (AsciiPipeline::new(rasterizer, ascii_slot, glyph_slot), ascii_rx, glyph_rx)
}

/// Rasterizer that blocks in `decode` for documents starting with "slow"
/// until the gate opens.
struct GatedRasterizer {
    gate: Receiver<()>,
}

impl Rasterizer for GatedRasterizer {
    type Image = Vec<u8>;

    fn decode(&self, data: &[u8]) -> Result<Vec<u8>, String> {
        if data.starts_with(b"slow") {
            self.gate.recv().map_err(|e| e.to_string())?;
        }
        if data.starts_with(b"broken") {
            return Err("undecodable".to_string());
        }
        Ok(data.to_vec())
    }

    fn dimensions(&self, _image: &Vec<u8>) -> (u32, u32) {
        (16, 16)
    }

    fn sample(&self, _image: &Vec<u8>, width: u32, height: u32) -> Result<LuminanceGrid, String> {
        Ok(LuminanceGrid::filled(width, height, Sample::opaque(1.0)))
    }
}

// ── 1. Rectangle partition ───────────────────────────────────────

#[test]
fn partition_holds_for_random_bitmaps() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..300 {
        let w = rng.random_range(1..40);
        let h = rng.random_range(1..40);
        let density: f64 = rng.random_range(0.0..=1.0);
        let bitmap = Bitmap::from_fn(w, h, |_, _| rng.random_bool(density));
        assert_partition(&bitmap, &merge_rectangles(&bitmap));
    }
}

#[test]
fn partition_edge_shapes() {
    let all_bright = Bitmap::from_fn(23, 17, |_, _| true);
    let rects = merge_rectangles(&all_bright);
    assert_eq!(rects, vec![Rect { x: 0, y: 0, width: 23, height: 17 }]);

    let all_dark = Bitmap::new(23, 17);
    assert!(merge_rectangles(&all_dark).is_empty());

    let checkerboard = Bitmap::from_fn(16, 16, |x, y| (x + y) % 2 == 0);
    let rects = merge_rectangles(&checkerboard);
    assert_eq!(rects.len(), 128);
    assert!(rects.iter().all(|r| r.area() == 1));
    assert_partition(&checkerboard, &rects);

    let stripes = Bitmap::from_fn(10, 6, |x, _| x % 3 == 0);
    let rects = merge_rectangles(&stripes);
    assert_eq!(rects.len(), 4);
    assert_partition(&stripes, &rects);
}

#[test]
fn rects_are_emitted_in_scan_order() {
    let mut rng = StdRng::seed_from_u64(11);
    let bitmap = Bitmap::from_fn(30, 30, |_, _| rng.random_bool(0.4));
    let rects = merge_rectangles(&bitmap);
    for pair in rects.windows(2) {
        assert!((pair[0].y, pair[0].x) < (pair[1].y, pair[1].x));
    }
}

// ── 2. Grid sizing ───────────────────────────────────────────────

#[test]
fn columns_floor_at_sixteen() {
    for columns in 0..16 {
        assert_eq!(grid_size(columns, 1.0).0, 16);
    }
    assert_eq!(grid_size(17, 1.0).0, 17);
}

#[test]
fn rows_floor_at_eight() {
    for aspect in [0.0, 0.01, 0.1, 0.5] {
        assert!(grid_size(16, aspect).1 >= 8);
    }
    assert_eq!(grid_size(200, 0.01), (200, 8));
}

// ── 3. Encoder ───────────────────────────────────────────────────

#[test]
fn lighter_never_picks_a_darker_glyph() {
    let settings = AsciiSettings::default();
    let mut previous = usize::MAX;
    for step in 0..=200 {
        let grid = LuminanceGrid::filled(1, 1, Sample::opaque(step as f64 / 200.0));
        let ch = encode(&grid, &settings).chars().next().unwrap();
        let index = pool_position(ch);
        assert!(index <= previous, "index rose to {index} at step {step}");
        previous = index;
    }
}

#[test]
fn opaque_white_source_maps_to_first_glyph() {
    let settings = AsciiSettings { columns: 80, ..AsciiSettings::default() };
    let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="800" height="800"><rect width="800" height="800" fill="#ffffff"/></svg>"##;
    let grid = SvgRasterizer.rasterize(svg.as_bytes(), settings.columns).unwrap();
    let rows = encode_rows(&grid, &settings);
    assert_eq!(rows.len(), 40);
    assert!(rows.iter().all(|r| r.chars().count() == 80 && r.chars().all(|c| c == '@')));
}

#[test]
fn dark_bottom_row_survives_export_strip() {
    let mut grid = LuminanceGrid::filled(16, 8, Sample::opaque(1.0));
    for x in 0..16 {
        grid.set(x, 7, Sample::opaque(0.0));
    }
    let text = encode(&grid, &AsciiSettings::default());
    let rows: Vec<String> = strip_trailing_blank(&text).split('\n').map(str::to_string).collect();
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[7], " ".repeat(16));

    // a trailing newline is still dropped
    assert_eq!(strip_trailing_blank(&format!("{text}\n")), text);
}

#[test]
fn near_transparent_source_is_blank() {
    let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="50"><rect width="100" height="50" fill="#ffffff" fill-opacity="0.05"/></svg>"##;
    let grid = SvgRasterizer.rasterize(svg.as_bytes(), 32).unwrap();
    let text = encode(&grid, &AsciiSettings::default());
    assert!(text.split('\n').all(|r| r == " ".repeat(32)));
}

#[test]
fn generated_mandala_encodes_to_full_grid() {
    let settings = Settings { pattern_type: PatternType::Lotus, ..Settings::default() };
    let svg = mandala_engine::generate(&settings, 800, 800);
    let grid = SvgRasterizer.rasterize(svg.as_bytes(), 64).unwrap();
    let rows = encode_rows(&grid, &AsciiSettings::default());
    assert_eq!(rows.len(), 32);
    assert!(rows.iter().all(|r| r.chars().count() == 64));
    // white strokes on a dark background leave both ends of the pool in use
    let text = rows.concat();
    assert!(text.contains(' '));
    assert!(text.chars().any(|c| c != ' '));
}

// ── 4. Export ────────────────────────────────────────────────────

#[test]
fn pattern_exports_at_three_times_size() {
    let settings = Settings::default();
    let svg = mandala_engine::generate(&settings, 200, 100);
    let png = export_png(&svg, 3.0, &settings.background_color).unwrap();
    let image = image::load_from_memory(&png).unwrap();
    assert_eq!((image.width(), image.height()), (600, 300));
}

// ── 5. Pipeline ──────────────────────────────────────────────────

#[tokio::test]
async fn pipeline_commits_ascii() {
    let (pipeline, rx, _glyph_rx) = pipeline_with(SvgRasterizer);
    let svg = mandala_engine::generate(&Settings::default(), 400, 400);

    let outcome = pipeline.generate(svg, AsciiSettings { columns: 40, ..AsciiSettings::default() }).await;
    assert_eq!(outcome, Outcome::Committed);
    match rx.try_recv().unwrap() {
        Artifact::Ascii(text) => assert_eq!(text.split('\n').count(), 20),
        other => panic!("unexpected artifact {other:?}"),
    }
}

#[tokio::test]
async fn empty_charset_short_circuits() {
    let (gate_tx, gate) = bounded(1);
    let (pipeline, rx, _glyph_rx) = pipeline_with(GatedRasterizer { gate });

    // a slow document would block forever if it reached the rasterizer
    let settings = AsciiSettings { charset: String::new(), ..AsciiSettings::default() };
    assert_eq!(pipeline.generate("slow".to_string(), settings).await, Outcome::Empty);
    assert_eq!(rx.try_recv(), Ok(Artifact::Ascii(String::new())));
    drop(gate_tx);
}

#[tokio::test]
async fn decode_failure_yields_empty_output() {
    let (pipeline, rx, _glyph_rx) = pipeline_with(SvgRasterizer);
    let outcome = pipeline.generate("<not svg".to_string(), AsciiSettings::default()).await;
    assert_eq!(outcome, Outcome::Empty);
    assert_eq!(rx.try_recv(), Ok(Artifact::Ascii(String::new())));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn stale_run_is_superseded() {
    let (gate_tx, gate) = bounded(1);
    let (pipeline, rx, _glyph_rx) = pipeline_with(GatedRasterizer { gate });
    let settings = AsciiSettings { columns: 16, ..AsciiSettings::default() };

    let first = tokio::spawn({
        let pipeline = pipeline.clone();
        let settings = settings.clone();
        async move { pipeline.generate("slow".to_string(), settings).await }
    });
    while pipeline.ascii_epoch().generation() < 1 {
        tokio::time::sleep(Duration::from_millis(1)).await;
    }

    let second = pipeline.generate("fast".to_string(), settings).await;
    assert_eq!(second, Outcome::Committed);

    gate_tx.send(()).unwrap();
    assert_eq!(first.await.unwrap(), Outcome::Superseded);

    let committed = rx.try_recv().unwrap();
    assert_eq!(committed, Artifact::Ascii(vec!["@".repeat(16); 8].join("\n")));
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn failed_run_still_reports_through_gate_rasterizer() {
    let (_gate_tx, gate) = bounded(1);
    let (pipeline, rx, _glyph_rx) = pipeline_with(GatedRasterizer { gate });
    assert_eq!(pipeline.generate("broken".to_string(), AsciiSettings::default()).await, Outcome::Empty);
    assert_eq!(rx.try_recv(), Ok(Artifact::Ascii(String::new())));
}

#[tokio::test]
async fn vectorize_commits_document() {
    let (pipeline, _ascii_rx, rx) = pipeline_with(SvgRasterizer);

    assert_eq!(pipeline.vectorize(String::new(), GlyphConfig::default()).await, Outcome::Empty);
    assert_eq!(rx.try_recv(), Ok(Artifact::Vector(String::new())));

    let text = "@@@@\n:..:\n    \n".to_string();
    assert_eq!(pipeline.vectorize(text, GlyphConfig::default()).await, Outcome::Committed);
    let svg = match rx.try_recv().unwrap() {
        Artifact::Vector(svg) => svg,
        other => panic!("unexpected artifact {other:?}"),
    };
    // the final newline adds no row, the row of spaces stays: 4 columns x 3 rows
    assert!(svg.contains("width=\"70\" height=\"84\""));
    assert_eq!(svg.matches("<path ").count(), 1);
    let data = svg.split("<path d=\"").nth(1).and_then(|rest| rest.split('"').next()).unwrap();
    assert!(data.starts_with("M "), "no glyph rectangles in {data:?}");
    assert!(data.ends_with(" z"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn glyph_run_does_not_supersede_ascii_run() {
    let (gate_tx, gate) = bounded(1);
    let (pipeline, ascii_rx, glyph_rx) = pipeline_with(GatedRasterizer { gate });
    let settings = AsciiSettings { columns: 16, ..AsciiSettings::default() };

    let ascii = tokio::spawn({
        let pipeline = pipeline.clone();
        async move { pipeline.generate("slow".to_string(), settings).await }
    });
    while pipeline.ascii_epoch().generation() < 1 {
        tokio::time::sleep(Duration::from_millis(1)).await;
    }

    assert_eq!(pipeline.vectorize(String::new(), GlyphConfig::default()).await, Outcome::Empty);
    assert_eq!(pipeline.glyph_epoch().generation(), 1);
    assert_eq!(pipeline.ascii_epoch().generation(), 1);

    gate_tx.send(()).unwrap();
    assert_eq!(ascii.await.unwrap(), Outcome::Committed);
    assert_eq!(ascii_rx.try_recv(), Ok(Artifact::Ascii(vec!["@".repeat(16); 8].join("\n"))));
    assert_eq!(glyph_rx.try_recv(), Ok(Artifact::Vector(String::new())));
}
