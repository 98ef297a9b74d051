//! Glyph bitmap to a single compound rectangle path.

use image::RgbaImage;

use crate::glyph::{GlyphConfig, GlyphRenderer};

/// Binary image, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl Bitmap {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, bits: vec![false; width as usize * height as usize] }
    }

    pub fn from_fn<F: FnMut(u32, u32) -> bool>(width: u32, height: u32, mut f: F) -> Self {
        let mut bitmap = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                bitmap.bits[(y * width + x) as usize] = f(x, y);
            }
        }
        bitmap
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Out-of-range coordinates read as dark.
    pub fn get(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.bits[(y * self.width + x) as usize]
    }

    pub fn set(&mut self, x: u32, y: u32, bright: bool) {
        if x < self.width && y < self.height {
            self.bits[(y * self.width + x) as usize] = bright;
        }
    }

    pub fn count_bright(&self) -> usize {
        self.bits.iter().filter(|b| **b).count()
    }
}

/// Axis-aligned rectangle in bitmap pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// A pixel is bright when the mean of its RGB channels exceeds `threshold`.
pub fn binarize(image: &RgbaImage, threshold: u8) -> Bitmap {
    Bitmap::from_fn(image.width(), image.height(), |x, y| {
        let p = image.get_pixel(x, y);
        let sum = p[0] as u32 + p[1] as u32 + p[2] as u32;
        sum > threshold as u32 * 3
    })
}

/// Greedy scanline partition of the bright pixels into rectangles.
///
/// Each unvisited bright pixel starts a horizontal run that is then grown
/// downward while the whole run stays bright and unvisited. The result
/// covers every bright pixel exactly once.
pub fn merge_rectangles(bitmap: &Bitmap) -> Vec<Rect> {
    let (w, h) = (bitmap.width, bitmap.height);
    let mut visited = vec![false; w as usize * h as usize];
    let idx = |x: u32, y: u32| (y * w + x) as usize;
    let mut rects = Vec::new();

    for y in 0..h {
        for x in 0..w {
            if visited[idx(x, y)] || !bitmap.get(x, y) {
                continue;
            }

            let mut end = x + 1;
            while end < w && bitmap.get(end, y) && !visited[idx(end, y)] {
                end += 1;
            }

            let mut bottom = y + 1;
            while bottom < h && (x..end).all(|cx| bitmap.get(cx, bottom) && !visited[idx(cx, bottom)]) {
                bottom += 1;
            }

            for ry in y..bottom {
                for rx in x..end {
                    visited[idx(rx, ry)] = true;
                }
            }
            rects.push(Rect { x, y, width: end - x, height: bottom - y });
        }
    }

    rects
}

/// Path data for `rects`, each scaled down by `scale`:
/// `M x,y h w v h h -w z`, joined by single spaces.
pub fn rectangles_path(rects: &[Rect], scale: f64) -> String {
    let scale = if scale > 0.0 { scale } else { 1.0 };
    rects
        .iter()
        .map(|r| {
            let x = r.x as f64 / scale;
            let y = r.y as f64 / scale;
            let w = r.width as f64 / scale;
            let h = r.height as f64 / scale;
            format!("M {x},{y} h {w} v {h} h -{w} z")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Wrap rectangle path data in a minimal document: background plus one
/// filled path.
pub fn vector_document(width: f64, height: f64, path_data: &str, config: &GlyphConfig) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\">\
         <rect width=\"100%\" height=\"100%\" fill=\"{}\" />\
         <path d=\"{path_data}\" fill=\"{}\" /></svg>",
        config.background, config.foreground
    )
}

/// Re-encode ASCII rows as a compact vector document.
pub fn vectorize_with(renderer: &mut GlyphRenderer, rows: &[String], config: &GlyphConfig) -> Result<String, String> {
    if rows.is_empty() {
        return Ok(String::new());
    }
    let image = renderer.render(rows, config)?;
    let bitmap = binarize(&image, config.threshold);
    let rects = merge_rectangles(&bitmap);
    log::debug!(
        "vectorized {} bright pixels into {} rectangles",
        bitmap.count_bright(),
        rects.len()
    );

    let (width, height) = config.document_size(rows);
    let path_data = rectangles_path(&rects, config.scale() as f64);
    Ok(vector_document(width, height, &path_data, config))
}

/// [`vectorize_with`] using a fresh renderer.
pub fn vectorize(rows: &[String], config: &GlyphConfig) -> Result<String, String> {
    vectorize_with(&mut GlyphRenderer::new(), rows, config)
}
