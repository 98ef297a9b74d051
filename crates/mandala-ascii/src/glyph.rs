//! Monospaced rendering of character rows onto a bitmap.

use std::collections::HashMap;

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, SwashCache, SwashContent};
use image::{Rgba, RgbaImage};

use crate::color::color_or;

const DEFAULT_FOREGROUND: [u8; 3] = [0xe2, 0xe8, 0xf0];
const DEFAULT_BACKGROUND: [u8; 3] = [0x05, 0x05, 0x05];

/// Layout and color budget for rendering ASCII rows.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphConfig {
    /// Font size in output pixels. Default: 14.0
    pub font_size: f64,
    /// Default: 16.0
    pub line_height: f64,
    /// Margin around the text block. Default: 18.0
    pub padding: f64,
    /// Horizontal advance per column. Default: 8.5
    pub char_width: f64,
    /// Internal render scale. Default: 2
    pub supersample: u32,
    /// Mean RGB above which a pixel counts as bright. Default: 50
    pub threshold: u8,
    pub foreground: String,
    pub background: String,
}

impl Default for GlyphConfig {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            line_height: 16.0,
            padding: 18.0,
            char_width: 8.5,
            supersample: 2,
            threshold: 50,
            foreground: "#e2e8f0".to_string(),
            background: "#050505".to_string(),
        }
    }
}

impl GlyphConfig {
    pub fn scale(&self) -> u32 {
        self.supersample.max(1)
    }

    /// Output-space size of the text block including padding, at least 1x1.
    pub fn document_size(&self, rows: &[String]) -> (f64, f64) {
        let columns = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let width = (columns as f64 * self.char_width + self.padding * 2.0).max(1.0);
        let height = (rows.len() as f64 * self.line_height + self.padding * 2.0).max(1.0);
        (width, height)
    }
}

/// Coverage mask of one glyph, positioned relative to its cell's top-left.
struct GlyphMask {
    left: i32,
    top: i32,
    width: u32,
    height: u32,
    coverage: Vec<u8>,
}

/// Owns the font database and glyph cache so repeated renders reuse them.
pub struct GlyphRenderer {
    font_system: FontSystem,
    cache: SwashCache,
}

impl GlyphRenderer {
    pub fn new() -> Self {
        Self { font_system: FontSystem::new(), cache: SwashCache::new() }
    }

    /// Render `rows` with one glyph per cell, every column `char_width`
    /// apart regardless of the font's own advance.
    ///
    /// Fails when the rows hold visible characters but no font produced a
    /// glyph for any of them.
    pub fn render(&mut self, rows: &[String], config: &GlyphConfig) -> Result<RgbaImage, String> {
        let fg = color_or(&config.foreground, DEFAULT_FOREGROUND);
        let bg = color_or(&config.background, DEFAULT_BACKGROUND);
        let scale = config.scale() as f64;

        let (width, height) = config.document_size(rows);
        let mut image = RgbaImage::from_pixel(
            (width * scale).ceil() as u32,
            (height * scale).ceil() as u32,
            Rgba([bg[0], bg[1], bg[2], 255]),
        );

        let metrics = Metrics::new((config.font_size * scale) as f32, (config.line_height * scale) as f32);
        let mut masks: HashMap<char, Option<GlyphMask>> = HashMap::new();
        let (mut visible, mut drawn) = (0usize, 0usize);

        for (row_index, row) in rows.iter().enumerate() {
            let cell_y = ((config.padding + row_index as f64 * config.line_height) * scale).round() as i32;
            for (column, ch) in row.chars().enumerate() {
                if ch.is_whitespace() {
                    continue;
                }
                visible += 1;
                let mask = masks.entry(ch).or_insert_with(|| self.rasterize_char(ch, metrics));
                if let Some(mask) = mask {
                    let cell_x = ((config.padding + column as f64 * config.char_width) * scale).round() as i32;
                    blit(&mut image, mask, cell_x, cell_y, fg);
                    drawn += 1;
                }
            }
        }

        check_coverage(visible, drawn)?;
        Ok(image)
    }

    fn rasterize_char(&mut self, ch: char, metrics: Metrics) -> Option<GlyphMask> {
        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        let attrs = Attrs::new().family(Family::Monospace);
        buffer.set_text(&mut self.font_system, &ch.to_string(), attrs, Shaping::Advanced);
        buffer.shape_until_scroll(&mut self.font_system, false);

        let run = buffer.layout_runs().next()?;
        let glyph = run.glyphs.first()?;
        let physical = glyph.physical((0.0, run.line_y), 1.0);
        let image = self.cache.get_image(&mut self.font_system, physical.cache_key).as_ref()?;

        let w = image.placement.width as usize;
        let h = image.placement.height as usize;
        let bpp = match image.content {
            SwashContent::Mask => 1,
            SwashContent::Color => 4,
            SwashContent::SubpixelMask => 3,
        };
        if w == 0 || h == 0 || image.data.len() < w * h * bpp {
            return None;
        }

        let coverage = (0..w * h)
            .map(|i| match image.content {
                SwashContent::Mask => image.data[i],
                SwashContent::Color => image.data[i * 4 + 3],
                SwashContent::SubpixelMask => {
                    let px = &image.data[i * 3..i * 3 + 3];
                    ((px[0] as u16 + px[1] as u16 + px[2] as u16) / 3) as u8
                }
            })
            .collect();

        Some(GlyphMask {
            left: physical.x + image.placement.left,
            top: physical.y - image.placement.top,
            width: w as u32,
            height: h as u32,
            coverage,
        })
    }
}

impl Default for GlyphRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Alpha-blend `color` through `mask` onto `image` at cell origin `(x, y)`.
/// Visible characters with no glyph at all mean the font is missing.
fn check_coverage(visible: usize, drawn: usize) -> Result<(), String> {
    if visible > 0 && drawn == 0 {
        log::warn!("no monospace glyphs available for {visible} visible characters");
        return Err(format!("failed to render glyphs: no monospace font produced any of {visible} characters"));
    }
    Ok(())
}

fn blit(image: &mut RgbaImage, mask: &GlyphMask, x: i32, y: i32, color: [u8; 3]) {
    for my in 0..mask.height {
        let py = y + mask.top + my as i32;
        if py < 0 || py >= image.height() as i32 {
            continue;
        }
        for mx in 0..mask.width {
            let px = x + mask.left + mx as i32;
            if px < 0 || px >= image.width() as i32 {
                continue;
            }
            let a = mask.coverage[(my * mask.width + mx) as usize] as u32;
            if a == 0 {
                continue;
            }
            let pixel = image.get_pixel_mut(px as u32, py as u32);
            for c in 0..3 {
                pixel[c] = ((pixel[c] as u32 * (255 - a) + color[c] as u32 * a) / 255) as u8;
            }
        }
    }
}

/// Render `rows` with a fresh [`GlyphRenderer`].
pub fn render_glyphs(rows: &[String], config: &GlyphConfig) -> Result<RgbaImage, String> {
    GlyphRenderer::new().render(rows, config)
}
