use std::io::Cursor;

use image::{ImageFormat, RgbaImage};
use resvg::tiny_skia::{Color, Pixmap, Transform};

use crate::color::color_or;

const DEFAULT_BACKGROUND: [u8; 3] = [0x0a, 0x0a, 0x0a];
use crate::raster::parse_tree;

/// Render `document` at `scale` times its own size onto an opaque
/// `background` and encode it as PNG. A background that is not a hex color
/// falls back to `#0a0a0a`.
pub fn export_png(document: &str, scale: f64, background: &str) -> Result<Vec<u8>, String> {
    let tree = parse_tree(document.as_bytes())?;
    let [r, g, b] = color_or(background, DEFAULT_BACKGROUND);

    let size = tree.size();
    let width = (size.width() as f64 * scale).ceil() as u32;
    let height = (size.height() as f64 * scale).ceil() as u32;
    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| format!("failed to allocate {width}x{height} export surface"))?;
    pixmap.fill(Color::from_rgba8(r, g, b, 255));
    resvg::render(&tree, Transform::from_scale(scale as f32, scale as f32), &mut pixmap.as_mut());

    let mut rgba = Vec::with_capacity(width as usize * height as usize * 4);
    for p in pixmap.pixels() {
        let c = p.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    let image = RgbaImage::from_raw(width, height, rgba).ok_or_else(|| "export buffer size mismatch".to_string())?;

    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| format!("failed to encode PNG: {e}"))?;
    log::debug!("exported {width}x{height} PNG ({} bytes)", bytes.len());
    Ok(bytes)
}

/// Drop one trailing empty row, as left by a final newline, before copying
/// or saving ASCII text. Rows of spaces are grid rows and are kept.
pub fn strip_trailing_blank(text: &str) -> String {
    let mut rows: Vec<&str> = text.split('\n').collect();
    if rows.len() > 1 && rows.last().is_some_and(|r| r.is_empty()) {
        rows.pop();
    }
    rows.join("\n")
}
