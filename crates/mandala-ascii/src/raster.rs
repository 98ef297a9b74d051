//! Rendering a source image down to a luminance grid.

use resvg::tiny_skia::{Pixmap, Transform};

use crate::luminance::{aspect_ratio, grid_size, LuminanceGrid, Sample};

/// Narrow rendering capability: decode a source, report its size, and
/// point-sample it at a target resolution.
///
/// Implementations must be pure with respect to their inputs so that the
/// pipeline can run them on a blocking worker.
pub trait Rasterizer {
    type Image;

    fn decode(&self, data: &[u8]) -> Result<Self::Image, String>;

    fn dimensions(&self, image: &Self::Image) -> (u32, u32);

    /// One sample per target pixel, no supersampling.
    fn sample(&self, image: &Self::Image, width: u32, height: u32) -> Result<LuminanceGrid, String>;

    /// Decode `data` and sample it at the grid size for `columns`.
    fn rasterize(&self, data: &[u8], columns: u32) -> Result<LuminanceGrid, String> {
        let image = self.decode(data)?;
        let (source_width, source_height) = self.dimensions(&image);
        let (width, height) = grid_size(columns, aspect_ratio(source_width, source_height));
        self.sample(&image, width, height)
    }
}

/// Software vector rasterizer: `usvg` parsing and `resvg` rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgRasterizer;

/// Parse a vector document with default options.
pub(crate) fn parse_tree(data: &[u8]) -> Result<usvg::Tree, String> {
    usvg::Tree::from_data(data, &usvg::Options::default()).map_err(|e| format!("failed to parse SVG: {e}"))
}

/// Render `tree` stretched to exactly `width` x `height` pixels onto a
/// transparent pixmap.
pub(crate) fn render_tree(tree: &usvg::Tree, width: u32, height: u32) -> Result<Pixmap, String> {
    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| format!("failed to allocate {width}x{height} render surface"))?;
    let size = tree.size();
    let transform = Transform::from_scale(width as f32 / size.width(), height as f32 / size.height());
    resvg::render(tree, transform, &mut pixmap.as_mut());
    Ok(pixmap)
}

impl Rasterizer for SvgRasterizer {
    type Image = usvg::Tree;

    fn decode(&self, data: &[u8]) -> Result<usvg::Tree, String> {
        parse_tree(data)
    }

    fn dimensions(&self, tree: &usvg::Tree) -> (u32, u32) {
        let size = tree.size();
        (size.width().ceil() as u32, size.height().ceil() as u32)
    }

    fn sample(&self, tree: &usvg::Tree, width: u32, height: u32) -> Result<LuminanceGrid, String> {
        let pixmap = render_tree(tree, width, height)?;
        let samples = pixmap
            .pixels()
            .iter()
            .map(|p| {
                let c = p.demultiply();
                Sample::from_rgba(c.red(), c.green(), c.blue(), c.alpha())
            })
            .collect();
        LuminanceGrid::from_samples(width, height, samples)
            .ok_or_else(|| "render surface size mismatch".to_string())
    }
}

/// Raster sources (PNG, JPEG, ...) decoded with `image` and point-sampled
/// with nearest-neighbour resizing.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitmapRasterizer;

impl Rasterizer for BitmapRasterizer {
    type Image = image::RgbaImage;

    fn decode(&self, data: &[u8]) -> Result<image::RgbaImage, String> {
        let img = image::load_from_memory(data).map_err(|e| format!("failed to load image: {e}"))?;
        Ok(img.to_rgba8())
    }

    fn dimensions(&self, image: &image::RgbaImage) -> (u32, u32) {
        image.dimensions()
    }

    fn sample(&self, image: &image::RgbaImage, width: u32, height: u32) -> Result<LuminanceGrid, String> {
        if image.width() == 0 || image.height() == 0 {
            return Err("cannot sample an empty image".to_string());
        }
        let resized = image::imageops::resize(image, width, height, image::imageops::FilterType::Nearest);
        let samples = resized
            .pixels()
            .map(|p| Sample::from_rgba(p[0], p[1], p[2], p[3]))
            .collect();
        LuminanceGrid::from_samples(width, height, samples)
            .ok_or_else(|| "resized image size mismatch".to_string())
    }
}
