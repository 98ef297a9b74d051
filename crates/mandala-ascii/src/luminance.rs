/// Minimum character columns of an ASCII rendering.
pub const MIN_COLUMNS: u32 = 16;
/// Minimum rows of an ASCII rendering.
pub const MIN_ROWS: u32 = 8;
/// Terminal cells are roughly twice as tall as they are wide.
pub const CHAR_ASPECT: f64 = 0.5;

/// One point sample: straight (non-premultiplied) luminance and coverage.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sample {
    /// Range: 0.0..=1.0
    pub luminance: f64,
    /// Range: 0.0..=1.0
    pub alpha: f64,
}

impl Sample {
    pub const TRANSPARENT: Sample = Sample { luminance: 0.0, alpha: 0.0 };

    pub fn new(luminance: f64, alpha: f64) -> Self {
        Self { luminance, alpha }
    }

    pub fn opaque(luminance: f64) -> Self {
        Self { luminance, alpha: 1.0 }
    }

    /// Rec. 601 luma of a straight-alpha RGBA pixel.
    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        let luminance = (0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64) / 255.0;
        Self { luminance, alpha: a as f64 / 255.0 }
    }
}

/// Row-major grid of samples.
#[derive(Debug, Clone, PartialEq)]
pub struct LuminanceGrid {
    width: u32,
    height: u32,
    samples: Vec<Sample>,
}

impl LuminanceGrid {
    pub fn filled(width: u32, height: u32, sample: Sample) -> Self {
        Self { width, height, samples: vec![sample; width as usize * height as usize] }
    }

    /// Build a grid from row-major samples; `None` if the length does not
    /// match the dimensions.
    pub fn from_samples(width: u32, height: u32, samples: Vec<Sample>) -> Option<Self> {
        (samples.len() == width as usize * height as usize).then_some(Self { width, height, samples })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Sample> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.samples.get((y * self.width + x) as usize).copied()
    }

    pub fn set(&mut self, x: u32, y: u32, sample: Sample) {
        if x < self.width && y < self.height {
            self.samples[(y * self.width + x) as usize] = sample;
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Sample]> {
        self.samples.chunks(self.width.max(1) as usize)
    }
}

/// Height over width, or 1 for an empty source.
pub fn aspect_ratio(source_width: u32, source_height: u32) -> f64 {
    if source_width == 0 || source_height == 0 {
        1.0
    } else {
        source_height as f64 / source_width as f64
    }
}

/// Grid dimensions for `columns` characters across a source of the given
/// aspect ratio: at least 16 columns and 8 rows.
pub fn grid_size(columns: u32, aspect: f64) -> (u32, u32) {
    let aspect = if aspect.is_finite() && aspect > 0.0 { aspect } else { 1.0 };
    let width = columns.max(MIN_COLUMNS);
    let height = ((width as f64 * aspect * CHAR_ASPECT).round() as u32).max(MIN_ROWS);
    (width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_size_floors() {
        assert_eq!(grid_size(4, 1.0), (16, 8));
        assert_eq!(grid_size(0, 0.1), (16, 8));
        assert_eq!(grid_size(120, 1.0), (120, 60));
        assert_eq!(grid_size(80, 0.75), (80, 30));
    }

    #[test]
    fn test_degenerate_aspect() {
        assert_eq!(aspect_ratio(0, 100), 1.0);
        assert_eq!(grid_size(40, f64::NAN), (40, 20));
    }

    #[test]
    fn test_from_rgba() {
        let white = Sample::from_rgba(255, 255, 255, 255);
        assert!((white.luminance - 1.0).abs() < 1e-9);
        assert_eq!(white.alpha, 1.0);
        let green = Sample::from_rgba(0, 255, 0, 0);
        assert!((green.luminance - 0.587).abs() < 1e-9);
        assert_eq!(green.alpha, 0.0);
    }

    #[test]
    fn test_grid_access() {
        let mut grid = LuminanceGrid::filled(3, 2, Sample::TRANSPARENT);
        grid.set(2, 1, Sample::opaque(0.5));
        assert_eq!(grid.get(2, 1), Some(Sample::opaque(0.5)));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.rows().count(), 2);
        assert!(LuminanceGrid::from_samples(2, 2, vec![Sample::TRANSPARENT; 3]).is_none());
    }
}
