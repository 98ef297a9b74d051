use mandala_core::{Path, Point};

use crate::Knobs;

pub fn bead(center: Point, radius: f64) -> Path {
    Path::circle(center, radius)
}

/// `count` dots evenly spaced on a circle of `radius`, starting at the
/// rotation offset. Nothing is produced for a zero count or radius.
pub fn ring_filler_dots(center: Point, radius: f64, count: u32, knobs: &Knobs) -> Vec<Path> {
    if count == 0 || radius <= 0.0 {
        return Vec::new();
    }
    let dot_radius = knobs.line_weight * (0.6 + knobs.detail_density * 0.5);

    (0..count)
        .map(|i| {
            let angle = i as f64 * 360.0 / count as f64 + knobs.rotation_offset;
            Path::circle(Point::polar(center, radius, angle), dot_radius)
        })
        .collect()
}

/// Mehndi border: `floor(segments * detail_density)` small dots on a ring.
pub fn mehndi_border(center: Point, radius: f64, segments: u32, knobs: &Knobs) -> Vec<Path> {
    let count = (segments as f64 * knobs.detail_density).floor().max(0.0) as u32;
    if count == 0 || radius <= 0.0 {
        return Vec::new();
    }
    let dot_radius = knobs.line_weight * (0.5 + knobs.ornament_complexity * 0.4);
    let step = 360.0 / count as f64;

    (0..count)
        .map(|i| {
            let angle = i as f64 * step + step / 2.0 + knobs.rotation_offset;
            Path::circle(Point::polar(center, radius, angle), dot_radius)
        })
        .collect()
}
