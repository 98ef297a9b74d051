use mandala_core::{Path, Point};

use crate::dots::bead;
use crate::Knobs;

/// Closed ribbon band between `start` and `end` degrees.
///
/// The outer edge bows outward through a quadratic control point at
/// `1.02..1.07` of the radius (driven by ornament complexity); the inner edge sits at `0.72..0.90` of the outer radius (driven by
/// detail density) and bows inward. A bead at mid-radius is added as a
/// second path when `detail_density > 0.35`.
pub fn ribbon_segment(center: Point, outer_radius: f64, start: f64, end: f64, knobs: &Knobs) -> Vec<Path> {
    let start = start + knobs.rotation_offset;
    let end = end + knobs.rotation_offset;
    let mid = (start + end) / 2.0;
    let inner_radius = outer_radius * (0.72 + knobs.detail_density * 0.18);
    let accent_radius = (outer_radius + inner_radius) / 2.0;

    let outer_start = Point::polar(center, outer_radius, start);
    let outer_end = Point::polar(center, outer_radius, end);
    let outer_mid = Point::polar(center, outer_radius * (1.02 + knobs.ornament_complexity * 0.05), mid);

    let inner_end = Point::polar(center, inner_radius, end);
    let inner_start = Point::polar(center, inner_radius, start);
    let inner_mid = Point::polar(center, inner_radius * (0.98 - knobs.ornament_complexity * 0.05), mid);

    let mut ribbon = Path::with_capacity(5);
    ribbon
        .move_to(outer_start)
        .quad_to(outer_mid, outer_end)
        .line_to(inner_end)
        .quad_to(inner_mid, inner_start)
        .close();

    let mut paths = vec![ribbon];
    if knobs.detail_density > 0.35 {
        let bead_radius = knobs.line_weight * (0.8 + knobs.detail_density * 0.6);
        paths.push(bead(Point::polar(center, accent_radius, mid), bead_radius));
    }
    paths
}
