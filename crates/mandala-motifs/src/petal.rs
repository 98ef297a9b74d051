use mandala_core::geometry::GOLDEN_RATIO;
use mandala_core::{Path, Point};

use crate::Knobs;

/// Closed teardrop petal from `radius / φ` out to `radius`.
///
/// The two cubic halves bend away from the petal axis by
/// `petal_curvature * size` degrees at their outer control points.
pub fn lotus_petal(center: Point, radius: f64, angle: f64, size: f64, knobs: &Knobs) -> Path {
    let angle = angle + knobs.rotation_offset;
    let golden_base = radius / GOLDEN_RATIO;
    let base = Point::polar(center, golden_base, angle);
    let tip = Point::polar(center, radius, angle);

    let curve = knobs.petal_curvature * size;
    let control_radius = golden_base + (radius - golden_base) * 0.7;
    let left_control = Point::polar(center, control_radius, angle - curve);
    let right_control = Point::polar(center, control_radius, angle + curve);
    let left_mid = Point::polar(center, control_radius * 0.85, angle - curve * 0.5);
    let right_mid = Point::polar(center, control_radius * 0.85, angle + curve * 0.5);

    let mut path = Path::with_capacity(4);
    path.move_to(base)
        .cubic_to(left_mid, left_control, tip)
        .cubic_to(right_control, right_mid, base)
        .close();
    path
}

/// Symmetric leaf from 30% of `radius` to `radius`, bulging by
/// `20 * curvature` degrees on each side.
pub fn mango_leaf(center: Point, radius: f64, angle: f64, curvature: f64) -> Path {
    let tip = Point::polar(center, radius, angle);
    let base = Point::polar(center, radius * 0.3, angle);
    let left = Point::polar(center, radius * 0.7, angle - 20.0 * curvature);
    let right = Point::polar(center, radius * 0.7, angle + 20.0 * curvature);

    let mut path = Path::with_capacity(4);
    path.move_to(base)
        .cubic_to(left, left, tip)
        .cubic_to(right, right, base)
        .close();
    path
}
