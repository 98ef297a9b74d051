use mandala_core::{Path, Point};

use crate::Knobs;

/// Paisley (buta) teardrop: a rounded head at the outer end curling into a
/// pointed tail near the center.
///
/// Returns the outline, then an inner echo at 65% scale when
/// `detail_density > 0.5`, then an eye dot in the head when
/// `ornament_complexity > 0.4`.
pub fn paisley_teardrop(center: Point, radius: f64, angle: f64, size: f64, knobs: &Knobs) -> Vec<Path> {
    let angle = angle + knobs.rotation_offset;
    let curl = size * (0.4 + knobs.petal_curvature * 0.6);

    let mut paths = vec![teardrop(center, radius, angle, size, curl, 1.0)];
    if knobs.detail_density > 0.5 {
        paths.push(teardrop(center, radius, angle, size, curl, 0.65));
    }
    if knobs.ornament_complexity > 0.4 {
        let eye_radius = knobs.line_weight * (0.8 + knobs.ornament_complexity * 0.7);
        paths.push(Path::circle(Point::polar(center, radius * 0.85, angle), eye_radius));
    }
    paths
}

/// One teardrop outline, scaled about the head so echoes nest inside it.
fn teardrop(center: Point, radius: f64, angle: f64, size: f64, curl: f64, scale: f64) -> Path {
    let head = radius * 0.85;
    let span = radius * 0.55 * scale;
    let half_width = size * 0.5 * scale;

    let tail = Point::polar(center, head - span, angle + curl * scale);
    let top = Point::polar(center, head + span * 0.3, angle);
    let left = Point::polar(center, head, angle - half_width);
    let right = Point::polar(center, head, angle + half_width);
    let tail_left = Point::polar(center, head - span * 0.6, angle - half_width * 0.4);
    let tail_right = Point::polar(center, head - span * 0.6, angle + half_width * 1.2);

    let mut path = Path::with_capacity(6);
    path.move_to(tail)
        .cubic_to(tail_left, left, left)
        .quad_to(Point::polar(center, head + span * 0.3, angle - half_width), top)
        .quad_to(Point::polar(center, head + span * 0.3, angle + half_width), right)
        .cubic_to(right, tail_right, tail)
        .close();
    path
}
