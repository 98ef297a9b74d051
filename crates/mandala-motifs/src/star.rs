use mandala_core::{Path, Point};

use crate::Knobs;

/// Rangoli star: `points + 1` vertices stepping by `360 / points` degrees,
/// alternating between `radius` and `radius * (0.5 + 0.3 * complexity)`.
///
/// When `detail_density > 0.6` a bead is appended at 85% radius halfway
/// between each pair of vertices, as extra sub-paths of the same path.
pub fn rangoli_shape(center: Point, radius: f64, angle: f64, points: u32, knobs: &Knobs) -> Path {
    let mut path = Path::with_capacity(points as usize + 1);
    if points == 0 {
        return path;
    }

    let step = 360.0 / points as f64;
    let angle = angle + knobs.rotation_offset;
    let inner_ratio = 0.5 + knobs.ornament_complexity * 0.3;

    for i in 0..=points {
        let r = if i % 2 == 0 { radius } else { radius * inner_ratio };
        let p = Point::polar(center, r, angle + i as f64 * step);
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }

    if knobs.detail_density > 0.6 {
        let bead_radius = knobs.line_weight * 1.5;
        for i in 0..points {
            let mid_angle = angle + i as f64 * step + step / 2.0;
            path.push_circle(Point::polar(center, radius * 0.85, mid_angle), bead_radius);
        }
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use mandala_core::Command;

    #[test]
    fn test_vertices_alternate_radius() {
        let knobs = Knobs { ornament_complexity: 0.5, detail_density: 0.0, ..Knobs::default() };
        let shape = rangoli_shape(Point::ZERO, 100.0, 0.0, 6, &knobs);
        let anchors = shape.anchors();
        assert_eq!(anchors.len(), 7);
        for (i, p) in anchors.iter().enumerate() {
            let expected = if i % 2 == 0 { 100.0 } else { 65.0 };
            assert!((p.magnitude() - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_beads_only_above_threshold() {
        let sparse = Knobs { detail_density: 0.6, ..Knobs::default() };
        assert_eq!(rangoli_shape(Point::ZERO, 50.0, 0.0, 6, &sparse).subpath_count(), 1);

        let dense = Knobs { detail_density: 0.61, ..Knobs::default() };
        let shape = rangoli_shape(Point::ZERO, 50.0, 0.0, 6, &dense);
        assert_eq!(shape.subpath_count(), 7);
        let arcs = shape.commands().iter().filter(|c| matches!(c, Command::ArcBy { .. })).count();
        assert_eq!(arcs, 12);
    }

    #[test]
    fn test_zero_points_is_empty() {
        assert!(rangoli_shape(Point::ZERO, 50.0, 0.0, 0, &Knobs::default()).is_empty());
    }
}
