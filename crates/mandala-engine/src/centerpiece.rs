use mandala_core::geometry::lotus_petal_count;
use mandala_core::{star_polygon, Path, Point, Settings};
use mandala_motifs::{lotus_petal, Knobs};

use crate::buffer::PathBuffer;

const PETAL_SIZE: f64 = 6.0;

/// Small petal ring, accent star and bindu dot at the very center.
pub fn build_centerpiece(settings: &Settings, knobs: &Knobs, center: Point, out: &mut PathBuffer) {
    let inner_radius = (settings.radius * 0.18).max(18.0);

    let petals = (lotus_petal_count(1) / 2).clamp(4, 10);
    for i in 0..petals {
        let angle = i as f64 * 360.0 / petals as f64;
        out.push(lotus_petal(center, inner_radius, angle, PETAL_SIZE, knobs));
    }

    let points = (settings.segments / 2).max(4);
    let outer = inner_radius * (0.9 + knobs.ornament_complexity * 0.1);
    let inner = outer * (0.55 + knobs.detail_density * 0.15);
    out.push(star_polygon(center, outer, inner, points, knobs.rotation_offset));

    let bindu = knobs.line_weight * (1.2 + knobs.detail_density * 1.1);
    out.push(Path::circle(center, bindu));
}
