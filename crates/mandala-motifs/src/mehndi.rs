use mandala_core::{Path, Point};

use crate::Knobs;

/// Mehndi vine: an S-curve from 35% of `radius` out to `radius`, bending
/// by `6 + 10 * petal_curvature` degrees either side of `angle`.
///
/// `1 + floor(4 * detail_density)` leaflets ride the vine as extra
/// sub-paths of the first path. A curl dot at the tip is returned as a
/// second path when `ornament_complexity > 0.5`.
pub fn mehndi_curve(center: Point, radius: f64, angle: f64, knobs: &Knobs) -> Vec<Path> {
    let angle = angle + knobs.rotation_offset;
    let bend = 6.0 + knobs.petal_curvature * 10.0;
    let start = Point::polar(center, radius * 0.35, angle);
    let mid = Point::polar(center, radius * 0.675, angle);
    let tip = Point::polar(center, radius, angle);

    let mut vine = Path::starting_at(start);
    vine.quad_to(Point::polar(center, radius * 0.51, angle - bend), mid)
        .quad_to(Point::polar(center, radius * 0.84, angle + bend), tip);

    let leaflets = 1 + (knobs.detail_density * 4.0).floor().max(0.0) as u32;
    let leaf_length = radius * 0.12;
    for i in 0..leaflets {
        let t = (i + 1) as f64 / (leaflets + 1) as f64;
        let along = radius * (0.35 + 0.65 * t);
        let side = if i % 2 == 0 { -1.0 } else { 1.0 };
        let stem = Point::polar(center, along, angle);
        let leaf_tip = Point::polar(center, along + leaf_length, angle + side * bend * 1.5);
        let control = Point::polar(center, along + leaf_length * 0.2, angle + side * bend * 1.8);
        vine.move_to(stem).quad_to(control, leaf_tip).quad_to(stem.midpoint(&leaf_tip), stem);
    }

    let mut paths = vec![vine];
    if knobs.ornament_complexity > 0.5 {
        paths.push(Path::circle(tip, knobs.line_weight * 0.9));
    }
    paths
}
