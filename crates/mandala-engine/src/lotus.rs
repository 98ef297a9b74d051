//! Lotus rings: Fibonacci-flavoured petal layers with sacred star overlays.

use mandala_core::geometry::lotus_petal_count;
use mandala_core::star_polygon;
use mandala_motifs::lotus_petal;

use crate::buffer::PathBuffer;
use crate::ring::Ring;

pub fn build_ring(ring: &Ring<'_>, out: &mut PathBuffer) {
    let knobs = &ring.knobs;
    let petal_size = 15.0 + knobs.ornament_complexity * 10.0;
    let inner_layer = knobs.detail_density > 0.5 && ring.index % 2 == 0;

    for segment in 0..ring.segments() {
        let angle = ring.segment_angle(segment);
        out.push(lotus_petal(ring.center, ring.radius, angle, petal_size, knobs));

        if inner_layer {
            out.push(lotus_petal(
                ring.center,
                ring.radius * 0.85,
                angle + ring.angle_step / 2.0,
                petal_size * 0.7,
                knobs,
            ));
        }
    }

    if knobs.detail_density > 0.45 {
        let sacred_petals = lotus_petal_count(ring.index.min(6)).min(28);
        let points = (sacred_petals / 2).max(4);
        let outer = ring.radius * 0.82;
        let inner = outer * (0.55 + knobs.ornament_complexity * 0.25);
        out.push(star_polygon(
            ring.center,
            outer,
            inner,
            points,
            knobs.rotation_offset + ring.angle_offset,
        ));
    }
}
