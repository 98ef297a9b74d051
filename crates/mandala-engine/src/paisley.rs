//! Paisley rings: buta teardrops with mango leaves between them.

use mandala_motifs::{mango_leaf, om_symbol, paisley_teardrop};

use crate::buffer::PathBuffer;
use crate::ring::Ring;

pub fn build_ring(ring: &Ring<'_>, out: &mut PathBuffer) {
    let knobs = &ring.knobs;
    let size = 18.0 + knobs.ornament_complexity * 12.0;

    for segment in 0..ring.segments() {
        let angle = ring.segment_angle(segment);
        out.extend(paisley_teardrop(ring.center, ring.radius, angle, size, knobs));

        if knobs.detail_density > 0.55 {
            let between = angle + ring.angle_step / 2.0 + knobs.rotation_offset;
            out.push(mango_leaf(ring.center, ring.radius * 0.8, between, knobs.petal_curvature));
        }
    }

    if ring.index == 1 && knobs.ornament_complexity > 0.7 {
        out.extend(om_symbol(ring.center, ring.radius * 0.6));
    }
}
