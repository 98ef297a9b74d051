//! Peacock rings: feather fans, lamps between them and a procession of
//! kalash and elephants on the outer edge.

use mandala_motifs::{diya, elephant, kalash, peacock_motif};

use crate::buffer::PathBuffer;
use crate::ring::Ring;

pub fn build_ring(ring: &Ring<'_>, out: &mut PathBuffer) {
    let knobs = &ring.knobs;
    let procession = ring.is_outermost() && knobs.detail_density > 0.6;

    for segment in 0..ring.segments() {
        let angle = ring.segment_angle(segment) + knobs.rotation_offset;
        out.extend(peacock_motif(ring.center, ring.radius, angle, knobs.ornament_complexity));

        if knobs.detail_density > 0.5 {
            let between = angle + ring.angle_step / 2.0;
            out.extend(diya(ring.center, ring.radius * 0.7, between));
        }
        if procession {
            if segment % 2 == 0 {
                out.extend(kalash(ring.center, ring.radius * 0.9, angle));
            } else {
                out.extend(elephant(ring.center, ring.radius * 0.9, angle));
            }
        }
    }
}
