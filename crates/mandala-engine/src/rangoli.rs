//! Rangoli rings: one festival star per segment.

use mandala_motifs::rangoli_shape;

use crate::buffer::PathBuffer;
use crate::ring::Ring;

pub fn build_ring(ring: &Ring<'_>, out: &mut PathBuffer) {
    let points = 5 + (ring.knobs.ornament_complexity * 3.0).floor() as u32;
    for segment in 0..ring.segments() {
        let angle = ring.segment_angle(segment);
        out.push(rangoli_shape(ring.center, ring.radius, angle, points, &ring.knobs));
    }
}
