//! Traditional cadence: rings cycle through petals, rangoli stars and
//! ribbon bands by `ring % 3`.

use mandala_core::{star_polygon, Path, Point};
use mandala_motifs::{lotus_petal, rangoli_shape, ribbon_segment};

use crate::buffer::PathBuffer;
use crate::ring::Ring;

const PETAL_SIZE: f64 = 12.0;
const STAR_POINTS: u32 = 6;

pub fn build_ring(ring: &Ring<'_>, out: &mut PathBuffer) {
    let knobs = &ring.knobs;

    for segment in 0..ring.segments() {
        let angle = ring.segment_angle(segment);

        match ring.index % 3 {
            0 => {
                out.push(lotus_petal(ring.center, ring.radius, angle, PETAL_SIZE, knobs));
            }
            1 => {
                out.push(rangoli_shape(ring.center, ring.radius, angle, STAR_POINTS, knobs));
            }
            _ => {
                let start = angle;
                let end = (segment + 1) as f64 * ring.angle_step + ring.angle_offset;
                out.extend(ribbon_segment(ring.center, ring.radius, start, end, knobs));

                if knobs.detail_density > 0.55 {
                    out.push(flourish(ring, (start + end) / 2.0));
                }
            }
        }
    }

    if ring.index % 3 == 1 && knobs.detail_density > 0.45 {
        let points = (ring.segments() / 2).max(5);
        let outer = ring.radius * (0.9 - 0.05 * ring.index.min(4) as f64);
        let inner = outer * (0.6 + knobs.ornament_complexity * 0.25);
        out.push(star_polygon(
            ring.center,
            outer,
            inner,
            points,
            knobs.rotation_offset + ring.angle_offset,
        ));
    }
}

/// Short radial tick inside a ribbon band.
fn flourish(ring: &Ring<'_>, angle: f64) -> Path {
    let knobs = &ring.knobs;
    let angle = angle + knobs.rotation_offset;
    let radius = ring.radius * (0.65 + knobs.ornament_complexity * 0.1);
    let length = knobs.line_weight * (1.2 + knobs.detail_density * 0.8);

    let mut path = Path::starting_at(Point::polar(ring.center, radius, angle));
    path.line_to(Point::polar(ring.center, radius + length, angle));
    path
}
