//! Mehndi rings: vines with leaflets, dotted borders and, on the outer
//! edge, cypress trees.

use mandala_core::{Path, Point};
use mandala_motifs::{cypress_tree, interlaced_triangles, mehndi_border, mehndi_curve};

use crate::buffer::PathBuffer;
use crate::ring::Ring;

pub fn build_ring(ring: &Ring<'_>, out: &mut PathBuffer) {
    let knobs = &ring.knobs;
    let trees = ring.is_outermost() && knobs.detail_density > 0.6;

    for segment in 0..ring.segments() {
        let angle = ring.segment_angle(segment);
        out.extend(mehndi_curve(ring.center, ring.radius, angle, knobs));

        let between = angle + ring.angle_step / 2.0 + knobs.rotation_offset;
        if knobs.detail_density > 0.45 {
            out.push(tick(ring, between));
        }
        if trees {
            let height = 0.6 + knobs.ornament_complexity * 0.4;
            out.push(cypress_tree(ring.center, ring.radius, between, height));
        }
    }

    out.extend(mehndi_border(ring.center, ring.radius * 0.92, ring.segments(), knobs));

    if ring.index == 1 && knobs.detail_density > 0.7 {
        out.extend(interlaced_triangles(ring.center, ring.radius * 0.6, 9));
    }
}

fn tick(ring: &Ring<'_>, angle: f64) -> Path {
    let radius = ring.radius * 0.6;
    let length = ring.knobs.line_weight * (1.2 + ring.knobs.detail_density * 0.8);
    let mut path = Path::starting_at(Point::polar(ring.center, radius, angle));
    path.line_to(Point::polar(ring.center, radius + length, angle));
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use mandala_core::Settings;
    use mandala_motifs::Knobs;

    fn run(index: u32, detail: f64) -> PathBuffer {
        let settings = Settings { segments: 8, rings: 3, ..Settings::default() };
        let knobs = Knobs { detail_density: detail, ornament_complexity: 0.3, ..Knobs::default() };
        let ring = Ring::new(&settings, knobs, Point::ZERO, index);
        let mut out = PathBuffer::new();
        build_ring(&ring, &mut out);
        out
    }

    #[test]
    fn test_vines_and_border() {
        // 8 vines + floor(8 * 0.3) = 2 border dots
        assert_eq!(run(2, 0.3).len(), 10);
    }

    #[test]
    fn test_ticks_and_trees() {
        // 8 vines + 8 ticks + 4 dots
        assert_eq!(run(2, 0.5).len(), 20);
        // outermost ring adds a tree per segment: 8 + 8 + 8 + 5
        assert_eq!(run(3, 0.65).len(), 29);
    }

    #[test]
    fn test_triangles_on_first_ring() {
        // 8 vines + 8 ticks + 6 dots + 9 triangles
        assert_eq!(run(1, 0.8).len(), 31);
    }
}
