use mandala_core::{Command, Path, Point};
use mandala_motifs::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ── Helpers ──────────────────────────────────────────────────────

const CENTER: Point = Point::new(400.0, 400.0);

fn all_finite(path: &Path) -> bool {
    path.commands().iter().all(|command| match *command {
        Command::MoveTo(p) | Command::LineTo(p) | Command::SmoothQuadTo(p) => p.x.is_finite() && p.y.is_finite(),
        Command::QuadTo(c, p) => [c, p].iter().all(|q| q.x.is_finite() && q.y.is_finite()),
        Command::CubicTo(a, b, p) => [a, b, p].iter().all(|q| q.x.is_finite() && q.y.is_finite()),
        Command::MoveBy(dx, dy) => dx.is_finite() && dy.is_finite(),
        Command::HorizontalBy(d) | Command::VerticalBy(d) => d.is_finite(),
        Command::ArcBy { rx, ry, dx, dy, .. } => [rx, ry, dx, dy].iter().all(|v| v.is_finite()),
        Command::Close => true,
    })
}

fn random_knobs(rng: &mut StdRng) -> Knobs {
    Knobs {
        petal_curvature: rng.random_range(0.0..=1.0),
        detail_density: rng.random_range(0.0..=1.0),
        ornament_complexity: rng.random_range(0.0..=1.0),
        line_weight: rng.random_range(0.5..=6.0),
        rotation_offset: rng.random_range(0.0..360.0),
    }
}

/// Every builder once, flattened.
fn every_motif(knobs: &Knobs, radius: f64, angle: f64) -> Vec<Path> {
    let mut paths = vec![
        lotus_petal(CENTER, radius, angle, 15.0, knobs),
        mango_leaf(CENTER, radius, angle, knobs.petal_curvature),
        rangoli_shape(CENTER, radius, angle, 6, knobs),
        cypress_tree(CENTER, radius, angle, 0.8),
        bead(CENTER, knobs.line_weight),
    ];
    paths.extend(ribbon_segment(CENTER, radius, angle, angle + 30.0, knobs));
    paths.extend(paisley_teardrop(CENTER, radius, angle, 20.0, knobs));
    paths.extend(mehndi_curve(CENTER, radius, angle, knobs));
    paths.extend(peacock_motif(CENTER, radius, angle, knobs.ornament_complexity));
    paths.extend(kalash(CENTER, radius, angle));
    paths.extend(diya(CENTER, radius, angle));
    paths.extend(om_symbol(CENTER, radius));
    paths.extend(elephant(CENTER, radius, angle));
    paths.extend(interlaced_triangles(CENTER, radius, 9));
    paths.extend(ring_filler_dots(CENTER, radius, 12, knobs));
    paths.extend(mehndi_border(CENTER, radius, 12, knobs));
    paths
}

// ── 1. Output sanity ─────────────────────────────────────────────

#[test]
fn motifs_never_emit_non_finite_coordinates() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let knobs = random_knobs(&mut rng);
        let radius = rng.random_range(1.0..400.0);
        let angle = rng.random_range(-720.0..720.0);
        for path in every_motif(&knobs, radius, angle) {
            assert!(!path.is_empty());
            assert!(all_finite(&path), "non-finite data in {path}");
        }
    }
}

#[test]
fn motifs_start_with_absolute_move() {
    let knobs = Knobs::default();
    for path in every_motif(&knobs, 120.0, 15.0) {
        assert!(matches!(path.commands()[0], Command::MoveTo(_)), "path starts with {:?}", path.commands()[0]);
    }
}

#[test]
fn path_data_has_no_unresolved_tokens() {
    let knobs = Knobs::default();
    for path in every_motif(&knobs, 120.0, 15.0) {
        let data = path.to_string();
        assert!(!data.contains("NaN") && !data.contains("inf"), "{data}");
    }
}

// ── 2. Determinism ───────────────────────────────────────────────

#[test]
fn builders_are_pure() {
    let knobs = Knobs { detail_density: 0.9, ornament_complexity: 0.9, ..Knobs::default() };
    assert_eq!(every_motif(&knobs, 150.0, 42.0), every_motif(&knobs, 150.0, 42.0));
}

// ── 3. Rotation ──────────────────────────────────────────────────

#[test]
fn rotation_offset_matches_angle_shift() {
    let rotated = Knobs { rotation_offset: 25.0, ..Knobs::default() };
    let plain = Knobs::default();

    let a = lotus_petal(CENTER, 100.0, 10.0, 15.0, &rotated);
    let b = lotus_petal(CENTER, 100.0, 35.0, 15.0, &plain);
    for (p, q) in a.anchors().iter().zip(b.anchors().iter()) {
        assert!(p.approx_eq(q));
    }

    let a = rangoli_shape(CENTER, 100.0, 10.0, 5, &rotated);
    let b = rangoli_shape(CENTER, 100.0, 35.0, 5, &plain);
    for (p, q) in a.anchors().iter().zip(b.anchors().iter()) {
        assert!(p.approx_eq(q));
    }
}

// ── 4. Radial extent ─────────────────────────────────────────────

#[test]
fn petal_and_star_stay_within_radius() {
    let knobs = Knobs { detail_density: 0.2, ..Knobs::default() };
    for angle in (0..360).step_by(15) {
        let angle = angle as f64;
        for path in [lotus_petal(CENTER, 90.0, angle, 15.0, &knobs), rangoli_shape(CENTER, 90.0, angle, 7, &knobs)] {
            for anchor in path.anchors() {
                assert!(anchor.distance(&CENTER) <= 90.0 + 1e-9);
            }
        }
    }
}
