//! Geometry kernel: golden-ratio helpers and the path builders shared by
//! every motif (star polygons, spirals, smoothed curves).
//!
//! All angles are in degrees and follow the clockwise-from-up convention of
//! [`Point::polar`].

use crate::path::Path;
use crate::point::Point;

pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

pub const FIBONACCI_SEQUENCE: [u32; 12] = [1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144];

const LOTUS_PETAL_SEQUENCE: [u32; 6] = [8, 13, 21, 34, 55, 89];

/// The n-th Fibonacci number, 1-based (`fibonacci(1) == fibonacci(2) == 1`).
pub fn fibonacci(n: u32) -> u64 {
    if n <= 2 {
        return 1;
    }
    let (mut a, mut b) = (1u64, 1u64);
    for _ in 3..=n {
        let next = a.saturating_add(b);
        a = b;
        b = next;
    }
    b
}

/// 360 / φ², roughly 137.5 degrees.
pub fn golden_angle() -> f64 {
    360.0 / (GOLDEN_RATIO * GOLDEN_RATIO)
}

pub fn golden_ratio(value: f64) -> f64 {
    value * GOLDEN_RATIO
}

pub fn inverse_golden_ratio(value: f64) -> f64 {
    value / GOLDEN_RATIO
}

/// Petal count for a lotus ring, following the Fibonacci-like sequence
/// 8, 13, 21, ... and saturating at its last entry.
pub fn lotus_petal_count(ring: u32) -> u32 {
    let idx = (ring.max(1) - 1) as usize;
    LOTUS_PETAL_SEQUENCE[idx.min(LOTUS_PETAL_SEQUENCE.len() - 1)]
}

/// Inner, middle and outer circle radii derived from `base` by powers of φ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SacredProportions {
    pub inner_circle: f64,
    pub middle_circle: f64,
    pub outer_circle: f64,
}

pub fn sacred_proportions(base: f64) -> SacredProportions {
    SacredProportions {
        inner_circle: base / GOLDEN_RATIO / GOLDEN_RATIO,
        middle_circle: base / GOLDEN_RATIO,
        outer_circle: base,
    }
}

/// Middle divisor (>= 2) of `segments`, or `segments` itself when it has
/// no divisor besides itself.
pub fn symmetry_order(segments: u32) -> u32 {
    let divisors: Vec<u32> = (2..=segments).filter(|d| segments % d == 0).collect();
    divisors.get(divisors.len() / 2).copied().unwrap_or(segments)
}

/// Classic n-pointed star: `2 * points` vertices alternating between the
/// outer and inner radius, spaced half an angular step apart, closed.
pub fn star_polygon(center: Point, outer_radius: f64, inner_radius: f64, points: u32, rotation: f64) -> Path {
    let mut path = Path::with_capacity(points as usize * 2 + 2);
    if points == 0 {
        return path;
    }
    let angle_step = 360.0 / points as f64;

    for i in 0..=points * 2 {
        let angle = i as f64 * angle_step / 2.0 + rotation;
        let radius = if i % 2 == 0 { outer_radius } else { inner_radius };
        let p = Point::polar(center, radius, angle);
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }

    path.close();
    path
}

/// Polyline that steps by the golden angle with Fibonacci-growing radius.
pub fn fibonacci_spiral(center: Point, scale: f64, rotations: u32) -> Path {
    let mut path = Path::with_capacity(rotations as usize);
    let step = golden_angle();
    let mut angle: f64 = 0.0;

    for i in 0..rotations {
        let radius = fibonacci(i + 1) as f64 * scale;
        let rad = angle.to_radians();
        let p = Point::new(center.x + radius * rad.cos(), center.y + radius * rad.sin());
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
        angle += step;
    }

    path
}

/// Quadratic midpoint smoothing through `points`, finished with a smooth
/// quadratic to the last point. Fewer than two points yield an empty path.
pub fn smooth_curve(points: &[Point]) -> Path {
    let mut path = Path::with_capacity(points.len() + 1);
    let (first, last) = match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() >= 2 => (*first, *last),
        _ => return path,
    };

    path.move_to(first);
    for pair in points[1..].windows(2) {
        path.quad_to(pair[0], pair[0].midpoint(&pair[1]));
    }
    path.smooth_quad_to(last);
    path
}

pub fn rotate_point(point: Point, center: Point, angle_deg: f64) -> Point {
    point.rotate_about(center, angle_deg)
}
