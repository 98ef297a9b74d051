//! Figurative ornaments placed on the outer rings by the richer variants.

use mandala_core::{Path, Point};

/// Flame-shaped tree standing on `radius / 2`, `height` scaling its tip
/// from `radius / 2` (0.0) to `radius` (1.0).
pub fn cypress_tree(center: Point, radius: f64, angle: f64, height: f64) -> Path {
    let base = Point::polar(center, radius * 0.5, angle);
    let tip = Point::polar(center, radius * (0.5 + height * 0.5), angle);

    let mut path = Path::with_capacity(9);
    path.move_to(base);
    for (scale, spread) in [(0.6, 10.0), (0.7, 8.0), (0.8, 5.0)] {
        path.line_to(Point::polar(center, radius * scale, angle - spread));
    }
    path.line_to(tip);
    for (scale, spread) in [(0.8, 5.0), (0.7, 8.0), (0.6, 10.0)] {
        path.line_to(Point::polar(center, radius * scale, angle + spread));
    }
    path.close();
    path
}

/// Vessel body plus five leaf strokes fanning out of the rim.
pub fn kalash(center: Point, radius: f64, angle: f64) -> Vec<Path> {
    let at = |scale: f64, offset: f64| Point::polar(center, radius * scale, angle + offset);

    let base = at(0.3, 0.0);
    let mut body = Path::with_capacity(7);
    body.move_to(base)
        .quad_to(at(0.6, -15.0), at(0.8, -8.0))
        .line_to(at(1.0, -12.0))
        .line_to(at(1.0, 12.0))
        .line_to(at(0.8, 8.0))
        .quad_to(at(0.6, 15.0), base)
        .close();

    let mut paths = Vec::with_capacity(6);
    paths.push(body);
    for i in 0..5 {
        let leaf_angle = -20.0 + i as f64 * 10.0;
        let mut leaf = Path::starting_at(at(0.95, leaf_angle));
        leaf.line_to(at(1.2, leaf_angle));
        paths.push(leaf);
    }
    paths
}

/// Oil lamp: an open bowl curve and a closed flame rising past the rim.
pub fn diya(center: Point, radius: f64, angle: f64) -> Vec<Path> {
    let at = |scale: f64, offset: f64| Point::polar(center, radius * scale, angle + offset);

    let mut bowl = Path::starting_at(at(1.0, -30.0));
    bowl.quad_to(at(0.7, -25.0), at(0.5, 0.0))
        .quad_to(at(0.7, 25.0), at(1.0, 30.0));

    let flame_base = at(0.6, 0.0);
    let mut flame = Path::starting_at(flame_base);
    flame
        .quad_to(at(0.95, -8.0), at(1.3, 0.0))
        .quad_to(at(0.95, 8.0), flame_base)
        .close();

    vec![bowl, flame]
}

/// Stylized om glyph of nominal `size`, centered on `center`, with its
/// dot above.
pub fn om_symbol(center: Point, size: f64) -> Vec<Path> {
    let scale = size / 100.0;
    let top = Point::polar(center, 40.0 * scale, 0.0);
    let bottom = Point::polar(center, 40.0 * scale, 180.0);
    let left_curve = Point::polar(center, 50.0 * scale, 210.0);
    let right_curve = Point::polar(center, 50.0 * scale, 330.0);

    let mut glyph = Path::starting_at(Point::new(center.x - 30.0 * scale, center.y));
    glyph
        .quad_to(left_curve, bottom)
        .quad_to(Point::new(center.x, center.y + 30.0 * scale), Point::new(center.x + 30.0 * scale, center.y))
        .quad_to(right_curve, top);

    let dot = Path::circle(Point::new(center.x, center.y - 50.0 * scale), 5.0 * scale);
    vec![glyph, dot]
}

/// Simplified elephant silhouette: back, head and trunk in one stroke,
/// plus an ear.
pub fn elephant(center: Point, radius: f64, angle: f64) -> Vec<Path> {
    let body = Point::polar(center, radius * 0.5, angle);
    let head = Point::polar(center, radius * 0.7, angle - 30.0);
    let trunk = Point::polar(center, radius, angle - 45.0);
    let back = Point::polar(center, radius * 0.6, angle + 30.0);
    let ear = Point::polar(center, radius * 0.8, angle - 50.0);

    let mut outline = Path::starting_at(back);
    outline
        .quad_to(body, head)
        .quad_to(head + Point::new(5.0, 5.0), trunk);

    let mut ear_path = Path::starting_at(head);
    ear_path.quad_to(ear, head + Point::new(0.0, 10.0));

    vec![outline, ear_path]
}

/// Sri-yantra style nest: `ceil(n/2)` upward triangles shrinking by 15%
/// from `size`, and `floor(n/2)` downward triangles starting at 90%.
pub fn interlaced_triangles(center: Point, size: f64, count: u32) -> Vec<Path> {
    let upward = count.div_ceil(2);
    let downward = count / 2;
    let triangle = |radius: f64, angles: [f64; 3]| {
        Path::polygon(&angles.map(|a| Point::polar(center, radius, a)))
    };

    let mut paths = Vec::with_capacity(count as usize);
    for i in 0..upward {
        let radius = size * (1.0 - i as f64 * 0.15);
        paths.push(triangle(radius, [90.0, 210.0, 330.0]));
    }
    for i in 0..downward {
        let radius = size * (0.9 - i as f64 * 0.15);
        paths.push(triangle(radius, [270.0, 30.0, 150.0]));
    }
    paths
}
