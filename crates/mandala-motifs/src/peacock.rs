use mandala_core::{Path, Point};

const FEATHER_SPREAD: f64 = 60.0;

/// Peacock motif: a stem from 30% to 50% of `radius`, then
/// `floor(5 + 10 * complexity)` feathers fanned across 60 degrees, each
/// curving through the stem tip. Above `complexity > 0.5` every feather
/// ends in an eye dot at 90% radius.
pub fn peacock_motif(center: Point, radius: f64, angle: f64, complexity: f64) -> Vec<Path> {
    let base = Point::polar(center, radius * 0.3, angle);
    let head = Point::polar(center, radius * 0.5, angle);

    let feather_count = (5.0 + complexity * 10.0).floor().max(2.0) as u32;
    let with_eyes = complexity > 0.5;
    let mut paths = Vec::with_capacity(1 + feather_count as usize * if with_eyes { 2 } else { 1 });

    let mut stem = Path::starting_at(base);
    stem.line_to(head);
    paths.push(stem);

    for i in 0..feather_count {
        let feather_angle =
            angle - FEATHER_SPREAD / 2.0 + i as f64 * FEATHER_SPREAD / (feather_count - 1) as f64;
        let tip = Point::polar(center, radius, feather_angle);
        let feather_base = Point::polar(center, radius * 0.4, feather_angle);

        let mut feather = Path::starting_at(feather_base);
        feather.quad_to(head, tip);
        paths.push(feather);

        if with_eyes {
            let eye = Point::polar(center, radius * 0.9, feather_angle);
            paths.push(Path::circle(eye, radius * 0.05));
        }
    }

    paths
}
