use mandala_core::{Point, Settings};
use mandala_motifs::{ring_filler_dots, Knobs};

use crate::buffer::PathBuffer;
use crate::centerpiece::build_centerpiece;
use crate::document::render_document;
use crate::registry::{find_pattern, PatternEntry};
use crate::ring::Ring;

/// The subset of settings handed to motif builders.
pub fn knobs_for(settings: &Settings) -> Knobs {
    Knobs {
        petal_curvature: settings.petal_curvature,
        detail_density: settings.detail_density,
        ornament_complexity: settings.ornament_complexity,
        line_weight: settings.line_weight,
        rotation_offset: settings.rotation_offset,
    }
}

fn pattern_for(settings: &Settings) -> Option<&'static PatternEntry> {
    let entry = find_pattern(settings.pattern_type);
    if entry.is_none() {
        log::warn!("no handler registered for pattern '{}', drawing centerpiece only", settings.pattern_type);
    }
    entry
}

/// Every path of the pattern in emission order: rings from the center
/// outward, each followed by its filler dots, then the centerpiece.
///
/// Degenerate settings (zero segments or rings) yield fewer paths, never
/// an error.
pub fn generate_paths(settings: &Settings, width: u32, height: u32) -> PathBuffer {
    let center = Point::new(width as f64 / 2.0, height as f64 / 2.0);
    let knobs = knobs_for(settings);
    let mut out = PathBuffer::new();

    if let Some(pattern) = pattern_for(settings) {
        for index in 1..=settings.rings {
            let ring = Ring::new(settings, knobs, center, index);
            (pattern.build_ring)(&ring, &mut out);

            if index > 1 && knobs.ornament_complexity > 0.5 {
                let count = (settings.segments as f64 * (0.6 + knobs.ornament_complexity * 0.7)).floor() as u32;
                let radius = ring.radius - ring.step * (0.35 + knobs.detail_density * 0.15);
                out.extend(ring_filler_dots(center, radius, count, &knobs));
            }
        }
    }

    build_centerpiece(settings, &knobs, center, &mut out);
    out
}

/// Generate the complete SVG document for `settings`.
pub fn generate(settings: &Settings, width: u32, height: u32) -> String {
    let paths = generate_paths(settings, width, height);
    let jitter = pattern_for(settings).is_some_and(|p| p.stroke_jitter);
    log::debug!(
        "generated {} pattern: {} paths across {} rings at {width}x{height}",
        settings.pattern_type,
        paths.len(),
        settings.rings
    );
    render_document(settings, width, height, &paths, jitter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knobs_copy_settings() {
        let settings = Settings { detail_density: 0.9, rotation_offset: 45.0, ..Settings::default() };
        let knobs = knobs_for(&settings);
        assert_eq!(knobs.detail_density, 0.9);
        assert_eq!(knobs.rotation_offset, 45.0);
        assert_eq!(knobs.line_weight, settings.line_weight);
    }

    #[test]
    fn test_filler_dots_skip_first_ring() {
        let base = Settings {
            pattern_type: mandala_core::PatternType::Rangoli,
            segments: 10,
            rings: 1,
            ornament_complexity: 0.9,
            ..Settings::default()
        };
        // one ring: 10 stars + centerpiece, no filler
        assert_eq!(generate_paths(&base, 800, 800).len(), 10 + 6);

        let two = Settings { rings: 2, ..base };
        // filler on ring 2: floor(10 * 1.23) = 12
        assert_eq!(generate_paths(&two, 800, 800).len(), 20 + 12 + 6);
    }
}
