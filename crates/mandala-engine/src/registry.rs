use mandala_core::PatternType;

use crate::buffer::PathBuffer;
use crate::ring::Ring;

/// Fills one ring of a pattern, appending in emission order.
pub type RingBuilder = fn(&Ring<'_>, &mut PathBuffer);

/// An entry in the pattern registry: a ring handler plus display metadata.
pub struct PatternEntry {
    pub kind: PatternType,
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub build_ring: RingBuilder,
    /// Vary stroke width per path by the global emission index.
    pub stroke_jitter: bool,
}

/// Build the complete registry of pattern handlers.
///
/// New variants are added here; the generator only ever dispatches through
/// this table.
pub fn build_registry() -> Vec<PatternEntry> {
    vec![
        PatternEntry {
            kind: PatternType::Traditional,
            id: "traditional",
            name: "Traditional",
            description: "Petal, rangoli and ribbon rings in a three-ring cadence.",
            build_ring: crate::traditional::build_ring,
            stroke_jitter: true,
        },
        PatternEntry {
            kind: PatternType::Lotus,
            id: "lotus",
            name: "Lotus",
            description: "Layered petals with sacred star overlays.",
            build_ring: crate::lotus::build_ring,
            stroke_jitter: false,
        },
        PatternEntry {
            kind: PatternType::Rangoli,
            id: "rangoli",
            name: "Rangoli",
            description: "Festival stars with bead inlays.",
            build_ring: crate::rangoli::build_ring,
            stroke_jitter: false,
        },
        PatternEntry {
            kind: PatternType::Paisley,
            id: "paisley",
            name: "Paisley",
            description: "Buta teardrops with mango leaves.",
            build_ring: crate::paisley::build_ring,
            stroke_jitter: false,
        },
        PatternEntry {
            kind: PatternType::Mehndi,
            id: "mehndi",
            name: "Mehndi",
            description: "Leafy vines, dotted borders and cypress trees.",
            build_ring: crate::mehndi::build_ring,
            stroke_jitter: false,
        },
        PatternEntry {
            kind: PatternType::Peacock,
            id: "peacock",
            name: "Peacock",
            description: "Feather fans, lamps and a kalash procession.",
            build_ring: crate::peacock::build_ring,
            stroke_jitter: false,
        },
    ]
}

fn registry() -> &'static [PatternEntry] {
    static REGISTRY: std::sync::OnceLock<Vec<PatternEntry>> = std::sync::OnceLock::new();
    REGISTRY.get_or_init(build_registry)
}

pub fn find_pattern(kind: PatternType) -> Option<&'static PatternEntry> {
    registry().iter().find(|e| e.kind == kind)
}

pub fn find_pattern_by_id(id: &str) -> Option<&'static PatternEntry> {
    registry().iter().find(|e| e.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pattern_type_registered() {
        for kind in PatternType::ALL {
            let entry = find_pattern(kind).unwrap();
            assert_eq!(entry.id, kind.id());
        }
    }

    #[test]
    fn test_lookup_by_id() {
        assert_eq!(find_pattern_by_id("mehndi").map(|e| e.kind), Some(PatternType::Mehndi));
        assert!(find_pattern_by_id("spirograph").is_none());
    }

    #[test]
    fn test_only_traditional_jitters() {
        let jittering: Vec<_> = build_registry().into_iter().filter(|e| e.stroke_jitter).map(|e| e.id).collect();
        assert_eq!(jittering, vec!["traditional"]);
    }
}
