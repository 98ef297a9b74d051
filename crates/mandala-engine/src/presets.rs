use mandala_core::{PatternType, Settings, StrokeDash};

/// A named starting point for the settings panel. The seed is supplied by
/// the caller when the preset is applied.
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    build: fn() -> Settings,
}

impl Preset {
    pub fn settings(&self, seed: f64) -> Settings {
        Settings { seed, ..(self.build)() }
    }
}

pub fn presets() -> Vec<Preset> {
    vec![
        Preset {
            name: "Lotus Chakra",
            description: "Layered petals with sacred star overlays",
            build: || Settings {
                pattern_type: PatternType::Lotus,
                segments: 9,
                rings: 6,
                radius: 320.0,
                line_weight: 2.2,
                petal_curvature: 0.65,
                detail_density: 0.62,
                ornament_complexity: 0.55,
                rotation_offset: 0.0,
                segment_offset: true,
                spacing_multiplier: 1.05,
                center_scale: 1.15,
                stroke_color: "#f5f5f5".to_string(),
                background_color: "#0c0c0c".to_string(),
                stroke_opacity: 1.0,
                stroke_dash: StrokeDash::Solid,
                seed: 0.0,
            },
        },
        Preset {
            name: "Navaratri Garland",
            description: "Traditional ring cadence with bead flourishes",
            build: || Settings {
                pattern_type: PatternType::Traditional,
                segments: 12,
                rings: 7,
                radius: 340.0,
                line_weight: 1.6,
                petal_curvature: 0.55,
                detail_density: 0.7,
                ornament_complexity: 0.75,
                rotation_offset: 10.0,
                segment_offset: true,
                spacing_multiplier: 0.95,
                center_scale: 0.9,
                stroke_color: "#fde68a".to_string(),
                background_color: "#1b1204".to_string(),
                stroke_opacity: 1.0,
                stroke_dash: StrokeDash::Solid,
                seed: 0.0,
            },
        },
        Preset {
            name: "Rangoli Carnival",
            description: "Festival starburst with bead inlays",
            build: || Settings {
                pattern_type: PatternType::Rangoli,
                segments: 10,
                rings: 6,
                radius: 310.0,
                line_weight: 2.4,
                petal_curvature: 0.48,
                detail_density: 0.8,
                ornament_complexity: 0.78,
                rotation_offset: 18.0,
                segment_offset: false,
                spacing_multiplier: 1.12,
                center_scale: 1.25,
                stroke_color: "#f97316".to_string(),
                background_color: "#1d1208".to_string(),
                stroke_opacity: 1.0,
                stroke_dash: StrokeDash::Solid,
                seed: 0.0,
            },
        },
    ]
}

/// Case-insensitive lookup by display name.
pub fn find_preset(name: &str) -> Option<Preset> {
    presets().into_iter().find(|p| p.name.eq_ignore_ascii_case(name))
}
