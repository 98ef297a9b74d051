use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Pattern variant selector. Each variant has exactly one handler in the
/// engine's pattern registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternType {
    Traditional,
    Lotus,
    Rangoli,
    Paisley,
    Mehndi,
    Peacock,
}

impl PatternType {
    pub const ALL: [PatternType; 6] = [
        PatternType::Traditional,
        PatternType::Lotus,
        PatternType::Rangoli,
        PatternType::Paisley,
        PatternType::Mehndi,
        PatternType::Peacock,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            PatternType::Traditional => "traditional",
            PatternType::Lotus => "lotus",
            PatternType::Rangoli => "rangoli",
            PatternType::Paisley => "paisley",
            PatternType::Mehndi => "mehndi",
            PatternType::Peacock => "peacock",
        }
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for PatternType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        PatternType::ALL
            .into_iter()
            .find(|t| t.id() == lower)
            .ok_or_else(|| format!("unknown pattern type: {s}"))
    }
}

/// Stroke dash style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeDash {
    #[default]
    Solid,
    Dashed,
    Dotted,
    Dashdot,
}

impl StrokeDash {
    /// Dash lengths for a stroke of weight `w`; `None` for solid strokes.
    pub fn dash_array(&self, w: f64) -> Option<Vec<f64>> {
        match self {
            StrokeDash::Solid => None,
            StrokeDash::Dashed => Some(vec![w * 4.0, w * 2.0]),
            StrokeDash::Dotted => Some(vec![w, w]),
            StrokeDash::Dashdot => Some(vec![w * 4.0, w, w, w]),
        }
    }
}

impl FromStr for StrokeDash {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "solid" => Ok(StrokeDash::Solid),
            "dashed" => Ok(StrokeDash::Dashed),
            "dotted" => Ok(StrokeDash::Dotted),
            "dashdot" => Ok(StrokeDash::Dashdot),
            _ => Err(format!("unknown stroke dash: {s}")),
        }
    }
}

/// Everything the pattern engine reads. Generation is a pure function of
/// this record plus the output width and height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub pattern_type: PatternType,
    pub segments: u32,
    pub rings: u32,
    pub radius: f64,
    pub line_weight: f64,
    /// Bend of petal curves. Range: 0.0..1.0
    pub petal_curvature: f64,
    /// Density of secondary detail. Range: 0.0..1.0
    pub detail_density: f64,
    /// Density of decorative dots and star points. Range: 0.0..1.0
    pub ornament_complexity: f64,
    /// Global rotation in degrees.
    pub rotation_offset: f64,
    /// Shift every even ring by half an angular step.
    pub segment_offset: bool,
    pub spacing_multiplier: f64,
    pub center_scale: f64,
    pub stroke_color: String,
    pub background_color: String,
    /// Range: (0.0, 1.0]
    pub stroke_opacity: f64,
    pub stroke_dash: StrokeDash,
    /// Phase fed to the stroke-width sine jitter.
    pub seed: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pattern_type: PatternType::Traditional,
            segments: 12,
            rings: 6,
            radius: 300.0,
            line_weight: 2.0,
            petal_curvature: 0.5,
            detail_density: 0.5,
            ornament_complexity: 0.5,
            rotation_offset: 0.0,
            segment_offset: false,
            spacing_multiplier: 1.0,
            center_scale: 1.0,
            stroke_color: "#ffffff".to_string(),
            background_color: "#0a0a0a".to_string(),
            stroke_opacity: 1.0,
            stroke_dash: StrokeDash::Solid,
            seed: 0.0,
        }
    }
}

impl Settings {
    /// A copy of these settings with the geometry knobs and seed re-rolled
    /// from `rng`. Colors, dash style, pattern type and line weight are kept.
    pub fn randomized<R: Rng>(&self, rng: &mut R) -> Self {
        Self {
            seed: rng.random_range(0.0..10000.0),
            segments: rng.random_range(6..=24),
            rings: rng.random_range(3..=10),
            petal_curvature: rng.random_range(0.2..1.0),
            detail_density: rng.random_range(0.0..1.0),
            ornament_complexity: rng.random_range(0.0..1.0),
            rotation_offset: rng.random_range(0..360) as f64,
            segment_offset: rng.random_bool(0.5),
            spacing_multiplier: rng.random_range(0.8..1.2),
            center_scale: rng.random_range(0.7..1.3),
            ..self.clone()
        }
    }

    /// These settings with a fresh seed drawn from `rng`.
    pub fn reseeded<R: Rng>(&self, rng: &mut R) -> Self {
        Self { seed: rng.random_range(0.0..10000.0), ..self.clone() }
    }

    /// Merge a partial update; unspecified fields keep their value.
    pub fn apply(&mut self, patch: &SettingsPatch) {
        macro_rules! merge {
            ($($field:ident),* $(,)?) => {
                $(if let Some(v) = &patch.$field { self.$field = v.clone(); })*
            };
        }
        merge!(
            pattern_type,
            segments,
            rings,
            radius,
            line_weight,
            petal_curvature,
            detail_density,
            ornament_complexity,
            rotation_offset,
            segment_offset,
            spacing_multiplier,
            center_scale,
            stroke_color,
            background_color,
            stroke_opacity,
            stroke_dash,
            seed,
        );
    }

    pub fn merged(&self, patch: &SettingsPatch) -> Self {
        let mut next = self.clone();
        next.apply(patch);
        next
    }
}

/// Partial update of [`Settings`], as produced by the control layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsPatch {
    pub pattern_type: Option<PatternType>,
    pub segments: Option<u32>,
    pub rings: Option<u32>,
    pub radius: Option<f64>,
    pub line_weight: Option<f64>,
    pub petal_curvature: Option<f64>,
    pub detail_density: Option<f64>,
    pub ornament_complexity: Option<f64>,
    pub rotation_offset: Option<f64>,
    pub segment_offset: Option<bool>,
    pub spacing_multiplier: Option<f64>,
    pub center_scale: Option<f64>,
    pub stroke_color: Option<String>,
    pub background_color: Option<String>,
    pub stroke_opacity: Option<f64>,
    pub stroke_dash: Option<StrokeDash>,
    pub seed: Option<f64>,
}

pub const DEFAULT_CHARSET: &str = "@%#*+=-:. ";

/// ASCII conversion parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AsciiSettings {
    /// Requested grid width; the encoder floors it at 16.
    pub columns: u32,
    pub contrast: f64,
    /// Additive brightness applied after contrast.
    pub brightness: f64,
    /// Reverse the character pool.
    pub invert: bool,
    /// Glyph pool ordered dark to light.
    pub charset: String,
}

impl Default for AsciiSettings {
    fn default() -> Self {
        Self {
            columns: 120,
            contrast: 1.0,
            brightness: 0.0,
            invert: false,
            charset: DEFAULT_CHARSET.to_string(),
        }
    }
}

impl AsciiSettings {
    pub fn apply(&mut self, patch: &AsciiSettingsPatch) {
        if let Some(v) = patch.columns {
            self.columns = v;
        }
        if let Some(v) = patch.contrast {
            self.contrast = v;
        }
        if let Some(v) = patch.brightness {
            self.brightness = v;
        }
        if let Some(v) = patch.invert {
            self.invert = v;
        }
        if let Some(v) = &patch.charset {
            self.charset = v.clone();
        }
    }

    /// The character pool in lookup order: the charset, reversed when
    /// `invert` is set.
    pub fn pool(&self) -> Vec<char> {
        let mut pool: Vec<char> = self.charset.chars().collect();
        if self.invert {
            pool.reverse();
        }
        pool
    }
}

/// Partial update of [`AsciiSettings`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AsciiSettingsPatch {
    pub columns: Option<u32>,
    pub contrast: Option<f64>,
    pub brightness: Option<f64>,
    pub invert: Option<bool>,
    pub charset: Option<String>,
}
