//! Luminance grid to character grid.

use mandala_core::AsciiSettings;

use crate::luminance::{LuminanceGrid, Sample};

/// Samples with less coverage than this take the empty character.
pub const ALPHA_CUTOFF: f64 = 0.1;

fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Luminance after alpha premultiplication and the contrast/brightness
/// transform, clamped to `0.0..=1.0`.
pub fn adjusted_luminance(sample: Sample, contrast: f64, brightness: f64) -> f64 {
    let luminance = sample.luminance * sample.alpha;
    clamp01((luminance - 0.5) * contrast + 0.5 + brightness)
}

/// Pool index for an adjusted luminance: darker picks a higher index.
pub fn pool_index(adjusted: f64, pool_len: usize) -> usize {
    if pool_len == 0 {
        return 0;
    }
    let last = pool_len - 1;
    let index = ((1.0 - clamp01(adjusted)) * last as f64).round();
    (index.max(0.0) as usize).min(last)
}

/// One string per grid row. An empty charset yields no rows at all.
///
/// Low-coverage samples take the light end of the charset (its last
/// character, before any inversion), so the default pool leaves them blank.
pub fn encode_rows(grid: &LuminanceGrid, settings: &AsciiSettings) -> Vec<String> {
    let pool = settings.pool();
    let Some(empty) = settings.charset.chars().last() else {
        return Vec::new();
    };

    grid.rows()
        .map(|row| {
            row.iter()
                .map(|&sample| {
                    if sample.alpha < ALPHA_CUTOFF {
                        empty
                    } else {
                        let adjusted = adjusted_luminance(sample, settings.contrast, settings.brightness);
                        pool[pool_index(adjusted, pool.len())]
                    }
                })
                .collect()
        })
        .collect()
}

/// Rows joined by newlines.
pub fn encode(grid: &LuminanceGrid, settings: &AsciiSettings) -> String {
    encode_rows(grid, settings).join("\n")
}
