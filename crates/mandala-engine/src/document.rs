//! SVG serialization of a generated path buffer.

use mandala_core::Settings;

use crate::buffer::PathBuffer;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Filters are declared for translucent strokes or very dense patterns.
pub fn needs_filters(settings: &Settings) -> bool {
    settings.stroke_opacity < 0.95 || settings.detail_density > 0.8
}

/// Stroke width for the path at `index` in the emission sequence.
pub fn stroke_width(settings: &Settings, index: usize, jitter: bool) -> f64 {
    if jitter {
        settings.line_weight * (1.0 + (settings.seed + index as f64).sin() * 0.1)
    } else {
        settings.line_weight
    }
}

/// Serialize `paths` as a `width` x `height` document: optional filter
/// definitions, a full-bleed background, then one stroked, unfilled
/// `<path>` per buffer entry in emission order.
pub fn render_document(settings: &Settings, width: u32, height: u32, paths: &PathBuffer, jitter: bool) -> String {
    let mut svg = String::with_capacity(256 + paths.len() * 320);
    svg.push_str(&format!(
        "<svg width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\" xmlns=\"{SVG_NS}\">"
    ));

    if needs_filters(settings) {
        let glow = settings.line_weight * 0.3;
        let blur = settings.line_weight * 0.1;
        svg.push_str("<defs>");
        svg.push_str(&format!(
            "<filter id=\"softGlow\" x=\"-50%\" y=\"-50%\" width=\"200%\" height=\"200%\">\
             <feGaussianBlur in=\"SourceGraphic\" stdDeviation=\"{glow}\" /></filter>"
        ));
        svg.push_str(&format!(
            "<filter id=\"subtleBlur\" x=\"-20%\" y=\"-20%\" width=\"140%\" height=\"140%\">\
             <feGaussianBlur in=\"SourceGraphic\" stdDeviation=\"{blur}\" /></filter>"
        ));
        svg.push_str("</defs>");
    }

    svg.push_str(&format!("<rect width=\"100%\" height=\"100%\" fill=\"{}\" />", settings.background_color));

    let dash_attr = match settings.stroke_dash.dash_array(settings.line_weight) {
        Some(lengths) => {
            let joined: Vec<String> = lengths.iter().map(|l| l.to_string()).collect();
            format!(" stroke-dasharray=\"{}\"", joined.join(","))
        }
        None => String::new(),
    };
    let filter_attr = if settings.stroke_opacity < 0.95 { " filter=\"url(#softGlow)\"" } else { "" };

    for (id, path) in paths.iter() {
        let width = stroke_width(settings, id.index(), jitter);
        svg.push_str(&format!(
            "<path d=\"{path}\" stroke=\"{}\" stroke-width=\"{width}\" fill=\"none\" \
             stroke-linecap=\"round\" stroke-linejoin=\"round\" stroke-opacity=\"{}\"{dash_attr}{filter_attr} />",
            settings.stroke_color, settings.stroke_opacity
        ));
    }

    svg.push_str("</svg>");
    svg
}

/// Collapse every whitespace run, newlines included, to a single space and
/// trim the ends, for clipboard-friendly export.
pub fn compact_document(svg: &str) -> String {
    svg.split_whitespace().collect::<Vec<_>>().join(" ")
}
