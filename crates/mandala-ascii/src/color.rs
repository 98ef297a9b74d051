/// Parse a `#rgb` or `#rrggbb` color.
pub fn parse_hex_color(value: &str) -> Result<[u8; 3], String> {
    let hex = value.trim().trim_start_matches('#');
    let digit = |i: usize| {
        u8::from_str_radix(&hex[i..i + 1], 16).map_err(|e| format!("invalid color {value}: {e}"))
    };

    match hex.len() {
        3 if hex.is_ascii() => Ok([digit(0)? * 17, digit(1)? * 17, digit(2)? * 17]),
        6 if hex.is_ascii() => {
            let mut rgb = [0u8; 3];
            for (i, channel) in rgb.iter_mut().enumerate() {
                *channel = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
                    .map_err(|e| format!("invalid color {value}: {e}"))?;
            }
            Ok(rgb)
        }
        _ => Err(format!("invalid color {value}: expected #rgb or #rrggbb")),
    }
}

/// Parse `value`, falling back to `fallback` with a warning when it is not a
/// hex color (named CSS colors included).
pub fn color_or(value: &str, fallback: [u8; 3]) -> [u8; 3] {
    parse_hex_color(value).unwrap_or_else(|e| {
        log::warn!("{e}, using #{:02x}{:02x}{:02x}", fallback[0], fallback[1], fallback[2]);
        fallback
    })
}
