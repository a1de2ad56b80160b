// File: ./src/color_utils.rs
// Color tokens for leave bars.
//
// The layout core never interprets tokens; these helpers only fill in a
// deterministic token when the backend sends a leave type without a color,
// and let the text renderer pick a readable foreground.

use std::hash::{Hash, Hasher};

/// Deterministic `#rrggbb` token for a leave type name.
/// Saturation and lightness are kept in a range that reads well as a bar fill.
pub fn generate_color_token(name: &str) -> String {
    let (r, g, b) = generate_color(name);
    format!(
        "#{:02x}{:02x}{:02x}",
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8
    )
}

/// Generates a color (r, g, b) in [0.0, 1.0] from the hash of `name`.
pub fn generate_color(name: &str) -> (f32, f32, f32) {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    name.trim().to_lowercase().hash(&mut hasher);
    let hash = hasher.finish();

    let h = (hash % 360) as f32;
    let hash_s = hash >> 16;
    let hash_l = hash >> 32;

    // Saturation: 45% - 80%
    let s = 0.45 + ((hash_s % 36) as f32 / 100.0);
    // Lightness: 40% - 60%
    let l = 0.40 + ((hash_l % 21) as f32 / 100.0);

    hsl_to_rgb(h, s, l)
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (f32, f32, f32) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r1, g1, b1) = if (0.0..60.0).contains(&h) {
        (c, x, 0.0)
    } else if (60.0..120.0).contains(&h) {
        (x, c, 0.0)
    } else if (120.0..180.0).contains(&h) {
        (0.0, c, x)
    } else if (180.0..240.0).contains(&h) {
        (0.0, x, c)
    } else if (240.0..300.0).contains(&h) {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (r1 + m, g1 + m, b1 + m)
}

/// Whether text drawn on top of this color should be white.
pub fn is_dark(r: u8, g: u8, b: u8) -> bool {
    let brightness = 0.299 * f32::from(r) + 0.587 * f32::from(g) + 0.114 * f32::from(b);
    brightness < 128.0
}

/// Parse "#RRGGBB" or "RRGGBB". Shorthand "#RGB" is expanded.
pub fn parse_hex_to_u8(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            Some((r * 17, g * 17, b * 17))
        }
        _ => None,
    }
}

/// ANSI 24-bit background escape for a token, with a contrasting foreground.
/// Tokens that are not hex colors (e.g. CSS class names) yield `None`.
pub fn ansi_bar_style(token: &str) -> Option<String> {
    let (r, g, b) = parse_hex_to_u8(token)?;
    let fg = if is_dark(r, g, b) { "97" } else { "30" };
    Some(format!("\x1b[48;2;{};{};{}m\x1b[{}m", r, g, b, fg))
}

pub const ANSI_RESET: &str = "\x1b[0m";
