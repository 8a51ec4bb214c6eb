// CSS color values -> terminal colors
//
// Covers what token sheets and hosts actually send: hex (#rgb, #rrggbb,
// #rrggbbaa), rgb()/rgba(), light-dark(), a handful of named colors.
// Anything else returns None and the caller keeps the inherited color.

use super::ThemeMode;
use ratatui::style::Color;

/// Parse a computed CSS color for display in the terminal
///
/// `transparent` (and fully transparent rgba/hex) is None: the surface below
/// shows through, which in a terminal means "don't paint".
pub fn parse_css_color(value: &str, theme: ThemeMode) -> Option<Color> {
    let value = value.trim();
    let lower = value.to_lowercase();

    if let Some(args) = function_args(&lower, "light-dark") {
        let (light, dark) = split_top_level_comma(args)?;
        let chosen = match theme {
            ThemeMode::Light => light,
            ThemeMode::Dark => dark,
        };
        return parse_css_color(chosen, theme);
    }

    if let Some(hex) = lower.strip_prefix('#') {
        return parse_hex(hex);
    }

    if let Some(args) = function_args(&lower, "rgba").or_else(|| function_args(&lower, "rgb")) {
        return parse_rgb_args(args);
    }

    match lower.as_str() {
        "transparent" => None,
        "black" => Some(Color::Rgb(0, 0, 0)),
        "white" => Some(Color::Rgb(255, 255, 255)),
        "red" => Some(Color::Rgb(255, 0, 0)),
        "green" => Some(Color::Rgb(0, 128, 0)),
        "blue" => Some(Color::Rgb(0, 0, 255)),
        "gray" | "grey" => Some(Color::Rgb(128, 128, 128)),
        _ => None,
    }
}

/// `name(...)` -> inner text
fn function_args<'a>(value: &'a str, name: &str) -> Option<&'a str> {
    value
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn split_top_level_comma(args: &str) -> Option<(&str, &str)> {
    let mut depth = 0usize;
    for (i, c) in args.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => return Some((args[..i].trim(), args[i + 1..].trim())),
            _ => {}
        }
    }
    None
}

fn parse_hex(hex: &str) -> Option<Color> {
    // Byte slicing below relies on every char being one ASCII byte
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    let short = |c: &str| channel(&c.repeat(2));

    match hex.len() {
        3 => Some(Color::Rgb(
            short(&hex[0..1])?,
            short(&hex[1..2])?,
            short(&hex[2..3])?,
        )),
        6 => Some(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        8 => {
            if channel(&hex[6..8])? == 0 {
                return None;
            }
            Some(Color::Rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            ))
        }
        _ => None,
    }
}

fn parse_rgb_args(args: &str) -> Option<Color> {
    // Accept both "r, g, b, a" and "r g b / a"
    let parts: Vec<&str> = args
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();
    if parts.len() < 3 {
        return None;
    }

    if let Some(alpha) = parts.get(3) {
        let alpha: f32 = alpha.trim_end_matches('%').parse().ok()?;
        if alpha == 0.0 {
            return None;
        }
    }

    let channel = |s: &str| -> Option<u8> {
        if let Some(pct) = s.strip_suffix('%') {
            let pct: f32 = pct.parse().ok()?;
            Some((pct.clamp(0.0, 100.0) * 2.55).round() as u8)
        } else {
            let v: f32 = s.parse().ok()?;
            Some(v.clamp(0.0, 255.0).round() as u8)
        }
    };

    Some(Color::Rgb(
        channel(parts[0])?,
        channel(parts[1])?,
        channel(parts[2])?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(
            parse_css_color("#1c1917", ThemeMode::Light),
            Some(Color::Rgb(0x1c, 0x19, 0x17))
        );
        assert_eq!(
            parse_css_color("#FFF", ThemeMode::Light),
            Some(Color::Rgb(255, 255, 255))
        );
        assert_eq!(
            parse_css_color("#ff000080", ThemeMode::Light),
            Some(Color::Rgb(255, 0, 0))
        );
        assert_eq!(parse_css_color("#ff000000", ThemeMode::Light), None);
        assert_eq!(parse_css_color("#12", ThemeMode::Light), None);
    }

    #[test]
    fn test_non_ascii_hex_is_rejected() {
        assert_eq!(parse_css_color("#éa", ThemeMode::Light), None);
        assert_eq!(parse_css_color("#ffé0f", ThemeMode::Light), None);
        assert_eq!(parse_css_color("#12345g", ThemeMode::Light), None);
    }

    #[test]
    fn test_parse_rgb_forms() {
        assert_eq!(
            parse_css_color("rgb(10, 20, 30)", ThemeMode::Light),
            Some(Color::Rgb(10, 20, 30))
        );
        assert_eq!(
            parse_css_color("rgba(28, 25, 23, 0.08)", ThemeMode::Light),
            Some(Color::Rgb(28, 25, 23))
        );
        assert_eq!(
            parse_css_color("rgb(100% 0% 0% / 50%)", ThemeMode::Light),
            Some(Color::Rgb(255, 0, 0))
        );
        assert_eq!(parse_css_color("rgba(0, 0, 0, 0)", ThemeMode::Light), None);
    }

    #[test]
    fn test_light_dark_picks_by_theme() {
        let value = "light-dark(#ffffff, rgb(0, 0, 0))";
        assert_eq!(
            parse_css_color(value, ThemeMode::Light),
            Some(Color::Rgb(255, 255, 255))
        );
        assert_eq!(
            parse_css_color(value, ThemeMode::Dark),
            Some(Color::Rgb(0, 0, 0))
        );
    }

    #[test]
    fn test_unknown_and_transparent() {
        assert_eq!(parse_css_color("transparent", ThemeMode::Dark), None);
        assert_eq!(parse_css_color("oklch(0.7 0.1 200)", ThemeMode::Dark), None);
        assert_eq!(
            parse_css_color(" Red ", ThemeMode::Dark),
            Some(Color::Rgb(255, 0, 0))
        );
    }
}
