//! CSS color handling
//!
//! Elements keep their colors as the strings they were entered as. The
//! renderer resolves them to [`Color32`] through [`resolve`], and the
//! inspector's color picker reads them back through [`to_hex`].

use std::str::FromStr;

use ::color::{DynamicColor, Srgb};
use egui::Color32;

/// Shown in place of a stored color that fails to parse
pub const FALLBACK_COLOR: Color32 = Color32::WHITE;

/// Value the color picker shows for a stored color that fails to parse
pub const FALLBACK_HEX: &str = "#ffffff";

/// Parse any CSS color string (`#rgb`, `rgba(...)`, `white`, ...) into
/// unmultiplied sRGB bytes
fn parse_rgba8(css: &str) -> Option<[u8; 4]> {
    let color = DynamicColor::from_str(css.trim()).ok()?;
    let rgba = color.to_alpha_color::<Srgb>().to_rgba8();
    Some([rgba.r, rgba.g, rgba.b, rgba.a])
}

/// Parse any CSS color string (`#rgb`, `rgba(...)`, `white`, ...)
pub fn parse(css: &str) -> Option<Color32> {
    let [r, g, b, a] = parse_rgba8(css)?;
    Some(Color32::from_rgba_unmultiplied(r, g, b, a))
}

/// Resolve a stored color for drawing, falling back to [`FALLBACK_COLOR`]
pub fn resolve(css: &str) -> Color32 {
    parse(css).unwrap_or_else(|| {
        log::debug!("Unrecognized color {css:?}, drawing with fallback");
        FALLBACK_COLOR
    })
}

/// Opaque `#rrggbb` approximation of a stored color. Alpha is dropped.
pub fn to_hex(css: &str) -> String {
    match parse_rgba8(css) {
        Some([r, g, b, _]) => srgb_to_hex([r, g, b]),
        None => FALLBACK_HEX.to_owned(),
    }
}

/// `#rgb` or `#rrggbb`
pub fn is_hex(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// `[r, g, b]` of a hex color, as egui's sRGB color button wants it
pub fn hex_to_srgb(hex: &str) -> [u8; 3] {
    match parse_rgba8(hex) {
        Some([r, g, b, _]) => [r, g, b],
        None => [255, 255, 255],
    }
}

pub fn srgb_to_hex([r, g, b]: [u8; 3]) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Same as CSS `rgba(r, g, b, alpha)`; used for the fixed decoration colors
pub(crate) fn rgba(r: u8, g: u8, b: u8, alpha: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(r, g, b, (alpha * 255.0).round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_css_forms() {
        assert_eq!(parse("#ff0000"), Some(Color32::from_rgb(255, 0, 0)));
        assert_eq!(parse("white"), Some(Color32::WHITE));

        let translucent = parse("rgba(255,255,255,0.6)").unwrap();
        assert_eq!(translucent.a(), 153);

        assert_eq!(parse("not-a-color"), None);
    }

    #[test]
    fn test_to_hex_normalizes() {
        assert_eq!(to_hex("rgba(255,255,255,0.14)"), "#ffffff");
        assert_eq!(to_hex("rgb(12, 34, 56)"), "#0c2238");
        assert_eq!(to_hex("#abc"), "#aabbcc");
        assert_eq!(to_hex("white"), "#ffffff");
        // Deterministic for garbage too
        assert_eq!(to_hex("???"), FALLBACK_HEX);
        assert_eq!(to_hex("???"), to_hex("???"));
    }

    #[test]
    fn test_is_hex() {
        assert!(is_hex("#fff"));
        assert!(is_hex("#00ff7F"));
        assert!(!is_hex("fff"));
        assert!(!is_hex("#ffff"));
        assert!(!is_hex("#ggg"));
        assert!(!is_hex("rgba(1,2,3,1)"));
    }

    #[test]
    fn test_srgb_round_trip() {
        assert_eq!(hex_to_srgb("#0c2238"), [12, 34, 56]);
        assert_eq!(srgb_to_hex([12, 34, 56]), "#0c2238");
    }

    #[test]
    fn test_resolve_falls_back() {
        assert_eq!(resolve("definitely not css"), FALLBACK_COLOR);
    }
}
