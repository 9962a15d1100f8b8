//! RGB and HSV color representations with hex string conversion.
//!
//! Hex strings (`#rrggbb`, lowercase) are the interchange format at the
//! crate boundary; [`Rgb`] and [`Hsv`] are the working representations.
//! Hue is circular with period 1.0, so `0.0` and `1.0` name the same angle.
//!
//! # Example
//!
//! ```rust
//! use tintgrid::Rgb;
//!
//! let rgb = Rgb::from_hex("#c0929f").unwrap();
//! assert_eq!(rgb, Rgb(0xc0, 0x92, 0x9f));
//!
//! // Shorthand hex expands by digit doubling, with or without the '#'.
//! assert_eq!(Rgb::from_hex("abc"), Rgb::from_hex("#aabbcc"));
//!
//! // Round-trips through HSV reproduce the original within ±1 per channel.
//! let back = rgb.to_hsv().to_rgb();
//! assert!((rgb.0 as i16 - back.0 as i16).abs() <= 1);
//! ```

/// An RGB color triplet, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// An HSV color. All three components lie in `[0, 1]`; hue is circular.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue angle as a fraction of a full turn.
    pub h: f64,
    /// Saturation.
    pub s: f64,
    /// Value (brightness).
    pub v: f64,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    /// Pure white.
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Parses a 3- or 6-digit hex color, with an optional leading `#`.
    ///
    /// Case-insensitive. Shorthand digits double (`#f80` → `#ff8800`).
    /// Malformed input yields `None` rather than an error.
    pub fn from_hex(hex: &str) -> Option<Rgb> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
                Some(Rgb(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Rgb(r, g, b))
            }
            _ => None,
        }
    }

    /// Formats as a lowercase `#rrggbb` string, always 7 characters.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Converts to HSV using the six-way max-channel case split.
    ///
    /// Achromatic colors (max == min) get hue 0.
    pub fn to_hsv(self) -> Hsv {
        let r = self.0 as f64 / 255.0;
        let g = self.1 as f64 / 255.0;
        let b = self.2 as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let d = max - min;

        let s = if max == 0.0 { 0.0 } else { d / max };
        let h = if d == 0.0 {
            0.0
        } else {
            let h = if max == r {
                (g - b) / d + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / d + 2.0
            } else {
                (r - g) / d + 4.0
            };
            h / 6.0
        };

        Hsv { h, s, v: max }
    }
}

/// One of the six hue sectors of the HSV cone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sector {
    RedToYellow,
    YellowToGreen,
    GreenToCyan,
    CyanToBlue,
    BlueToMagenta,
    MagentaToRed,
}

impl Sector {
    /// Splits a hue into its sector and the fractional position within it.
    ///
    /// The sector index is `floor(h * 6) mod 6`, so hues outside `[0, 1)`
    /// wrap rather than panic.
    fn from_hue(h: f64) -> (Sector, f64) {
        let scaled = h * 6.0;
        let index = scaled.floor();
        let f = scaled - index;
        let sector = match (index as i64).rem_euclid(6) {
            0 => Sector::RedToYellow,
            1 => Sector::YellowToGreen,
            2 => Sector::GreenToCyan,
            3 => Sector::CyanToBlue,
            4 => Sector::BlueToMagenta,
            _ => Sector::MagentaToRed,
        };
        (sector, f)
    }
}

impl Hsv {
    /// Converts to RGB using the six-sector formula.
    pub fn to_rgb(self) -> Rgb {
        let Hsv { h, s, v } = self;
        let (sector, f) = Sector::from_hue(h);

        let p = v * (1.0 - s);
        let q = v * (1.0 - f * s);
        let t = v * (1.0 - (1.0 - f) * s);

        let (r, g, b) = match sector {
            Sector::RedToYellow => (v, t, p),
            Sector::YellowToGreen => (q, v, p),
            Sector::GreenToCyan => (p, v, t),
            Sector::CyanToBlue => (p, q, v),
            Sector::BlueToMagenta => (t, p, v),
            Sector::MagentaToRed => (v, p, q),
        };

        Rgb(channel(r), channel(g), channel(b))
    }
}

/// Rounds a unit-interval channel to a byte.
fn channel(c: f64) -> u8 {
    (c * 255.0).round() as u8
}

/// Picks black or white text for readability against a background color.
///
/// Uses the perceptual luminance weighting `0.299r + 0.587g + 0.114b`,
/// normalized to `[0, 1]`: backgrounds brighter than 0.5 get black text,
/// darker ones get white. An absent background defaults to black text,
/// matching an unstyled cell.
pub fn contrasting_text_color(background: Option<Rgb>) -> Rgb {
    let Some(Rgb(r, g, b)) = background else {
        return Rgb::BLACK;
    };
    let luminance = (0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64) / 255.0;
    if luminance > 0.5 {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // =====================================================================
    // Hex parsing
    // =====================================================================

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(Rgb::from_hex("#ff6b35"), Some(Rgb(255, 107, 53)));
        assert_eq!(Rgb::from_hex("#000000"), Some(Rgb(0, 0, 0)));
        assert_eq!(Rgb::from_hex("#ffffff"), Some(Rgb(255, 255, 255)));
    }

    #[test]
    fn parses_three_digit_shorthand() {
        assert_eq!(Rgb::from_hex("#abc"), Some(Rgb(0xaa, 0xbb, 0xcc)));
        assert_eq!(Rgb::from_hex("#f80"), Some(Rgb(255, 136, 0)));
    }

    #[test]
    fn hash_prefix_is_optional() {
        assert_eq!(Rgb::from_hex("c0929f"), Rgb::from_hex("#c0929f"));
        assert_eq!(Rgb::from_hex("abc"), Rgb::from_hex("#aabbcc"));
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!(Rgb::from_hex("#FF6B35"), Some(Rgb(255, 107, 53)));
        assert_eq!(Rgb::from_hex("ABC"), Some(Rgb(0xaa, 0xbb, 0xcc)));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(Rgb::from_hex("xyz"), None);
        assert_eq!(Rgb::from_hex("#ffff"), None);
        assert_eq!(Rgb::from_hex("#ff"), None);
        assert_eq!(Rgb::from_hex(""), None);
        assert_eq!(Rgb::from_hex("#gggggg"), None);
        assert_eq!(Rgb::from_hex("#+1+1+1"), None);
    }

    #[test]
    fn hex_output_is_zero_padded_lowercase() {
        assert_eq!(Rgb(0, 1, 10).to_hex(), "#00010a");
        assert_eq!(Rgb(255, 255, 255).to_hex(), "#ffffff");
        assert_eq!(Rgb(0xC0, 0x92, 0x9F).to_hex(), "#c0929f");
    }

    // =====================================================================
    // HSV conversion
    // =====================================================================

    #[test]
    fn primary_hues() {
        let red = Rgb(255, 0, 0).to_hsv();
        assert!(red.h.abs() < 1e-9);
        let green = Rgb(0, 255, 0).to_hsv();
        assert!((green.h - 1.0 / 3.0).abs() < 1e-9);
        let blue = Rgb(0, 0, 255).to_hsv();
        assert!((blue.h - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn achromatic_colors_have_zero_hue_and_saturation() {
        let gray = Rgb(128, 128, 128).to_hsv();
        assert_eq!(gray.h, 0.0);
        assert_eq!(gray.s, 0.0);
        let black = Rgb(0, 0, 0).to_hsv();
        assert_eq!(black.s, 0.0);
        assert_eq!(black.v, 0.0);
    }

    #[test]
    fn hue_wraps_in_sector_lookup() {
        // A hue of exactly 1.0 is the same angle as 0.0.
        let at_one = Hsv { h: 1.0, s: 1.0, v: 1.0 }.to_rgb();
        let at_zero = Hsv { h: 0.0, s: 1.0, v: 1.0 }.to_rgb();
        assert_eq!(at_one, at_zero);
    }

    #[test]
    fn round_trips_known_colors_exactly() {
        for hex in ["#204060", "#c0929f", "#617b87", "#e05950", "#fedb4f"] {
            let rgb = Rgb::from_hex(hex).unwrap();
            assert_eq!(rgb.to_hsv().to_rgb().to_hex(), hex);
        }
    }

    proptest! {
        #[test]
        fn hsv_round_trip_within_one(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let rgb = Rgb(r, g, b);
            let back = rgb.to_hsv().to_rgb();
            prop_assert!((r as i16 - back.0 as i16).abs() <= 1);
            prop_assert!((g as i16 - back.1 as i16).abs() <= 1);
            prop_assert!((b as i16 - back.2 as i16).abs() <= 1);
        }
    }

    // =====================================================================
    // Contrast selection
    // =====================================================================

    #[test]
    fn light_backgrounds_get_black_text() {
        assert_eq!(contrasting_text_color(Some(Rgb::WHITE)), Rgb::BLACK);
        assert_eq!(
            contrasting_text_color(Rgb::from_hex("#fedb4f")),
            Rgb::BLACK
        );
    }

    #[test]
    fn dark_backgrounds_get_white_text() {
        assert_eq!(contrasting_text_color(Some(Rgb::BLACK)), Rgb::WHITE);
        assert_eq!(
            contrasting_text_color(Rgb::from_hex("#204060")),
            Rgb::WHITE
        );
    }

    #[test]
    fn absent_background_defaults_to_black_text() {
        assert_eq!(contrasting_text_color(None), Rgb::BLACK);
    }
}
