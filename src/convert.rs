use serde::{Deserialize, Serialize};

use crate::error::{ColorError, Result};

/// An 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A color in hue/saturation/lightness form, rounded to integer units
///
/// Hue is degrees in [0,360), saturation and lightness are percentages in
/// [0,100]. HSL is always derived; RGB stays the source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }
}

/// Parse a hex color string into RGB
///
/// Accepts one optional leading `#`; the remainder must be exactly six hex
/// digits. Case-insensitive.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidFormat {
            input: hex.to_string(),
        });
    }
    let value = u32::from_str_radix(digits, 16).map_err(|_| ColorError::InvalidFormat {
        input: hex.to_string(),
    })?;
    Ok(Rgb::new(
        (value >> 16) as u8,
        (value >> 8) as u8,
        value as u8,
    ))
}

/// Format RGB as a lowercase `#rrggbb` string
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

/// Convert RGB to HSL, rounding to integer degrees and percentages
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.r as f32 / 255.0;
    let g = rgb.g as f32 / 255.0;
    let b = rgb.b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if (max - min).abs() < f32::EPSILON {
        // Achromatic: hue and saturation collapse to zero
        return Hsl::new(0, 0, (l * 100.0).round() as u8);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if (max - r).abs() < f32::EPSILON {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if (max - g).abs() < f32::EPSILON {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    // A hue that rounds up to a full turn wraps back to zero
    let h_deg = (h / 6.0 * 360.0).round() as u16 % 360;
    Hsl::new(
        h_deg,
        (s * 100.0).round() as u8,
        (l * 100.0).round() as u8,
    )
}

/// Convert HSL back to RGB
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h as f32 / 360.0;
    let s = hsl.s as f32 / 100.0;
    let l = hsl.l as f32 / 100.0;

    if s == 0.0 {
        let v = (l * 255.0).round() as u8;
        return Rgb::new(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    let r = hue_to_channel(p, q, h + 1.0 / 3.0);
    let g = hue_to_channel(p, q, h);
    let b = hue_to_channel(p, q, h - 1.0 / 3.0);

    Rgb::new(
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    )
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Parse a hex color and convert it to HSL
pub fn hex_to_hsl(hex: &str) -> Result<Hsl> {
    Ok(rgb_to_hsl(hex_to_rgb(hex)?))
}

/// Convert HSL to a lowercase `#rrggbb` string
pub fn hsl_to_hex(hsl: Hsl) -> String {
    rgb_to_hex(hsl_to_rgb(hsl))
}

/// Readable overlay text color for a given background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContrastColor {
    Black,
    White,
}

impl ContrastColor {
    /// The text color as a hex string
    pub const fn hex(self) -> &'static str {
        match self {
            ContrastColor::Black => "#000000",
            ContrastColor::White => "#ffffff",
        }
    }
}

/// Pick black or white text for readable contrast over a background color
///
/// Luminance is the perceptual weighting `0.299 R + 0.587 G + 0.114 B`,
/// normalized to [0,1]; backgrounds above 0.5 take black text.
pub fn contrast_text_color(hex: &str) -> Result<ContrastColor> {
    let rgb = hex_to_rgb(hex)?;
    let luminance =
        (0.299 * rgb.r as f32 + 0.587 * rgb.g as f32 + 0.114 * rgb.b as f32) / 255.0;
    Ok(if luminance > 0.5 {
        ContrastColor::Black
    } else {
        ContrastColor::White
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgb_with_and_without_hash() {
        assert_eq!(hex_to_rgb("#ff5733").unwrap(), Rgb::new(255, 87, 51));
        assert_eq!(hex_to_rgb("ff5733").unwrap(), Rgb::new(255, 87, 51));
        assert_eq!(hex_to_rgb("#FF5733").unwrap(), Rgb::new(255, 87, 51));
    }

    #[test]
    fn test_hex_to_rgb_rejects_malformed_input() {
        for bad in ["", "#", "#fff", "#ff573", "#ff57333", "#ff573g", "##ff5733", "+12345"] {
            assert!(
                hex_to_rgb(bad).is_err(),
                "{:?} should be rejected as malformed",
                bad
            );
        }
    }

    #[test]
    fn test_hex_round_trip_is_case_normalized() {
        assert_eq!(rgb_to_hex(hex_to_rgb("#ABCDEF").unwrap()), "#abcdef");
        assert_eq!(rgb_to_hex(hex_to_rgb("001a2b").unwrap()), "#001a2b");
    }

    #[test]
    fn test_primary_hues() {
        assert_eq!(rgb_to_hsl(Rgb::new(255, 0, 0)), Hsl::new(0, 100, 50));
        assert_eq!(rgb_to_hsl(Rgb::new(0, 255, 0)), Hsl::new(120, 100, 50));
        assert_eq!(rgb_to_hsl(Rgb::new(0, 0, 255)), Hsl::new(240, 100, 50));
    }

    #[test]
    fn test_achromatic_collapses_hue_and_saturation() {
        assert_eq!(rgb_to_hsl(Rgb::new(128, 128, 128)), Hsl::new(0, 0, 50));
        assert_eq!(rgb_to_hsl(Rgb::new(255, 255, 255)), Hsl::new(0, 0, 100));
        assert_eq!(rgb_to_hsl(Rgb::new(0, 0, 0)), Hsl::new(0, 0, 0));
    }

    #[test]
    fn test_hue_just_below_full_turn_wraps_to_zero() {
        // True hue is ~359.76 degrees; rounding must not produce 360
        let hsl = rgb_to_hsl(Rgb::new(255, 0, 1));
        assert_eq!(hsl.h, 0);
    }

    #[test]
    fn test_ff5757_matches_expected_hsl() {
        assert_eq!(hex_to_hsl("#FF5757").unwrap(), Hsl::new(0, 100, 67));
    }

    #[test]
    fn test_near_round_trip_within_one_per_channel() {
        // Step 51 keeps hue and lightness rounding exact, so only saturation
        // rounding contributes error and the tolerance is guaranteed.
        for r in (0..=255u16).step_by(51) {
            for g in (0..=255u16).step_by(51) {
                for b in (0..=255u16).step_by(51) {
                    let rgb = Rgb::new(r as u8, g as u8, b as u8);
                    let back = hsl_to_rgb(rgb_to_hsl(rgb));
                    let diff = |a: u8, b: u8| (a as i16 - b as i16).abs();
                    assert!(
                        diff(rgb.r, back.r) <= 1
                            && diff(rgb.g, back.g) <= 1
                            && diff(rgb.b, back.b) <= 1,
                        "{:?} round-tripped to {:?}",
                        rgb,
                        back
                    );
                }
            }
        }
    }

    #[test]
    fn test_hsl_agrees_with_palette_crate() {
        use palette::{Hsl as RefHsl, IntoColor, Srgb};

        for hex in ["#ff5733", "#3366cc", "#00ff88", "#8800ff", "#123456"] {
            let rgb = hex_to_rgb(hex).unwrap();
            let ours = rgb_to_hsl(rgb);
            let reference: RefHsl = Srgb::new(
                rgb.r as f32 / 255.0,
                rgb.g as f32 / 255.0,
                rgb.b as f32 / 255.0,
            )
            .into_color();

            let ref_h = reference.hue.into_positive_degrees();
            let dh = (ours.h as f32 - ref_h).abs();
            let dh = dh.min(360.0 - dh);
            assert!(dh <= 1.0, "{}: hue {} vs reference {}", hex, ours.h, ref_h);
            assert!(
                (ours.s as f32 - reference.saturation * 100.0).abs() <= 1.0,
                "{}: saturation {} vs reference {}",
                hex,
                ours.s,
                reference.saturation * 100.0
            );
            assert!(
                (ours.l as f32 - reference.lightness * 100.0).abs() <= 1.0,
                "{}: lightness {} vs reference {}",
                hex,
                ours.l,
                reference.lightness * 100.0
            );
        }
    }

    #[test]
    fn test_contrast_text_color() {
        assert_eq!(contrast_text_color("#ffffff").unwrap(), ContrastColor::Black);
        assert_eq!(contrast_text_color("#000000").unwrap(), ContrastColor::White);
        // Luminance 0.538, just over the threshold
        assert_eq!(contrast_text_color("#ff5757").unwrap(), ContrastColor::Black);
        assert_eq!(contrast_text_color("#1a2b3c").unwrap(), ContrastColor::White);
        assert_eq!(ContrastColor::White.hex(), "#ffffff");
        assert!(contrast_text_color("not-a-color").is_err());
    }
}
