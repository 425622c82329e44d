//! Color harmony palettes derived from a seed color
//!
//! Rotating schemes hold saturation and lightness fixed and step the hue;
//! the monochromatic scheme holds hue and saturation and steps lightness.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::convert::{hex_to_rgb, hsl_to_hex, rgb_to_hex, rgb_to_hsl, Hsl};
use crate::error::{ColorError, Result};

/// A color harmony scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HarmonyKind {
    /// Neighbors 30 degrees either side of the seed
    Analogous,
    /// The seed and its 180-degree opposite
    Complementary,
    /// Three hues 120 degrees apart
    Triadic,
    /// Four hues 90 degrees apart
    Tetradic,
    /// One hue across five lightness steps
    Monochromatic,
}

impl HarmonyKind {
    /// All harmony kinds, in display order
    pub const ALL: [HarmonyKind; 5] = [
        HarmonyKind::Analogous,
        HarmonyKind::Complementary,
        HarmonyKind::Triadic,
        HarmonyKind::Tetradic,
        HarmonyKind::Monochromatic,
    ];

    /// Return human-readable display name for this harmony kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            HarmonyKind::Analogous => "Analogous",
            HarmonyKind::Complementary => "Complementary",
            HarmonyKind::Triadic => "Triadic",
            HarmonyKind::Tetradic => "Tetradic",
            HarmonyKind::Monochromatic => "Monochromatic",
        }
    }
}

impl FromStr for HarmonyKind {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "analogous" => Ok(HarmonyKind::Analogous),
            "complementary" => Ok(HarmonyKind::Complementary),
            "triadic" => Ok(HarmonyKind::Triadic),
            "tetradic" => Ok(HarmonyKind::Tetradic),
            "monochromatic" => Ok(HarmonyKind::Monochromatic),
            _ => Err(ColorError::UnsupportedHarmonyKind {
                kind: s.to_string(),
            }),
        }
    }
}

/// Generate the related palette for a seed color
///
/// The seed itself appears in the output at the position its scheme calls
/// for, re-encoded in canonical lowercase form. Hue arithmetic wraps modulo
/// 360; monochromatic lightness steps clamp to [0,100] instead.
pub fn harmony_palette(seed: &str, kind: HarmonyKind) -> Result<Vec<String>> {
    let rgb = hex_to_rgb(seed)?;
    let seed_hex = rgb_to_hex(rgb);
    let hsl = rgb_to_hsl(rgb);

    let rotated = |offset: i32| {
        let h = (hsl.h as i32 + offset).rem_euclid(360) as u16;
        hsl_to_hex(Hsl::new(h, hsl.s, hsl.l))
    };
    let shaded = |delta: i32| {
        let l = (hsl.l as i32 + delta).clamp(0, 100) as u8;
        hsl_to_hex(Hsl::new(hsl.h, hsl.s, l))
    };

    Ok(match kind {
        HarmonyKind::Analogous => vec![rotated(-30), seed_hex, rotated(30)],
        HarmonyKind::Complementary => vec![seed_hex, rotated(180)],
        HarmonyKind::Triadic => vec![seed_hex, rotated(120), rotated(240)],
        HarmonyKind::Tetradic => {
            vec![seed_hex, rotated(90), rotated(180), rotated(270)]
        }
        HarmonyKind::Monochromatic => vec![
            shaded(-30),
            shaded(-15),
            seed_hex,
            shaded(15),
            shaded(30),
        ],
    })
}
