//! Palette entries and export surfaces

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::convert::{rgb_to_hex, Rgb};

/// A palette entry: a hex color plus an optional display name
///
/// The name is decorative metadata and never feeds computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub hex: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Color {
    pub fn new(hex: impl Into<String>) -> Self {
        Self {
            hex: hex.into(),
            name: None,
        }
    }

    pub fn named(hex: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            hex: hex.into(),
            name: Some(name.into()),
        }
    }
}

/// Render a color list as a CSS custom-property block
///
/// One `--color-N` variable per color, 1-based, in input order, wrapped in
/// a `:root` selector.
pub fn css_variables(colors: &[Color]) -> String {
    let vars: Vec<String> = colors
        .iter()
        .enumerate()
        .map(|(index, color)| format!("  --color-{}: {};", index + 1, color.hex))
        .collect();
    format!(":root {{\n{}\n}}", vars.join("\n"))
}

/// Generate `count` uniformly random colors
pub fn random_palette<R: Rng>(count: usize, rng: &mut R) -> Vec<Color> {
    (0..count)
        .map(|_| Color::new(rgb_to_hex(Rgb::new(rng.gen(), rng.gen(), rng.gen()))))
        .collect()
}
