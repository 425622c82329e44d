//! Mood classification over a color set
//!
//! Derives descriptive tags from aggregate hue/saturation/lightness
//! statistics of a palette, typically the quantizer's output.

use serde::{Deserialize, Serialize};

use crate::convert::hex_to_hsl;
use crate::error::{ColorError, Result};

/// Descriptive label derived from a color set's aggregate statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoodTag {
    Light,
    Dark,
    Vibrant,
    Muted,
    Warm,
    Cool,
    Balanced,
    Tropical,
    Minimal,
    Rich,
}

impl MoodTag {
    /// All tags the classifier can emit, in emission order
    pub const ALL: [MoodTag; 10] = [
        MoodTag::Light,
        MoodTag::Dark,
        MoodTag::Vibrant,
        MoodTag::Muted,
        MoodTag::Warm,
        MoodTag::Cool,
        MoodTag::Balanced,
        MoodTag::Tropical,
        MoodTag::Minimal,
        MoodTag::Rich,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            MoodTag::Light => "Light",
            MoodTag::Dark => "Dark",
            MoodTag::Vibrant => "Vibrant",
            MoodTag::Muted => "Muted",
            MoodTag::Warm => "Warm",
            MoodTag::Cool => "Cool",
            MoodTag::Balanced => "Balanced",
            MoodTag::Tropical => "Tropical",
            MoodTag::Minimal => "Minimal",
            MoodTag::Rich => "Rich",
        }
    }
}

impl std::fmt::Display for MoodTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_warm(hue: u16) -> bool {
    hue <= 60 || hue >= 300
}

fn is_cool(hue: u16) -> bool {
    (180..300).contains(&hue)
}

/// Classify the mood of a color set
///
/// Every rule is evaluated independently over mean lightness, mean
/// saturation and the warm/cool split of the individual hues, so several
/// tags can fire at once. The output order is fixed and duplicate-free.
pub fn classify(colors: &[String]) -> Result<Vec<MoodTag>> {
    if colors.is_empty() {
        return Err(ColorError::InvalidInput {
            reason: "empty color set".into(),
        });
    }

    let hsl = colors
        .iter()
        .map(|color| hex_to_hsl(color))
        .collect::<Result<Vec<_>>>()?;

    let count = hsl.len() as f32;
    let mean_lightness = hsl.iter().map(|c| c.l as f32).sum::<f32>() / count;
    let mean_saturation = hsl.iter().map(|c| c.s as f32).sum::<f32>() / count;

    let has_warm = hsl.iter().any(|c| is_warm(c.h));
    let has_cool = hsl.iter().any(|c| is_cool(c.h));

    let mut moods = Vec::new();
    if mean_lightness > 70.0 {
        moods.push(MoodTag::Light);
    }
    if mean_lightness < 30.0 {
        moods.push(MoodTag::Dark);
    }
    if mean_saturation > 70.0 {
        moods.push(MoodTag::Vibrant);
    }
    if mean_saturation < 30.0 {
        moods.push(MoodTag::Muted);
    }

    match (has_warm, has_cool) {
        (true, false) => moods.push(MoodTag::Warm),
        (false, true) => moods.push(MoodTag::Cool),
        (true, true) => moods.push(MoodTag::Balanced),
        (false, false) => {}
    }

    if mean_saturation > 60.0 && mean_lightness > 60.0 {
        moods.push(MoodTag::Tropical);
    }
    if mean_saturation < 40.0 && mean_lightness > 60.0 {
        moods.push(MoodTag::Minimal);
    }
    if mean_saturation > 50.0 && mean_lightness < 50.0 {
        moods.push(MoodTag::Rich);
    }

    Ok(moods)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(colors: &[&str]) -> Vec<String> {
        colors.iter().map(|c| (*c).to_string()).collect()
    }

    #[test]
    fn test_near_white_set_is_light_and_muted() {
        let moods = classify(&owned(&["#FFFFFF", "#F8F8F8"])).unwrap();
        assert!(moods.contains(&MoodTag::Light));
        assert!(moods.contains(&MoodTag::Muted));
        assert!(!moods.contains(&MoodTag::Dark));
        assert!(!moods.contains(&MoodTag::Vibrant));
    }

    #[test]
    fn test_warm_and_cool_together_read_balanced() {
        let moods = classify(&owned(&["#FF0000", "#00FFFF"])).unwrap();
        assert!(
            moods.contains(&MoodTag::Balanced),
            "red plus cyan should balance, got {:?}",
            moods
        );
        assert!(!moods.contains(&MoodTag::Warm));
        assert!(!moods.contains(&MoodTag::Cool));
    }

    #[test]
    fn test_warm_only_palette() {
        let moods = classify(&owned(&["#ff0000", "#ffaa00", "#cc4411"])).unwrap();
        assert!(moods.contains(&MoodTag::Warm));
        assert!(!moods.contains(&MoodTag::Cool));
        assert!(!moods.contains(&MoodTag::Balanced));
    }

    #[test]
    fn test_cool_only_palette() {
        let moods = classify(&owned(&["#0000ff", "#00ccff"])).unwrap();
        assert!(moods.contains(&MoodTag::Cool));
        assert!(!moods.contains(&MoodTag::Warm));
    }

    #[test]
    fn test_dark_saturated_palette_is_rich() {
        let moods = classify(&owned(&["#330000", "#003300"])).unwrap();
        assert!(moods.contains(&MoodTag::Dark));
        assert!(moods.contains(&MoodTag::Rich));
        assert!(!moods.contains(&MoodTag::Light));
    }

    #[test]
    fn test_bright_saturated_palette_is_tropical() {
        // hsl(30, 100%, 65%) and friends: saturated and bright
        let moods = classify(&owned(&["#ffa64d", "#ff794d", "#ffd24d"])).unwrap();
        assert!(
            moods.contains(&MoodTag::Tropical),
            "expected Tropical, got {:?}",
            moods
        );
    }

    #[test]
    fn test_output_order_is_stable() {
        let moods = classify(&owned(&["#FFFFFF", "#F8F8F8"])).unwrap();
        assert_eq!(
            moods,
            vec![MoodTag::Light, MoodTag::Muted, MoodTag::Warm, MoodTag::Minimal]
        );
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(matches!(
            classify(&[]),
            Err(ColorError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_malformed_color_propagates() {
        let result = classify(&owned(&["#ff0000", "nope"]));
        assert!(matches!(result, Err(ColorError::InvalidFormat { .. })));
    }

    #[test]
    fn test_tag_display_matches_vocabulary() {
        assert_eq!(MoodTag::Tropical.to_string(), "Tropical");
        assert_eq!(MoodTag::ALL.len(), 10);
    }
}
