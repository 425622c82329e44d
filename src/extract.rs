//! Raster-buffer boundary for palette extraction
//!
//! The engine never decodes images; callers hand in a flat buffer of
//! RGB(A) bytes plus its dimensions, and get hex colors and mood tags back.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::convert::{rgb_to_hex, Rgb};
use crate::error::{ColorError, Result};
use crate::mood::{classify, MoodTag};
use crate::quantize::{quantize, QuantizeConfig, StopSignal};

/// Channel layout of a raster buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelFormat {
    Rgb,
    Rgba,
}

impl PixelFormat {
    /// Bytes per pixel
    pub const fn channels(self) -> usize {
        match self {
            PixelFormat::Rgb => 3,
            PixelFormat::Rgba => 4,
        }
    }
}

/// A quantized palette with its derived mood tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedPalette {
    pub colors: Vec<String>,
    pub moods: Vec<MoodTag>,
}

/// Collect RGB samples from a flat raster buffer
///
/// The buffer must hold exactly `width * height` pixels in `format` layout;
/// the alpha channel, when present, is ignored. `stride` keeps every nth
/// pixel (1 keeps all of them).
pub fn samples_from_raster(
    buf: &[u8],
    width: u32,
    height: u32,
    format: PixelFormat,
    stride: usize,
) -> Result<Vec<Rgb>> {
    let expected = width as usize * height as usize * format.channels();
    if buf.len() != expected {
        return Err(ColorError::InvalidInput {
            reason: format!(
                "raster buffer is {} bytes, expected {} for {}x{} {:?}",
                buf.len(),
                expected,
                width,
                height,
                format
            ),
        });
    }
    if stride == 0 {
        return Err(ColorError::InvalidInput {
            reason: "sample stride must be at least 1".into(),
        });
    }

    Ok(buf
        .chunks_exact(format.channels())
        .step_by(stride)
        .map(|px| Rgb::new(px[0], px[1], px[2]))
        .collect())
}

/// Extract `config.k` representative colors from a raster buffer
///
/// Returns lowercase `#rrggbb` strings in centroid-index order.
pub fn extract_palette<R: Rng>(
    buf: &[u8],
    width: u32,
    height: u32,
    format: PixelFormat,
    config: &QuantizeConfig,
    stop: &StopSignal,
    rng: &mut R,
) -> Result<Vec<String>> {
    let samples = samples_from_raster(buf, width, height, format, config.sample_stride)?;
    let centroids = quantize(&samples, config, stop, rng)?;
    Ok(centroids.into_iter().map(rgb_to_hex).collect())
}

/// Extract a palette and classify its mood in one pass
pub fn analyze_raster<R: Rng>(
    buf: &[u8],
    width: u32,
    height: u32,
    format: PixelFormat,
    config: &QuantizeConfig,
    stop: &StopSignal,
    rng: &mut R,
) -> Result<ExtractedPalette> {
    let colors = extract_palette(buf, width, height, format, config, stop, rng)?;
    let moods = classify(&colors)?;
    Ok(ExtractedPalette { colors, moods })
}
