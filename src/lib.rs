//! # chromakit
//!
//! A pure color-science engine: exact hex / RGB / HSL conversion, color
//! harmony palettes, unsupervised k-means color quantization over raster
//! samples, and a derived mood classification.
//!
//! The crate performs no I/O. Callers hand it concrete inputs (a hex
//! string, a flat raster byte buffer) and consume concrete outputs (hex
//! strings, tag lists). Every randomized operation takes a caller-supplied
//! [`rand::Rng`], so seeded runs are fully reproducible.
//!
//! ## Example
//!
//! ```rust
//! use chromakit::{analyze_raster, PixelFormat, QuantizeConfig, StopSignal};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! // A 2x2 all-red RGB raster
//! let buf = [255u8, 0, 0, 255, 0, 0, 255, 0, 0, 255, 0, 0];
//! let mut rng = StdRng::seed_from_u64(7);
//! let config = QuantizeConfig { k: 2, ..QuantizeConfig::default() };
//! let palette = analyze_raster(
//!     &buf,
//!     2,
//!     2,
//!     PixelFormat::Rgb,
//!     &config,
//!     &StopSignal::never(),
//!     &mut rng,
//! )?;
//! assert_eq!(palette.colors.len(), 2);
//! # Ok::<(), chromakit::ColorError>(())
//! ```

pub mod convert;
pub mod error;
pub mod extract;
pub mod harmony;
pub mod mood;
pub mod palette;
pub mod quantize;

pub use convert::{
    contrast_text_color, hex_to_hsl, hex_to_rgb, hsl_to_hex, hsl_to_rgb, rgb_to_hex, rgb_to_hsl,
    ContrastColor, Hsl, Rgb,
};
pub use error::{ColorError, Result};
pub use extract::{
    analyze_raster, extract_palette, samples_from_raster, ExtractedPalette, PixelFormat,
};
pub use harmony::{harmony_palette, HarmonyKind};
pub use mood::{classify, MoodTag};
pub use palette::{css_variables, random_palette, Color};
pub use quantize::{quantize, CancelToken, QuantizeConfig, StopSignal};
