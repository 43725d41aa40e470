//! Color conversion module
//!
//! This module provides the subsampled-YUV to RGBA and RGBA to grayscale
//! conversion stages of the frame pipeline.

mod bt601;
mod converter;
pub mod types;

pub use bt601::Bt601Converter;
pub use converter::ColorConverter;
pub use types::{GrayImageData, RgbaImageData};
