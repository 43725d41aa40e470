//! Edge extraction module
//!
//! This module provides gradient-based edge detection with double-threshold
//! hysteresis on a grayscale frame.

mod canny;
mod detector;
pub mod types;

pub use canny::CannyDetector;
pub use detector::EdgeDetector;
pub use types::{
    EdgeMapData, EdgeThresholds, DEFAULT_HIGH_THRESHOLD, DEFAULT_LOW_THRESHOLD, EDGE, NON_EDGE,
};
