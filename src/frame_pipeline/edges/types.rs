//! Edge detection configuration and output types

/// Gradient magnitudes below this are never edges.
pub const DEFAULT_LOW_THRESHOLD: f32 = 80.0;

/// Gradient magnitudes above this are always edges.
pub const DEFAULT_HIGH_THRESHOLD: f32 = 150.0;

/// Byte value written for an edge pixel.
pub const EDGE: u8 = 255;

/// Byte value written for a non-edge pixel.
pub const NON_EDGE: u8 = 0;

/// Double-threshold configuration for hysteresis edge classification.
///
/// Pixels above `high` are strong edges, pixels between `low` and `high`
/// are candidates promoted only through 8-connectivity to a strong edge,
/// pixels below `low` are suppressed.
#[derive(Debug, Clone, Copy)]
pub struct EdgeThresholds {
    /// Lower hysteresis threshold
    pub low: f32,
    /// Upper hysteresis threshold
    pub high: f32,
}

impl Default for EdgeThresholds {
    fn default() -> Self {
        Self {
            low: DEFAULT_LOW_THRESHOLD,
            high: DEFAULT_HIGH_THRESHOLD,
        }
    }
}

impl EdgeThresholds {
    pub fn new(low: f32, high: f32) -> Self {
        Self { low, high }
    }
}

/// Binary edge map, one byte per pixel, each either [`EDGE`] or [`NON_EDGE`]
#[derive(Debug, Clone)]
pub struct EdgeMapData {
    /// Width of the map in pixels
    pub width: usize,
    /// Height of the map in pixels
    pub height: usize,
    /// Edge classification data, one byte per pixel
    pub data: Vec<u8>,
}
