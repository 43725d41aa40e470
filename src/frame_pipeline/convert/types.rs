//! Intermediate image types produced by color conversion

/// Full-color frame after NV21 expansion
#[derive(Debug, Clone)]
pub struct RgbaImageData {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// RGBA pixel data interleaved [R, G, B, A, R, G, B, A, ...]
    pub data: Vec<u8>,
}

/// Single-channel intensity frame derived from an RGBA frame
#[derive(Debug, Clone)]
pub struct GrayImageData {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Intensity data, one byte per pixel
    pub data: Vec<u8>,
}
