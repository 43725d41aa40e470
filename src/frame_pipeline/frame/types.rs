//! Frame descriptor types

/// Dimensions of one captured frame, immutable for the duration of a call.
///
/// All buffer sizing for a pipeline invocation derives from this descriptor:
/// the NV21 source occupies `width * (height + height / 2)` bytes and the
/// edge-map destination occupies `width * height` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameDescriptor {
    /// Width of the frame in pixels
    pub width: usize,
    /// Height of the frame in pixels
    pub height: usize,
}

impl FrameDescriptor {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Number of pixels in the frame, which is also the luma-plane and
    /// edge-map size in bytes.
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Total NV21 frame size in bytes: a full-resolution luma plane followed
    /// by an interleaved VU chroma plane at half vertical resolution.
    pub fn nv21_len(&self) -> usize {
        self.width * (self.height + self.height / 2)
    }
}
