use crate::frame_pipeline::common::error::Result;
use crate::frame_pipeline::convert::types::{GrayImageData, RgbaImageData};
use crate::frame_pipeline::frame::types::FrameDescriptor;

pub trait ColorConverter {
    fn nv21_to_rgba(&self, source: &[u8], descriptor: FrameDescriptor) -> Result<RgbaImageData>;
    fn rgba_to_gray(&self, image: &RgbaImageData) -> Result<GrayImageData>;
}
