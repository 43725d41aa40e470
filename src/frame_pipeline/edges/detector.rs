use crate::frame_pipeline::common::error::Result;
use crate::frame_pipeline::convert::types::GrayImageData;
use crate::frame_pipeline::edges::types::{EdgeMapData, EdgeThresholds};

pub trait EdgeDetector {
    fn detect(&self, image: &GrayImageData, thresholds: EdgeThresholds) -> Result<EdgeMapData>;
}
