//! Frame processing pipeline module
//!
//! This module provides a structured approach to camera frame transforms,
//! with separate modules for color conversion, edge extraction, and
//! pipeline orchestration.

pub mod common;
pub mod convert;
pub mod edges;
pub mod frame;
pub mod pipelines;
pub mod timing;


pub use common::{
    FrameError,
    Result,
};

pub use frame::{
    FrameDescriptor,
};

pub use convert::{
    Bt601Converter,
    ColorConverter,
    GrayImageData,
    RgbaImageData,
};

pub use edges::{
    CannyDetector,
    EdgeDetector,
    EdgeMapData,
    EdgeThresholds,
    DEFAULT_HIGH_THRESHOLD,
    DEFAULT_LOW_THRESHOLD,
};

pub use pipelines::{
    FrameEdgePipeline,
    ProcessConfig,
    ProcessConfigBuilder,
};

pub use timing::{PipelineTimings, StepTiming, Timer};
