//! Camera frame edge extraction library.
//!
//! Converts raw NV21 camera frames into binary edge maps through a
//! color-conversion and Canny edge-detection pipeline.

pub mod frame_pipeline;
pub mod logger;
