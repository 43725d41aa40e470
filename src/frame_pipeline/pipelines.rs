//! Pipeline orchestration module
//!
//! This module contains orchestration logic for the frame-to-edge-map
//! transform.

mod frame_to_edges;
pub mod types;

pub use frame_to_edges::FrameEdgePipeline;
pub use types::{ProcessConfig, ProcessConfigBuilder};
