//! Frame description module
//!
//! Dimension bookkeeping for one captured camera frame.

pub mod types;

pub use types::FrameDescriptor;
