//! Pipeline configuration types

use crate::frame_pipeline::edges::types::EdgeThresholds;

/// Configuration for the frame-to-edge-map transform
#[derive(Debug, Clone)]
pub struct ProcessConfig {
    /// Hysteresis thresholds passed to the edge-extraction stage
    pub thresholds: EdgeThresholds,
    /// Whether to reject non-positive frame dimensions before processing
    pub validate_dimensions: bool,
    /// Whether to check source/destination buffer sizes before processing.
    /// When disabled, correctly sized buffers are a caller obligation.
    pub check_buffer_sizes: bool,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            thresholds: EdgeThresholds::default(),
            validate_dimensions: true,
            check_buffer_sizes: true,
        }
    }
}

impl ProcessConfig {
    pub fn builder() -> ProcessConfigBuilder {
        ProcessConfigBuilder::default()
    }
}

/// Builder for ProcessConfig
#[derive(Default)]
pub struct ProcessConfigBuilder {
    thresholds: Option<EdgeThresholds>,
    validate_dimensions: Option<bool>,
    check_buffer_sizes: Option<bool>,
}

impl ProcessConfigBuilder {
    pub fn thresholds(mut self, thresholds: EdgeThresholds) -> Self {
        self.thresholds = Some(thresholds);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn check_buffer_sizes(mut self, check: bool) -> Self {
        self.check_buffer_sizes = Some(check);
        self
    }

    pub fn build(self) -> ProcessConfig {
        let default = ProcessConfig::default();
        ProcessConfig {
            thresholds: self.thresholds.unwrap_or(default.thresholds),
            validate_dimensions: self
                .validate_dimensions
                .unwrap_or(default.validate_dimensions),
            check_buffer_sizes: self.check_buffer_sizes.unwrap_or(default.check_buffer_sizes),
        }
    }
}
