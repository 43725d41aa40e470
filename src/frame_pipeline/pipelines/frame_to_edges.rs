use std::io::Write;
use std::path::Path;
use tracing::{info, instrument};

use crate::frame_pipeline::{
    common::error::{FrameError, Result},
    convert::{Bt601Converter, ColorConverter},
    edges::{CannyDetector, EdgeDetector},
    frame::FrameDescriptor,
    pipelines::types::ProcessConfig,
    timing::{PipelineTimings, Timer},
};

/// Orchestrates the frame transform: NV21 source buffer in, binary edge map
/// written into a caller-supplied destination buffer.
///
/// The pipeline holds no per-frame state; a single instance may be shared
/// across threads as long as each call gets its own source and destination
/// buffers.
pub struct FrameEdgePipeline<C: ColorConverter, D: EdgeDetector> {
    converter: C,
    detector: D,
    config: ProcessConfig,
}

impl FrameEdgePipeline<Bt601Converter, CannyDetector> {
    pub fn new(config: ProcessConfig) -> Self {
        Self {
            converter: Bt601Converter,
            detector: CannyDetector,
            config,
        }
    }
}

impl<C: ColorConverter, D: EdgeDetector> FrameEdgePipeline<C, D> {
    pub fn with_custom(converter: C, detector: D, config: ProcessConfig) -> Self {
        Self {
            converter,
            detector,
            config,
        }
    }

    fn validate(
        &self,
        descriptor: FrameDescriptor,
        source_len: usize,
        destination_len: usize,
    ) -> Result<()> {
        if self.config.validate_dimensions
            && (descriptor.width == 0 || descriptor.height == 0)
        {
            return Err(FrameError::InvalidDimensions(
                descriptor.width,
                descriptor.height,
            ));
        }

        if self.config.check_buffer_sizes {
            let source_expected = descriptor.nv21_len();
            if source_len < source_expected {
                return Err(FrameError::SourceTooSmall {
                    expected: source_expected,
                    actual: source_len,
                });
            }
            let destination_expected = descriptor.pixel_count();
            if destination_len < destination_expected {
                return Err(FrameError::DestinationTooSmall {
                    expected: destination_expected,
                    actual: destination_len,
                });
            }
        }

        Ok(())
    }

    /// Runs the full transform for one frame.
    ///
    /// On success exactly `width * height` bytes of `destination` hold the
    /// binary edge map. On any error the destination is left untouched.
    #[instrument(skip(self, source, destination), fields(width = descriptor.width, height = descriptor.height))]
    pub fn process(
        &self,
        source: &[u8],
        descriptor: FrameDescriptor,
        destination: &mut [u8],
    ) -> Result<()> {
        self.validate(descriptor, source.len(), destination.len())?;

        let rgba = {
            let _span = tracing::info_span!("nv21_to_rgba").entered();
            self.converter.nv21_to_rgba(source, descriptor)?
        };

        let gray = {
            let _span = tracing::info_span!("rgba_to_gray").entered();
            self.converter.rgba_to_gray(&rgba)?
        };

        let edges = {
            let _span = tracing::info_span!("detect_edges").entered();
            self.detector.detect(&gray, self.config.thresholds)?
        };

        {
            let _span = tracing::info_span!("write_output").entered();
            let pixel_count = descriptor.pixel_count();
            destination[..pixel_count].copy_from_slice(&edges.data[..pixel_count]);
        }

        info!(
            width = descriptor.width,
            height = descriptor.height,
            "Frame processed"
        );
        Ok(())
    }

    /// Same as [`process`](Self::process) but records per-stage durations.
    pub fn process_with_timings(
        &self,
        source: &[u8],
        descriptor: FrameDescriptor,
        destination: &mut [u8],
    ) -> Result<PipelineTimings> {
        let mut timings = PipelineTimings::new();

        let timer = Timer::start("validate");
        self.validate(descriptor, source.len(), destination.len())?;
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        let timer = Timer::start("nv21_to_rgba");
        let rgba = self.converter.nv21_to_rgba(source, descriptor)?;
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        let timer = Timer::start("rgba_to_gray");
        let gray = self.converter.rgba_to_gray(&rgba)?;
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        let timer = Timer::start("detect_edges");
        let edges = self.detector.detect(&gray, self.config.thresholds)?;
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        let timer = Timer::start("write_output");
        let pixel_count = descriptor.pixel_count();
        destination[..pixel_count].copy_from_slice(&edges.data[..pixel_count]);
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        info!(
            width = descriptor.width,
            height = descriptor.height,
            total_ms = timings.total_duration().as_secs_f64() * 1000.0,
            "Frame processed"
        );
        Ok(timings)
    }

    /// Reads a raw NV21 dump from disk, processes it, and writes the edge
    /// map as a binary PGM (P5) image.
    #[instrument(skip(self, input_path, output_path))]
    pub fn process_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        descriptor: FrameDescriptor,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Processing frame file"
        );

        let source = std::fs::read(input_path).map_err(|e| {
            FrameError::InputReadError(format!("{}: {}", input_path.display(), e))
        })?;

        let mut destination = vec![0u8; descriptor.pixel_count()];
        self.process(&source, descriptor, &mut destination)?;

        let mut output_file = std::fs::File::create(output_path).map_err(|e| {
            FrameError::OutputWriteError(format!("{}: {}", output_path.display(), e))
        })?;
        write!(
            output_file,
            "P5\n{} {}\n255\n",
            descriptor.width, descriptor.height
        )
        .map_err(|e| {
            FrameError::OutputWriteError(format!("{}: {}", output_path.display(), e))
        })?;
        output_file.write_all(&destination).map_err(|e| {
            FrameError::OutputWriteError(format!("{}: {}", output_path.display(), e))
        })?;

        Ok(())
    }

    pub fn config(&self) -> &ProcessConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ProcessConfig) {
        self.config = config;
    }
}
