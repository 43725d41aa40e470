use edgeviewer_rs::frame_pipeline::{FrameDescriptor, FrameEdgePipeline, ProcessConfig};
use edgeviewer_rs::logger;

use anyhow::{bail, Context};
use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting edgeviewer...");

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 5 {
        bail!("usage: {} <input.nv21> <width> <height> <output.pgm>", args[0]);
    }
    let width: usize = args[2].parse().context("width must be a positive integer")?;
    let height: usize = args[3].parse().context("height must be a positive integer")?;

    let config = ProcessConfig::builder().build();
    let pipeline = FrameEdgePipeline::new(config);

    info!("Frame edge pipeline initialized");
    info!(
        "Thresholds: low={} high={}",
        pipeline.config().thresholds.low,
        pipeline.config().thresholds.high
    );

    let descriptor = FrameDescriptor::new(width, height);
    match pipeline.process_file(&args[1], descriptor, &args[4]) {
        Ok(_) => info!("Edge map written to {}", args[4]),
        Err(e) => error!("Frame processing failed: {}", e),
    }

    Ok(())
}
