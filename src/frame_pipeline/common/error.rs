use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrameError {
    #[error("Invalid frame dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Source buffer too small: expected at least {expected} bytes, got {actual}")]
    SourceTooSmall { expected: usize, actual: usize },

    #[error("Destination buffer too small: expected at least {expected} bytes, got {actual}")]
    DestinationTooSmall { expected: usize, actual: usize },

    #[error("Failed to convert color planes: {0}")]
    ConvertError(String),

    #[error("Failed to extract edges: {0}")]
    DetectError(String),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FrameError>;
