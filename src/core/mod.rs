// photoprep/src/core/mod.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrepError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Directory error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, PrepError>;

/// Target box for the contain-resize transform. Construction rejects
/// zero in either dimension, so a degenerate box never reaches the
/// resize primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetDims {
    width: u32,
    height: u32,
}

impl TargetDims {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(PrepError::InvalidParameter(format!(
                "Target dimensions must be positive, got {}x{}",
                width, height
            )));
        }

        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Outcome of one batch run. Skipped entries carry the entry name and
/// the reason; they do not affect the process exit code.
#[derive(Debug, Default)]
pub struct BatchStats {
    pub total: usize,
    pub processed: usize,
    pub skipped: Vec<(String, String)>,
}
