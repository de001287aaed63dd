mod core;
mod processors;

pub use crate::core::{BatchStats, PrepError, Result, TargetDims};
pub use crate::processors::{BatchRunner, LoadedImage, Loader, Transform, Writer};
pub use crate::processors::{center_crop, contain_resize};

pub mod prelude {
    pub use crate::{BatchRunner, Loader, TargetDims, Transform, Writer};
}

// Re-export commonly used types
pub use image::DynamicImage;
