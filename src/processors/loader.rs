// photoprep/src/processors/loader.rs
use crate::core::{PrepError, Result};
use image::{DynamicImage, ImageFormat, ImageReader};
use std::path::Path;

/// A decoded image together with the container format it was decoded
/// from, so the writer can re-encode without conversion.
pub struct LoadedImage {
    pub image: DynamicImage,
    pub format: ImageFormat,
}

#[derive(Clone, Default)]
pub struct Loader;

impl Loader {
    pub fn new() -> Self {
        Self
    }

    /// Open and decode one file. The format is guessed from the file
    /// content, falling back to the extension.
    ///
    /// Any failure here (open, format identification, decode) is an
    /// ordinary `Err`; the batch loop decides whether it is recoverable.
    pub fn load(&self, path: &Path) -> Result<LoadedImage> {
        log::debug!("Loading image from: {}", path.display());

        let reader = ImageReader::open(path)?.with_guessed_format()?;

        let format = reader.format().ok_or_else(|| {
            PrepError::UnsupportedFormat(format!(
                "Could not determine image format for: {}",
                path.display()
            ))
        })?;

        let image = reader.decode()?;

        log::debug!(
            "Loaded image: {}x{} pixels, format: {:?}",
            image.width(),
            image.height(),
            format
        );

        Ok(LoadedImage { image, format })
    }
}
