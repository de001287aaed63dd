// photoprep/src/processors/transform.rs
use crate::core::TargetDims;
use image::{imageops, imageops::FilterType, DynamicImage};

/// The one geometric operation a batch run applies to every image.
#[derive(Debug, Clone, Copy)]
pub enum Transform {
    /// Crop to a centered square with side `min(width, height)`.
    CenterCrop,
    /// Scale to fit inside the target box, then pad to exactly that box.
    Contain(TargetDims),
}

impl Transform {
    pub fn apply(&self, image: &DynamicImage) -> DynamicImage {
        match *self {
            Transform::CenterCrop => center_crop(image),
            Transform::Contain(dims) => contain_resize(image, dims),
        }
    }

    /// Verb used in the progress output ("Crop the image: ...").
    pub fn verb(&self) -> &'static str {
        match self {
            Transform::CenterCrop => "Crop",
            Transform::Contain(_) => "Resize",
        }
    }
}

/// Crop the largest centered square out of the image. No resampling.
///
/// When the trimmed margin is odd, the leading edge (left or top) keeps
/// the smaller half: the crop origin is `floor((dim - side) / 2)`.
/// A square input passes through with unchanged dimensions and content.
pub fn center_crop(image: &DynamicImage) -> DynamicImage {
    let (width, height) = (image.width(), image.height());
    let side = width.min(height);
    let x = (width - side) / 2;
    let y = (height - side) / 2;

    log::debug!(
        "Cropping {}x{} to {}x{} at ({}, {})",
        width,
        height,
        side,
        side,
        x,
        y
    );

    image.crop_imm(x, y, side, side)
}

/// Scale the image to fit entirely inside the target box, preserving
/// aspect ratio, then center it on a zero-filled canvas of exactly the
/// target dimensions.
///
/// The canvas keeps the source color type, so the fill is transparent
/// for sources with an alpha channel and black otherwise; formats
/// without alpha support stay encodable.
pub fn contain_resize(image: &DynamicImage, dims: TargetDims) -> DynamicImage {
    let scaled = image.resize(dims.width(), dims.height(), FilterType::Lanczos3);

    if scaled.width() == dims.width() && scaled.height() == dims.height() {
        log::debug!("Aspect ratio matches target box, no padding needed");
        return scaled;
    }

    log::debug!(
        "Padding {}x{} content into {}x{} box",
        scaled.width(),
        scaled.height(),
        dims.width(),
        dims.height()
    );

    let mut canvas = DynamicImage::new(dims.width(), dims.height(), image.color());
    let x = (dims.width() - scaled.width()) / 2;
    let y = (dims.height() - scaled.height()) / 2;
    imageops::overlay(&mut canvas, &scaled, i64::from(x), i64::from(y));

    canvas
}
