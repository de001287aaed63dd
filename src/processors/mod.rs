// photoprep/src/processors/mod.rs
mod batch;
mod loader;
mod transform;
mod writer;

pub use batch::BatchRunner;
pub use loader::{LoadedImage, Loader};
pub use transform::{center_crop, contain_resize, Transform};
pub use writer::Writer;

pub mod prelude {
    pub use super::{BatchRunner, Loader, Transform, Writer};
}
