// photoprep/src/processors/writer.rs
use crate::core::Result;
use image::{DynamicImage, ImageFormat};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

pub struct Writer {
    output_dir: PathBuf,
}

impl Writer {
    pub fn new(output_dir: &Path) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
        }
    }

    /// Save under the original entry name, re-encoded in the format the
    /// input was decoded from. The format tag wins over the output
    /// extension. Errors propagate; a missing output directory aborts
    /// the run on the first write attempt.
    pub fn save(&self, image: &DynamicImage, name: &str, format: ImageFormat) -> Result<PathBuf> {
        let path = self.output_dir.join(name);

        log::debug!("Saving image to {} with format {:?}", path.display(), format);

        let file = File::create(&path)?;
        let mut writer = BufWriter::new(file);
        image.write_to(&mut writer, format)?;

        Ok(path)
    }
}
