// photoprep/src/processors/batch.rs
use crate::core::{BatchStats, Result};
use crate::processors::{Loader, Transform, Writer};
use std::path::Path;
use walkdir::WalkDir;

pub struct BatchRunner {
    transform: Transform,
    loader: Loader,
}

impl BatchRunner {
    pub fn new(transform: Transform) -> Self {
        Self {
            transform,
            loader: Loader::new(),
        }
    }

    /// Process every entry of `input_dir` into `output_dir`, strictly
    /// sequentially, in enumeration order.
    ///
    /// An entry that cannot be opened or decoded is reported and
    /// skipped; the batch carries on. Failures while transforming or
    /// writing are fatal and abort the run.
    pub fn run(&self, input_dir: &Path, output_dir: &Path) -> Result<BatchStats> {
        let names = self.collect_entry_names(input_dir)?;

        println!("{} {} images...", self.transform.verb(), names.len());

        let writer = Writer::new(output_dir);
        let mut stats = BatchStats {
            total: names.len(),
            ..Default::default()
        };

        for name in &names {
            println!("{} the image: {}", self.transform.verb(), name);

            let input_path = input_dir.join(name);
            let loaded = match self.loader.load(&input_path) {
                Ok(loaded) => loaded,
                Err(e) => {
                    println!("The file {} cannot be processed.", name);
                    log::debug!("Skipping {}: {}", name, e);
                    stats.skipped.push((name.clone(), e.to_string()));
                    continue;
                }
            };

            let result = self.transform.apply(&loaded.image);
            writer.save(&result, name, loaded.format)?;
            stats.processed += 1;
        }

        log::info!(
            "Batch complete: {} processed, {} skipped",
            stats.processed,
            stats.skipped.len()
        );

        Ok(stats)
    }

    /// Immediate entries of the input directory: no recursion, no
    /// filtering by type or extension, OS enumeration order. A missing
    /// or unlistable directory is a fatal error before any item is
    /// processed.
    fn collect_entry_names(&self, input_dir: &Path) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in WalkDir::new(input_dir).min_depth(1).max_depth(1) {
            let entry = entry?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }

        Ok(names)
    }
}
