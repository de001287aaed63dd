// photoprep/src/bin/crop.rs
use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use photoprep::{BatchRunner, Transform};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "photoprep-crop",
    version,
    about = "Center-crop a folder of training photos to squares"
)]
struct Args {
    /// Path to the folder containing input images
    #[arg(short, long)]
    input: PathBuf,

    /// Path to the folder that will contain cropped images
    #[arg(short, long)]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logger
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let runner = BatchRunner::new(Transform::CenterCrop);
    let stats = runner.run(&args.input, &args.output)?;

    log::debug!(
        "Cropped {} of {} entries into {}",
        stats.processed,
        stats.total,
        args.output.display()
    );

    Ok(())
}
