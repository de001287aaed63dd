// photoprep/src/bin/resize.rs
use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use photoprep::{BatchRunner, TargetDims, Transform};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "photoprep-resize",
    version,
    about = "Resize a folder of training photos to exact dimensions, padding to preserve content"
)]
struct Args {
    /// Path to the folder containing input images
    #[arg(short, long)]
    input: PathBuf,

    /// Path to the folder that will contain resized images
    #[arg(short, long)]
    output: PathBuf,

    /// Target width in pixels
    #[arg(short = 'w', long, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Target height in pixels
    #[arg(short = 'k', long, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logger
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let dims = TargetDims::new(args.width, args.height)?;

    let runner = BatchRunner::new(Transform::Contain(dims));
    let stats = runner.run(&args.input, &args.output)?;

    log::debug!(
        "Resized {} of {} entries into {}",
        stats.processed,
        stats.total,
        args.output.display()
    );

    Ok(())
}
