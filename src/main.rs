use anyhow::{Context, Result};
use clap::Parser;
use webpify::cli::Args;
use webpify::{convert_directory, logger};

fn main() -> Result<()> {
    let args = Args::parse();

    logger::set_quiet_mode(args.quiet);
    logger::set_verbose_mode(args.verbose);

    convert_directory(&args.root)
        .with_context(|| format!("Failed to convert images under {}", args.root.display()))?;

    Ok(())
}
