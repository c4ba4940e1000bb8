use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "webpify",
    about = "Convert every PNG and JPEG in a directory tree to WebP",
    long_about = "webpify walks a directory tree and re-encodes every .png, .jpg and .jpeg file \
                  (matched case-insensitively) into a lossy WebP file at quality 85. \
                  Each output is written next to its source with the same base name; \
                  existing .webp files with that name are overwritten and sources are left untouched.",
    version,
    after_help = "EXAMPLES:\n  \
    webpify ./public/images\n  \
    webpify ./assets --quiet\n  \
    webpify ./assets -v"
)]
pub struct Args {
    #[arg(
        help = "Root directory to convert",
        long_help = "Root directory to walk. Every subdirectory is visited, hidden ones included."
    )]
    pub root: PathBuf,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Only print failed conversions"
    )]
    pub quiet: bool,

    #[arg(
        short = 'v',
        long,
        help = "Print file sizes and a closing summary",
        long_help = "Print the original and converted size of each file, \
                     followed by totals for the whole run."
    )]
    pub verbose: bool,
}
