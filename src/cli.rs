// Command-line interface definitions

use clap::Parser;
use std::path::PathBuf;

use crate::parallel::ProgressMode;

#[derive(Parser, Debug)]
#[command(name = "pairdist")]
#[command(about = "Compute pairwise edit distances between all records of a tabular dataset")]
#[command(
    long_about = "Compute pairwise edit distances between all records of a tabular dataset.\n\nEach input line is a tab-delimited record: an identifier followed by one or\nmore fields, each field split into tokens on single spaces. For every\nunordered pair of records one output line is written with both identifiers\nand the token-level Levenshtein distance of each field.\n\nGzip- and zstd-compressed input files are detected and decompressed\ntransparently."
)]
#[command(version)]
pub struct Cli {
    /// Input file (tab-delimited records; may be gzip or zstd compressed)
    pub input: PathBuf,

    /// Output file (one line per unordered record pair)
    pub output: PathBuf,

    /// Number of worker threads (defaults to the number of logical CPUs)
    #[arg(short = 'j', long = "threads")]
    pub threads: Option<usize>,

    /// When to draw the progress bar on stderr
    #[arg(long, value_enum, default_value = "auto")]
    pub progress: ProgressMode,
}
