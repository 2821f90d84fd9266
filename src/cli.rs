use clap::Parser;
use std::path::PathBuf;

use zero_bom::prelude::{BomKind, Severity};

/// Assemble CycloneDX 1.6 CBOM and ML-BOM documents from scanner findings
#[derive(Parser, Debug)]
#[command(name = "zero-bom")]
#[command(version)]
#[command(
    about = "Assemble CycloneDX 1.6 CBOM and ML-BOM documents from scanner findings",
    long_about = None
)]
pub struct Args {
    /// BOM to assemble: cbom or mlbom
    #[arg(value_name = "KIND")]
    pub kind: BomKind,

    /// Scanner result file (JSON) to read findings from
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Directory the BOM is written into (defaults to current directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Output file name (defaults to cbom.cdx.json or mlbom.cdx.json)
    #[arg(short, long, value_name = "NAME")]
    pub filename: Option<String>,

    /// Print the BOM to stdout instead of writing a file
    #[arg(long, conflicts_with_all = ["output_dir", "filename"])]
    pub stdout: bool,

    /// Emit compact JSON instead of the pretty-printed default
    #[arg(long)]
    pub compact: bool,

    /// Report dangling or duplicate bom-refs after assembly
    #[arg(long)]
    pub validate_refs: bool,

    /// Exit with code 1 when a vulnerability at or above this severity is present
    #[arg(long, value_name = "SEVERITY")]
    pub fail_on: Option<Severity>,

    /// Path to a config file (defaults to ./zero-bom.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
