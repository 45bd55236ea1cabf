//! Builds the sponsor index and metadata documents from the register CSV.
//!
//! Run with no arguments to use the fixed paths under `data/sponsors/`.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use sponsorcheck::sponsor_matching::index::{BuildPaths, DEFAULT_SOURCE_LABEL, build_index_files};

const SPONSORS_DIR: &str = "data/sponsors";

#[derive(Parser, Debug)]
#[command(about = "Build the sponsor index from the register CSV")]
struct Args {
    /// Register CSV export
    #[arg(long)]
    input: Option<PathBuf>,

    /// Destination of the index document
    #[arg(long)]
    index_output: Option<PathBuf>,

    /// Destination of the build metadata document
    #[arg(long)]
    metadata_output: Option<PathBuf>,
}

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let sponsors_dir = workspace_root().join(SPONSORS_DIR);

    let input = args
        .input
        .unwrap_or_else(|| sponsors_dir.join("sponsors.csv"));
    let index_output = args
        .index_output
        .unwrap_or_else(|| sponsors_dir.join("sponsors_index.json"));
    let metadata_output = args
        .metadata_output
        .unwrap_or_else(|| sponsors_dir.join("metadata.json"));

    let metadata = build_index_files(
        BuildPaths {
            registry_csv: &input,
            index_json: &index_output,
            metadata_json: &metadata_output,
        },
        DEFAULT_SOURCE_LABEL,
    )?;

    info!("Sponsor index built.");
    info!("Detected org column: {}", metadata.organisation_name_column);
    info!("Rows parsed: {}", metadata.rows_parsed);
    info!(
        "Unique normalized keys: {} ({:.1}% of rows)",
        metadata.unique_normalized_keys,
        metadata.dedup_ratio() * 100.0
    );
    Ok(())
}
