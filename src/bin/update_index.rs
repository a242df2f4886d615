use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::warn;
use vapor_release_tools::config::{self, DEFAULT_DOCS_DIR, DEFAULT_INDEX_PATH};
use vapor_release_tools::docs_index::write_index;

#[derive(Parser)]
#[command(name = "update-index")]
#[command(version, about = "Regenerate the documentation index from version directories")]
struct Cli {
    /// Directory containing one subdirectory per documented version
    #[arg(long, default_value = DEFAULT_DOCS_DIR)]
    docs_dir: PathBuf,

    /// Index file to overwrite
    #[arg(long, default_value = DEFAULT_INDEX_PATH)]
    output: PathBuf,

    /// Stray arguments, accepted and ignored
    #[arg(hide = true, allow_hyphen_values = true, trailing_var_arg = true, num_args = 0..)]
    ignored: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    config::init_logging();
    let cli = Cli::parse();

    if !cli.ignored.is_empty() {
        warn!("Ignoring unexpected arguments: {:?}", cli.ignored);
    }

    write_index(&cli.docs_dir, &cli.output).context("Failed to update documentation index")?;
    Ok(())
}
