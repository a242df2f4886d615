//! Prints the version of a dependency as pinned in Package.resolved.
//!
//! Usage: get-dep-version <package name>
//! e.g. `get-dep-version swift-bson`

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use vapor_release_tools::cli::single_argument;
use vapor_release_tools::config::{self, DEFAULT_LOCKFILE_PATH};
use vapor_release_tools::lockfile::{Lockfile, lookup_pin};

#[derive(Parser)]
#[command(name = "get-dep-version")]
#[command(
    about = "Print the pinned version of a dependency",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Lockfile to read
    #[arg(long, default_value = DEFAULT_LOCKFILE_PATH)]
    lockfile: PathBuf,

    /// Package name (exactly one expected). Everything from the first
    /// positional onward is collected here, hyphenated or not, so the
    /// argument count check sees it.
    #[arg(allow_hyphen_values = true, trailing_var_arg = true, num_args = 0..)]
    args: Vec<String>,
}

fn main() -> anyhow::Result<ExitCode> {
    config::init_logging();
    let cli = Cli::parse();

    let package_name = match single_argument(&cli.args) {
        Ok(name) => name,
        Err(err) => {
            println!("Error: {err}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let lockfile = Lockfile::from_path(&cli.lockfile)
        .with_context(|| format!("Failed to load {}", cli.lockfile.display()))?;

    match lookup_pin(&lockfile, package_name) {
        Ok(pin) => {
            let version = pin
                .pinned_version()
                .with_context(|| format!("Failed to read {}", cli.lockfile.display()))?;
            println!("{version}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            println!("Error: {err}");
            Ok(ExitCode::FAILURE)
        }
    }
}
