use std::path::PathBuf;

use thiserror::Error;

/// Failure to load a lockfile. Never handled by the lookup binary.
#[derive(Debug, Error)]
pub enum LockfileError {
    #[error("Failed to read lockfile {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid lockfile JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Lockfile has no pins: expected \"object.pins\" or \"pins\"")]
    MissingPins,

    #[error("Pin for {0} has no state.version")]
    Unpinned(String),
}

/// Lookup failures reported to the user as a single line
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("No package named {0}")]
    NotFound(String),
}
