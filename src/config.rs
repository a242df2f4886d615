use tracing_subscriber::EnvFilter;

// =============================================================================
// Path constants
// =============================================================================

/// Documentation root scanned for version directories
pub const DEFAULT_DOCS_DIR: &str = "./docs";

/// Destination of the generated index, overwritten on every run
pub const DEFAULT_INDEX_PATH: &str = "./docs/index.md";

/// SwiftPM lockfile read by the dependency lookup
pub const DEFAULT_LOCKFILE_PATH: &str = "Package.resolved";

// =============================================================================
// Index constants
// =============================================================================

/// First line of the generated index
pub const INDEX_TITLE: &str = "# mongodb-vapor Documentation Index";

/// Label suffix for the entry published as the current release
pub const CURRENT_LABEL_SUFFIX: &str = " (current)";

/// Link path used for the current release instead of its directory name
pub const CURRENT_LINK: &str = "current";

/// Entries containing this marker are never published as current
pub const PRERELEASE_MARKER: &str = "beta";

// =============================================================================
// Logging
// =============================================================================

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Install the global tracing subscriber.
///
/// Logs are written to stderr so stdout carries only the program's output.
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn log_filter(rust_log: Option<String>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}
