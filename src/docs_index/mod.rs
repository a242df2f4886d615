//! Documentation index builder
//! - entry.rs: version listing lines and current-release selection
//! - render.rs: Markdown rendering
//! - writer.rs: directory scanning and index file output
//! - error.rs: error type for filesystem failures

pub mod entry;
pub mod error;
pub mod render;
pub mod writer;

pub use entry::{IndexEntry, build_index};
pub use error::IndexError;
pub use render::render_markdown;
pub use writer::{read_entry_names, write_index};
