//! Directory scanning and index output

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::docs_index::entry::{IndexEntry, build_index};
use crate::docs_index::error::IndexError;
use crate::docs_index::render::render_markdown;

/// Names of every entry directly under `docs_dir`, in directory order.
///
/// Files are listed as well as directories; they are filtered later by the
/// version naming convention.
pub fn read_entry_names(docs_dir: &Path) -> Result<Vec<String>, IndexError> {
    let read_dir_err = |source| IndexError::ReadDir {
        path: docs_dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for dir_entry in fs::read_dir(docs_dir).map_err(read_dir_err)? {
        let dir_entry = dir_entry.map_err(read_dir_err)?;
        let name = dir_entry.file_name();
        match name.into_string() {
            Ok(name) => names.push(name),
            Err(raw) => {
                let lossy = raw.to_string_lossy().into_owned();
                warn!("Entry name is not valid UTF-8, using {:?}", lossy);
                names.push(lossy);
            }
        }
    }

    debug!("Read {} entries from {}", names.len(), docs_dir.display());
    Ok(names)
}

/// Scan `docs_dir` and overwrite `output` with the rendered index.
///
/// Returns the entries that were written.
pub fn write_index(docs_dir: &Path, output: &Path) -> Result<Vec<IndexEntry>, IndexError> {
    let entries = build_index(read_entry_names(docs_dir)?);
    let markdown = render_markdown(&entries);

    fs::write(output, markdown).map_err(|source| IndexError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    info!("Wrote {} versions to {}", entries.len(), output.display());
    Ok(entries)
}
