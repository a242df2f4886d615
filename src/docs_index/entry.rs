//! Version listing lines

use tracing::debug;

use crate::config::{CURRENT_LABEL_SUFFIX, CURRENT_LINK, PRERELEASE_MARKER};

/// One line of the documentation index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Text shown for the link (e.g., "2.0.0" or "2.0.0 (current)")
    pub label: String,
    /// Directory the link points into (the raw name, or "current")
    pub link: String,
}

impl IndexEntry {
    fn plain(name: String) -> Self {
        Self {
            label: name.clone(),
            link: name,
        }
    }

    fn current(name: String) -> Self {
        Self {
            label: format!("{name}{CURRENT_LABEL_SUFFIX}"),
            link: CURRENT_LINK.to_string(),
        }
    }

    pub fn is_current(&self) -> bool {
        self.link == CURRENT_LINK && self.label.ends_with(CURRENT_LABEL_SUFFIX)
    }
}

/// Whether a directory name follows the version naming convention.
///
/// Any Unicode numeric character counts as a leading digit, not only `0-9`.
pub fn is_version_dir(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_numeric)
}

/// Build the index listing from raw entry names.
///
/// Names are ordered by descending string comparison, not by version
/// precedence, so "9.0.0" comes before "10.0.0" and "2.0.0-beta" before
/// "2.0.0". The first version directory without the prerelease marker
/// becomes the current release; at most one entry is ever marked.
pub fn build_index<I, S>(names: I) -> Vec<IndexEntry>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
    names.sort_unstable_by(|a, b| b.cmp(a));

    let mut first = true;
    names
        .into_iter()
        .filter(|name| is_version_dir(name))
        .map(|name| {
            if first && !name.contains(PRERELEASE_MARKER) {
                first = false;
                debug!("Marking {} as the current release", name);
                IndexEntry::current(name)
            } else {
                IndexEntry::plain(name)
            }
        })
        .collect()
}
