//! Markdown rendering for the documentation index

use std::fmt::Write;

use crate::config::INDEX_TITLE;
use crate::docs_index::entry::IndexEntry;

/// Render the index as Markdown, one newline-terminated line per entry
pub fn render_markdown(entries: &[IndexEntry]) -> String {
    let mut out = String::new();
    out.push_str(INDEX_TITLE);
    out.push('\n');

    for entry in entries {
        // writing into a String cannot fail
        let _ = writeln!(out, "- [{}]({}/index.html)", entry.label, entry.link);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs_index::entry::build_index;

    #[test]
    fn render_markdown_writes_title_only_for_empty_index() {
        assert_eq!(
            render_markdown(&[]),
            "# mongodb-vapor Documentation Index\n"
        );
    }

    #[test]
    fn render_markdown_links_current_release_to_current_dir() {
        let entries = build_index(["1.0.0", "2.0.0-beta", "2.0.0", "README"]);

        assert_eq!(
            render_markdown(&entries),
            "# mongodb-vapor Documentation Index\n\
             - [2.0.0-beta](2.0.0-beta/index.html)\n\
             - [2.0.0 (current)](current/index.html)\n\
             - [1.0.0](1.0.0/index.html)\n"
        );
    }
}
