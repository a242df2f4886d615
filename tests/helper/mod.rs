//! Shared fixtures for binary tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Create a docs directory with one subdirectory per name
pub fn create_docs_dir(names: &[&str]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let docs_dir = temp_dir.path().join("docs");
    fs::create_dir(&docs_dir).unwrap();
    for name in names {
        fs::create_dir(docs_dir.join(name)).unwrap();
    }
    (temp_dir, docs_dir)
}

/// Write a v1 Package.resolved with the given (package, version) pins
pub fn write_v1_lockfile(dir: &Path, pins: &[(&str, Option<&str>)]) -> PathBuf {
    let pins: Vec<_> = pins
        .iter()
        .map(|(package, version)| {
            serde_json::json!({
                "package": package,
                "repositoryURL": format!("https://github.com/example/{package}"),
                "state": {
                    "branch": null,
                    "revision": "0123456789abcdef0123456789abcdef01234567",
                    "version": version,
                }
            })
        })
        .collect();
    let document = serde_json::json!({ "object": { "pins": pins }, "version": 1 });

    let path = dir.join("Package.resolved");
    fs::write(&path, serde_json::to_string_pretty(&document).unwrap()).unwrap();
    path
}

/// Run a built binary with `dir` as the working directory
pub fn run_in(bin: &str, dir: &Path, args: &[&str]) -> Output {
    Command::new(bin)
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}
