//! Lockfile types

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use tracing::debug;

use crate::lockfile::error::LockfileError;

/// Layout of a Package.resolved file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockfileLayout {
    /// `{"object": {"pins": [{"package": ...}]}, "version": 1}`
    V1,
    /// `{"pins": [{"identity": ...}], "version": 2}` (also used by version 3)
    V2,
}

/// A dependency fixed to a resolved state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pin {
    /// Package name ("package" in v1, "identity" in v2/v3)
    pub package: String,
    /// Pinned version; None for branch or revision pins
    pub version: Option<String>,
}

impl Pin {
    /// The pinned version. Branch or revision pins carry none, which is a
    /// lockfile failure rather than a lookup miss.
    pub fn pinned_version(&self) -> Result<&str, LockfileError> {
        self.version
            .as_deref()
            .ok_or_else(|| LockfileError::Unpinned(self.package.clone()))
    }
}

/// Parsed lockfile, read once and never mutated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lockfile {
    pub layout: LockfileLayout,
    pub pins: Vec<Pin>,
}

#[derive(Debug, Deserialize)]
struct RawLockfile {
    object: Option<RawObject>,
    pins: Option<Vec<RawV2Pin>>,
}

#[derive(Debug, Deserialize)]
struct RawObject {
    pins: Vec<RawV1Pin>,
}

#[derive(Debug, Deserialize)]
struct RawV1Pin {
    package: String,
    state: RawState,
}

#[derive(Debug, Deserialize)]
struct RawV2Pin {
    identity: String,
    state: RawState,
}

#[derive(Debug, Deserialize)]
struct RawState {
    #[serde(default)]
    version: Option<String>,
}

impl Lockfile {
    /// Read and parse the lockfile at `path`
    pub fn from_path(path: &Path) -> Result<Self, LockfileError> {
        let content = std::fs::read_to_string(path).map_err(|source| LockfileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        content.parse()
    }

    /// First pin whose package name equals `name` exactly
    pub fn find_pin(&self, name: &str) -> Option<&Pin> {
        self.pins.iter().find(|pin| pin.package == name)
    }
}

impl FromStr for Lockfile {
    type Err = LockfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: RawLockfile = serde_json::from_str(s)?;

        // "object" takes precedence when both are present
        let lockfile = match (raw.object, raw.pins) {
            (Some(object), _) => Lockfile {
                layout: LockfileLayout::V1,
                pins: object
                    .pins
                    .into_iter()
                    .map(|pin| Pin {
                        package: pin.package,
                        version: pin.state.version,
                    })
                    .collect(),
            },
            (None, Some(pins)) => Lockfile {
                layout: LockfileLayout::V2,
                pins: pins
                    .into_iter()
                    .map(|pin| Pin {
                        package: pin.identity,
                        version: pin.state.version,
                    })
                    .collect(),
            },
            (None, None) => return Err(LockfileError::MissingPins),
        };

        debug!(
            "Parsed {:?} lockfile with {} pins",
            lockfile.layout,
            lockfile.pins.len()
        );
        Ok(lockfile)
    }
}
