//! SwiftPM lockfile (Package.resolved) reading
//! - types.rs: Lockfile and Pin, parsing of the v1 and v2/v3 layouts
//! - lookup.rs: pin lookup by package name
//! - error.rs: error types for parsing and lookup

pub mod error;
pub mod lookup;
pub mod types;

pub use error::{LockfileError, LookupError};
pub use lookup::lookup_pin;
pub use types::{Lockfile, LockfileLayout, Pin};
