pub mod cli;
pub mod config;
pub mod docs_index;
pub mod lockfile;
