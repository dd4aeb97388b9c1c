//! Command-line workflow, decoupled from argument parsing

pub mod orchestration;

pub use orchestration::{derive_version, run, select_format, RunArgs};
