//! langsift CLI library
//!
//! This library provides the command-line interface for the langsift
//! natural-language filter.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;
pub mod profile_source;
pub mod progress;

pub use error::{CliError, CliResult};
