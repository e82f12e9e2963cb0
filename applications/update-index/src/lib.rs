//! Update Index - command-line reindexing of a media root
//!
//! Resolves the root directory and options from the command line, an
//! optional config file and the environment, then runs the folder index
//! pipeline and reports the result.

pub mod cli;
pub mod config;
pub mod error;
pub mod report;

pub use cli::Cli;
pub use config::AppConfig;
pub use error::{AppError, Result};
