//! Wordshape CLI library
//!
//! This library provides the command-line interface for the wordshape
//! morphological engine.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use cli::{Cli, GlobalArgs};
pub use error::{CliError, CliResult};
