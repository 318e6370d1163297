//! loom-cli library
//!
//! Exposes the command line definitions and commands of the `loom` binary
//! so they can be tested without spawning a process.

pub mod cli;
pub mod commands;
pub mod logging;

pub use cli::{Cli, Commands};
