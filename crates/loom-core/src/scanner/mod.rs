//! Scanner module: snapshot file discovery
//!
//! Walks a directory, respecting .gitignore, and collects the program
//! snapshots written by an external parser front-end.

mod walker;

pub use walker::{DiscoveredSnapshot, Scanner, SNAPSHOT_SUFFIX};

#[cfg(test)]
mod tests;
