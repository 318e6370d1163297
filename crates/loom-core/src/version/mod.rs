//! Version module: build run metadata
//!
//! Each graph build is tagged with a run record (id, time, source hash and
//! git position) that is exported next to the graph.

mod build_run;

pub use crate::graph::model::BuildRun;

#[cfg(test)]
mod tests;
