#![forbid(unsafe_code)]
#![deny(
    warnings,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms
)]

//! # ppinet
//!
//! Core library for directed, weighted protein-protein interaction (PPI)
//! network analysis:
//! - edge-list graph store with O(1) accession lookup
//! - BFS/DFS traversals over ephemeral adjacency indices
//! - most-confident-path search (max-product Dijkstra)
//! - aggregate metrics: degree, reciprocity, reachable-pairs diameter
//!
//! The whole crate is deterministic, single-threaded, and synchronous: the
//! loader populates a graph once, and every algorithm consumes it
//! read-only.

pub mod algorithms;
pub mod config;
pub mod errors;
pub mod graph;
/// PPI data-file loading and score normalization.
pub mod loader;
pub mod types;

pub use config::PpiConfig;
pub use errors::{PpiError, Result};
pub use graph::{EdgeListGraph, GraphMetrics, Interaction, PpiGraph, Protein};
pub use types::{Confidence, ProteinId};
