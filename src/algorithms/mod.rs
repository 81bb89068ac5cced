//! Graph algorithms: traversals and the most-confident-path search.
//!
//! The backing store keeps nothing but a vertex table and a flat edge list,
//! so every algorithm here starts by building its own adjacency index with
//! one O(E) scan. The index is local to the call and dropped on return;
//! nothing aliases or mutates the graph's own storage.

use std::collections::HashMap;

use crate::graph::{Interaction, PpiGraph};
use crate::types::ProteinId;

pub mod confidence;
pub mod traversal;

pub use confidence::{most_confident_path, ConfidentPath, PathSearch};
pub use traversal::{bfs, dfs, Traversal};

/// Ephemeral vertex → out-neighbor index, in edge-insertion order.
pub(crate) fn out_neighbors(graph: &dyn PpiGraph) -> HashMap<ProteinId, Vec<ProteinId>> {
    let mut adj: HashMap<ProteinId, Vec<ProteinId>> = HashMap::new();
    for edge in graph.edges() {
        adj.entry(edge.source).or_default().push(edge.destination);
    }
    adj
}

/// Ephemeral vertex → outgoing-edge index, in edge-insertion order.
pub(crate) fn out_edges(graph: &dyn PpiGraph) -> HashMap<ProteinId, Vec<Interaction>> {
    let mut adj: HashMap<ProteinId, Vec<Interaction>> = HashMap::new();
    for edge in graph.edges() {
        adj.entry(edge.source).or_default().push(*edge);
    }
    adj
}
