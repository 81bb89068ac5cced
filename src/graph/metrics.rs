//! Aggregate graph metrics: counts, degree, reciprocity, and diameter.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::debug;

use crate::algorithms::out_neighbors;
use crate::graph::PpiGraph;
use crate::types::ProteinId;

/// Summary metrics for health-checking a loaded network.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphMetrics {
    /// Total number of proteins.
    pub vertex_count: usize,
    /// Total number of interactions, parallel edges counted individually.
    pub edge_count: usize,
    /// Edges per vertex (E / V), 0 when the graph has no vertices.
    pub avg_out_degree: f64,
    /// Fraction of directed edges whose reverse edge also exists, 0 when
    /// the graph has no edges. Parallel edges are deduplicated in the edge
    /// set but not in the denominator, so repeated edges bias the ratio —
    /// an accepted property of this metric.
    pub reciprocity: f64,
    /// Maximum BFS eccentricity over all vertices, counting reachable
    /// pairs only; unreachable vertices never contribute a distance.
    pub diameter: usize,
}

impl GraphMetrics {
    /// Compute all metrics for the given graph.
    pub fn compute(graph: &dyn PpiGraph) -> Self {
        Self::compute_with_progress(graph, 0, |_| {})
    }

    /// Compute all metrics, invoking `progress` with the number of
    /// processed vertices after every `every` vertices of the diameter
    /// sweep (`every == 0` disables the hook). The hook exists for
    /// reporting on large graphs and never affects the result.
    pub fn compute_with_progress<F>(graph: &dyn PpiGraph, every: usize, mut progress: F) -> Self
    where
        F: FnMut(usize),
    {
        let vertex_count = graph.vertex_count();
        let edge_count = graph.edge_count();

        let avg_out_degree = if vertex_count == 0 {
            0.0
        } else {
            edge_count as f64 / vertex_count as f64
        };

        let reciprocity = reciprocity(graph);

        debug!(vertex_count, "starting diameter sweep");
        let adj = out_neighbors(graph);
        let mut diameter = 0;
        let mut processed = 0;
        for vertex in graph.vertices() {
            diameter = diameter.max(eccentricity(vertex.id, &adj));
            processed += 1;
            if every > 0 && processed % every == 0 {
                progress(processed);
            }
        }

        Self {
            vertex_count,
            edge_count,
            avg_out_degree,
            reciprocity,
            diameter,
        }
    }
}

/// Fraction of edges whose reverse counterpart exists.
fn reciprocity(graph: &dyn PpiGraph) -> f64 {
    let edges = graph.edges();
    if edges.is_empty() {
        return 0.0;
    }

    let edge_set: HashSet<(ProteinId, ProteinId)> = edges
        .iter()
        .map(|e| (e.source, e.destination))
        .collect();

    let mutual = edges
        .iter()
        .filter(|e| edge_set.contains(&(e.destination, e.source)))
        .count();

    mutual as f64 / edges.len() as f64
}

/// Maximum finite hop-distance reachable from `start`.
fn eccentricity(start: ProteinId, adj: &HashMap<ProteinId, Vec<ProteinId>>) -> usize {
    let mut distances = HashMap::from([(start, 0)]);
    let mut queue = VecDeque::from([start]);
    let mut max_distance = 0;

    while let Some(current) = queue.pop_front() {
        let distance = distances[&current];
        max_distance = max_distance.max(distance);

        if let Some(neighbors) = adj.get(&current) {
            for &next in neighbors {
                if !distances.contains_key(&next) {
                    distances.insert(next, distance + 1);
                    queue.push_back(next);
                }
            }
        }
    }
    max_distance
}
