//! Most-confident-path search: a max-product variant of Dijkstra.
//!
//! Edge weights are independent-event confidence probabilities, so the
//! quality of a path is the product of its weights and the best path is the
//! one maximizing that product. With weights in `[0, 1]` the product along
//! any path is monotonically non-increasing, which gives the greedy
//! "finalize the current global maximum" rule the same guarantee that
//! non-negative additive weights give ordinary Dijkstra: a finalized vertex
//! never needs a better score later.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::debug;

use crate::algorithms::out_edges;
use crate::graph::PpiGraph;
use crate::types::{Confidence, ProteinId};

/// A reconstructed source-to-destination path with its cumulative
/// confidence.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfidentPath {
    /// Vertices from start to end, inclusive.
    pub path: Vec<ProteinId>,
    /// Product of edge confidences along `path`.
    pub confidence: Confidence,
}

/// Outcome of a path query whose endpoints both resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum PathSearch {
    /// A best path exists.
    Found(ConfidentPath),
    /// The destination is unreachable from the start. Distinct from an
    /// unknown endpoint, which is reported as `None` by the entry point.
    NoPath,
}

/// Max-heap entry carrying the score known at push time. Stale entries for
/// already-finalized vertices are skipped on pop (lazy deletion), which
/// avoids any decrease/increase-key machinery on the heap.
#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    score: Confidence,
    id: ProteinId,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score.total_cmp(&other.score)
    }
}

/// Find the path from `start` to `end` (accession strings) maximizing the
/// product of edge confidences.
///
/// Returns `None` when either endpoint is unknown; no search is performed
/// in that case. `start == end` yields the trivial path `[start]` with
/// confidence 1.0.
///
/// Reachability is tracked structurally: only the start seed and strict
/// relaxations insert a score entry, so "no entry for `end`" is the
/// no-path signal rather than a comparison against a literal 0.0. Since a
/// relaxation must strictly beat the 0.0 default, a zero-weight edge never
/// relaxes anything and a path with product 0.0 reports as [`PathSearch::NoPath`].
pub fn most_confident_path(graph: &dyn PpiGraph, start: &str, end: &str) -> Option<PathSearch> {
    let start = graph.search_protein(start)?.id;
    let end = graph.search_protein(end)?.id;
    debug!(?start, ?end, "starting most-confident-path search");

    if start == end {
        return Some(PathSearch::Found(ConfidentPath {
            path: vec![start],
            confidence: 1.0,
        }));
    }

    let adj = out_edges(graph);

    let mut best: HashMap<ProteinId, Confidence> = HashMap::from([(start, 1.0)]);
    let mut previous: HashMap<ProteinId, ProteinId> = HashMap::new();
    let mut finalized: HashSet<ProteinId> = HashSet::new();
    let mut heap = BinaryHeap::from([HeapEntry {
        score: 1.0,
        id: start,
    }]);

    while let Some(HeapEntry { id: current, .. }) = heap.pop() {
        if current == end {
            debug!(?end, "destination reached");
            break;
        }
        if !finalized.insert(current) {
            continue;
        }

        let Some(outgoing) = adj.get(&current) else {
            continue;
        };
        let base = best[&current];
        for edge in outgoing {
            let candidate = base * edge.weight;
            let known = best.get(&edge.destination).copied().unwrap_or(0.0);
            if candidate > known {
                best.insert(edge.destination, candidate);
                previous.insert(edge.destination, current);
                heap.push(HeapEntry {
                    score: candidate,
                    id: edge.destination,
                });
            }
        }
    }

    let Some(&confidence) = best.get(&end) else {
        debug!(?start, ?end, "no path");
        return Some(PathSearch::NoPath);
    };

    let mut path = vec![end];
    let mut current = end;
    while let Some(&parent) = previous.get(&current) {
        path.push(parent);
        current = parent;
    }
    path.reverse();

    Some(PathSearch::Found(ConfidentPath { path, confidence }))
}
