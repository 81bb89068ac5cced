//! PPI network storage: protein vertices, directed weighted interactions,
//! and id-keyed lookups.

use std::collections::HashMap;
use std::fmt;

use lasso::Rodeo;

use crate::types::{Confidence, ProteinId};

pub mod edge;
pub mod metrics;
pub mod protein;

pub use edge::Interaction;
pub use metrics::GraphMetrics;
pub use protein::Protein;

/// Capability set every graph backing must provide.
///
/// Algorithms and the metrics engine consume this trait read-only; only the
/// loader drives the mutating half, and only during population. There is
/// exactly one concrete backing, [`EdgeListGraph`].
pub trait PpiGraph {
    /// Register a protein under its accession. Idempotent: re-adding an
    /// accession that is already present leaves the existing record (name
    /// included) untouched. Returns the vertex key either way.
    fn add_vertex(&mut self, accession: &str, name: &str) -> ProteinId;

    /// Append a directed interaction. Endpoints not yet in the vertex table
    /// are auto-registered with empty names, so an edge can never reference
    /// a missing vertex. Parallel edges are kept as distinct records; the
    /// weight range is the loader's contract and is not re-checked here.
    fn add_edge(&mut self, source: &str, destination: &str, weight: Confidence);

    /// O(1) lookup by accession. Absence is a value, not an error.
    fn search_protein(&self, accession: &str) -> Option<&Protein>;

    /// Lookup by interned vertex key.
    fn protein(&self, id: ProteinId) -> Option<&Protein>;

    /// Mutable lookup by vertex key; the only legal post-load mutation is
    /// the protein's display name.
    fn protein_mut(&mut self, id: ProteinId) -> Option<&mut Protein>;

    /// Whether a directed edge source → destination exists. This is a
    /// linear scan of the edge list: the cost of the edge-list
    /// representation, accepted in exchange for O(1) insertion.
    fn has_interaction(&self, source: ProteinId, destination: ProteinId) -> bool;

    /// Every interaction, in insertion order.
    fn edges(&self) -> &[Interaction];

    /// Every registered protein. Ordering is unspecified.
    fn vertices(&self) -> Vec<&Protein>;

    /// Destinations of every edge leaving `id`, in edge-insertion order,
    /// duplicates included when parallel edges exist. O(E) by design; the
    /// algorithms build their own per-call adjacency indices instead of
    /// calling this in a loop.
    fn neighbors(&self, id: ProteinId) -> Vec<ProteinId>;

    /// Number of registered proteins.
    fn vertex_count(&self) -> usize;

    /// Number of interactions, parallel edges counted individually.
    fn edge_count(&self) -> usize;
}

/// Edge-list backed PPI graph.
///
/// All interactions live in one insertion-ordered list; proteins live in a
/// hash table keyed by interned accession. Insertion is O(1) and memory
/// stays minimal, at the cost of O(E) pairwise and neighbor queries — the
/// algorithms compensate by building an ephemeral adjacency index once per
/// invocation rather than asking the store to maintain one.
pub struct EdgeListGraph {
    interner: Rodeo,
    vertices: HashMap<ProteinId, Protein>,
    edges: Vec<Interaction>,
}

impl fmt::Debug for EdgeListGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdgeListGraph")
            .field("vertices", &self.vertices.len())
            .field("edges", &self.edges.len())
            .finish()
    }
}

impl Default for EdgeListGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeListGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            interner: Rodeo::new(),
            vertices: HashMap::new(),
            edges: Vec::new(),
        }
    }

    fn intern(&mut self, accession: &str) -> ProteinId {
        ProteinId(self.interner.get_or_intern(accession))
    }
}

impl PpiGraph for EdgeListGraph {
    fn add_vertex(&mut self, accession: &str, name: &str) -> ProteinId {
        let id = self.intern(accession);
        self.vertices
            .entry(id)
            .or_insert_with(|| Protein::new(id, accession.to_string(), name.to_string()));
        id
    }

    fn add_edge(&mut self, source: &str, destination: &str, weight: Confidence) {
        let source = self.add_vertex(source, "");
        let destination = self.add_vertex(destination, "");
        self.edges.push(Interaction::new(source, destination, weight));
    }

    fn search_protein(&self, accession: &str) -> Option<&Protein> {
        let id = ProteinId(self.interner.get(accession)?);
        self.vertices.get(&id)
    }

    fn protein(&self, id: ProteinId) -> Option<&Protein> {
        self.vertices.get(&id)
    }

    fn protein_mut(&mut self, id: ProteinId) -> Option<&mut Protein> {
        self.vertices.get_mut(&id)
    }

    fn has_interaction(&self, source: ProteinId, destination: ProteinId) -> bool {
        self.edges
            .iter()
            .any(|e| e.source == source && e.destination == destination)
    }

    fn edges(&self) -> &[Interaction] {
        &self.edges
    }

    fn vertices(&self) -> Vec<&Protein> {
        self.vertices.values().collect()
    }

    fn neighbors(&self, id: ProteinId) -> Vec<ProteinId> {
        self.edges
            .iter()
            .filter(|e| e.source == id)
            .map(|e| e.destination)
            .collect()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
