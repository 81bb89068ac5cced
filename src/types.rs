//! Common core types used across the PPI engine.

use lasso::Spur;

/// Interned identifier for a protein accession string.
///
/// Accession strings (e.g. `9606.ENSP00000000233`) repeat once per endpoint
/// of every interaction in a links file, so the owning graph interns each
/// one exactly once and hands out copyable keys. Within a graph, key
/// equality is equivalent to accession-string equality, which keeps the
/// "identity is the id, never the name" rule cheap to uphold in the hash
/// maps every algorithm builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProteinId(pub Spur);

impl From<Spur> for ProteinId {
    fn from(s: Spur) -> Self {
        Self(s)
    }
}

impl From<ProteinId> for Spur {
    fn from(p: ProteinId) -> Self {
        p.0
    }
}

/// Confidence score attached to a directed interaction.
///
/// The loader normalizes raw scores into `[0, 1]` before they reach the
/// graph; the graph itself never re-validates the range.
pub type Confidence = f64;
