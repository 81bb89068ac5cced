//! Protein vertex definition.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::types::ProteinId;

/// A vertex in the PPI network.
///
/// Identity is the accession string alone: two proteins with the same
/// accession are the same entity no matter what their names say. The name
/// is a display label and is the only field mutable after creation.
#[derive(Debug, Clone)]
pub struct Protein {
    /// Graph-local interned key for this protein's accession.
    pub id: ProteinId,
    /// External accession string (e.g. `9606.ENSP00000000233`), the unique
    /// immutable identifier.
    pub accession: String,
    /// Preferred display name; empty when the info file provides none.
    pub name: String,
}

impl Protein {
    /// Create a new protein vertex.
    pub fn new(id: ProteinId, accession: String, name: String) -> Self {
        Self { id, accession, name }
    }

    /// Replace the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

/// `"{accession} ({name})"` when a name is present, the bare accession
/// otherwise.
impl fmt::Display for Protein {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.accession)
        } else {
            write!(f, "{} ({})", self.accession, self.name)
        }
    }
}

impl PartialEq for Protein {
    fn eq(&self, other: &Self) -> bool {
        self.accession == other.accession
    }
}

impl Eq for Protein {}

impl Hash for Protein {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.accession.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lasso::Rodeo;

    fn key(interner: &mut Rodeo, s: &str) -> ProteinId {
        ProteinId(interner.get_or_intern(s))
    }

    #[test]
    fn display_includes_name_only_when_present() {
        let mut interner = Rodeo::new();
        let named = Protein::new(key(&mut interner, "P1"), "P1".into(), "Alpha".into());
        let unnamed = Protein::new(key(&mut interner, "P2"), "P2".into(), String::new());
        assert_eq!(named.to_string(), "P1 (Alpha)");
        assert_eq!(unnamed.to_string(), "P2");
    }

    #[test]
    fn equality_ignores_name() {
        let mut interner = Rodeo::new();
        let id = key(&mut interner, "P1");
        let a = Protein::new(id, "P1".into(), "Alpha".into());
        let b = Protein::new(id, "P1".into(), "Beta".into());
        assert_eq!(a, b);
    }

    #[test]
    fn set_name_changes_display_form() {
        let mut interner = Rodeo::new();
        let mut p = Protein::new(key(&mut interner, "P1"), "P1".into(), String::new());
        p.set_name("Alpha");
        assert_eq!(p.to_string(), "P1 (Alpha)");
    }
}
