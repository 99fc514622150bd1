//! Registry of every identity known to the system.

use crate::domain::{DomainError, Identity, Role};
use indexmap::IndexMap;
use indexmap::map::Entry;
use std::sync::Arc;

/// Insertion-ordered `id -> Identity` map. Sole owner of identities; callers get `Arc` handles.
#[derive(Debug, Default)]
pub struct Roster {
    identities: IndexMap<String, Arc<Identity>>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an identity. A taken id fails with `DuplicateId` and leaves the roster untouched.
    pub fn add(&mut self, identity: Identity) -> Result<Arc<Identity>, DomainError> {
        match self.identities.entry(identity.id().to_string()) {
            Entry::Occupied(e) => Err(DomainError::DuplicateId {
                id: e.key().clone(),
            }),
            Entry::Vacant(e) => Ok(Arc::clone(e.insert(Arc::new(identity)))),
        }
    }

    /// Identities with `role`, in insertion order. Restartable: call again for a fresh view.
    pub fn by_role(&self, role: Role) -> impl Iterator<Item = &Arc<Identity>> + '_ {
        self.identities.values().filter(move |i| i.role() == role)
    }

    pub fn find(&self, id: &str) -> Option<Arc<Identity>> {
        self.identities.get(id).cloned()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Identity>> + '_ {
        self.identities.values()
    }

    pub fn len(&self) -> usize {
        self.identities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }
}
