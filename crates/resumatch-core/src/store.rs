//! In-memory candidate store with copy-on-write snapshots

use crate::types::Candidate;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Point-in-time view of the store, ordered by identifier.
pub type Snapshot = Arc<BTreeMap<String, Arc<Candidate>>>;

/// Holds every ingested candidate keyed by identifier.
///
/// Writers replace entries under a short write lock via `Arc::make_mut`, so a
/// snapshot taken earlier is never modified; readers only clone the outer `Arc`.
#[derive(Debug, Default)]
pub struct DocumentStore {
    inner: RwLock<Snapshot>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace (last write wins).
    pub fn put(&self, candidate: Candidate) -> Arc<Candidate> {
        let candidate = Arc::new(candidate);
        let mut guard = self.inner.write();
        Arc::make_mut(&mut *guard).insert(candidate.identifier.clone(), Arc::clone(&candidate));
        candidate
    }

    pub fn get(&self, identifier: &str) -> Option<Arc<Candidate>> {
        self.inner.read().get(identifier).cloned()
    }

    pub fn get_all(&self) -> Snapshot {
        Arc::clone(&*self.inner.read())
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Drop every candidate.
    pub fn clear(&self) {
        *self.inner.write() = Snapshot::default();
    }
}
