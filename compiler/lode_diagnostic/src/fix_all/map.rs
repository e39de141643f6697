//! Immutable diagnostic maps keyed by document or project.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use lode_ir::{DocumentId, ProjectId};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{Diagnostic, DiagnosticId};

/// Diagnostics grouped by document.
pub type DocumentDiagnosticMap = DiagnosticMap<DocumentId>;

/// Diagnostics grouped by project.
pub type ProjectDiagnosticMap = DiagnosticMap<ProjectId>;

/// Immutable mapping from a key to an ordered run of diagnostics.
///
/// The entries are shared behind an `Arc`, so clones are O(1) and two
/// clones of one map compare equal under [`DiagnosticMap::ptr_eq`].
/// Key iteration order is unspecified; callers needing a canonical order
/// walk their own key list (e.g. a project's documents) and use
/// [`DiagnosticMap::get`].
pub struct DiagnosticMap<K> {
    entries: Arc<FxHashMap<K, Arc<[Diagnostic]>>>,
}

impl<K: Eq + Hash> DiagnosticMap<K> {
    pub fn empty() -> Self {
        DiagnosticMap {
            entries: Arc::new(FxHashMap::default()),
        }
    }

    /// Diagnostics stored under `key`; empty when the key is absent.
    pub fn get(&self, key: &K) -> &[Diagnostic] {
        match self.entries.get(key) {
            Some(diagnostics) => &diagnostics[..],
            None => &[],
        }
    }

    /// The shared entry stored under `key`, if any.
    pub fn entry(&self, key: &K) -> Option<&Arc<[Diagnostic]>> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Total number of diagnostics across all keys.
    pub fn diagnostic_count(&self) -> usize {
        self.entries.values().map(|diagnostics| diagnostics.len()).sum()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[Diagnostic])> + '_ {
        self.entries
            .iter()
            .map(|(key, diagnostics)| (key, &**diagnostics))
    }

    /// Every distinct rule id that occurs in the map.
    pub fn diagnostic_ids(&self) -> FxHashSet<DiagnosticId> {
        self.entries
            .values()
            .flat_map(|diagnostics| diagnostics.iter())
            .map(|diagnostic| diagnostic.id.clone())
            .collect()
    }

    /// Whether both handles share the same underlying entries.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

impl<K> Clone for DiagnosticMap<K> {
    fn clone(&self) -> Self {
        DiagnosticMap {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<K: Eq + Hash> Default for DiagnosticMap<K> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Later runs for a repeated key are appended after earlier ones.
impl<K: Eq + Hash> FromIterator<(K, Vec<Diagnostic>)> for DiagnosticMap<K> {
    fn from_iter<I: IntoIterator<Item = (K, Vec<Diagnostic>)>>(iter: I) -> Self {
        let mut grouped: FxHashMap<K, Vec<Diagnostic>> = FxHashMap::default();
        for (key, diagnostics) in iter {
            grouped.entry(key).or_default().extend(diagnostics);
        }
        DiagnosticMap {
            entries: Arc::new(
                grouped
                    .into_iter()
                    .map(|(key, diagnostics)| (key, Arc::from(diagnostics)))
                    .collect(),
            ),
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for DiagnosticMap<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}
