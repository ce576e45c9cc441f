//! Author registry
//!
//! An in-memory, deduplicated, ordered collection of author names for one
//! service, backed by the flat text store in [`store`]. The registry is a
//! small, single-session structure: it is not designed for concurrent
//! mutation, and callers serialize add/delete/save calls.

pub mod store;

use std::path::Path;

use crate::utils::alphanum;

/// Ordered set of author names for one service
#[derive(Debug, Clone)]
pub struct AuthorRegistry {
    /// Canonical service name keying the store section
    service: String,

    /// Names, deduplicated and sorted alpha-numerically
    names: Vec<String>,
}

impl AuthorRegistry {
    /// Create an empty registry for a service
    #[must_use]
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            names: Vec::new(),
        }
    }

    /// Load a registry from the backing store.
    ///
    /// A missing or unreadable file yields an empty registry, not an error.
    /// Entries are organized (deduplicated and sorted) on load, so the
    /// on-disk order does not need to round-trip, only the set of entries.
    #[must_use]
    pub fn load(path: &Path, service: &str) -> Self {
        let mut registry = Self::new(service);
        registry.names = store::read_section(path, service);
        registry.organize();
        tracing::debug!(
            service,
            count = registry.names.len(),
            path = %path.display(),
            "loaded author registry"
        );
        registry
    }

    /// Insert one name, then re-organize
    pub fn add(&mut self, name: impl Into<String>) {
        self.names.push(name.into());
        self.organize();
    }

    /// Insert several names, then re-organize once
    pub fn add_all<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self.organize();
    }

    /// Remove entries by 1-based display index.
    ///
    /// Index 0 is reserved at call sites as a "select all" sentinel and is
    /// ignored here, as is any out-of-range index. Invalid indices are a
    /// silent no-op, not an error.
    pub fn delete(&mut self, indices: &[usize]) {
        let mut valid: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&i| i >= 1 && i <= self.names.len())
            .collect();
        valid.sort_unstable();
        valid.dedup();

        // Remove from the back so earlier indices stay valid
        for i in valid.into_iter().rev() {
            self.names.remove(i - 1);
        }
        self.organize();
    }

    /// Remove case-insensitive duplicates (first occurrence kept), then sort
    /// alpha-numerically.
    ///
    /// The duplicate scan is quadratic over the current size, which is fine
    /// at registry scale (tens to low hundreds of entries); a hash-set pass
    /// would be behavior-equivalent. Idempotent: re-running without an
    /// intervening mutation leaves the sequence unchanged.
    fn organize(&mut self) {
        let mut i = 0;
        while i < self.names.len() {
            let mut j = i + 1;
            while j < self.names.len() {
                if self.names[j].to_lowercase() == self.names[i].to_lowercase() {
                    self.names.remove(j);
                } else {
                    j += 1;
                }
            }
            i += 1;
        }
        self.names.sort_by(|a, b| alphanum::compare(a, b));
    }

    /// Persist the registry to the backing store.
    ///
    /// Never fails: if the registry directory cannot be created or the file
    /// cannot be written, the registry is simply not persisted and a warning
    /// is logged. Callers needing confirmation check the store's existence.
    pub fn save(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "registry directory not creatable, registry not persisted"
                    );
                    return;
                }
            }
        }
        if let Err(e) = store::write_section(path, &self.service, &self.names) {
            tracing::warn!(path = %path.display(), error = %e, "registry not persisted");
        }
    }

    /// The ordered names
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Canonical service name
    #[must_use]
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
