//! The search index.
//!
//! `SearchIndex` derives the unified searchable list: docs and templates
//! first, then one entry per registry component. The derived list is cached
//! against the registry's version stamp, so it is computed once for the
//! lifetime of a registry and rebuilt only if a new registry is installed.

use parking_lot::RwLock;
use std::sync::Arc;

use glint_core::SearchEntry;

use crate::docs::doc_entries;
use crate::registry::Registry;

/// Cached derived entries, tagged with the registry version they came from.
struct CachedEntries {
    version: u64,
    entries: Arc<[SearchEntry]>,
}

/// Memoized docs-plus-components index over a [`Registry`].
pub struct SearchIndex {
    registry: RwLock<Arc<Registry>>,
    cache: RwLock<Option<CachedEntries>>,
}

impl SearchIndex {
    /// Create an index over the given registry.
    pub fn new(registry: Arc<Registry>) -> Self {
        Self {
            registry: RwLock::new(registry),
            cache: RwLock::new(None),
        }
    }

    /// The unified entry list: docs/templates first, then components in
    /// registry order. No filtering, no deduplication.
    ///
    /// Cheap after the first call: returns the cached list until the
    /// registry is replaced.
    pub fn entries(&self) -> Arc<[SearchEntry]> {
        let registry = self.registry.read().clone();

        if let Some(cached) = self.cache.read().as_ref() {
            if cached.version == registry.version() {
                return cached.entries.clone();
            }
        }

        let entries = build_entries(&registry);
        tracing::debug!(
            "Rebuilt search index: {} entries (registry v{})",
            entries.len(),
            registry.version()
        );

        *self.cache.write() = Some(CachedEntries {
            version: registry.version(),
            entries: entries.clone(),
        });
        entries
    }

    /// Replace the upstream registry, invalidating the cache.
    pub fn set_registry(&self, registry: Arc<Registry>) {
        *self.registry.write() = registry;
    }

    /// The currently installed registry.
    pub fn registry(&self) -> Arc<Registry> {
        self.registry.read().clone()
    }
}

/// Concatenate docs and component-derived entries.
fn build_entries(registry: &Registry) -> Arc<[SearchEntry]> {
    let mut entries = doc_entries();
    entries.extend(registry.components().iter().map(|c| {
        SearchEntry::component(
            c.name.clone(),
            c.description.clone(),
            &c.slug,
            c.category.clone(),
        )
    }));
    entries.into()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::EntryKind;

    fn test_registry() -> Arc<Registry> {
        Arc::new(
            Registry::builder()
                .component("Button", "button", "Core button", "Buttons")
                .component("Modal", "modal", "Accessible dialog", "Overlays")
                .build(),
        )
    }

    #[test]
    fn test_docs_precede_components() {
        let index = SearchIndex::new(test_registry());
        let entries = index.entries();

        let docs_len = doc_entries().len();
        assert_eq!(entries.len(), docs_len + 2);
        assert!(entries[..docs_len]
            .iter()
            .all(|e| e.kind != EntryKind::Component));
        assert_eq!(entries[docs_len].title, "Button");
        assert_eq!(entries[docs_len + 1].path, "/components/modal");
    }

    #[test]
    fn test_entries_are_memoized() {
        let index = SearchIndex::new(test_registry());
        let first = index.entries();
        let second = index.entries();
        // Same cached allocation, not a rebuild
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_set_registry_invalidates_cache() {
        let index = SearchIndex::new(test_registry());
        let before = index.entries();

        index.set_registry(Arc::new(
            Registry::builder()
                .component("Tabs", "tabs", "Tabbed navigation", "Navigation")
                .build(),
        ));

        let after = index.entries();
        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(after.len(), doc_entries().len() + 1);
        assert!(after.iter().any(|e| e.title == "Tabs"));
    }
}
