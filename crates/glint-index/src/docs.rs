//! The fixed documentation and template entries.
//!
//! These precede the component entries in the search index.

use glint_core::SearchEntry;

/// The built-in docs list, in display order.
pub fn doc_entries() -> Vec<SearchEntry> {
    vec![
        SearchEntry::doc(
            "Introduction",
            "Getting started with Glint UI",
            "/docs/introduction",
        ),
        SearchEntry::doc("Installation", "How to install and use", "/docs/installation"),
        SearchEntry::template(
            "SaaS Landing",
            "Complete SaaS landing page template",
            "/components/modern-saas",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::EntryKind;

    #[test]
    fn test_docs_order_and_kinds() {
        let docs = doc_entries();
        assert_eq!(docs.len(), 3);
        assert_eq!(docs[0].title, "Introduction");
        assert_eq!(docs[0].kind, EntryKind::Doc);
        assert_eq!(docs[2].kind, EntryKind::Template);
        assert_eq!(docs[2].path, "/components/modern-saas");
    }
}
