//! SearchEntry, the atomic unit of the palette.

use serde::{Deserialize, Serialize};

/// What kind of record an entry points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A component page under `/components/{slug}`.
    Component,
    /// A documentation page.
    Doc,
    /// A full-page template.
    Template,
}

/// A searchable record derived from the component registry or the fixed
/// docs list.
///
/// Everything the palette filters, highlights, and navigates to is a
/// `SearchEntry`. Entries are immutable once constructed; `path` is the
/// navigation target and doubles as the entry's stable identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEntry {
    /// Record kind, used by the UI to pick an icon.
    pub kind: EntryKind,

    /// Primary display text.
    pub title: String,

    /// Secondary display text.
    pub description: String,

    /// Navigation target (e.g. "/components/modal").
    pub path: String,

    /// Category label (e.g. "Overlays", "Documentation").
    pub category: String,
}

impl SearchEntry {
    /// Create an entry with explicit fields.
    pub fn new(
        kind: EntryKind,
        title: impl Into<String>,
        description: impl Into<String>,
        path: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            path: path.into(),
            category: category.into(),
        }
    }

    /// Create a component entry; the path is derived from the slug.
    pub fn component(
        title: impl Into<String>,
        description: impl Into<String>,
        slug: &str,
        category: impl Into<String>,
    ) -> Self {
        Self::new(
            EntryKind::Component,
            title,
            description,
            format!("/components/{}", slug),
            category,
        )
    }

    /// Create a documentation entry.
    pub fn doc(
        title: impl Into<String>,
        description: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self::new(EntryKind::Doc, title, description, path, "Documentation")
    }

    /// Create a template entry.
    pub fn template(
        title: impl Into<String>,
        description: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self::new(EntryKind::Template, title, description, path, "Templates")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_path_from_slug() {
        let entry = SearchEntry::component("Modal", "Accessible dialog", "modal", "Overlays");
        assert_eq!(entry.kind, EntryKind::Component);
        assert_eq!(entry.path, "/components/modal");
        assert_eq!(entry.category, "Overlays");
    }

    #[test]
    fn test_doc_and_template_categories() {
        let doc = SearchEntry::doc("Introduction", "Getting started", "/docs/introduction");
        assert_eq!(doc.kind, EntryKind::Doc);
        assert_eq!(doc.category, "Documentation");

        let tpl = SearchEntry::template("SaaS Landing", "Landing page", "/components/modern-saas");
        assert_eq!(tpl.kind, EntryKind::Template);
        assert_eq!(tpl.category, "Templates");
    }
}
