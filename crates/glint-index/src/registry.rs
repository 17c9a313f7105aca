//! The component registry.
//!
//! A [`Registry`] is an explicitly constructed, read-only, ordered list of
//! component descriptors. It is built once per process and injected into
//! the index; nothing mutates it afterwards. Each construction gets a fresh
//! version stamp so downstream caches can tell registries apart.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

// =============================================================================
// Component Descriptor
// =============================================================================

/// A single component in the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    /// Display name, e.g. "Glass Card".
    pub name: String,

    /// URL slug, e.g. "glass-card".
    pub slug: String,

    /// One-line description shown under the name.
    pub description: String,

    /// Category label, e.g. "Cards".
    pub category: String,
}

impl ComponentDescriptor {
    /// Create a descriptor with required fields.
    pub fn new(
        name: impl Into<String>,
        slug: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            description: description.into(),
            category: category.into(),
        }
    }
}

// =============================================================================
// Registry
// =============================================================================

/// Generate a unique version stamp for a registry.
fn next_version() -> u64 {
    static COUNTER: AtomicU64 = AtomicU64::new(1);
    COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Ordered, immutable catalogue of component descriptors.
#[derive(Debug)]
pub struct Registry {
    components: Vec<ComponentDescriptor>,
    version: u64,
}

impl Registry {
    /// Create a registry from a list of descriptors.
    pub fn new(components: Vec<ComponentDescriptor>) -> Self {
        Self {
            components,
            version: next_version(),
        }
    }

    /// Start building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// The built-in Glint UI catalogue.
    pub fn builtin() -> Self {
        Registry::builder()
            .component("Button", "button", "Core button with variants, sizes, and loading state", "Buttons")
            .component("Shimmer Button", "shimmer-button", "Button with an animated shimmer sweep", "Buttons")
            .component("Star Border", "star-border", "Button wrapper with an orbiting star border", "Buttons")
            .component("Card", "card", "Surface container with header, body, and footer slots", "Cards")
            .component("Glass Card", "glass-card", "Frosted glass card with backdrop blur", "Cards")
            .component("Glowing Card", "glowing-card", "Card with a pointer-tracking glow", "Cards")
            .component("Property Showcase Card", "property-showcase-card", "Listing card for property showcases", "Cards")
            .component("Modal", "modal", "Accessible modal dialog with backdrop and sizes", "Overlays")
            .component("Tabs", "tabs", "Tabbed navigation with animated indicator", "Navigation")
            .component("Dock", "dock", "macOS-style magnifying dock", "Navigation")
            .component("Accordion", "accordion", "Collapsible content sections", "Layout")
            .component("Badge", "badge", "Status badge with color variants", "Display")
            .component("Progress", "progress", "Progress bar with determinate and indeterminate modes", "Feedback")
            .component("Gradient Text", "gradient-text", "Text with an animated gradient fill", "Text")
            .component("Typewriter Text", "typewriter-text", "Text that types itself character by character", "Text")
            .component("Decrypted Text", "decrypted-text", "Scramble-to-reveal text effect", "Text")
            .component("Animated Gradient", "animated-gradient", "Animated gradient background layer", "Backgrounds")
            .component("Modern SaaS", "modern-saas", "Complete SaaS landing page template", "Templates")
            .component("Gandom Dashboard", "gandom-dashboard", "Analytics dashboard template with charts and tables", "Templates")
            .build()
    }

    /// The descriptors in catalogue order.
    pub fn components(&self) -> &[ComponentDescriptor] {
        &self.components
    }

    /// Version stamp; differs between any two constructed registries.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

// =============================================================================
// Registry Builder
// =============================================================================

/// Builder for [`Registry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    components: Vec<ComponentDescriptor>,
}

impl RegistryBuilder {
    /// Append a component descriptor.
    pub fn component(
        mut self,
        name: impl Into<String>,
        slug: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        self.components
            .push(ComponentDescriptor::new(name, slug, description, category));
        self
    }

    /// Finish building.
    pub fn build(self) -> Registry {
        Registry::new(self.components)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_preserves_order() {
        let registry = Registry::builder()
            .component("Button", "button", "A button", "Buttons")
            .component("Badge", "badge", "A badge", "Display")
            .build();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.components()[0].slug, "button");
        assert_eq!(registry.components()[1].slug, "badge");
    }

    #[test]
    fn test_versions_are_unique() {
        let a = Registry::new(Vec::new());
        let b = Registry::new(Vec::new());
        assert_ne!(a.version(), b.version());
    }

    #[test]
    fn test_builtin_catalogue() {
        let registry = Registry::builtin();
        assert!(!registry.is_empty());
        assert!(registry.components().iter().any(|c| c.slug == "modal"));
        assert!(registry
            .components()
            .iter()
            .any(|c| c.category == "Templates"));
    }
}
