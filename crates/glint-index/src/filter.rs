//! The filter engine.
//!
//! A pure, synchronous substring filter: no scoring, no stemming, no
//! reordering. Matches keep their index order and the result is capped.

use glint_core::SearchEntry;

/// Default cap on the number of results shown in the palette.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Filter `entries` by `query`.
///
/// A query that trims to empty returns no results (the palette shows its
/// empty-state prompt instead of the full index). Otherwise an entry
/// matches if its title, description, or category contains the query,
/// case-insensitively. Order is preserved; at most `limit` entries are
/// returned.
pub fn filter(query: &str, entries: &[SearchEntry], limit: usize) -> Vec<SearchEntry> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    entries
        .iter()
        .filter(|entry| matches(entry, &needle))
        .take(limit)
        .cloned()
        .collect()
}

/// Substring test against the three searchable fields.
///
/// `needle` must already be lowercased and non-empty.
fn matches(entry: &SearchEntry, needle: &str) -> bool {
    entry.title.to_lowercase().contains(needle)
        || entry.description.to_lowercase().contains(needle)
        || entry.category.to_lowercase().contains(needle)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::EntryKind;

    fn entry(title: &str, description: &str, category: &str) -> SearchEntry {
        SearchEntry::new(
            EntryKind::Component,
            title,
            description,
            format!("/components/{}", title.to_lowercase()),
            category,
        )
    }

    fn sample() -> Vec<SearchEntry> {
        vec![
            entry("Button", "Base action button", "Buttons"),
            entry("Badge", "Status badge", "Display"),
            entry("Card", "Surface container", "Cards"),
        ]
    }

    #[test]
    fn test_empty_and_whitespace_queries() {
        let entries = sample();
        assert!(filter("", &entries, DEFAULT_MAX_RESULTS).is_empty());
        assert!(filter("   ", &entries, DEFAULT_MAX_RESULTS).is_empty());
        assert!(filter("\t\n", &entries, DEFAULT_MAX_RESULTS).is_empty());
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        let entries = sample();
        let results = filter("ba", &entries, DEFAULT_MAX_RESULTS);
        let titles: Vec<_> = results.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["Button", "Badge"]);

        let results = filter("BA", &entries, DEFAULT_MAX_RESULTS);
        let titles: Vec<_> = results.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["Button", "Badge"]);
    }

    #[test]
    fn test_matches_any_of_the_three_fields() {
        let entries = vec![
            entry("Alpha", "nothing here", "Misc"),
            entry("Beta", "a glowing description", "Misc"),
            entry("Gamma", "nothing here", "Glow"),
        ];

        let results = filter("glow", &entries, DEFAULT_MAX_RESULTS);
        let titles: Vec<_> = results.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["Beta", "Gamma"]);
    }

    #[test]
    fn test_non_matching_entries_are_excluded() {
        let entries = sample();
        let results = filter("ba", &entries, DEFAULT_MAX_RESULTS);
        assert!(results.iter().all(|e| e.title != "Card"));
    }

    #[test]
    fn test_result_cap() {
        let entries: Vec<_> = (0..10)
            .map(|i| entry(&format!("Widget {}", i), "a widget", "Widgets"))
            .collect();

        let results = filter("widget", &entries, 5);
        assert_eq!(results.len(), 5);
        // Stable: the first five in index order survive the cap
        assert_eq!(results[0].title, "Widget 0");
        assert_eq!(results[4].title, "Widget 4");
    }

    #[test]
    fn test_order_is_stable() {
        let entries = vec![
            entry("Zebra Panel", "striped", "Panels"),
            entry("Apple Panel", "fruity", "Panels"),
            entry("Mango Panel", "tropical", "Panels"),
        ];

        let results = filter("panel", &entries, DEFAULT_MAX_RESULTS);
        let titles: Vec<_> = results.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["Zebra Panel", "Apple Panel", "Mango Panel"]);
    }

    #[test]
    fn test_query_is_trimmed_before_matching() {
        let entries = sample();
        let results = filter("  badge  ", &entries, DEFAULT_MAX_RESULTS);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Badge");
    }
}
