//! Visibility filtering for the item set.
//!
//! The layout engine lays out only the visible subset: items whose name
//! matches the search query and whose percent change clears the
//! small-change cutoff (unless small changes are shown). Filtering is a
//! pure function so the caller re-places the field whenever the options
//! change.

use serde::Deserialize;

use glint_core::item::Item;

/// Items moving less than this (in percent, either direction) are hidden
/// unless `show_small_changes` is set.
pub const SMALL_CHANGE_THRESHOLD: f32 = 2.0;

/// Search and visibility options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    /// Case-insensitive substring matched against item names. Empty matches
    /// everything.
    pub query: String,
    /// When false, items with |percent_change| below
    /// [`SMALL_CHANGE_THRESHOLD`] are hidden.
    pub show_small_changes: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            query: String::new(),
            show_small_changes: true,
        }
    }
}

/// Returns the visible subset of `items` under the given options,
/// preserving input order.
pub fn visible<'a>(items: &'a [Item], options: &FilterOptions) -> Vec<&'a Item> {
    let query = options.query.to_lowercase();
    items
        .iter()
        .filter(|item| {
            let matches_search = query.is_empty() || item.name().to_lowercase().contains(&query);
            let matches_change = options.show_small_changes
                || item.percent_change().abs() >= SMALL_CHANGE_THRESHOLD;
            matches_search && matches_change
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use glint_core::{identifier::ItemId, item::Rarity};

    use super::*;

    fn item(name: &str, percent_change: f32) -> Item {
        Item::new(
            ItemId::new(&name.to_lowercase().replace(' ', "_")),
            name,
            100.0,
            percent_change,
            500.0,
            Rarity::Common,
        )
    }

    #[test]
    fn test_empty_query_matches_all() {
        let items = vec![item("Plush Pepe", 5.0), item("Signet Ring", -3.0)];
        let options = FilterOptions::default();
        assert_eq!(visible(&items, &options).len(), 2);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let items = vec![item("Plush Pepe", 5.0), item("Signet Ring", -3.0)];
        let options = FilterOptions {
            query: "PLUSH".to_string(),
            ..FilterOptions::default()
        };

        let matched = visible(&items, &options);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name(), "Plush Pepe");
    }

    #[test]
    fn test_small_changes_hidden() {
        let items = vec![
            item("Mover", 4.0),
            item("Sleeper", 0.5),
            item("Faller", -2.0),
        ];
        let options = FilterOptions {
            show_small_changes: false,
            ..FilterOptions::default()
        };

        let matched = visible(&items, &options);
        assert_eq!(matched.len(), 2);
        assert!(matched.iter().all(|item| item.name() != "Sleeper"));
    }

    #[test]
    fn test_filters_compose() {
        let items = vec![item("Berry Box", 0.1), item("Berry Crate", 6.0)];
        let options = FilterOptions {
            query: "berry".to_string(),
            show_small_changes: false,
        };

        let matched = visible(&items, &options);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name(), "Berry Crate");
    }
}
