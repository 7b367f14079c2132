//! Search & Filter
//!
//! Pure queries over the catalog used by the dashboard.

use serde::{Deserialize, Serialize};

use crate::item::{Item, ItemType};

/// Type filter from the dashboard select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Lost,
    Found,
}

impl TypeFilter {
    /// Select options as (value, label)
    pub const OPTIONS: [(TypeFilter, &'static str); 3] = [
        (TypeFilter::All, "All Items"),
        (TypeFilter::Lost, "Lost Items"),
        (TypeFilter::Found, "Found Items"),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeFilter::All => "all",
            TypeFilter::Lost => "lost",
            TypeFilter::Found => "found",
        }
    }

    /// Unknown values fall back to `All`
    pub fn parse(s: &str) -> Self {
        match s {
            "lost" => TypeFilter::Lost,
            "found" => TypeFilter::Found,
            _ => TypeFilter::All,
        }
    }

    pub fn matches(&self, item_type: ItemType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Lost => item_type == ItemType::Lost,
            TypeFilter::Found => item_type == ItemType::Found,
        }
    }
}

/// Items whose type passes `filter` and whose title, description or location
/// contains `search_term` (case-insensitive). Source order is kept.
pub fn filter_items<'a>(items: &'a [Item], search_term: &str, filter: TypeFilter) -> Vec<&'a Item> {
    let needle = search_term.to_lowercase();
    items
        .iter()
        .filter(|item| filter.matches(item.item_type))
        .filter(|item| {
            item.title.to_lowercase().contains(&needle)
                || item.description.to_lowercase().contains(&needle)
                || item.location.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Number of postings of one type, over the whole catalog
pub fn count_by_type(items: &[Item], item_type: ItemType) -> usize {
    items.iter().filter(|item| item.item_type == item_type).count()
}

pub fn find_item<'a>(items: &'a [Item], id: &str) -> Option<&'a Item> {
    items.iter().find(|item| item.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_catalog;
    use rstest::rstest;

    fn ids(found: &[&Item]) -> Vec<String> {
        found.iter().map(|i| i.id.clone()).collect()
    }

    #[test]
    fn test_all_with_empty_term_returns_full_catalog() {
        let items = seed_catalog();
        let found = filter_items(&items, "", TypeFilter::All);
        assert_eq!(ids(&found), vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_backpack_search() {
        let items = seed_catalog();
        let found = filter_items(&items, "backpack", TypeFilter::All);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Black Backpack");
    }

    #[rstest]
    #[case(TypeFilter::Lost, vec!["1", "3", "5"])]
    #[case(TypeFilter::Found, vec!["2", "4", "6"])]
    fn test_type_filter_keeps_order(#[case] filter: TypeFilter, #[case] expected: Vec<&str>) {
        let items = seed_catalog();
        assert_eq!(ids(&filter_items(&items, "", filter)), expected);
    }

    #[rstest]
    #[case("LIBRARY", vec!["1"])] // location and description
    #[case("parking", vec!["6"])]
    #[case("jessica", vec!["5"])] // description only
    #[case("building", vec!["2", "5"])]
    #[case("nothing matches this", vec![])]
    fn test_search_is_case_insensitive_across_fields(#[case] term: &str, #[case] expected: Vec<&str>) {
        let items = seed_catalog();
        assert_eq!(ids(&filter_items(&items, term, TypeFilter::All)), expected);
    }

    #[test]
    fn test_search_and_type_combine() {
        let items = seed_catalog();
        assert!(filter_items(&items, "backpack", TypeFilter::Lost).is_empty());
        assert_eq!(ids(&filter_items(&items, "building", TypeFilter::Lost)), vec!["5"]);
    }

    #[test]
    fn test_does_not_search_contact_name() {
        let items = seed_catalog();
        assert!(filter_items(&items, "Mike Chen", TypeFilter::All).is_empty());
    }

    #[test]
    fn test_counts() {
        let items = seed_catalog();
        assert_eq!(count_by_type(&items, ItemType::Lost), 3);
        assert_eq!(count_by_type(&items, ItemType::Found), 3);
    }

    #[test]
    fn test_find_item() {
        let items = seed_catalog();
        assert_eq!(find_item(&items, "4").map(|i| i.contact_name.as_str()), Some("Alex Thompson"));
        assert!(find_item(&items, "42").is_none());
    }

    #[test]
    fn test_type_filter_parse() {
        assert_eq!(TypeFilter::parse("lost"), TypeFilter::Lost);
        assert_eq!(TypeFilter::parse("found"), TypeFilter::Found);
        assert_eq!(TypeFilter::parse("all"), TypeFilter::All);
        assert_eq!(TypeFilter::parse("garbage"), TypeFilter::All);
    }

    #[test]
    fn test_type_filter_select_values() {
        for (option, _) in TypeFilter::OPTIONS {
            assert_eq!(TypeFilter::parse(option.as_str()), option);
        }
    }
}
