//! Catalog collection with lookup, search, and menu rendering.

use std::collections::BTreeMap;

use crate::domain::foundation::DomainError;

use super::item::MenuItem;
use super::sample::sample_items;

/// Read-only collection of menu items, searchable by id, category, and text.
///
/// Iteration order is the construction order and is stable across calls.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Builds a catalog from a list of items.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if two items share an id
    pub fn new(items: Vec<MenuItem>) -> Result<Self, DomainError> {
        for (i, item) in items.iter().enumerate() {
            if items[..i].iter().any(|other| other.id() == item.id()) {
                return Err(DomainError::validation(
                    "id",
                    format!("Duplicate menu item id '{}'", item.id()),
                ));
            }
        }
        Ok(Self { items })
    }

    /// Builds the standard NoPickles menu.
    pub fn sample() -> Self {
        // sample_items carries no duplicate ids.
        Self::new(sample_items()).expect("sample menu is valid")
    }

    /// Returns all items in catalog order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Looks up an item by id.
    pub fn by_id(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Returns all items in a category, matched case-insensitively.
    ///
    /// An empty result signals "no such category" to the caller.
    pub fn by_category(&self, category: &str) -> Vec<&MenuItem> {
        self.items
            .iter()
            .filter(|item| item.category().eq_ignore_ascii_case(category))
            .collect()
    }

    /// Searches items whose name or description contains the query,
    /// case-insensitively.
    pub fn search(&self, query: &str) -> Vec<&MenuItem> {
        let query = query.to_lowercase();
        self.items
            .iter()
            .filter(|item| {
                item.name().to_lowercase().contains(&query)
                    || item
                        .description()
                        .is_some_and(|d| d.to_lowercase().contains(&query))
            })
            .collect()
    }

    /// Renders the menu as human-readable text, grouped by category.
    ///
    /// Categories are sorted lexically; items keep catalog order within
    /// their category.
    pub fn menu_text(&self) -> String {
        let mut categories: BTreeMap<&str, Vec<&MenuItem>> = BTreeMap::new();
        for item in &self.items {
            categories.entry(item.category()).or_default().push(item);
        }

        let mut text = String::from("\n=== MENU ===\n");
        for (category, items) in categories {
            text.push_str(&format!("\n{}:\n", category.to_uppercase()));
            for item in items {
                text.push_str(&format!("  - {}: {}\n", item.name(), item.price()));
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Price;

    #[test]
    fn sample_catalog_has_fourteen_items() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.items().len(), 14);
    }

    #[test]
    fn items_order_is_stable() {
        let catalog = Catalog::sample();
        let first: Vec<&str> = catalog.items().iter().map(|i| i.id()).collect();
        let second: Vec<&str> = catalog.items().iter().map(|i| i.id()).collect();
        assert_eq!(first, second);
        assert_eq!(first[0], "burger1");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let items = vec![
            MenuItem::new("x", "One", "a", Price::from_cents(100)),
            MenuItem::new("x", "Two", "a", Price::from_cents(200)),
        ];
        let result = Catalog::new(items);
        assert!(result.is_err());
    }

    #[test]
    fn by_id_finds_existing_item() {
        let catalog = Catalog::sample();
        let item = catalog.by_id("burger1").unwrap();
        assert_eq!(item.name(), "Classic Burger");
        assert_eq!(item.price(), Price::from_cents(699));
    }

    #[test]
    fn by_id_returns_none_for_unknown_item() {
        let catalog = Catalog::sample();
        assert!(catalog.by_id("pizza99").is_none());
    }

    #[test]
    fn by_category_is_case_insensitive() {
        let catalog = Catalog::sample();
        let burgers = catalog.by_category("BURGERS");
        assert_eq!(burgers.len(), 4);
        assert!(burgers.iter().all(|i| i.category() == "burgers"));
    }

    #[test]
    fn by_category_unknown_is_empty() {
        let catalog = Catalog::sample();
        assert!(catalog.by_category("sushi").is_empty());
    }

    #[test]
    fn search_matches_name_case_insensitively() {
        let catalog = Catalog::sample();
        let hits = catalog.search("coke");
        assert_eq!(hits.len(), 3);
    }

    #[test]
    fn search_matches_description() {
        let catalog = Catalog::sample();
        // "spring water" only appears in the Bottled Water description.
        let hits = catalog.search("spring");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name(), "Bottled Water");
    }

    #[test]
    fn search_no_match_is_empty() {
        let catalog = Catalog::sample();
        assert!(catalog.search("sushi").is_empty());
    }

    #[test]
    fn menu_text_groups_by_sorted_category() {
        let catalog = Catalog::sample();
        let text = catalog.menu_text();

        assert!(text.starts_with("\n=== MENU ===\n"));
        assert!(text.contains("BURGERS:"));
        assert!(text.contains("  - Classic Burger: $6.99\n"));
        assert!(text.contains("  - Small Coke: $1.99\n"));

        // Lexical category order: burgers < desserts < drinks < sides.
        let burgers = text.find("BURGERS:").unwrap();
        let desserts = text.find("DESSERTS:").unwrap();
        let drinks = text.find("DRINKS:").unwrap();
        let sides = text.find("SIDES:").unwrap();
        assert!(burgers < desserts && desserts < drinks && drinks < sides);
    }
}
