//! The fixed menu: canonical item names and unit prices.

use std::collections::HashMap;

use crate::config::MenuEntry;
use crate::menu::matcher::{best_match, Match};

// ---------------------------------------------------------------------------
// MenuCatalog
// ---------------------------------------------------------------------------

/// Immutable item→price lookup table, built once at startup.
///
/// Names are lowercase-trimmed on ingest.  The configured entry list is
/// ordered and may contain duplicate names; the most recently listed price
/// wins, the name keeps its first-seen position in [`all_names`], and the
/// duplicate is logged as a catalog data-quality warning.
///
/// [`all_names`]: MenuCatalog::all_names
#[derive(Debug, Clone)]
pub struct MenuCatalog {
    /// Canonical names in stable first-seen order — the fuzzy-match universe.
    names: Vec<String>,
    /// Name → unit price index.
    prices: HashMap<String, u32>,
}

impl MenuCatalog {
    /// Build a catalog from ordered `(name, price)` entries.
    pub fn new(entries: &[MenuEntry]) -> Self {
        let mut names = Vec::with_capacity(entries.len());
        let mut prices = HashMap::with_capacity(entries.len());

        for entry in entries {
            let name = entry.name.trim().to_lowercase();
            if name.is_empty() {
                log::warn!("menu: skipping entry with empty name (price {})", entry.price);
                continue;
            }
            if let Some(previous) = prices.insert(name.clone(), entry.price) {
                log::warn!(
                    "menu: duplicate entry {name:?} — replacing price {previous} with {}",
                    entry.price
                );
            } else {
                names.push(name);
            }
        }

        Self { names, prices }
    }

    /// Unit price for `name`, or the `0` sentinel when the name is unknown.
    pub fn lookup_price(&self, name: &str) -> u32 {
        self.get(name).unwrap_or(0)
    }

    /// Unit price for `name`, `None` when the name is unknown.
    pub fn get(&self, name: &str) -> Option<u32> {
        self.prices.get(name).copied()
    }

    /// Canonical names in stable first-seen order.
    pub fn all_names(&self) -> &[String] {
        &self.names
    }

    /// Best fuzzy match for `candidate` against this catalog's names.
    ///
    /// `None` only when the catalog is empty.
    pub fn best_match(&self, candidate: &str) -> Option<Match> {
        best_match(candidate, &self.names)
    }

    /// Number of distinct item names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` when the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> MenuCatalog {
        MenuCatalog::new(&crate::config::AppConfig::default().menu)
    }

    #[test]
    fn lookup_known_name() {
        let catalog = catalog();
        assert_eq!(catalog.lookup_price("chicken burger"), 50);
        assert_eq!(catalog.lookup_price("veg momos"), 60);
        assert_eq!(catalog.get("vadapav"), Some(45));
    }

    #[test]
    fn lookup_unknown_name_returns_zero_sentinel() {
        let catalog = catalog();
        assert_eq!(catalog.lookup_price("biryani"), 0);
        assert_eq!(catalog.get("biryani"), None);
    }

    #[test]
    fn names_keep_configured_order() {
        let catalog = catalog();
        assert_eq!(catalog.all_names()[0], "chicken burger");
        assert_eq!(catalog.all_names()[1], "veg momos");
        assert_eq!(catalog.len(), 9);
    }

    #[test]
    fn names_are_lowercase_trimmed() {
        let catalog = MenuCatalog::new(&[MenuEntry::new("  Veg Pizza ", 80)]);
        assert_eq!(catalog.all_names(), ["veg pizza"]);
        assert_eq!(catalog.lookup_price("veg pizza"), 80);
    }

    /// Duplicate names: most recently listed price wins, first-seen position
    /// is kept.  Uses the original 13-item menu that lists "chicken pizza"
    /// twice (65, then 40).
    #[test]
    fn duplicate_name_last_price_wins() {
        let entries = [
            MenuEntry::new("chicken pizza", 65),
            MenuEntry::new("hamburger", 65),
            MenuEntry::new("club sandwich", 65),
            MenuEntry::new("chicken pizza", 40),
        ];
        let catalog = MenuCatalog::new(&entries);

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.all_names()[0], "chicken pizza");
        assert_eq!(catalog.lookup_price("chicken pizza"), 40);
    }

    #[test]
    fn empty_names_are_skipped() {
        let catalog = MenuCatalog::new(&[
            MenuEntry::new("   ", 10),
            MenuEntry::new("burrito", 70),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.lookup_price("burrito"), 70);
    }

    #[test]
    fn best_match_delegates_to_matcher() {
        let catalog = catalog();
        let m = catalog.best_match("veg momos").unwrap();
        assert_eq!(m.name, "veg momos");
        assert_eq!(m.score, 100);
    }

    #[test]
    fn empty_catalog() {
        let catalog = MenuCatalog::new(&[]);
        assert!(catalog.is_empty());
        assert!(catalog.best_match("anything").is_none());
    }
}
