//! # Item Catalog
//!
//! The fixed, ordered set of item templates the generator draws from.

use super::{Item, ItemType, Rarity, StatValue};
use crate::ItemforgeResult;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// An ordered list of item templates.
///
/// The catalog performs no validation: entries are accepted as given,
/// duplicate names included. Templates are only ever read; callers get
/// clones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Creates the built-in catalog of health potions.
    ///
    /// # Examples
    ///
    /// ```
    /// use itemforge::Catalog;
    ///
    /// let catalog = Catalog::builtin();
    /// assert_eq!(catalog.len(), 3);
    /// assert_eq!(catalog.get(0).unwrap().name, "Small Health Potion");
    /// ```
    pub fn builtin() -> Self {
        Self::from_items(vec![
            Item::new(
                "Small Health Potion",
                "Restores 50 health points.",
                ItemType::Consumable,
                Rarity::Common,
                25,
            )
            .with_stat("healthRestore", StatValue::Number(50.into())),
            Item::new(
                "Large Health Potion",
                "Restores 150 health points.",
                ItemType::Consumable,
                Rarity::Uncommon,
                75,
            )
            .with_stat("healthRestore", StatValue::Number(150.into())),
            Item::new(
                "Elixir of Vitality",
                "Restores 300 health points and increases maximum health temporarily.",
                ItemType::Consumable,
                Rarity::Rare,
                200,
            )
            .with_stat("healthRestore", StatValue::Number(300.into()))
            .with_stat("maxHealthIncrease", StatValue::Number(50.into()))
            .with_stat("duration", StatValue::Duration(Duration::from_secs(5 * 60))),
        ])
    }

    /// Wraps an arbitrary list of templates.
    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Parses a catalog from a JSON array of items.
    pub fn from_json(json: &str) -> ItemforgeResult<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        Ok(catalog)
    }

    /// Reads a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> ItemforgeResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        debug!("Loaded {} catalog entries from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Serializes the catalog to pretty-printed JSON.
    pub fn to_json(&self) -> ItemforgeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Gets the template at `index`.
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Finds the first template with the given name.
    pub fn find_by_name(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Returns true if some template equals `item` field for field.
    pub fn contains(&self, item: &Item) -> bool {
        self.items.contains(item)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
