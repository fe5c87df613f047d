//! # Inventory
//!
//! A caller-owned, append-only list of items and the sink that fills it.
//!
//! The inventory is always passed in explicitly. For callers on several
//! threads, [`SharedInventory`] serialises appends behind a mutex.

use crate::Item;
use log::info;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};

/// Ordered collection of items accumulated over time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends items in order after the existing contents.
    pub fn extend(&mut self, items: impl IntoIterator<Item = Item>) {
        self.items.extend(items);
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

    /// Consumes the inventory, returning its items.
    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}

impl From<Vec<Item>> for Inventory {
    fn from(items: Vec<Item>) -> Self {
        Self { items }
    }
}

/// Appends `items` to `inventory` and logs what was added.
///
/// An empty list still produces a log record (`[]`) and leaves the
/// inventory unchanged.
///
/// # Examples
///
/// ```
/// use itemforge::{add_items_to_inventory, Catalog, Inventory};
///
/// let catalog = Catalog::builtin();
/// let mut inventory = Inventory::new();
/// add_items_to_inventory(&mut inventory, catalog.items()[..2].to_vec());
///
/// assert_eq!(inventory.items()[0].name, "Small Health Potion");
/// assert_eq!(inventory.items()[1].name, "Large Health Potion");
/// ```
pub fn add_items_to_inventory(inventory: &mut Inventory, items: Vec<Item>) {
    info!("Items added to inventory: {}", describe(&items));
    inventory.extend(items);
}

fn describe(items: &[Item]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| format!("{:?}", items))
}

/// Cloneable handle to an inventory shared between threads.
#[derive(Debug, Clone, Default)]
pub struct SharedInventory {
    inner: Arc<Mutex<Inventory>>,
}

impl SharedInventory {
    pub fn new(inventory: Inventory) -> Self {
        Self {
            inner: Arc::new(Mutex::new(inventory)),
        }
    }

    /// Appends `items` under the lock, so concurrent batches never interleave.
    pub fn add_items(&self, items: Vec<Item>) {
        add_items_to_inventory(&mut self.lock(), items);
    }

    /// Copies out the current contents.
    pub fn snapshot(&self) -> Inventory {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic in another appender cannot leave a half-extended Vec behind,
    // so the poisoned guard is still consistent.
    fn lock(&self) -> MutexGuard<'_, Inventory> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalog;

    #[test]
    fn test_add_appends_in_order() {
        let catalog = Catalog::builtin();
        let mut inventory = Inventory::from(vec![catalog.items()[2].clone()]);

        add_items_to_inventory(
            &mut inventory,
            vec![catalog.items()[0].clone(), catalog.items()[1].clone()],
        );

        let names: Vec<&str> = inventory.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Elixir of Vitality", "Small Health Potion", "Large Health Potion"]
        );
    }

    #[test]
    fn test_add_empty_is_noop() {
        let mut inventory = Inventory::from(Catalog::builtin().items().to_vec());
        let before = inventory.clone();

        add_items_to_inventory(&mut inventory, Vec::new());
        assert_eq!(inventory, before);
    }

    #[test]
    fn test_describe_lists_items_as_json() {
        assert_eq!(describe(&[]), "[]");

        let text = describe(&Catalog::builtin().items()[..1]);
        assert!(text.starts_with('['));
        assert!(text.contains("Small Health Potion"));
    }

    #[test]
    fn test_shared_inventory_handles_share_state() {
        let shared = SharedInventory::default();
        let other = shared.clone();

        other.add_items(Catalog::builtin().items().to_vec());
        assert_eq!(shared.len(), 3);
        assert!(!shared.is_empty());
        assert_eq!(shared.snapshot().items()[0].name, "Small Health Potion");
    }
}
