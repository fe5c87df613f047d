//! Inventory sink behaviour, including appends from several threads.

use itemforge::{
    add_items_to_inventory, generate_random_items, Catalog, Inventory, ItemforgeResult,
    ScriptedSource, SharedInventory,
};
use std::thread;

#[test]
fn test_sampled_items_land_in_inventory() -> ItemforgeResult<()> {
    let catalog = Catalog::builtin();
    let mut inventory = Inventory::new();

    let items = generate_random_items(&catalog, 4, &mut ScriptedSource::new(vec![0, 1]))?;
    add_items_to_inventory(&mut inventory, items.clone());

    assert_eq!(inventory.items(), items.as_slice());
    Ok(())
}

#[test]
fn test_appends_preserve_prior_contents() {
    let catalog = Catalog::builtin();
    let a = catalog.items()[1].clone();
    let b = catalog.items()[0].clone();

    let mut inventory = Inventory::new();
    add_items_to_inventory(&mut inventory, vec![catalog.items()[2].clone()]);
    add_items_to_inventory(&mut inventory, vec![]);
    add_items_to_inventory(&mut inventory, vec![a.clone(), b.clone()]);

    assert_eq!(inventory.len(), 3);
    assert_eq!(inventory.items()[0], catalog.items()[2]);
    assert_eq!(inventory.items()[1], a);
    assert_eq!(inventory.items()[2], b);
}

#[test]
fn test_mutating_inventory_item_leaves_catalog_alone() {
    let catalog = Catalog::builtin();
    let mut inventory = Inventory::new();
    add_items_to_inventory(&mut inventory, catalog.items().to_vec());

    let mut items = inventory.into_items();
    items[0].value = 0;

    assert_eq!(catalog.items()[0].value, 25);
}

#[test]
fn test_concurrent_batches_do_not_interleave() {
    let catalog = Catalog::builtin();
    let shared = SharedInventory::default();
    let batch_size = 50;

    let handles: Vec<_> = (0..catalog.len())
        .map(|index| {
            let shared = shared.clone();
            let batch = vec![catalog.items()[index].clone(); batch_size];
            thread::spawn(move || shared.add_items(batch))
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let snapshot = shared.snapshot();
    assert_eq!(snapshot.len(), catalog.len() * batch_size);
    for chunk in snapshot.items().chunks(batch_size) {
        assert!(chunk.iter().all(|item| item.name == chunk[0].name));
    }
}
