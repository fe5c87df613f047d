//! Loading catalogs from JSON files.

use itemforge::{
    generate_random_items, Catalog, ItemType, ItemforgeError, ItemforgeResult, Rarity,
    ScriptedSource, StatValue,
};
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

#[test]
fn test_builtin_catalog_survives_file_round_trip() -> ItemforgeResult<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(Catalog::builtin().to_json()?.as_bytes())?;

    let loaded = Catalog::load(file.path())?;
    assert_eq!(loaded, Catalog::builtin());
    Ok(())
}

#[test]
fn test_custom_catalog_drives_sampling() -> ItemforgeResult<()> {
    let mut file = NamedTempFile::new()?;
    write!(
        file,
        r#"[
            {{
                "name": "Iron Sword",
                "description": "A plain blade.",
                "type": "equipment",
                "rarity": "Common",
                "value": 40,
                "stats": {{ "damage": 7 }}
            }},
            {{
                "name": "Phoenix Feather",
                "description": "Warm to the touch.",
                "type": "material",
                "rarity": "Legendary",
                "value": 900,
                "stats": {{ "burn": "30 seconds", "origin": "volcano" }}
            }}
        ]"#
    )?;

    let catalog = Catalog::load(file.path())?;
    assert_eq!(catalog.len(), 2);

    let feather = catalog.find_by_name("Phoenix Feather").unwrap();
    assert_eq!(feather.item_type, ItemType::Material);
    assert_eq!(feather.rarity, Rarity::Legendary);
    assert_eq!(
        feather.stat("burn"),
        Some(&StatValue::Duration(Duration::from_secs(30)))
    );
    assert_eq!(
        feather.stat("origin"),
        Some(&StatValue::Text("volcano".to_string()))
    );

    let items = generate_random_items(&catalog, 3, &mut ScriptedSource::new(vec![1, 0, 1]))?;
    let names: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["Phoenix Feather", "Iron Sword", "Phoenix Feather"]);
    Ok(())
}

#[test]
fn test_loaded_catalog_writes_back_unchanged() -> ItemforgeResult<()> {
    let original = r#"[
  {
    "name": "Frost Charm",
    "description": "Cold.",
    "type": "trinket",
    "rarity": "Mythic",
    "value": -5,
    "stats": {
      "cooldown": "5 min",
      "critChance": 0.25,
      "duration": "90 seconds",
      "label": "60 s"
    }
  }
]"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(original.as_bytes())?;

    let catalog = Catalog::load(file.path())?;
    let charm = catalog.get(0).unwrap();
    assert_eq!(charm.value, -5);
    assert_eq!(charm.stat("critChance").and_then(StatValue::as_f64), Some(0.25));
    assert_eq!(
        charm.stat("cooldown"),
        Some(&StatValue::Text("5 min".to_string()))
    );
    assert_eq!(
        charm.stat("duration").and_then(StatValue::as_duration),
        Some(Duration::from_secs(90))
    );

    assert_eq!(catalog.to_json()?, original);
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Catalog::load(dir.path().join("missing.json"));
    assert!(matches!(result, Err(ItemforgeError::Io(_))));
}

#[test]
fn test_malformed_file_is_serde_error() -> ItemforgeResult<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"[{\"name\": \"Half an item\"}]")?;

    assert!(matches!(
        Catalog::load(file.path()),
        Err(ItemforgeError::Serde(_))
    ));
    Ok(())
}

#[test]
fn test_empty_file_catalog_cannot_be_sampled() -> ItemforgeResult<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"[]")?;

    let catalog = Catalog::load(file.path())?;
    assert!(matches!(
        generate_random_items(&catalog, 1, &mut ScriptedSource::default()),
        Err(ItemforgeError::EmptyCatalog)
    ));
    Ok(())
}
