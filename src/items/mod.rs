//! # Items Module
//!
//! The item record handed out by the generator and stored in inventories.
//!
//! Items are plain owned data: cloning one produces a fully independent copy,
//! including its stats map, so templates held by a [`Catalog`] are never
//! affected by what callers do with sampled items.

pub mod catalog;

pub use catalog::*;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// A named, typed game object with descriptive and stat fields.
///
/// # Examples
///
/// ```
/// use itemforge::{Item, ItemType, Rarity, StatValue};
///
/// let item = Item::new("Mana Potion", "Restores 40 mana.", ItemType::Consumable, Rarity::Common, 30)
///     .with_stat("manaRestore", StatValue::Number(40.into()));
/// assert_eq!(item.stat("manaRestore"), Some(&StatValue::Number(40.into())));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display name, unique within a catalog by convention
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Category tag
    #[serde(rename = "type")]
    pub item_type: ItemType,
    /// Rarity tier
    pub rarity: Rarity,
    /// In-game currency cost
    pub value: i64,
    /// Per-item stats; the set of keys varies between items
    #[serde(default)]
    pub stats: BTreeMap<String, StatValue>,
}

impl Item {
    /// Creates an item with no stats.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        item_type: ItemType,
        rarity: Rarity,
        value: i64,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            item_type,
            rarity,
            value,
            stats: BTreeMap::new(),
        }
    }

    /// Adds or replaces a stat, returning the item.
    pub fn with_stat(mut self, key: impl Into<String>, value: StatValue) -> Self {
        self.stats.insert(key.into(), value);
        self
    }

    /// Sets a stat in place.
    pub fn set_stat(&mut self, key: impl Into<String>, value: StatValue) {
        self.stats.insert(key.into(), value);
    }

    /// Gets a stat by key.
    pub fn stat(&self, key: &str) -> Option<&StatValue> {
        self.stats.get(key)
    }
}

/// Category of an item.
///
/// Unknown categories are kept verbatim in [`ItemType::Other`] so catalogs
/// can introduce new ones without a code change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemType {
    Consumable,
    Equipment,
    Material,
    Other(String),
}

impl ItemType {
    pub fn as_str(&self) -> &str {
        match self {
            ItemType::Consumable => "consumable",
            ItemType::Equipment => "equipment",
            ItemType::Material => "material",
            ItemType::Other(tag) => tag,
        }
    }
}

impl From<String> for ItemType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "consumable" => ItemType::Consumable,
            "equipment" => ItemType::Equipment,
            "material" => ItemType::Material,
            _ => ItemType::Other(tag),
        }
    }
}

impl From<ItemType> for String {
    fn from(item_type: ItemType) -> Self {
        match item_type {
            ItemType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rarity tier of an item.
///
/// The list of tiers is open-ended; anything not listed here round-trips
/// through [`Rarity::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Other(String),
}

impl Rarity {
    pub fn as_str(&self) -> &str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Other(tier) => tier,
        }
    }
}

impl From<String> for Rarity {
    fn from(tier: String) -> Self {
        match tier.as_str() {
            "Common" => Rarity::Common,
            "Uncommon" => Rarity::Uncommon,
            "Rare" => Rarity::Rare,
            "Epic" => Rarity::Epic,
            "Legendary" => Rarity::Legendary,
            _ => Rarity::Other(tier),
        }
    }
}

impl From<Rarity> for String {
    fn from(rarity: Rarity) -> Self {
        match rarity {
            Rarity::Other(tier) => tier,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of a single item stat.
///
/// On the JSON wire a number stays a number (integer or fractional), a
/// duration is written in the canonical text form produced by
/// [`duration_text::format`] such as `"5 minutes"`, and any other string is
/// plain text. Only canonical duration strings become [`StatValue::Duration`];
/// `"5 min"` stays text so a catalog reads back exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(serde_json::Number),
    Duration(#[serde(with = "duration_text")] Duration),
    Text(String),
}

impl StatValue {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            StatValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StatValue::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_duration(&self) -> Option<Duration> {
        match self {
            StatValue::Duration(d) => Some(*d),
            _ => None,
        }
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Number(n) => write!(f, "{}", n),
            StatValue::Duration(d) => f.write_str(&duration_text::format(*d)),
            StatValue::Text(text) => f.write_str(text),
        }
    }
}

/// Human-readable durations of the form `<amount> <unit>`.
///
/// Precision is one millisecond: anything finer is truncated by [`format`].
pub mod duration_text {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    const MILLIS_PER_SECOND: u64 = 1_000;
    const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
    const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;

    /// Parses `"5 minutes"`, `"1 hour"`, `"250 milliseconds"` and their short forms.
    ///
    /// # Examples
    ///
    /// ```
    /// use itemforge::duration_text;
    /// use std::time::Duration;
    ///
    /// assert_eq!(duration_text::parse("5 minutes"), Some(Duration::from_secs(300)));
    /// assert_eq!(duration_text::parse("5 min"), Some(Duration::from_secs(300)));
    /// assert_eq!(duration_text::parse("five minutes"), None);
    /// ```
    pub fn parse(text: &str) -> Option<Duration> {
        let mut parts = text.split_whitespace();
        let amount: u64 = parts.next()?.parse().ok()?;
        let unit = parts.next()?;
        if parts.next().is_some() {
            return None;
        }

        let millis_per_unit = match unit.to_lowercase().as_str() {
            "ms" | "millisecond" | "milliseconds" => 1,
            "s" | "sec" | "secs" | "second" | "seconds" => MILLIS_PER_SECOND,
            "m" | "min" | "mins" | "minute" | "minutes" => MILLIS_PER_MINUTE,
            "h" | "hr" | "hrs" | "hour" | "hours" => MILLIS_PER_HOUR,
            _ => return None,
        };

        amount.checked_mul(millis_per_unit).map(Duration::from_millis)
    }

    /// Parses only the exact spelling [`format`] would produce.
    pub fn parse_canonical(text: &str) -> Option<Duration> {
        parse(text).filter(|duration| format(*duration) == text)
    }

    /// Formats a duration using the largest unit that divides it evenly.
    ///
    /// Sub-millisecond remainders are dropped.
    pub fn format(duration: Duration) -> String {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        let (amount, unit) = if millis == 0 {
            (0, "second")
        } else if millis % MILLIS_PER_HOUR == 0 {
            (millis / MILLIS_PER_HOUR, "hour")
        } else if millis % MILLIS_PER_MINUTE == 0 {
            (millis / MILLIS_PER_MINUTE, "minute")
        } else if millis % MILLIS_PER_SECOND == 0 {
            (millis / MILLIS_PER_SECOND, "second")
        } else {
            (millis, "millisecond")
        };

        if amount == 1 {
            format!("{} {}", amount, unit)
        } else {
            format!("{} {}s", amount, unit)
        }
    }

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(*duration))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_canonical(&text)
            .ok_or_else(|| Error::custom(format!("not a canonical duration: {:?}", text)))
    }
}
