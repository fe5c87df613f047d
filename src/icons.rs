//! # Icon Prompts
//!
//! Text prompts and output filenames for rendering one icon per item with an
//! image model.

use crate::config::ICON_EXTENSION;
use crate::{Item, ItemType};

const STYLE_GUIDANCE: &str = " Use a vibrant fantasy art style with clear details and a transparent background. Make it look professional like items from World of Warcraft or Diablo.";

/// Builds the image prompt for an item.
///
/// # Examples
///
/// ```
/// use itemforge::{icon_prompt, Catalog};
///
/// let catalog = Catalog::builtin();
/// let prompt = icon_prompt(catalog.get(0).unwrap());
/// assert!(prompt.starts_with(
///     "Generate a detailed 2D game icon for a common consumable item called 'Small Health Potion'."
/// ));
/// ```
pub fn icon_prompt(item: &Item) -> String {
    let mut prompt = format!(
        "Generate a detailed 2D game icon for a {} {} item called '{}'. {}",
        item.rarity.as_str().to_lowercase(),
        item.item_type,
        item.name,
        item.description
    );

    match item.item_type {
        ItemType::Consumable => {
            prompt.push_str(" The icon should be suitable for a fantasy RPG consumable item.")
        }
        ItemType::Equipment => prompt
            .push_str(" The icon should look like a high-quality fantasy RPG weapon or equipment."),
        ItemType::Material => prompt
            .push_str(" The icon should represent a crafting material in a fantasy RPG game."),
        ItemType::Other(_) => {}
    }

    prompt.push_str(STYLE_GUIDANCE);
    prompt
}

/// Turns an item name into a lowercase icon filename.
///
/// Characters that are unsafe in filenames, and spaces, become underscores.
///
/// # Examples
///
/// ```
/// use itemforge::icon_filename;
///
/// assert_eq!(icon_filename("Elixir of Vitality"), "elixir_of_vitality.png");
/// assert_eq!(icon_filename("What? No/Yes"), "what__no_yes.png");
/// ```
pub fn icon_filename(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| match c {
            '\\' | '/' | '*' | '?' | ':' | '"' | '<' | '>' | '|' | ' ' => '_',
            other => other,
        })
        .collect();

    format!("{}.{}", stem.to_lowercase(), ICON_EXTENSION)
}
