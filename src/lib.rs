//! # itemforge
//!
//! Sample item data for icon generation pipelines.
//!
//! ## Architecture Overview
//!
//! - **Items**: the item record, its open-schema stats and the built-in catalog
//! - **Generation**: uniform sampling with replacement over a catalog, driven by
//!   an injectable random source
//! - **Inventory**: a caller-owned item list with a logging append sink
//! - **Icons**: prompt and filename helpers for rendering an icon per item
//!
//! ```
//! use itemforge::{add_items_to_inventory, generate_random_items, Catalog, Inventory};
//! use rand::SeedableRng;
//!
//! let catalog = Catalog::builtin();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let items = generate_random_items(&catalog, 5, &mut rng).unwrap();
//!
//! let mut inventory = Inventory::new();
//! add_items_to_inventory(&mut inventory, items);
//! assert_eq!(inventory.len(), 5);
//! ```

pub mod generation;
pub mod icons;
pub mod inventory;
pub mod items;

pub use generation::*;
pub use icons::*;
pub use inventory::*;
pub use items::*;

/// Core error type for item generation.
#[derive(thiserror::Error, Debug)]
pub enum ItemforgeError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Caller supplied an out-of-range argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Sampling was requested from a catalog with no entries
    #[error("Cannot sample from an empty catalog")]
    EmptyCatalog,

    /// Generated content failed validation
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
}

/// Result type used throughout the itemforge codebase.
pub type ItemforgeResult<T> = Result<T, ItemforgeError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration constants.
pub mod config {
    /// Number of items sampled when no count is given
    pub const DEFAULT_SAMPLE_COUNT: usize = 5;

    /// Largest count the command line accepts
    pub const MAX_SAMPLE_COUNT: usize = 1_000_000;

    /// File extension of generated icons
    pub const ICON_EXTENSION: &str = "png";
}
