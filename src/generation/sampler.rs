//! # Item Sampler
//!
//! Uniform sampling with replacement over a [`Catalog`].

use crate::{Catalog, GenerationConfig, Generator, Item, ItemforgeError, ItemforgeResult, RandomSource};
use log::debug;

/// Draws random items from a catalog.
///
/// Every draw picks an index uniformly in `[0, catalog.len())` and clones the
/// template found there. The same template can come up any number of times.
#[derive(Debug, Clone)]
pub struct ItemGenerator {
    catalog: Catalog,
}

impl ItemGenerator {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Samples `count` independent copies of catalog entries.
    ///
    /// Fails with [`ItemforgeError::EmptyCatalog`] when the catalog has no
    /// entries, whatever the count.
    ///
    /// # Examples
    ///
    /// ```
    /// use itemforge::{Catalog, ItemGenerator, ScriptedSource};
    ///
    /// let generator = ItemGenerator::new(Catalog::builtin());
    /// let items = generator.sample(2, &mut ScriptedSource::new(vec![2, 0])).unwrap();
    /// assert_eq!(items[0].name, "Elixir of Vitality");
    /// assert_eq!(items[1].name, "Small Health Potion");
    /// ```
    pub fn sample<R>(&self, count: usize, rng: &mut R) -> ItemforgeResult<Vec<Item>>
    where
        R: RandomSource + ?Sized,
    {
        draw(&self.catalog, count, rng)
    }
}

impl Default for ItemGenerator {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

impl Generator<Vec<Item>> for ItemGenerator {
    fn generate(
        &self,
        config: &GenerationConfig,
        rng: &mut dyn RandomSource,
    ) -> ItemforgeResult<Vec<Item>> {
        let items = self.sample(config.count, rng)?;
        self.validate(&items, config)?;
        Ok(items)
    }

    fn validate(&self, content: &Vec<Item>, config: &GenerationConfig) -> ItemforgeResult<()> {
        if content.len() != config.count {
            return Err(ItemforgeError::GenerationFailed(format!(
                "expected {} items, got {}",
                config.count,
                content.len()
            )));
        }

        if let Some(stray) = content.iter().find(|item| !self.catalog.contains(item)) {
            return Err(ItemforgeError::GenerationFailed(format!(
                "item '{}' does not match any catalog entry",
                stray.name
            )));
        }

        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "ItemGenerator"
    }
}

/// Samples `count` items from `catalog` using `rng`.
///
/// A negative `count` is rejected with [`ItemforgeError::InvalidArgument`]
/// rather than clamped to zero.
///
/// # Examples
///
/// ```
/// use itemforge::{generate_random_items, Catalog, ItemforgeError};
///
/// let catalog = Catalog::builtin();
/// let mut rng = rand::thread_rng();
///
/// assert_eq!(generate_random_items(&catalog, 5, &mut rng).unwrap().len(), 5);
/// assert!(matches!(
///     generate_random_items(&catalog, -1, &mut rng),
///     Err(ItemforgeError::InvalidArgument(_))
/// ));
/// ```
pub fn generate_random_items<R>(catalog: &Catalog, count: i64, rng: &mut R) -> ItemforgeResult<Vec<Item>>
where
    R: RandomSource + ?Sized,
{
    draw(catalog, checked_count(count)?, rng)
}

/// Converts a caller-supplied count, rejecting negatives.
pub(crate) fn checked_count(count: i64) -> ItemforgeResult<usize> {
    usize::try_from(count).map_err(|_| {
        ItemforgeError::InvalidArgument(format!("count must be non-negative, got {}", count))
    })
}

fn draw<R>(catalog: &Catalog, count: usize, rng: &mut R) -> ItemforgeResult<Vec<Item>>
where
    R: RandomSource + ?Sized,
{
    if catalog.is_empty() {
        return Err(ItemforgeError::EmptyCatalog);
    }

    let size = catalog.len();
    let items: Vec<Item> = (0..count)
        .map(|_| catalog.items()[rng.index_below(size)].clone())
        .collect();

    debug!("Sampled {} items from a catalog of {}", items.len(), size);
    Ok(items)
}
