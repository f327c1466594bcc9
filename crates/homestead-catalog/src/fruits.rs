//! Fruit and fruit seed definitions: which seed grows which fruit, how long
//! it takes, and how many harvests a tree yields.
//!
//! The engine never reaches for these tables directly. Callers hand it a
//! [`Catalog`], usually a [`StaticCatalog`], so tests and replays can run
//! against custom growth times.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use homestead_types::{FruitName, FruitSeedName, ItemCategory};

use crate::category;
use crate::error::CatalogError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Growth time of a blueberry bush (6 hours).
pub const BLUEBERRY_PLANT_SECONDS: u64 = 21_600;

/// Growth time of an orange tree (8 hours).
pub const ORANGE_PLANT_SECONDS: u64 = 28_800;

/// Growth time of an apple tree (12 hours).
pub const APPLE_PLANT_SECONDS: u64 = 43_200;

/// Harvests a freshly planted fruit tree yields before it must be removed.
pub const DEFAULT_HARVEST_COUNT: u32 = 4;

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

/// Static metadata for a fruit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FruitEntry {
    /// The seed that grows this fruit.
    pub seed: FruitSeedName,
}

/// Static metadata for a fruit seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FruitSeedEntry {
    /// The fruit this seed grows into.
    pub fruit: FruitName,
    /// Seconds from planting (or last harvest) until the fruit is ripe.
    pub plant_seconds: u64,
    /// Harvests a newly planted tree yields.
    pub harvest_count: u32,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Read-only lookups the engine needs from the item catalog.
///
/// Implementations must behave as static data for the duration of a
/// reduction: the same query always returns the same answer.
pub trait Catalog {
    /// Metadata for a fruit.
    fn fruit(&self, name: FruitName) -> Result<FruitEntry, CatalogError>;

    /// Metadata for a fruit seed.
    fn fruit_seed(&self, seed: FruitSeedName) -> Result<FruitSeedEntry, CatalogError>;

    /// Category of an inventory item, for trait-based boosts.
    fn item_category(&self, name: &str) -> ItemCategory {
        category::item_category(name)
    }

    /// The seed entry for the seed that grows `name`.
    fn seed_of(&self, name: FruitName) -> Result<FruitSeedEntry, CatalogError> {
        let fruit = self.fruit(name)?;
        self.fruit_seed(fruit.seed)
    }
}

/// In-memory catalog backed by two lookup tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticCatalog {
    fruits: BTreeMap<FruitName, FruitEntry>,
    seeds: BTreeMap<FruitSeedName, FruitSeedEntry>,
}

impl StaticCatalog {
    /// The built-in catalog of every fruit and seed.
    pub fn new() -> Self {
        let seeds = [
            (FruitSeedName::BlueberrySeed, FruitName::Blueberry, BLUEBERRY_PLANT_SECONDS),
            (FruitSeedName::OrangeSeed, FruitName::Orange, ORANGE_PLANT_SECONDS),
            (FruitSeedName::AppleSeed, FruitName::Apple, APPLE_PLANT_SECONDS),
        ];

        let mut catalog = Self::empty();
        for (seed, fruit, plant_seconds) in seeds {
            catalog.fruits.insert(fruit, FruitEntry { seed });
            catalog.seeds.insert(
                seed,
                FruitSeedEntry {
                    fruit,
                    plant_seconds,
                    harvest_count: DEFAULT_HARVEST_COUNT,
                },
            );
        }
        catalog
    }

    /// A catalog with no entries. Every lookup fails.
    pub const fn empty() -> Self {
        Self {
            fruits: BTreeMap::new(),
            seeds: BTreeMap::new(),
        }
    }

    /// Build a catalog from explicit tables.
    pub const fn from_entries(
        fruits: BTreeMap<FruitName, FruitEntry>,
        seeds: BTreeMap<FruitSeedName, FruitSeedEntry>,
    ) -> Self {
        Self { fruits, seeds }
    }

    /// Override growth time and/or harvest count of a seed.
    ///
    /// Returns `false` if the seed has no entry to override.
    pub fn override_seed(
        &mut self,
        seed: FruitSeedName,
        plant_seconds: Option<u64>,
        harvest_count: Option<u32>,
    ) -> bool {
        let Some(entry) = self.seeds.get_mut(&seed) else {
            return false;
        };
        if let Some(seconds) = plant_seconds {
            entry.plant_seconds = seconds;
        }
        if let Some(count) = harvest_count {
            entry.harvest_count = count;
        }
        true
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog for StaticCatalog {
    fn fruit(&self, name: FruitName) -> Result<FruitEntry, CatalogError> {
        self.fruits
            .get(&name)
            .copied()
            .ok_or(CatalogError::UnknownFruit(name))
    }

    fn fruit_seed(&self, seed: FruitSeedName) -> Result<FruitSeedEntry, CatalogError> {
        self.seeds
            .get(&seed)
            .copied()
            .ok_or(CatalogError::UnknownSeed(seed))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
