//! Error types for the `homestead-catalog` crate.
//!
//! Catalog lookups return [`CatalogError`] when an entry is missing from a
//! custom catalog. The built-in catalog covers every fruit and seed.

use homestead_types::{FruitName, FruitSeedName};

/// Errors that can occur during catalog lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The catalog has no entry for this fruit.
    #[error("no catalog entry for fruit {0}")]
    UnknownFruit(FruitName),

    /// The catalog has no entry for this seed.
    #[error("no catalog entry for seed {0}")]
    UnknownSeed(FruitSeedName),
}
