//! Static item metadata for the Homestead farm-state engine.
//!
//! The catalog answers read-only questions about items: which seed grows a
//! fruit, how long it takes, how many harvests a tree yields, and which
//! category an item belongs to. The engine receives it as an explicit
//! [`Catalog`] argument instead of consulting global tables.
//!
//! # Modules
//!
//! - [`category`] -- Item category classification for trait-based boosts.
//! - [`error`] -- Error types for catalog lookups.
//! - [`fruits`] -- The [`Catalog`] trait, fruit and seed entries, and the
//!   built-in [`StaticCatalog`].

pub mod category;
pub mod error;
pub mod fruits;

// Re-export primary types at crate root.
pub use category::item_category;
pub use error::CatalogError;
pub use fruits::{
    APPLE_PLANT_SECONDS, BLUEBERRY_PLANT_SECONDS, Catalog, DEFAULT_HARVEST_COUNT, FruitEntry,
    FruitSeedEntry, ORANGE_PLANT_SECONDS, StaticCatalog,
};
