//! Shared type definitions for the Homestead farm-state engine.
//!
//! This crate is the single source of truth for the snapshot and action
//! types used across the workspace. Types flow to `TypeScript` via `ts-rs`
//! so the client and the verifier agree on the wire shape.
//!
//! # Modules
//!
//! - [`ids`] -- Newtype wrappers for patch, placement, and bud keys
//! - [`enums`] -- Fruit, seed, item category, and bud trait enumerations
//! - [`structs`] -- The [`GameState`] snapshot and everything it holds
//! - [`actions`] -- The [`GameAction`] sum type and timestamped log entries

pub mod actions;
pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use actions::{GameAction, TimedAction};
pub use enums::{BudAura, BudType, FruitName, FruitSeedName, ItemCategory};
pub use ids::{BudId, PatchIndex, PlacementId};
pub use structs::{
    Activity, Bud, Bumpkin, Collectibles, Coordinates, Equipped, Extras, FruitPatch, GameState,
    Inventory, Millis, PlacedItem, PlantedFruit,
};
