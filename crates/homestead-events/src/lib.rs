//! Action reducer, validation rules, and yield boosts for the Homestead
//! farm-state engine.
//!
//! This crate is the logic layer: everything that turns one farm snapshot
//! into the next without touching I/O. It sits between `homestead-types`
//! (the data structures) and `homestead-core` (configuration and replay).
//!
//! # Modules
//!
//! - [`actions`] -- The reducer ([`apply`], [`apply_at`]), guard pipelines, and handlers.
//! - [`activity`] -- Per-bumpkin activity counters.
//! - [`boosts`] -- Yield boost composition from collectibles, wearables, and buds.
//! - [`collectibles`] -- Ownership predicates over placed collectibles.
//! - [`error`] -- Error types for all reducer operations ([`EventError`]).
//! - [`inventory`] -- Checked inventory arithmetic.

pub mod actions;
pub mod activity;
pub mod boosts;
pub mod collectibles;
pub mod error;
pub mod inventory;

// Re-export primary types at crate root for convenience.
pub use actions::{apply, apply_at, can_apply};
pub use activity::track_activity;
pub use boosts::buds::bud_yield_bonus;
pub use boosts::fruit_yield::{FruitYieldContext, fruit_yield};
pub use collectibles::is_collectible_built;
pub use error::EventError;
