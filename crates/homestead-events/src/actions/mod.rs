//! The action reducer and its pipeline stages.
//!
//! [`apply_at`] turns a snapshot and an action into the next snapshot. The
//! input is never touched: the reducer clones it, lets a handler mutate the
//! clone, and hands the clone back only if every stage succeeded.
//!
//! # Submodules
//!
//! - [`handlers`] -- Execution logic for each action.
//! - [`timing`] -- Growth durations and harvest timestamps.
//! - [`validation`] -- Per-action guard pipelines.

pub mod handlers;
pub mod timing;
pub mod validation;

use chrono::Utc;
use tracing::debug;

use homestead_catalog::Catalog;
use homestead_types::{GameAction, GameState, Millis};

use crate::error::EventError;

/// Apply `action` to `state` at the current wall-clock time.
pub fn apply<C: Catalog + ?Sized>(
    state: &GameState,
    action: &GameAction,
    catalog: &C,
) -> Result<GameState, EventError> {
    apply_at(state, action, catalog, Utc::now().timestamp_millis())
}

/// Apply `action` to `state` as if performed at `now`.
///
/// Deterministic: the same arguments always produce the same result.
pub fn apply_at<C: Catalog + ?Sized>(
    state: &GameState,
    action: &GameAction,
    catalog: &C,
    now: Millis,
) -> Result<GameState, EventError> {
    let mut next = state.clone();

    let outcome = match action {
        GameAction::PlantFruit { index, seed } => {
            handlers::plant_fruit(&mut next, index, *seed, catalog, now)
        }
        GameAction::HarvestFruit { index } => handlers::harvest_fruit(&mut next, index, catalog, now),
        GameAction::RemoveFruitTree { index } => handlers::remove_fruit_tree(&mut next, index),
    };

    if let Err(error) = outcome {
        debug!(action = action.kind(), index = %action.index(), now, %error, "action rejected");
        return Err(error);
    }

    debug!(action = action.kind(), index = %action.index(), now, "action applied");
    Ok(next)
}

/// Check whether `action` would succeed at `now` without producing a state.
pub fn can_apply<C: Catalog + ?Sized>(
    state: &GameState,
    action: &GameAction,
    catalog: &C,
    now: Millis,
) -> Result<(), EventError> {
    match action {
        GameAction::PlantFruit { index, seed } => {
            validation::validate_plant(state, index, *seed, catalog).map(|_| ())
        }
        GameAction::HarvestFruit { index } => validation::validate_harvest(state, index, catalog, now),
        GameAction::RemoveFruitTree { index } => validation::validate_remove(state, index),
    }
}
