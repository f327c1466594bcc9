//! Execution handlers for fruit patch actions.
//!
//! Each handler runs its validation pipeline first, then mutates the working
//! copy it was given. A handler that returns an error may have left the
//! working copy half-updated; the reducer discards it in that case.

use rust_decimal::Decimal;
use tracing::debug;

use homestead_catalog::Catalog;
use homestead_types::{Extras, FruitSeedName, GameState, Millis, PatchIndex, PlantedFruit};

use crate::activity::{FRUIT_TREE_REMOVED, harvested_label, planted_label, track_activity};
use crate::boosts::fruit_yield::{FruitYieldContext, fruit_yield};
use crate::error::EventError;
use crate::inventory;

use super::timing;
use super::validation::{self, AXE};

/// Item credited when a fruit tree is chopped down.
pub const WOOD: &str = "Wood";

/// Harvest the fruit on the patch at `index`.
///
/// Credits the amount stored on the fruit, then stores the amount the
/// *next* harvest will credit, computed from the boosts active now.
pub fn harvest_fruit<C: Catalog + ?Sized>(
    state: &mut GameState,
    index: &PatchIndex,
    catalog: &C,
    now: Millis,
) -> Result<(), EventError> {
    validation::validate_harvest(state, index, catalog, now)?;

    let GameState {
        inventory: items,
        bumpkin,
        collectibles,
        buds,
        fruit_patches,
        ..
    } = state;
    let bumpkin = bumpkin.as_mut().ok_or(EventError::NoActivePlayer)?;
    let fruit = fruit_patches
        .get_mut(index)
        .and_then(|patch| patch.fruit.as_mut())
        .ok_or_else(|| EventError::NothingPlanted { index: index.clone() })?;

    let name = fruit.name;
    let credited = fruit.amount;
    let total = inventory::add_item(items, name.as_str(), credited)?;

    fruit.harvests_left = fruit
        .harvests_left
        .checked_sub(1)
        .ok_or_else(|| EventError::NoHarvestLeft { index: index.clone() })?;
    fruit.harvested_at = timing::harvested_at(name, collectibles, catalog, now)?;

    let ctx = FruitYieldContext {
        name,
        collectibles,
        buds,
        wearables: &bumpkin.equipped,
        now,
    };
    fruit.amount = fruit_yield(&ctx, catalog)?;

    track_activity(&harvested_label(name), &mut bumpkin.activity)?;

    debug!(
        %index,
        fruit = %name,
        %credited,
        %total,
        next_amount = %fruit.amount,
        harvests_left = fruit.harvests_left,
        harvested_at = fruit.harvested_at,
        "fruit harvested"
    );
    Ok(())
}

/// Plant `seed` on the empty patch at `index`.
pub fn plant_fruit<C: Catalog + ?Sized>(
    state: &mut GameState,
    index: &PatchIndex,
    seed: FruitSeedName,
    catalog: &C,
    now: Millis,
) -> Result<(), EventError> {
    let entry = validation::validate_plant(state, index, seed, catalog)?;

    let GameState {
        inventory: items,
        bumpkin,
        collectibles,
        buds,
        fruit_patches,
        ..
    } = state;
    let bumpkin = bumpkin.as_mut().ok_or(EventError::NoActivePlayer)?;
    let patch = fruit_patches
        .get_mut(index)
        .ok_or_else(|| EventError::EntityNotFound { index: index.clone() })?;

    inventory::remove_item(items, seed.as_str(), Decimal::ONE)?;

    let ctx = FruitYieldContext {
        name: entry.fruit,
        collectibles,
        buds,
        wearables: &bumpkin.equipped,
        now,
    };
    let amount = fruit_yield(&ctx, catalog)?;

    patch.fruit = Some(PlantedFruit {
        name: entry.fruit,
        planted_at: now,
        harvested_at: 0,
        harvests_left: entry.harvest_count,
        amount,
        other: Extras::new(),
    });

    track_activity(&planted_label(seed), &mut bumpkin.activity)?;

    debug!(%index, %seed, %amount, harvests = entry.harvest_count, "fruit planted");
    Ok(())
}

/// Chop down the exhausted tree on the patch at `index`.
pub fn remove_fruit_tree(state: &mut GameState, index: &PatchIndex) -> Result<(), EventError> {
    validation::validate_remove(state, index)?;

    let GameState {
        inventory: items,
        bumpkin,
        fruit_patches,
        ..
    } = state;
    let bumpkin = bumpkin.as_mut().ok_or(EventError::NoActivePlayer)?;
    let patch = fruit_patches
        .get_mut(index)
        .ok_or_else(|| EventError::EntityNotFound { index: index.clone() })?;

    inventory::remove_item(items, AXE, Decimal::ONE)?;
    let removed = patch.fruit.take();
    inventory::add_item(items, WOOD, Decimal::ONE)?;

    track_activity(FRUIT_TREE_REMOVED, &mut bumpkin.activity)?;

    debug!(%index, fruit = ?removed.map(|fruit| fruit.name), "fruit tree removed");
    Ok(())
}
