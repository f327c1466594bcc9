//! Guard clauses run before any action mutates state.
//!
//! Each action has a pipeline of stages evaluated in a fixed order; the
//! first failing stage decides the error. Stages only read the snapshot,
//! so a rejected action leaves nothing behind.
//!
//! Harvest pipeline:
//! 1. Player -- is there a bumpkin?
//! 2. Patch -- does the patch exist?
//! 3. Planted -- does anything grow on it?
//! 4. Ripe -- has a full growth cycle passed since planting?
//! 5. Replenished -- has a full growth cycle passed since the last harvest?
//! 6. Harvests left -- is the tree exhausted?
//!
//! Stages 4 and 5 are independent. A fruit that was never harvested has
//! `harvested_at == 0`, which always passes stage 5.
//!
//! The plant pipeline ends with the catalog lookup for the seed, so a seed
//! the catalog does not know is rejected here rather than by the handler.

use rust_decimal::Decimal;

use homestead_catalog::{Catalog, FruitSeedEntry};
use homestead_types::{Bumpkin, FruitPatch, FruitSeedName, GameState, Millis, PatchIndex, PlantedFruit};

use crate::error::EventError;
use crate::inventory;

use super::timing;

/// Item consumed when removing a fruit tree.
pub const AXE: &str = "Axe";

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

/// The active player, or [`EventError::NoActivePlayer`].
pub fn require_bumpkin(state: &GameState) -> Result<&Bumpkin, EventError> {
    state.bumpkin.as_ref().ok_or(EventError::NoActivePlayer)
}

/// The patch at `index`, or [`EventError::EntityNotFound`].
pub fn require_patch<'a>(state: &'a GameState, index: &PatchIndex) -> Result<&'a FruitPatch, EventError> {
    state
        .fruit_patches
        .get(index)
        .ok_or_else(|| EventError::EntityNotFound { index: index.clone() })
}

/// The fruit on `patch`, or [`EventError::NothingPlanted`].
pub fn require_fruit<'a>(patch: &'a FruitPatch, index: &PatchIndex) -> Result<&'a PlantedFruit, EventError> {
    patch
        .fruit
        .as_ref()
        .ok_or_else(|| EventError::NothingPlanted { index: index.clone() })
}

// ---------------------------------------------------------------------------
// Timing stages
// ---------------------------------------------------------------------------

/// Reject unless a full growth cycle has passed since planting.
///
/// `now - planted_at == growth_ms` is ripe.
pub fn ensure_ripe(
    fruit: &PlantedFruit,
    index: &PatchIndex,
    now: Millis,
    growth_ms: Millis,
) -> Result<(), EventError> {
    if timing::elapsed(now, fruit.planted_at)? < growth_ms {
        return Err(EventError::NotReady {
            index: index.clone(),
            ready_at: fruit.planted_at.saturating_add(growth_ms),
        });
    }
    Ok(())
}

/// Reject unless a full growth cycle has passed since the last harvest.
pub fn ensure_replenished(
    fruit: &PlantedFruit,
    index: &PatchIndex,
    now: Millis,
    growth_ms: Millis,
) -> Result<(), EventError> {
    if timing::elapsed(now, fruit.harvested_at)? < growth_ms {
        return Err(EventError::StillReplenishing {
            index: index.clone(),
            replenished_at: fruit.harvested_at.saturating_add(growth_ms),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Lifecycle stages
// ---------------------------------------------------------------------------

/// Reject if the tree has no harvests left.
pub fn ensure_harvest_left(fruit: &PlantedFruit, index: &PatchIndex) -> Result<(), EventError> {
    if fruit.harvests_left == 0 {
        return Err(EventError::NoHarvestLeft { index: index.clone() });
    }
    Ok(())
}

/// Reject if the tree still has harvests left.
pub fn ensure_exhausted(fruit: &PlantedFruit, index: &PatchIndex) -> Result<(), EventError> {
    if fruit.harvests_left > 0 {
        return Err(EventError::HarvestsRemaining {
            index: index.clone(),
            harvests_left: fruit.harvests_left,
        });
    }
    Ok(())
}

/// Reject if something already grows on the patch.
pub fn ensure_empty(patch: &FruitPatch, index: &PatchIndex) -> Result<(), EventError> {
    if patch.fruit.is_some() {
        return Err(EventError::AlreadyPlanted { index: index.clone() });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Pipelines
// ---------------------------------------------------------------------------

/// Validate a harvest of the patch at `index` at time `now`.
pub fn validate_harvest<C: Catalog + ?Sized>(
    state: &GameState,
    index: &PatchIndex,
    catalog: &C,
    now: Millis,
) -> Result<(), EventError> {
    require_bumpkin(state)?;
    let patch = require_patch(state, index)?;
    let fruit = require_fruit(patch, index)?;

    let growth_ms = timing::growth_millis(catalog, fruit.name)?;
    ensure_ripe(fruit, index, now, growth_ms)?;
    ensure_replenished(fruit, index, now, growth_ms)?;
    ensure_harvest_left(fruit, index)
}

/// Validate planting `seed` on the patch at `index`.
///
/// Returns the seed's catalog entry, which the plant handler needs.
pub fn validate_plant<C: Catalog + ?Sized>(
    state: &GameState,
    index: &PatchIndex,
    seed: FruitSeedName,
    catalog: &C,
) -> Result<FruitSeedEntry, EventError> {
    require_bumpkin(state)?;
    let patch = require_patch(state, index)?;
    ensure_empty(patch, index)?;

    if !inventory::has_item(&state.inventory, seed.as_str(), Decimal::ONE) {
        return Err(EventError::MissingSeed { seed });
    }
    Ok(catalog.fruit_seed(seed)?)
}

/// Validate removing the exhausted tree on the patch at `index`.
pub fn validate_remove(state: &GameState, index: &PatchIndex) -> Result<(), EventError> {
    require_bumpkin(state)?;
    let patch = require_patch(state, index)?;
    let fruit = require_fruit(patch, index)?;
    ensure_exhausted(fruit, index)?;

    if !inventory::has_item(&state.inventory, AXE, Decimal::ONE) {
        return Err(EventError::MissingAxe);
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use homestead_catalog::StaticCatalog;
    use homestead_types::{Extras, FruitName};
    use rust_decimal_macros::dec;

    use super::*;

    const HOUR_MS: Millis = 60 * 60 * 1_000;
    const BLUEBERRY_MS: Millis = 6 * HOUR_MS;

    fn blueberry(planted_at: Millis, harvested_at: Millis, harvests_left: u32) -> PlantedFruit {
        PlantedFruit {
            name: FruitName::Blueberry,
            planted_at,
            harvested_at,
            harvests_left,
            amount: dec!(1),
            other: Extras::new(),
        }
    }

    fn state_with(fruit: Option<PlantedFruit>) -> GameState {
        let mut state = GameState {
            bumpkin: Some(Bumpkin::default()),
            ..GameState::default()
        };
        state.fruit_patches.insert(
            PatchIndex::from("0"),
            FruitPatch {
                x: 0,
                y: 0,
                width: 1,
                height: 1,
                fruit,
                other: Extras::new(),
            },
        );
        state
    }

    #[test]
    fn ripe_boundary() {
        let index = PatchIndex::from("0");
        let now = 100 * HOUR_MS;
        assert!(ensure_ripe(&blueberry(now - BLUEBERRY_MS, 0, 1), &index, now, BLUEBERRY_MS).is_ok());
        assert_eq!(
            ensure_ripe(&blueberry(now - BLUEBERRY_MS + 1, 0, 1), &index, now, BLUEBERRY_MS),
            Err(EventError::NotReady {
                index,
                ready_at: now + 1
            })
        );
    }

    #[test]
    fn planted_in_the_future_is_not_ready() {
        let index = PatchIndex::from("0");
        let result = ensure_ripe(&blueberry(10_000, 0, 1), &index, 5_000, 1);
        assert!(matches!(result, Err(EventError::NotReady { .. })));
    }

    #[test]
    fn replenish_boundary() {
        let index = PatchIndex::from("0");
        let now = 100 * HOUR_MS;
        assert!(ensure_replenished(&blueberry(0, now - BLUEBERRY_MS, 1), &index, now, BLUEBERRY_MS).is_ok());
        assert!(matches!(
            ensure_replenished(&blueberry(0, now - BLUEBERRY_MS + 1, 1), &index, now, BLUEBERRY_MS),
            Err(EventError::StillReplenishing { .. })
        ));
    }

    #[test]
    fn never_harvested_passes_replenish() {
        let index = PatchIndex::from("0");
        let now = 100 * HOUR_MS;
        assert!(ensure_replenished(&blueberry(now - BLUEBERRY_MS, 0, 1), &index, now, BLUEBERRY_MS).is_ok());
    }

    #[test]
    fn harvest_pipeline_order() {
        let catalog = StaticCatalog::new();
        let index = PatchIndex::from("0");
        let now = 100 * HOUR_MS;

        // Not ripe and still replenishing: ripeness is reported first.
        let state = state_with(Some(blueberry(now - 1, now - 1, 0)));
        assert!(matches!(
            validate_harvest(&state, &index, &catalog, now),
            Err(EventError::NotReady { .. })
        ));

        // Ripe but replenishing and exhausted: replenishing comes next.
        let state = state_with(Some(blueberry(0, now - 1, 0)));
        assert!(matches!(
            validate_harvest(&state, &index, &catalog, now),
            Err(EventError::StillReplenishing { .. })
        ));

        let state = state_with(Some(blueberry(0, 0, 0)));
        assert!(matches!(
            validate_harvest(&state, &index, &catalog, now),
            Err(EventError::NoHarvestLeft { .. })
        ));

        let state = state_with(Some(blueberry(0, 0, 3)));
        assert!(validate_harvest(&state, &index, &catalog, now).is_ok());
    }

    #[test]
    fn missing_bumpkin_wins_over_everything() {
        let catalog = StaticCatalog::new();
        let mut state = state_with(None);
        state.bumpkin = None;
        let missing = PatchIndex::from("9");
        assert_eq!(
            validate_harvest(&state, &missing, &catalog, 0),
            Err(EventError::NoActivePlayer)
        );
        assert_eq!(validate_remove(&state, &missing), Err(EventError::NoActivePlayer));
        assert_eq!(
            validate_plant(&state, &missing, FruitSeedName::AppleSeed, &catalog),
            Err(EventError::NoActivePlayer)
        );
    }

    #[test]
    fn plant_requires_empty_patch_and_seed() {
        let catalog = StaticCatalog::new();
        let index = PatchIndex::from("0");
        let occupied = state_with(Some(blueberry(0, 0, 1)));
        assert!(matches!(
            validate_plant(&occupied, &index, FruitSeedName::AppleSeed, &catalog),
            Err(EventError::AlreadyPlanted { .. })
        ));

        let mut empty = state_with(None);
        assert_eq!(
            validate_plant(&empty, &index, FruitSeedName::AppleSeed, &catalog),
            Err(EventError::MissingSeed {
                seed: FruitSeedName::AppleSeed
            })
        );

        empty.inventory.insert(String::from("Apple Seed"), dec!(1));
        let entry = validate_plant(&empty, &index, FruitSeedName::AppleSeed, &catalog).unwrap();
        assert_eq!(entry.fruit, FruitName::Apple);
    }

    #[test]
    fn remove_requires_exhausted_tree_and_axe() {
        let index = PatchIndex::from("0");
        let growing = state_with(Some(blueberry(0, 0, 2)));
        assert!(matches!(
            validate_remove(&growing, &index),
            Err(EventError::HarvestsRemaining { harvests_left: 2, .. })
        ));

        let mut exhausted = state_with(Some(blueberry(0, 0, 0)));
        assert_eq!(validate_remove(&exhausted, &index), Err(EventError::MissingAxe));

        exhausted.inventory.insert(String::from(AXE), dec!(1));
        assert!(validate_remove(&exhausted, &index).is_ok());

        let empty = state_with(None);
        assert!(matches!(
            validate_remove(&empty, &index),
            Err(EventError::NothingPlanted { .. })
        ));
    }
}
