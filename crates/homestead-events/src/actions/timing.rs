//! Growth timing: how long fruit takes to ripen, and when a harvest is
//! recorded.
//!
//! Catalog durations are in seconds, stored timestamps in milliseconds.
//! Every conversion and offset is checked.

use homestead_catalog::Catalog;
use homestead_types::{Collectibles, FruitName, FruitSeedName, Millis};

use crate::collectibles::is_collectible_built;
use crate::error::EventError;

/// Collectible that pre-advances the orange replenish timer.
pub const SQUIRREL_MONKEY: &str = "Squirrel Monkey";

/// Milliseconds in one second.
const MILLIS_PER_SECOND: i64 = 1_000;

/// Growth duration of `seed` in milliseconds.
pub fn seed_millis<C: Catalog + ?Sized>(catalog: &C, seed: FruitSeedName) -> Result<Millis, EventError> {
    let entry = catalog.fruit_seed(seed)?;
    seconds_to_millis(entry.plant_seconds)
}

/// Growth duration of the seed that grows `fruit`, in milliseconds.
pub fn growth_millis<C: Catalog + ?Sized>(catalog: &C, fruit: FruitName) -> Result<Millis, EventError> {
    let entry = catalog.seed_of(fruit)?;
    seconds_to_millis(entry.plant_seconds)
}

fn seconds_to_millis(seconds: u64) -> Result<Millis, EventError> {
    i64::try_from(seconds)
        .ok()
        .and_then(|seconds| seconds.checked_mul(MILLIS_PER_SECOND))
        .ok_or_else(|| EventError::overflow("plant seconds do not fit in milliseconds"))
}

/// Milliseconds elapsed between `since` and `now` (negative if `since` is
/// in the future).
pub fn elapsed(now: Millis, since: Millis) -> Result<Millis, EventError> {
    now.checked_sub(since)
        .ok_or_else(|| EventError::overflow("elapsed time overflow"))
}

/// The `harvested_at` to store for a harvest performed at `now`.
///
/// Normally `now`. With a built [`SQUIRREL_MONKEY`], oranges are stored as
/// harvested half an orange growth cycle earlier, so the next harvest comes
/// around in half the time. This shifts timing only; yield is unaffected.
pub fn harvested_at<C: Catalog + ?Sized>(
    fruit: FruitName,
    collectibles: &Collectibles,
    catalog: &C,
    now: Millis,
) -> Result<Millis, EventError> {
    if fruit == FruitName::Orange && is_collectible_built(SQUIRREL_MONKEY, collectibles, now) {
        let offset = seed_millis(catalog, FruitSeedName::OrangeSeed)?
            .checked_div(2)
            .ok_or_else(|| EventError::overflow("orange offset overflow"))?;
        return now
            .checked_sub(offset)
            .ok_or_else(|| EventError::overflow("backdated harvest time overflow"));
    }

    Ok(now)
}
