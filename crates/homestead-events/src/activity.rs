//! Per-bumpkin activity counters.
//!
//! Each successful action bumps exactly one counter, keyed by a label such
//! as `"Apple Harvested"`. Counters are created on first use.

use homestead_types::{Activity, FruitName, FruitSeedName};

use crate::error::EventError;

/// Label recorded when a fruit is harvested.
pub fn harvested_label(fruit: FruitName) -> String {
    format!("{fruit} Harvested")
}

/// Label recorded when a fruit seed is planted.
pub fn planted_label(seed: FruitSeedName) -> String {
    format!("{seed} Planted")
}

/// Label recorded when an exhausted fruit tree is chopped down.
pub const FRUIT_TREE_REMOVED: &str = "Fruit Tree Removed";

/// Increment the counter for `label`, inserting it at 1 on first use.
///
/// Returns the new count.
pub fn track_activity(label: &str, activity: &mut Activity) -> Result<u64, EventError> {
    let entry = activity.entry(String::from(label)).or_insert(0);
    *entry = entry
        .checked_add(1)
        .ok_or_else(|| EventError::overflow("activity counter overflow"))?;
    Ok(*entry)
}
