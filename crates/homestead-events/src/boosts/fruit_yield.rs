//! Fruit yield: how much the next harvest of a fruit patch credits.
//!
//! Baseline is one fruit. On top of that:
//!
//! | Source | Applies to | Bonus |
//! |--------|-----------|-------|
//! | Lady Bug (built) | Apple | +0.25 |
//! | Black Bearry (built) | Blueberry | +1 |
//! | Fruit Picker Apron (coat) | Apple, Orange, Blueberry | +0.1 |
//! | Placed buds | see [`buds`](super::buds) | trait-based |
//!
//! Collectible and wearable bonuses stack with each other and with buds.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::debug;

use homestead_catalog::Catalog;
use homestead_types::{Bud, BudId, Collectibles, Equipped, FruitName, Millis};

use crate::collectibles::is_collectible_built;
use crate::error::EventError;

use super::buds::bud_yield_bonus;
use super::{hundredths, sum_contributions};

/// Yield of a fruit harvest before any boost.
pub const BASE_FRUIT_YIELD: Decimal = Decimal::ONE;

/// Coat that boosts every fruit.
pub const FRUIT_PICKER_APRON: &str = "Fruit Picker Apron";

/// Fruits boosted by the [`FRUIT_PICKER_APRON`].
pub const APRON_FRUITS: [FruitName; 3] = [FruitName::Apple, FruitName::Orange, FruitName::Blueberry];

/// Bonus granted by the [`FRUIT_PICKER_APRON`].
pub const APRON_BONUS: Decimal = hundredths(10);

/// A collectible that boosts a single fruit while built.
#[derive(Debug, Clone, Copy)]
pub struct CollectibleBoost {
    /// Name of the collectible.
    pub collectible: &'static str,
    /// The fruit it boosts.
    pub fruit: FruitName,
    /// Additive bonus.
    pub bonus: Decimal,
}

/// Every collectible-driven fruit yield boost.
pub const COLLECTIBLE_BOOSTS: [CollectibleBoost; 2] = [
    CollectibleBoost {
        collectible: "Lady Bug",
        fruit: FruitName::Apple,
        bonus: hundredths(25),
    },
    CollectibleBoost {
        collectible: "Black Bearry",
        fruit: FruitName::Blueberry,
        bonus: Decimal::ONE,
    },
];

/// Everything a fruit yield depends on.
#[derive(Debug, Clone, Copy)]
pub struct FruitYieldContext<'a> {
    /// The fruit being harvested.
    pub name: FruitName,
    /// Placed collectibles.
    pub collectibles: &'a Collectibles,
    /// Companion buds.
    pub buds: &'a BTreeMap<BudId, Bud>,
    /// The bumpkin's equipped wearables.
    pub wearables: &'a Equipped,
    /// Reduction timestamp, for collectible readiness.
    pub now: Millis,
}

/// The individual bonuses that apply on top of [`BASE_FRUIT_YIELD`].
///
/// The bud bonus is always present, possibly zero.
pub fn yield_contributions<C: Catalog + ?Sized>(
    ctx: &FruitYieldContext<'_>,
    catalog: &C,
) -> Result<Vec<Decimal>, EventError> {
    let mut contributions = Vec::new();

    for boost in &COLLECTIBLE_BOOSTS {
        if boost.fruit == ctx.name && is_collectible_built(boost.collectible, ctx.collectibles, ctx.now) {
            debug!(fruit = %ctx.name, collectible = boost.collectible, bonus = %boost.bonus, "collectible yield boost");
            contributions.push(boost.bonus);
        }
    }

    if APRON_FRUITS.contains(&ctx.name) && ctx.wearables.coat.as_deref() == Some(FRUIT_PICKER_APRON) {
        debug!(fruit = %ctx.name, bonus = %APRON_BONUS, "wearable yield boost");
        contributions.push(APRON_BONUS);
    }

    contributions.push(bud_yield_bonus(ctx.buds, ctx.name.as_str(), catalog)?);

    Ok(contributions)
}

/// Yield credited by the next harvest of `ctx.name`.
///
/// The result is normalized, so `1.10` is stored as `1.1`.
pub fn fruit_yield<C: Catalog + ?Sized>(
    ctx: &FruitYieldContext<'_>,
    catalog: &C,
) -> Result<Decimal, EventError> {
    let contributions = yield_contributions(ctx, catalog)?;
    Ok(sum_contributions(BASE_FRUIT_YIELD, &contributions)?.normalize())
}
