//! Enumeration types for the Homestead farm state.
//!
//! Fruit and seed names appear both as enum values (on planted fruit and in
//! actions) and as plain inventory keys, so each carries an `as_str` that
//! returns the exact inventory spelling.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Fruit
// ---------------------------------------------------------------------------

/// A fruit grown on a fruit patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum FruitName {
    /// Apples, from an apple tree.
    Apple,
    /// Blueberries, from a blueberry bush.
    Blueberry,
    /// Oranges, from an orange tree.
    Orange,
}

impl FruitName {
    /// Every fruit, in catalog order.
    pub const ALL: [Self; 3] = [Self::Apple, Self::Blueberry, Self::Orange];

    /// The inventory key for this fruit.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Apple => "Apple",
            Self::Blueberry => "Blueberry",
            Self::Orange => "Orange",
        }
    }

    /// Resolve an inventory key back to a fruit.
    pub fn from_item(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|fruit| fruit.as_str() == name)
    }
}

impl core::fmt::Display for FruitName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A seed that grows into a fruit tree or bush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum FruitSeedName {
    /// Grows [`FruitName::Apple`].
    #[serde(rename = "Apple Seed")]
    AppleSeed,
    /// Grows [`FruitName::Blueberry`].
    #[serde(rename = "Blueberry Seed")]
    BlueberrySeed,
    /// Grows [`FruitName::Orange`].
    #[serde(rename = "Orange Seed")]
    OrangeSeed,
}

impl FruitSeedName {
    /// Every fruit seed, in catalog order.
    pub const ALL: [Self; 3] = [Self::AppleSeed, Self::BlueberrySeed, Self::OrangeSeed];

    /// The inventory key for this seed.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AppleSeed => "Apple Seed",
            Self::BlueberrySeed => "Blueberry Seed",
            Self::OrangeSeed => "Orange Seed",
        }
    }

    /// Resolve an inventory key back to a seed.
    pub fn from_item(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|seed| seed.as_str() == name)
    }
}

impl core::fmt::Display for FruitSeedName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Item categories
// ---------------------------------------------------------------------------

/// Broad grouping of harvestable items, used by trait-based boosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum ItemCategory {
    /// Fruit from fruit patches.
    Fruit,
    /// Field crops (Sunflower, Potato, ...).
    Crop,
    /// Wood from trees.
    Wood,
    /// Stone and ores.
    Mineral,
    /// Anything without a category-specific boost.
    Other,
}

// ---------------------------------------------------------------------------
// Buds
// ---------------------------------------------------------------------------

/// The island type of a bud, its main functional trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum BudType {
    /// Plaza bud.
    Plaza,
    /// Woodlands bud.
    Woodlands,
    /// Cave bud.
    Cave,
    /// Sea bud.
    Sea,
    /// Castle bud.
    Castle,
    /// Port bud.
    Port,
    /// Retreat bud.
    Retreat,
    /// Saphiro bud.
    Saphiro,
    /// Snow bud.
    Snow,
    /// Beach bud.
    Beach,
}

/// The aura of a bud. Scales every boost the bud contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum BudAura {
    /// No aura; boosts are unscaled.
    #[serde(rename = "No Aura")]
    NoAura,
    /// Basic aura.
    Basic,
    /// Green aura.
    Green,
    /// Rare aura.
    Rare,
    /// Mythical aura.
    Mythical,
}
