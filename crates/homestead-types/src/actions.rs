//! Actions a player submits against their farm.
//!
//! [`GameAction`] is a closed set: the reducer matches it exhaustively, so a
//! new variant does not compile until it has a handler.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::FruitSeedName;
use crate::ids::PatchIndex;
use crate::structs::Millis;

/// A typed player action, tagged on the wire by its `type` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type")]
#[ts(export, export_to = "bindings/")]
pub enum GameAction {
    /// Plant a fruit seed on an empty patch.
    #[serde(rename = "fruit.planted")]
    PlantFruit {
        /// Target patch.
        index: PatchIndex,
        /// Seed taken from the inventory.
        seed: FruitSeedName,
    },
    /// Harvest ripe fruit from a patch.
    #[serde(rename = "fruit.harvested")]
    HarvestFruit {
        /// Target patch.
        index: PatchIndex,
    },
    /// Chop down an exhausted fruit tree, freeing the patch.
    #[serde(rename = "fruitTree.removed")]
    RemoveFruitTree {
        /// Target patch.
        index: PatchIndex,
    },
}

impl GameAction {
    /// The wire tag of this action.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::PlantFruit { .. } => "fruit.planted",
            Self::HarvestFruit { .. } => "fruit.harvested",
            Self::RemoveFruitTree { .. } => "fruitTree.removed",
        }
    }

    /// The patch this action targets.
    pub const fn index(&self) -> &PatchIndex {
        match self {
            Self::PlantFruit { index, .. }
            | Self::HarvestFruit { index }
            | Self::RemoveFruitTree { index } => index,
        }
    }
}

/// An action together with the time the client performed it.
///
/// Action logs are sequences of these; replaying them with their recorded
/// timestamps reproduces the client's final state exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimedAction {
    /// The action.
    #[serde(flatten)]
    pub action: GameAction,
    /// Client timestamp in milliseconds.
    pub created_at: Millis,
}
