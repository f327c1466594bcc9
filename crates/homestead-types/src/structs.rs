//! Core entity structs: the game state snapshot and everything it holds.
//!
//! Field names serialize in camelCase so that snapshots exchanged with the
//! client keep their existing wire shape.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{BudAura, BudType, FruitName};
use crate::ids::{BudId, PatchIndex, PlacementId};

/// Unix timestamp in milliseconds.
pub type Millis = i64;

/// Per-label activity counters on a bumpkin (`"Apple Harvested" -> 3`).
pub type Activity = BTreeMap<String, u64>;

/// Inventory quantities keyed by item name.
pub type Inventory = BTreeMap<String, Decimal>;

/// Collectible placements keyed by item name.
pub type Collectibles = BTreeMap<String, Vec<PlacedItem>>;

/// Fields this engine does not model, kept verbatim for the round trip.
pub type Extras = BTreeMap<String, serde_json::Value>;

// ---------------------------------------------------------------------------
// Placement
// ---------------------------------------------------------------------------

/// Position on the farm grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Coordinates {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

/// A single placement of a collectible on the farm.
///
/// The collectible counts as built once `ready_at` has passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct PlacedItem {
    /// Placement identifier.
    pub id: PlacementId,
    /// Where the collectible sits.
    pub coordinates: Coordinates,
    /// When it was placed.
    pub created_at: Millis,
    /// When construction finishes.
    pub ready_at: Millis,
    /// Fields outside this engine, passed through untouched.
    #[serde(flatten)]
    #[ts(skip)]
    pub other: Extras,
}

// ---------------------------------------------------------------------------
// Bumpkin
// ---------------------------------------------------------------------------

/// Wearables currently equipped on the bumpkin, one optional item per slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export, export_to = "bindings/")]
pub struct Equipped {
    /// Background slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Body slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Hair slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hair: Option<String>,
    /// Shirt slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shirt: Option<String>,
    /// Pants slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pants: Option<String>,
    /// Shoes slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shoes: Option<String>,
    /// Tool slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool: Option<String>,
    /// Hat slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hat: Option<String>,
    /// Necklace slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub necklace: Option<String>,
    /// Secondary tool slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_tool: Option<String>,
    /// Coat slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coat: Option<String>,
    /// Onesie slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onesie: Option<String>,
    /// Suit slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suit: Option<String>,
    /// Wings slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wings: Option<String>,
    /// Beard slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beard: Option<String>,
    /// Slots outside this engine, passed through untouched.
    #[serde(flatten)]
    #[ts(skip)]
    pub other: Extras,
}

/// The player's avatar. Its absence on [`GameState`] means no active player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Bumpkin {
    /// Equipped wearables.
    #[serde(default)]
    pub equipped: Equipped,
    /// Activity counters, created on first use.
    #[serde(default)]
    pub activity: Activity,
    /// Fields outside this engine, passed through untouched.
    #[serde(flatten)]
    #[ts(skip)]
    pub other: Extras,
}

// ---------------------------------------------------------------------------
// Buds
// ---------------------------------------------------------------------------

/// A companion bud. Only buds with coordinates are placed on the farm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Bud {
    /// Island type.
    #[serde(rename = "type")]
    pub bud_type: BudType,
    /// Aura, scaling the bud's boosts.
    pub aura: BudAura,
    /// Stem trait.
    pub stem: String,
    /// Ears trait.
    pub ears: String,
    /// Colour trait.
    pub colour: String,
    /// Placement on the farm, if placed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    /// Fields outside this engine, passed through untouched.
    #[serde(flatten)]
    #[ts(skip)]
    pub other: Extras,
}

impl Bud {
    /// Whether the bud is placed on the farm.
    pub const fn is_placed(&self) -> bool {
        self.coordinates.is_some()
    }
}

// ---------------------------------------------------------------------------
// Fruit patches
// ---------------------------------------------------------------------------

/// Fruit currently growing on a patch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct PlantedFruit {
    /// What is growing.
    pub name: FruitName,
    /// When the seed was planted.
    pub planted_at: Millis,
    /// When the fruit was last harvested; `0` if never.
    pub harvested_at: Millis,
    /// Remaining harvests before the tree must be removed.
    pub harvests_left: u32,
    /// Yield credited by the next harvest.
    #[ts(as = "String")]
    pub amount: Decimal,
    /// Fields outside this engine, passed through untouched.
    #[serde(flatten)]
    #[ts(skip)]
    pub other: Extras,
}

/// A fruit patch on the farm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct FruitPatch {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
    /// Footprint width in tiles.
    pub width: u32,
    /// Footprint height in tiles.
    pub height: u32,
    /// The fruit growing here, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fruit: Option<PlantedFruit>,
    /// Fields outside this engine, passed through untouched.
    #[serde(flatten)]
    #[ts(skip)]
    pub other: Extras,
}

// ---------------------------------------------------------------------------
// GameState
// ---------------------------------------------------------------------------

/// A full snapshot of a player's farm.
///
/// Transitions never mutate a snapshot in place; each produces a new one.
/// Subsystems this engine does not model are kept verbatim in `other` so a
/// snapshot survives a round trip through the engine unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct GameState {
    /// Item quantities.
    #[serde(default)]
    #[ts(type = "Record<string, string>")]
    pub inventory: Inventory,
    /// The active player, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bumpkin: Option<Bumpkin>,
    /// Placed collectibles.
    #[serde(default)]
    pub collectibles: Collectibles,
    /// Companion buds by token id.
    #[serde(default)]
    pub buds: BTreeMap<BudId, Bud>,
    /// Fruit patches by index.
    #[serde(default)]
    pub fruit_patches: BTreeMap<PatchIndex, FruitPatch>,
    /// Subsystems outside this engine, passed through untouched.
    #[serde(flatten)]
    #[ts(skip)]
    pub other: Extras,
}

impl GameState {
    /// Quantity of an item in the inventory, zero if absent.
    pub fn item_count(&self, name: &str) -> Decimal {
        self.inventory.get(name).copied().unwrap_or(Decimal::ZERO)
    }
}
