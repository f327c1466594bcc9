//! Error types for the homestead-events crate.
//!
//! Every rejection is a precondition failure the caller can act on (for
//! example by disabling a button). None of them indicates corrupted state,
//! and none leaves a partially updated snapshot behind.

use rust_decimal::Decimal;

use homestead_catalog::CatalogError;
use homestead_types::{FruitSeedName, Millis, PatchIndex};

/// Errors that can occur while applying a game action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventError {
    /// The state has no bumpkin, so there is no active player.
    #[error("You do not have a Bumpkin")]
    NoActivePlayer,

    /// No fruit patch exists at the given index.
    #[error("Fruit patch does not exist")]
    EntityNotFound {
        /// The requested patch.
        index: PatchIndex,
    },

    /// The patch exists but nothing grows on it.
    #[error("Nothing was planted")]
    NothingPlanted {
        /// The empty patch.
        index: PatchIndex,
    },

    /// The fruit has not finished growing since it was planted.
    #[error("Not ready")]
    NotReady {
        /// The patch holding the fruit.
        index: PatchIndex,
        /// Earliest time the fruit can be harvested.
        ready_at: Millis,
    },

    /// The fruit was harvested too recently to harvest again.
    #[error("Fruit is still replenishing")]
    StillReplenishing {
        /// The patch holding the fruit.
        index: PatchIndex,
        /// Earliest time the fruit can be harvested again.
        replenished_at: Millis,
    },

    /// The tree has no harvests left and must be removed.
    #[error("No harvest left")]
    NoHarvestLeft {
        /// The exhausted patch.
        index: PatchIndex,
    },

    /// Something is already growing on the patch.
    #[error("Fruit patch is already planted")]
    AlreadyPlanted {
        /// The occupied patch.
        index: PatchIndex,
    },

    /// The inventory holds no seed of the requested kind.
    #[error("Not enough seeds")]
    MissingSeed {
        /// The requested seed.
        seed: FruitSeedName,
    },

    /// The tree still has harvests left and cannot be removed.
    #[error("Fruit tree still has {harvests_left} harvests left")]
    HarvestsRemaining {
        /// The patch holding the tree.
        index: PatchIndex,
        /// Harvests remaining.
        harvests_left: u32,
    },

    /// The inventory holds no axe to chop the tree down.
    #[error("No axes left")]
    MissingAxe,

    /// Attempted to remove more of an item than the inventory holds.
    #[error("insufficient {item}: wanted {requested} but only have {available}")]
    InsufficientItem {
        /// The item being removed.
        item: String,
        /// The quantity the caller attempted to remove.
        requested: Decimal,
        /// The quantity the inventory actually holds.
        available: Decimal,
    },

    /// A catalog lookup failed.
    #[error("catalog lookup failed: {source}")]
    Catalog {
        /// The underlying catalog error.
        #[from]
        source: CatalogError,
    },

    /// An arithmetic overflow occurred in a timestamp or quantity computation.
    #[error("arithmetic overflow: {context}")]
    ArithmeticOverflow {
        /// Description of what was being computed.
        context: String,
    },
}

impl EventError {
    /// Build an [`EventError::ArithmeticOverflow`] from a static description.
    pub(crate) fn overflow(context: &str) -> Self {
        Self::ArithmeticOverflow {
            context: String::from(context),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_client_wording() {
        let index = PatchIndex::from("0");
        assert_eq!(EventError::NoActivePlayer.to_string(), "You do not have a Bumpkin");
        assert_eq!(
            EventError::EntityNotFound { index: index.clone() }.to_string(),
            "Fruit patch does not exist"
        );
        assert_eq!(
            EventError::NothingPlanted { index: index.clone() }.to_string(),
            "Nothing was planted"
        );
        assert_eq!(
            EventError::NotReady {
                index: index.clone(),
                ready_at: 1
            }
            .to_string(),
            "Not ready"
        );
        assert_eq!(
            EventError::StillReplenishing {
                index: index.clone(),
                replenished_at: 1
            }
            .to_string(),
            "Fruit is still replenishing"
        );
        assert_eq!(EventError::NoHarvestLeft { index }.to_string(), "No harvest left");
    }

    #[test]
    fn catalog_errors_convert() {
        let err: EventError = CatalogError::UnknownSeed(FruitSeedName::AppleSeed).into();
        assert!(matches!(err, EventError::Catalog { .. }));
    }
}
