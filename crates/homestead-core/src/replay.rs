//! Replaying an action log against a starting snapshot.
//!
//! A log is the ordered list of [`TimedAction`]s a client performed. Folding
//! it through [`apply_at`] with each action's recorded timestamp reproduces
//! the client's final snapshot, which lets a server verify what the client
//! claims without trusting it.

use tracing::{debug, info, warn};

use homestead_catalog::Catalog;
use homestead_events::{EventError, apply_at};
use homestead_types::{GameState, TimedAction};

/// Errors that abort a replay.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReplayError {
    /// An action was rejected while `stop_on_first_rejection` was set.
    #[error("action {position} rejected: {source}")]
    Rejected {
        /// Zero-based position of the action in the log.
        position: usize,
        /// Why the reducer rejected it.
        source: EventError,
    },
}

/// How a replay treats rejected actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayOptions {
    /// Abort on the first rejected action instead of skipping it.
    pub stop_on_first_rejection: bool,
}

impl Default for ReplayOptions {
    fn default() -> Self {
        Self {
            stop_on_first_rejection: true,
        }
    }
}

/// A rejected action that was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// Zero-based position of the action in the log.
    pub position: usize,
    /// Why the reducer rejected it.
    pub error: EventError,
}

/// The result of a completed replay.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayOutcome {
    /// The snapshot after every accepted action.
    pub state: GameState,
    /// Number of actions applied.
    pub applied: usize,
    /// Actions skipped because the reducer rejected them, in log order.
    pub rejected: Vec<Rejection>,
}

impl ReplayOutcome {
    /// Whether every action in the log was applied.
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Fold `log` over `initial` in order.
///
/// # Errors
///
/// Returns [`ReplayError::Rejected`] for the first rejected action when
/// `options.stop_on_first_rejection` is set. Otherwise rejected actions are
/// skipped and listed in [`ReplayOutcome::rejected`].
pub fn replay<C: Catalog + ?Sized>(
    initial: &GameState,
    log: &[TimedAction],
    catalog: &C,
    options: ReplayOptions,
) -> Result<ReplayOutcome, ReplayError> {
    let mut state = initial.clone();
    let mut applied: usize = 0;
    let mut rejected = Vec::new();

    for (position, timed) in log.iter().enumerate() {
        match apply_at(&state, &timed.action, catalog, timed.created_at) {
            Ok(next) => {
                state = next;
                applied = applied.saturating_add(1);
            }
            Err(error) => {
                warn!(
                    position,
                    action = timed.action.kind(),
                    index = %timed.action.index(),
                    created_at = timed.created_at,
                    %error,
                    "Action rejected during replay"
                );
                if options.stop_on_first_rejection {
                    return Err(ReplayError::Rejected {
                        position,
                        source: error,
                    });
                }
                rejected.push(Rejection { position, error });
            }
        }
    }

    debug!(applied, rejected = rejected.len(), "Replay finished");
    if !rejected.is_empty() {
        info!(applied, rejected = rejected.len(), "Replay skipped rejected actions");
    }

    Ok(ReplayOutcome {
        state,
        applied,
        rejected,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use homestead_catalog::StaticCatalog;
    use homestead_types::{
        Bumpkin, Extras, FruitName, FruitPatch, GameAction, PatchIndex, PlantedFruit,
    };
    use rust_decimal_macros::dec;

    use super::*;

    const DAY_MS: i64 = 24 * 60 * 60 * 1_000;

    fn farm() -> GameState {
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
                fruit: Some(PlantedFruit {
                    name: FruitName::Apple,
                    planted_at: 0,
                    harvested_at: 0,
                    harvests_left: 2,
                    amount: dec!(1),
                    other: Extras::new(),
                }),
                other: Extras::new(),
            },
        );
        state
    }

    fn harvest_at(created_at: i64) -> TimedAction {
        TimedAction {
            action: GameAction::HarvestFruit {
                index: PatchIndex::from("0"),
            },
            created_at,
        }
    }

    #[test]
    fn empty_log_returns_initial_state() {
        let initial = farm();
        let outcome = replay(&initial, &[], &StaticCatalog::new(), ReplayOptions::default()).unwrap();
        assert_eq!(outcome.state, initial);
        assert_eq!(outcome.applied, 0);
        assert!(outcome.is_clean());
    }

    #[test]
    fn stops_on_first_rejection() {
        let log = [harvest_at(DAY_MS), harvest_at(DAY_MS + 1), harvest_at(2 * DAY_MS)];
        let result = replay(&farm(), &log, &StaticCatalog::new(), ReplayOptions::default());
        assert!(matches!(
            result,
            Err(ReplayError::Rejected {
                position: 1,
                source: EventError::StillReplenishing { .. }
            })
        ));
    }

    #[test]
    fn skips_rejections_when_asked() {
        let log = [harvest_at(DAY_MS), harvest_at(DAY_MS + 1), harvest_at(2 * DAY_MS)];
        let options = ReplayOptions {
            stop_on_first_rejection: false,
        };
        let outcome = replay(&farm(), &log, &StaticCatalog::new(), options).unwrap();

        assert_eq!(outcome.applied, 2);
        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(outcome.rejected[0].position, 1);
        assert_eq!(outcome.state.item_count("Apple"), dec!(2));
        assert!(!outcome.is_clean());
    }
}
