//! Input decoding and report building, kept apart from process setup so it
//! can be tested without files or a subscriber.

use serde::Serialize;

use homestead_core::{HomesteadConfig, ReplayOutcome, replay};
use homestead_types::{GameState, TimedAction};

use crate::error::VerifierError;

/// A skipped action, as printed in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedEntry {
    /// Zero-based position of the action in the log.
    pub position: usize,
    /// The reducer's rejection message.
    pub error: String,
}

/// The verified result printed to stdout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Number of actions applied.
    pub applied: usize,
    /// Actions that were skipped.
    pub rejected: Vec<RejectedEntry>,
    /// The final snapshot.
    pub state: GameState,
}

impl From<ReplayOutcome> for Report {
    fn from(outcome: ReplayOutcome) -> Self {
        Self {
            applied: outcome.applied,
            rejected: outcome
                .rejected
                .into_iter()
                .map(|rejection| RejectedEntry {
                    position: rejection.position,
                    error: rejection.error.to_string(),
                })
                .collect(),
            state: outcome.state,
        }
    }
}

/// Decode a snapshot and an action log, then replay the log.
pub fn verify(config: &HomesteadConfig, state_json: &str, log_json: &str) -> Result<Report, VerifierError> {
    let initial: GameState = serde_json::from_str(state_json).map_err(|source| VerifierError::Json {
        what: "state",
        source,
    })?;
    let log: Vec<TimedAction> = serde_json::from_str(log_json).map_err(|source| VerifierError::Json {
        what: "action log",
        source,
    })?;

    let catalog = config.build_catalog();
    let outcome = replay(&initial, &log, &catalog, config.replay.options())?;
    Ok(Report::from(outcome))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const STATE: &str = r#"{
        "inventory": { "Apple": "1" },
        "bumpkin": {},
        "fruitPatches": {
            "0": {
                "x": 0, "y": 0, "width": 1, "height": 1,
                "fruit": { "name": "Apple", "amount": "1", "plantedAt": 0, "harvestedAt": 0, "harvestsLeft": 1 }
            }
        }
    }"#;

    const LOG: &str = r#"[
        { "type": "fruit.harvested", "index": "0", "createdAt": 1700000000000 },
        { "type": "fruit.harvested", "index": "0", "createdAt": 1700000000001 }
    ]"#;

    #[test]
    fn strict_replay_reports_position() {
        let error = verify(&HomesteadConfig::default(), STATE, LOG).unwrap_err();
        assert!(matches!(error, VerifierError::Replay { .. }));
        assert!(error.to_string().contains("action 1 rejected"));
    }

    #[test]
    fn lenient_replay_lists_rejections() {
        let config = HomesteadConfig::parse("replay:\n  stop_on_first_rejection: false\n").unwrap();
        let report = verify(&config, STATE, LOG).unwrap();
        assert_eq!(report.applied, 1);
        assert_eq!(
            report.rejected,
            vec![RejectedEntry {
                position: 1,
                error: String::from("Fruit is still replenishing"),
            }]
        );

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["state"]["inventory"]["Apple"], "2");
    }

    #[test]
    fn report_keeps_fields_the_engine_does_not_model() {
        let state = r#"{
            "inventory": {},
            "bumpkin": { "id": 7, "experience": 1500, "skills": { "Green Thumb": 1 }, "equipped": {} },
            "fruitPatches": {
                "0": {
                    "x": 0, "y": 0, "width": 1, "height": 1, "createdAt": 5,
                    "fruit": { "name": "Apple", "amount": "1", "plantedAt": 0, "harvestedAt": 0, "harvestsLeft": 2 }
                }
            }
        }"#;
        let log = r#"[{ "type": "fruit.harvested", "index": "0", "createdAt": 1700000000000 }]"#;

        let report = verify(&HomesteadConfig::default(), state, log).unwrap();
        let value = serde_json::to_value(&report).unwrap();

        let bumpkin = &value["state"]["bumpkin"];
        assert_eq!(bumpkin["id"], 7);
        assert_eq!(bumpkin["experience"], 1500);
        assert_eq!(bumpkin["skills"]["Green Thumb"], 1);
        assert_eq!(bumpkin["equipped"], serde_json::json!({}));
        assert_eq!(bumpkin["activity"]["Apple Harvested"], 1);
        assert_eq!(value["state"]["fruitPatches"]["0"]["createdAt"], 5);
    }

    #[test]
    fn malformed_log_is_a_json_error() {
        let error = verify(&HomesteadConfig::default(), STATE, "[{}]").unwrap_err();
        assert!(matches!(error, VerifierError::Json { what: "action log", .. }));
    }
}
