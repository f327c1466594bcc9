//! Configuration and action-log replay for the Homestead farm-state engine.
//!
//! This crate wires the pure reducer in `homestead-events` to the outside
//! world: it loads engine configuration from YAML and folds recorded action
//! logs into final snapshots.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `homestead-config.yaml` into
//!   strongly-typed structs ([`HomesteadConfig`]).
//! - [`replay`] -- Deterministic replay of a [`TimedAction`] log.
//!
//! [`TimedAction`]: homestead_types::TimedAction

pub mod config;
pub mod replay;

pub use config::{ConfigError, HomesteadConfig};
pub use replay::{Rejection, ReplayError, ReplayOptions, ReplayOutcome, replay};
