//! Verifier binary for the Homestead farm-state engine.
//!
//! Replays a client's recorded action log against the snapshot it started
//! from and prints the resulting snapshot as JSON. A server runs this to
//! check what a client claims without trusting it.
//!
//! # Usage
//!
//! ```text
//! homestead-verifier <state.json> <actions.json>
//! ```
//!
//! Configuration is read from `HOMESTEAD_CONFIG` if set, otherwise from
//! `homestead-config.yaml` in the working directory, otherwise defaults.
//!
//! # Startup Sequence
//!
//! 1. Load configuration
//! 2. Initialize structured logging (tracing)
//! 3. Read the snapshot and the action log
//! 4. Replay and print the report

mod error;
mod verify;

use std::path::{Path, PathBuf};

use homestead_core::HomesteadConfig;
use homestead_core::config::DEFAULT_CONFIG_PATH;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::VerifierError;

/// Environment variable naming the configuration file.
const CONFIG_ENV: &str = "HOMESTEAD_CONFIG";

/// Application entry point for the verifier.
///
/// # Errors
///
/// Returns an error if the inputs cannot be read or decoded, or if replay
/// aborts on a rejected action.
fn main() -> anyhow::Result<()> {
    // 1. Load configuration before logging so the configured level applies.
    let (config, config_path) = load_config()?;

    // 2. Initialize structured logging. RUST_LOG wins over the config.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!("homestead-verifier starting");
    info!(
        path = ?config_path,
        seed_overrides = config.catalog.seeds.len(),
        stop_on_first_rejection = config.replay.stop_on_first_rejection,
        "Configuration loaded"
    );

    // 3. Read inputs.
    let mut args = std::env::args().skip(1);
    let (Some(state_path), Some(log_path), None) = (args.next(), args.next(), args.next()) else {
        return Err(VerifierError::Usage.into());
    };
    let state_json = read(&state_path)?;
    let log_json = read(&log_path)?;

    // 4. Replay and print.
    let report = verify::verify(&config, &state_json, &log_json)?;
    info!(
        applied = report.applied,
        rejected = report.rejected.len(),
        "Replay complete"
    );

    let output = serde_json::to_string_pretty(&report).map_err(|source| VerifierError::Json {
        what: "report",
        source,
    })?;
    println!("{output}");

    Ok(())
}

/// Load configuration from `HOMESTEAD_CONFIG` or `homestead-config.yaml`.
///
/// Returns the path actually read, or `None` if defaults were used.
fn load_config() -> Result<(HomesteadConfig, Option<PathBuf>), VerifierError> {
    let path = std::env::var_os(CONFIG_ENV).map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);

    // An explicitly named file must exist; the default one is optional.
    if path.exists() || std::env::var_os(CONFIG_ENV).is_some() {
        let config = HomesteadConfig::from_file(&path)?;
        Ok((config, Some(path)))
    } else {
        Ok((HomesteadConfig::parse("")?, None))
    }
}

/// Read an input file to a string.
fn read(path: &str) -> Result<String, VerifierError> {
    std::fs::read_to_string(Path::new(path)).map_err(|source| VerifierError::Read {
        path: String::from(path),
        source,
    })
}
