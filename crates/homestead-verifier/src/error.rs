//! Error types for the verifier binary.
//!
//! [`VerifierError`] wraps every failure mode between reading the inputs and
//! printing the report, so `main` can propagate with `?`.

/// Top-level error for the verifier binary.
#[derive(Debug, thiserror::Error)]
pub enum VerifierError {
    /// The command line was malformed.
    #[error("usage: homestead-verifier <state.json> <actions.json>")]
    Usage,

    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: homestead_core::ConfigError,
    },

    /// An input file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// The file being read.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// An input or output document was not valid JSON of the expected shape.
    #[error("invalid {what}: {source}")]
    Json {
        /// Which document failed.
        what: &'static str,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// Replay aborted on a rejected action.
    #[error("replay failed: {source}")]
    Replay {
        /// The underlying replay error.
        #[from]
        source: homestead_core::ReplayError,
    },
}
