//! Error types for registration, configuration and schema decoration.
//!
//! Metadata queries never fail; an absent description or an unmarked field is
//! reported as `None` / `false`, not as an error.

/// Error type for route-docs operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // Registry errors
    #[error("Conflict: `{name}` is already registered by {existing}, cannot register {incoming}")]
    Conflict {
        name: &'static str,
        existing: &'static str,
        incoming: &'static str,
    },

    // Config errors
    #[error("Configuration error: {0}")]
    Config(String),

    // System errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using route-docs' Error.
pub type Result<T> = std::result::Result<T, Error>;
