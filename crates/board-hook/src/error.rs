//! Error types for hook setup.
//!
//! Only setup can fail. Malformed cells, illegal moves and abandoned
//! gestures are ordinary outcomes and never become errors.

use thiserror::Error;

/// Errors that can occur while configuring or mounting a hook.
#[derive(Debug, Error)]
pub enum HookError {
    /// The configuration could not be decoded.
    #[error("failed to parse hook config: {0}")]
    ParseConfig(#[from] serde_json::Error),

    /// The configuration decoded but holds unusable values.
    #[error("invalid hook config: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// A browser global (window, document, body) is unavailable.
    #[error("browser environment unavailable: {0}")]
    MissingGlobal(&'static str),
}

/// Validation failures for [`HookConfig`](crate::HookConfig).
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("rejectDurationMs must be positive")]
    ZeroDuration,

    #[error("proxyOpacity must be within 0.0..=1.0, got {0}")]
    OpacityOutOfRange(f64),
}
