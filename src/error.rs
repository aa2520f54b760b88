//! Error types
//!
//! Physics stepping never fails; errors only come from constructing bodies,
//! inserting them into an arena, and loading configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid body: {0}")]
    InvalidBody(String),

    #[error("body diameter {diameter} does not fit in a {width}x{height} arena")]
    BodyTooLarge {
        diameter: f64,
        width: f64,
        height: f64,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings format error: {0}")]
    Json(#[from] serde_json::Error),
}
