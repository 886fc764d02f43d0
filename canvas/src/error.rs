//! Error type for the canvas crate.
//!
//! Most editing requests with a missing prerequisite (no selection, empty
//! clipboard) are silent no-ops and never reach this type. Only an explicit
//! out-of-range index or a malformed configuration is reported.

/// Errors returned by registry and configuration operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CanvasError {
    /// An index addressed past the end of the registry.
    #[error("shape index {index} out of range (registry holds {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// A configuration value was rejected by validation.
    #[error("invalid editor config: {0}")]
    InvalidConfig(String),
}
