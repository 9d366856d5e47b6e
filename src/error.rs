//! Error types for jdk-scout operations.
//!
//! This module defines [`ScoutError`], the process-level error type,
//! and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Probe-level failures are data, not errors: they are captured as
//!   [`crate::discovery::ProbeError`] values inside broken records and
//!   never abort the run
//! - `ScoutError` covers the few conditions that legitimately end the
//!   process, such as failing to resolve our own executable path
//! - Use `anyhow::Error` (via `ScoutError::Other`) for unexpected errors

use thiserror::Error;

/// Process-level error type for jdk-scout operations.
#[derive(Debug, Error)]
pub enum ScoutError {
    /// The current process's own path could not be resolved, so the
    /// identity payload cannot be located.
    #[error("cannot resolve own executable path: {source}")]
    SelfPathUnavailable {
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for jdk-scout operations.
pub type Result<T> = std::result::Result<T, ScoutError>;
