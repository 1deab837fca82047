// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Engine error types.
//!
//! Checker evaluation itself never raises: configuration problems and input
//! gaps are absorbed into "skipped" / "not achieved" outcomes. These variants
//! cover the boundaries where a real error is still possible (typed parameter
//! decoding, storage I/O).

/// Error type for the trophy evaluation engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("No checker registered for key: {0}")]
    UnknownChecker(String),

    #[error("Invalid checker params: {0}")]
    InvalidParams(String),

    #[error("Award store error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
