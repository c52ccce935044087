//! Render-layer error types.
//!
//! Wraps the core input errors and adds the one failure mode the core
//! cannot see: the underlying PDF construction refusing to produce bytes.
//! A caller always receives exactly one of: a complete artifact, or a
//! single error. Never partial output.

use sona_core::CoreError;
use thiserror::Error;

/// Errors surfaced by the renderers and the message composer.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The invoice data failed validation before any layout work began.
    #[error("invalid invoice data: {0}")]
    Invalid(#[from] CoreError),

    /// The PDF backend signalled a construction failure.
    /// Not retried internally; rendering is not expected to be
    /// transiently flaky.
    #[error("pdf construction failed: {0}")]
    Pdf(String),
}

/// Convenience type alias for Results with RenderError.
pub type RenderResult<T> = Result<T, RenderError>;
