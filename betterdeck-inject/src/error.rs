//! Error types for the injection layer.

use crate::media::MediaError;
use thiserror::Error;

/// Result type for injection-layer operations.
pub type InjectResult<T> = Result<T, InjectError>;

/// Errors that can occur in injection-layer operations.
///
/// Most failure modes here never become errors at all: lookup misses are
/// `None`, foreign messages are dropped, cycles are collapsed
/// structurally. What remains is serialization of our own wire structs and
/// persistence of the collapsed-columns blob.
#[derive(Debug, Error)]
pub enum InjectError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("store error: {0}")]
    Store(#[from] betterdeck_store::StoreError),

    #[error("media error: {0}")]
    Media(#[from] MediaError),
}
