//! Identifier types used throughout the injection layer.
//!
//! Every identifier originates in the host application and reaches this code
//! as an opaque string (a DOM attribute, an index key, a message payload
//! field). They are never parsed or normalized beyond string coercion:
//! `"007"` and `"7"` are distinct identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a chirp, stable for the lifetime of a session.
///
/// The host exposes chirp ids both as strings (DOM attributes) and as
/// numbers (some API payloads); numeric ids are coerced to their decimal
/// string form at the boundary via [`From<u64>`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChirpId(String);

impl ChirpId {
    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ChirpId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ChirpId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<u64> for ChirpId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl fmt::Display for ChirpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a column managed by the host's column manager.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnKey(String);

impl ColumnKey {
    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColumnKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ColumnKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Key of an entry in a column's update index.
///
/// Update keys address index slots, not chirps; the same chirp can sit
/// behind several update keys and a chirp's own id rarely equals any of
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UpdateKey(String);

impl UpdateKey {
    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UpdateKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for UpdateKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for UpdateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
