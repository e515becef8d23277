//! Cross-context message bridge for BetterDeck.
//!
//! The injection layer runs inside the host page; the companion extension
//! runs in an isolated context. The only channel between them is a
//! browser-wide broadcast surface any page can write to, so every message
//! is namespaced, origin-checked, and reduced to an acyclic snapshot
//! before it crosses:
//! - [`snapshot`]: cycle-safe structural serialization of chirp graphs
//! - [`Envelope`]: the named-message unit, `BTDC_`-prefixed
//! - [`Publisher`]: outbound fire-and-forget sends to a fixed target origin
//! - [`Dispatcher`]: inbound origin filtering and handler dispatch

mod bridge;
mod envelope;
mod protocol;
pub mod snapshot;

pub use bridge::{
    BridgeConfig, Dispatch, Dispatcher, Handler, IncomingMessage, Publisher, Transport,
};
pub use envelope::{Envelope, EVENT_PREFIX};
pub use protocol::{InboundEvent, OutboundEvent};
pub use snapshot::{serialize, to_value, NodeIdentity, Snapshot, Walker};

/// Result type alias using the crate's error type.
pub type BridgeResult<T> = std::result::Result<T, BridgeError>;

/// Errors that can occur at the bridge boundary.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
