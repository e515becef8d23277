//! Publisher and dispatcher halves of the bridge.
//!
//! The transport is a browser-wide broadcast channel any page can write
//! to. Outbound sends name a fixed target origin; inbound messages are
//! accepted only when their sender origin contains the configured host
//! fragment and their name carries the namespace prefix. Everything else
//! is dropped without error or logging; foreign traffic is expected
//! noise, not a fault.

use crate::envelope::{Envelope, EVENT_PREFIX};
use crate::protocol::{InboundEvent, OutboundEvent};
use crate::snapshot::{self, Snapshot};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::{debug, warn};

/// Origin configuration for both directions of the bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Exact origin outbound envelopes are addressed to.
    pub target_origin: String,
    /// Substring a sender origin must contain to be accepted.
    pub accepted_origin_fragment: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            target_origin: "https://tweetdeck.twitter.com".to_string(),
            accepted_origin_fragment: "tweetdeck.".to_string(),
        }
    }
}

/// One-way delivery into the other execution context.
///
/// Implementations bind this to the page's message-posting primitive.
/// Sends never block and carry no acknowledgement; delivery is
/// at-most-once in whatever order the underlying channel preserves.
pub trait Transport {
    fn post(&self, envelope: Envelope, target_origin: &str);
}

/// Outbound half of the bridge. Cheap to clone; handlers and the
/// mutation watcher each hold one.
#[derive(Clone)]
pub struct Publisher {
    transport: Rc<dyn Transport>,
    target_origin: String,
}

impl Publisher {
    #[must_use]
    pub fn new(transport: Rc<dyn Transport>, config: &BridgeConfig) -> Self {
        Self {
            transport,
            target_origin: config.target_origin.clone(),
        }
    }

    /// Publishes a cycle-safe snapshot of `payload` under the given event
    /// name. Fire-and-forget: a payload that cannot be serialized is
    /// logged and dropped rather than surfaced to the caller.
    pub fn publish(&self, event: OutboundEvent, payload: &dyn Snapshot) {
        match snapshot::serialize(payload) {
            Ok(detail) => {
                self.transport
                    .post(Envelope::new(event.as_str(), detail), &self.target_origin);
            }
            Err(err) => {
                warn!(event = event.as_str(), %err, "dropping unserializable payload");
            }
        }
    }

    /// Publishes an already-acyclic payload (wire structs, summaries)
    /// without the cycle-safe walk.
    pub fn publish_plain<T: Serialize>(&self, event: OutboundEvent, payload: &T) {
        match serde_json::to_string(payload) {
            Ok(detail) => {
                self.transport
                    .post(Envelope::new(event.as_str(), detail), &self.target_origin);
            }
            Err(err) => {
                warn!(event = event.as_str(), %err, "dropping unserializable payload");
            }
        }
    }
}

/// A transmitted message as observed by the receiving context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    /// Origin of the sending context, as reported by the transport.
    pub origin: String,
    pub envelope: Envelope,
}

/// Handler invoked with the raw message and its parsed payload.
pub type Handler = Box<dyn Fn(&IncomingMessage, Value)>;

/// Outcome of dispatching one incoming message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// A registered handler ran.
    Handled,
    /// Sender origin did not contain the accepted fragment.
    ForeignOrigin,
    /// Name missing the namespace prefix.
    ForeignName,
    /// Namespaced name with no registered handler.
    Unregistered,
    /// Registered name whose detail was not valid JSON.
    BadPayload,
}

/// Inbound half of the bridge: an explicit registry mapping fully
/// prefixed event names to handlers, populated at initialization.
pub struct Dispatcher {
    accepted_origin_fragment: String,
    handlers: HashMap<String, Handler>,
}

impl Dispatcher {
    #[must_use]
    pub fn new(config: &BridgeConfig) -> Self {
        Self {
            accepted_origin_fragment: config.accepted_origin_fragment.clone(),
            handlers: HashMap::new(),
        }
    }

    /// Registers the handler for an inbound event. A later registration
    /// for the same event replaces the earlier one.
    pub fn register(&mut self, event: InboundEvent, handler: Handler) {
        self.handlers
            .insert(format!("{EVENT_PREFIX}{}", event.as_str()), handler);
    }

    /// Verifies origin and namespace, then invokes the handler registered
    /// under the exact message name. Every non-handled case is a silent
    /// drop; this is the robustness boundary against the shared broadcast
    /// surface.
    pub fn dispatch(&self, message: &IncomingMessage) -> Dispatch {
        if !message.origin.contains(&self.accepted_origin_fragment) {
            return Dispatch::ForeignOrigin;
        }
        if message.envelope.event_name().is_none() {
            return Dispatch::ForeignName;
        }
        let Some(handler) = self.handlers.get(&message.envelope.name) else {
            return Dispatch::Unregistered;
        };
        let payload: Value = match serde_json::from_str(&message.envelope.detail) {
            Ok(value) => value,
            Err(err) => {
                debug!(name = %message.envelope.name, %err, "undecodable detail");
                return Dispatch::BadPayload;
            }
        };
        handler(message, payload);
        Dispatch::Handled
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// True when no handlers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
