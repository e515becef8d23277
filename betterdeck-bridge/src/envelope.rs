//! The named-message unit crossing the execution-context boundary.

use serde::{Deserialize, Serialize};

/// Namespace prefix carried by every BetterDeck message name, so the
/// receiving context can cheaply filter foreign traffic off the shared
/// broadcast surface.
pub const EVENT_PREFIX: &str = "BTDC_";

/// A message crossing the context boundary.
///
/// `name` is always `EVENT_PREFIX` + the event name; `detail` is a JSON
/// string produced by one cycle-safe serialization pass, so it survives a
/// structured-clone round-trip with no cycles and no function values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub name: String,
    pub detail: String,
}

impl Envelope {
    /// Builds an envelope for an event name, applying the namespace prefix.
    #[must_use]
    pub fn new(event_name: &str, detail: String) -> Self {
        Self {
            name: format!("{EVENT_PREFIX}{event_name}"),
            detail,
        }
    }

    /// The event name with the namespace prefix stripped, or `None` for a
    /// foreign (unprefixed) message.
    #[must_use]
    pub fn event_name(&self) -> Option<&str> {
        self.name.strip_prefix(EVENT_PREFIX)
    }
}
