//! Cycle-safe structural snapshots.
//!
//! Chirps form a reference graph: a repost references its target, a thread
//! references members that reference the thread back. A naive structural
//! serialization of such a graph either recurses forever or duplicates
//! large subgraphs. The walk here keeps a set of already-visited node
//! identities and replaces any repeat with `null`, which bounds output
//! size and guarantees termination on fully cyclic graphs. Receivers
//! treat the result as a disposable snapshot, not a live object, so the
//! lost duplicate-reference identity is acceptable.
//!
//! Accounts are *named-identity leaves*: their identity is the screen name
//! itself rather than the allocation, so a given account appears at most
//! once in full form per snapshot even when the host hands out several
//! copies of the same record.

use crate::BridgeResult;
use betterdeck_types::{Account, Chirp};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Identity of a node in the walked graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeIdentity {
    /// Allocation identity: two handles to the same host object compare
    /// equal, structurally equal copies do not.
    Addr(usize),
    /// Named identity: bounded leaf data keyed by a screen-name-like
    /// marker.
    Name(String),
}

impl NodeIdentity {
    /// Allocation identity of a shared node.
    #[must_use]
    pub fn addr<T: ?Sized>(node: &T) -> Self {
        Self::Addr(node as *const T as *const () as usize)
    }
}

/// A node that can be recorded into a cycle-safe snapshot.
///
/// Implementations emit their own fields and hand every nested node to
/// [`Walker::child`], which decides whether it is serialized in full or
/// collapsed to `null`. Scalar fields and acyclic serde values pass
/// through unchanged.
pub trait Snapshot {
    /// Identity used for repeat detection.
    fn identity(&self) -> NodeIdentity;

    /// Emits this node's fields, delegating nested nodes to the walker.
    fn record(&self, walker: &mut Walker) -> Value;
}

/// Depth-first walk state: the set of identities already emitted.
#[derive(Debug, Default)]
pub struct Walker {
    visited: HashSet<NodeIdentity>,
}

impl Walker {
    /// Visits a nested node: `null` if its identity was already emitted
    /// anywhere in this snapshot, its full recording otherwise.
    pub fn child(&mut self, node: &dyn Snapshot) -> Value {
        if !self.visited.insert(node.identity()) {
            return Value::Null;
        }
        node.record(self)
    }
}

/// Converts a node graph to an acyclic JSON value.
#[must_use]
pub fn to_value(root: &dyn Snapshot) -> Value {
    let mut walker = Walker::default();
    walker.child(root)
}

/// Serializes a node graph to a JSON string that survives one
/// structured-clone round-trip: no cycles, no repeated identities, no
/// function-like values.
pub fn serialize(root: &dyn Snapshot) -> BridgeResult<String> {
    Ok(serde_json::to_string(&to_value(root))?)
}

impl Snapshot for Chirp {
    fn identity(&self) -> NodeIdentity {
        NodeIdentity::addr(self)
    }

    fn record(&self, walker: &mut Walker) -> Value {
        let mut map = Map::new();
        map.insert("id".into(), Value::String(self.id.to_string()));
        map.insert(
            "chirpType".into(),
            Value::String(self.chirp_type.as_str().to_string()),
        );
        if let Some(text) = &self.text {
            map.insert("text".into(), Value::String(text.clone()));
        }
        if let Some(html) = &self.html_text {
            map.insert("htmlText".into(), Value::String(html.clone()));
        }
        if let Some(conversation) = &self.conversation_id {
            map.insert("conversationId".into(), Value::String(conversation.clone()));
        }
        if let Some(reply_to) = &self.in_reply_to_id {
            map.insert("inReplyToID".into(), Value::String(reply_to.to_string()));
        }
        if let Some(user) = &self.user {
            map.insert("user".into(), walker.child(user.as_ref()));
        }
        map.insert(
            "entities".into(),
            serde_json::to_value(&self.entities).unwrap_or(Value::Null),
        );
        if let Some(rt) = self.retweeted_status.borrow().as_ref() {
            map.insert("retweetedStatus".into(), walker.child(rt.as_ref()));
        }
        if let Some(quoted) = self.quoted_tweet.borrow().as_ref() {
            map.insert("quotedTweet".into(), walker.child(quoted.as_ref()));
        }
        let messages = self.messages.borrow();
        if !messages.is_empty() {
            let items = messages.iter().map(|m| walker.child(m.as_ref())).collect();
            map.insert("messages".into(), Value::Array(items));
        }
        if let Some(target) = self.target_tweet.borrow().as_ref() {
            map.insert("targetTweet".into(), walker.child(target.as_ref()));
        }
        Value::Object(map)
    }
}

impl Snapshot for Account {
    fn identity(&self) -> NodeIdentity {
        NodeIdentity::Name(self.screen_name.clone())
    }

    fn record(&self, _walker: &mut Walker) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
