//! The chirp entity graph.
//!
//! A chirp is a post-like object produced by the host application: a post,
//! a direct message, a message thread, or a notification about an action.
//! Chirps reference other chirps (repost target, quoted chirp, thread
//! members, action target) and those references can form cycles: a thread
//! references its members, a member references the thread back.
//!
//! `Chirp` deliberately does not derive `Serialize`; a structural
//! serialization of a cyclic graph recurses forever. Snapshots crossing the
//! context boundary go through the bridge's cycle-safe walk instead.

use crate::ChirpId;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Kind of chirp, as the host classifies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChirpType {
    Tweet,
    Message,
    MessageThread,
    Activity,
}

impl ChirpType {
    /// Wire name of the chirp type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tweet => "tweet",
            Self::Message => "message",
            Self::MessageThread => "message_thread",
            Self::Activity => "activity",
        }
    }
}

/// An account as the host attaches it to chirps.
///
/// Accounts carry a screen name, which makes them named-identity leaves for
/// snapshot purposes: bounded, self-describing data that is safe to emit in
/// full even when the same account hangs off many chirps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub screen_name: String,
    pub name: String,
    #[serde(rename = "profileImageURL", default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub following: bool,
}

impl Account {
    /// Creates an account with just a screen name and display name.
    #[must_use]
    pub fn new(screen_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            screen_name: screen_name.into(),
            name: name.into(),
            profile_image_url: None,
            following: false,
        }
    }
}

/// Half-open character range into a chirp's text, as the host indexes
/// entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRange {
    pub start: usize,
    pub end: usize,
}

impl IndexRange {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Media kind attached to a chirp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Photo,
    Video,
    AnimatedGif,
}

/// One encoding of a video or animated gif.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoVariant {
    #[serde(default)]
    pub bitrate: Option<u64>,
    pub url: String,
}

/// Pixel dimensions of a media rendition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaSize {
    pub w: u32,
    pub h: u32,
}

/// The renditions the host reports for a media entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaSizes {
    pub large: MediaSize,
}

/// A media attachment on a chirp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaEntity {
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub media_url_https: String,
    #[serde(default)]
    pub video_variants: Vec<VideoVariant>,
    #[serde(default)]
    pub sizes: Option<MediaSizes>,
    #[serde(default)]
    pub indices: Option<IndexRange>,
}

/// A shortened URL span in a chirp's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlEntity {
    pub url: String,
    pub expanded_url: String,
    #[serde(default)]
    pub indices: Option<IndexRange>,
}

/// A mention span in a chirp's text.
///
/// Implicit mentions are the leading reply mentions the host inserts
/// without the author typing them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionEntity {
    pub screen_name: String,
    #[serde(default)]
    pub is_implicit: bool,
    #[serde(default)]
    pub indices: Option<IndexRange>,
}

/// The entity spans and attachments the host extracted from a chirp.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChirpEntities {
    #[serde(default)]
    pub media: Vec<MediaEntity>,
    #[serde(default)]
    pub urls: Vec<UrlEntity>,
    #[serde(default)]
    pub user_mentions: Vec<MentionEntity>,
}

/// A post-like entity owned by the host application.
///
/// Nested references sit behind `RefCell` so adapters can tie up reference
/// cycles after construction; chirps are always shared as `Rc<Chirp>` and
/// everything runs on the host page's single UI thread.
#[derive(Debug)]
pub struct Chirp {
    pub id: ChirpId,
    pub chirp_type: ChirpType,
    pub text: Option<String>,
    pub html_text: Option<String>,
    pub user: Option<Rc<Account>>,
    pub conversation_id: Option<String>,
    pub in_reply_to_id: Option<ChirpId>,
    pub entities: ChirpEntities,
    /// The reposted chirp, when this chirp is a repost.
    pub retweeted_status: RefCell<Option<Rc<Chirp>>>,
    /// The quoted chirp, when this chirp quotes another.
    pub quoted_tweet: RefCell<Option<Rc<Chirp>>>,
    /// Ordered thread members, for thread-like composites.
    pub messages: RefCell<Vec<Rc<Chirp>>>,
    /// The chirp an action (like, repost, reply notification) applies to.
    pub target_tweet: RefCell<Option<Rc<Chirp>>>,
}

impl Chirp {
    /// Creates a chirp with no text, user, or nested references.
    #[must_use]
    pub fn new(id: impl Into<ChirpId>, chirp_type: ChirpType) -> Self {
        Self {
            id: id.into(),
            chirp_type,
            text: None,
            html_text: None,
            user: None,
            conversation_id: None,
            in_reply_to_id: None,
            entities: ChirpEntities::default(),
            retweeted_status: RefCell::new(None),
            quoted_tweet: RefCell::new(None),
            messages: RefCell::new(Vec::new()),
            target_tweet: RefCell::new(None),
        }
    }

    /// The account to attribute displayed media to: the repost target's
    /// user when this chirp is a repost, otherwise the chirp's own user.
    #[must_use]
    pub fn display_user(&self) -> Option<Rc<Account>> {
        if let Some(rt) = self.retweeted_status.borrow().as_ref() {
            if let Some(user) = &rt.user {
                return Some(Rc::clone(user));
            }
        }
        self.user.as_ref().map(Rc::clone)
    }

    /// Clones the current repost target handle, if any.
    #[must_use]
    pub fn retweeted(&self) -> Option<Rc<Chirp>> {
        self.retweeted_status.borrow().as_ref().map(Rc::clone)
    }

    /// Clones the current quoted-chirp handle, if any.
    #[must_use]
    pub fn quoted(&self) -> Option<Rc<Chirp>> {
        self.quoted_tweet.borrow().as_ref().map(Rc::clone)
    }

    /// Clones the current action-target handle, if any.
    #[must_use]
    pub fn target(&self) -> Option<Rc<Chirp>> {
        self.target_tweet.borrow().as_ref().map(Rc::clone)
    }
}
