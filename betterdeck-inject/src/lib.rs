//! The BetterDeck injection layer.
//!
//! Runs inside the host deck client's page, resolves DOM-exposed keys back
//! to live chirp objects, and feeds the companion extension context a
//! best-effort stream of "what is on screen" over the message bridge:
//! - [`Locator`]: column-index traversal from opaque keys to chirps
//! - [`Watcher`]: DOM-insertion reactions (media modal, column chirps)
//! - [`Injector`]: inbound handler wiring plus outbound notifications
//! - host-boundary traits in [`host`] for every capability the host app
//!   exposes (columns, actions, rendering, events, column UI)
//!
//! Every resolution path treats absence defensively: the host app's
//! internals are an uncontrolled dependency, and a single failure here must
//! degrade to missing functionality, never break the host's own rendering.

mod banner;
mod collapse;
mod compose;
mod error;
pub mod host;
mod injector;
mod interceptor;
mod locator;
mod media;
mod payload;
mod settings;
mod title;
mod watcher;

pub use banner::BannerRequest;
pub use collapse::CollapseController;
pub use compose::{chirp_url, original_text, silence_range, unescape_html};
pub use error::{InjectError, InjectResult};
pub use injector::{Collaborators, Injector};
pub use interceptor::{FullUrlAnchors, Interceptor, InterceptorStack, RegexPhraseFilter};
pub use locator::Locator;
pub use media::{
    best_variant, media_parts, media_url_parts, media_urls, FilenameTemplate, MediaError,
    MediaParts, MediaResult, MediaUrlParts,
};
pub use payload::{GifVideo, MediaSizeUpdate};
pub use settings::{CtrlInteractions, InteractionMode, Settings};
pub use title::TitleState;
pub use watcher::{DocumentMarkup, Insertion, NodeMarkup, Watcher};
