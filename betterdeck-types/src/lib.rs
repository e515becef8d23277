//! Core type definitions for BetterDeck.
//!
//! This crate defines the domain types the injection layer shares with the
//! host deck client:
//! - Opaque identifiers for chirps, columns, and index entries
//! - The chirp entity graph (posts, reposts, quotes, threads, action targets)
//! - Columns, detail views, and their wire-level summaries
//!
//! Chirps are owned by the host application's column index and may be mutated
//! or evicted by it at any time. Everything here is held as a transient
//! `Rc` handle resolved per request; no structure in this crate outlives the
//! event that produced it.

mod chirp;
mod column;
mod ids;

pub use chirp::{
    Account, Chirp, ChirpEntities, ChirpType, IndexRange, MediaEntity, MediaSize, MediaSizes,
    MediaType, MentionEntity, UrlEntity, VideoVariant,
};
pub use column::{Column, ColumnSummary, DetailView, MediaPreviewSize};
pub use ids::{ChirpId, ColumnKey, UpdateKey};
