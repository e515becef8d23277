//! Injection-layer lifecycle owner.
//!
//! Owns the dispatcher, the outbound publisher, the locator, and the host
//! collaborator handles; wires every inbound handler at construction and
//! exposes the outbound notification surface the embedding adapter calls
//! when host events fire. Handler bodies degrade to silent misses: a
//! malformed payload or a stale key drops the request, it never breaks
//! the host's rendering.

use crate::banner::{banner_message, BannerRequest};
use crate::collapse::CollapseController;
use crate::host::{ChirpActions, ChirpRenderer, ColumnSource, ColumnUi, HostEventSink};
use crate::locator::Locator;
use crate::media::{media_parts, FilenameTemplate};
use crate::payload::{
    ChirpForColumn, GifClickPayload, GifVideo, MediaGalleryPayload, MediaSizeUpdate,
};
use crate::settings::{InteractionMode, Settings};
use crate::title::TitleState;
use crate::watcher::Watcher;
use betterdeck_bridge::{
    BridgeConfig, Dispatch, Dispatcher, IncomingMessage, InboundEvent, OutboundEvent, Publisher,
    Transport,
};
use betterdeck_store::{CollapsedColumns, KeyValue};
use betterdeck_types::{ChirpId, ColumnKey, ColumnSummary, MediaPreviewSize};
use serde::Deserialize;
use serde_json::{json, Value};
use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Host capabilities and infrastructure the injector is built over.
pub struct Collaborators {
    pub columns: Rc<dyn ColumnSource>,
    pub actions: Rc<dyn ChirpActions>,
    pub renderer: Rc<dyn ChirpRenderer>,
    pub events: Rc<dyn HostEventSink>,
    pub column_ui: Rc<dyn ColumnUi>,
    pub store: Rc<dyn KeyValue>,
    pub transport: Rc<dyn Transport>,
}

struct State {
    publisher: Publisher,
    locator: Locator,
    actions: Rc<dyn ChirpActions>,
    renderer: Rc<dyn ChirpRenderer>,
    events: Rc<dyn HostEventSink>,
    column_ui: Rc<dyn ColumnUi>,
    settings: Rc<RefCell<Settings>>,
    /// Counter behind locally generated banner ids, the injector's only
    /// persistent local state.
    banner_id: Cell<u64>,
    /// Columns paused by hover, so leaving only unpauses what we paused.
    hover_paused: RefCell<HashSet<ColumnKey>>,
}

/// The injection layer: inbound dispatch plus outbound notifications.
pub struct Injector {
    state: Rc<State>,
    dispatcher: Dispatcher,
    collapse: CollapseController,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChirpRequest {
    chirp_key: ChirpId,
    col_key: ColumnKey,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModalRequest {
    tweet_key: ChirpId,
    col_key: ColumnKey,
    #[serde(default)]
    modal_html: Option<String>,
}

#[derive(Deserialize)]
struct BannerPayload {
    banner: BannerRequest,
}

#[derive(Deserialize)]
struct SettingsPayload {
    settings: Settings,
}

fn parse<T: serde::de::DeserializeOwned>(event: InboundEvent, payload: Value) -> Option<T> {
    match serde_json::from_value(payload) {
        Ok(value) => Some(value),
        Err(err) => {
            debug!(event = event.as_str(), %err, "malformed payload");
            None
        }
    }
}

impl Injector {
    /// Builds the injector and registers every inbound handler.
    #[must_use]
    pub fn new(collaborators: Collaborators, config: BridgeConfig, settings: Settings) -> Self {
        let Collaborators {
            columns,
            actions,
            renderer,
            events,
            column_ui,
            store,
            transport,
        } = collaborators;

        let settings = Rc::new(RefCell::new(settings));
        let state = Rc::new(State {
            publisher: Publisher::new(transport, &config),
            locator: Locator::new(Rc::clone(&columns)),
            actions,
            renderer,
            events,
            column_ui: Rc::clone(&column_ui),
            settings: Rc::clone(&settings),
            banner_id: Cell::new(1),
            hover_paused: RefCell::new(HashSet::new()),
        });
        let collapse = CollapseController::new(
            columns,
            column_ui,
            CollapsedColumns::new(store),
            settings,
        );

        let mut dispatcher = Dispatcher::new(&config);
        Self::register_handlers(&mut dispatcher, &state);

        Self {
            state,
            dispatcher,
            collapse,
        }
    }

    fn register_handlers(dispatcher: &mut Dispatcher, state: &Rc<State>) {
        let s = Rc::clone(state);
        dispatcher.register(
            InboundEvent::GetChirpFromColumn,
            Box::new(move |_msg, payload| {
                let Some(req) = parse::<ChirpRequest>(InboundEvent::GetChirpFromColumn, payload)
                else {
                    return;
                };
                let Some(chirp) = s.locator.locate(&req.chirp_key, &req.col_key) else {
                    return;
                };
                s.publisher.publish(
                    OutboundEvent::GotChirpForColumn,
                    &ChirpForColumn {
                        chirp,
                        col_key: req.col_key,
                    },
                );
            }),
        );

        let s = Rc::clone(state);
        dispatcher.register(
            InboundEvent::GetOpenModalTweetHtml,
            Box::new(move |_msg, payload| {
                let Some(req) = parse::<ModalRequest>(InboundEvent::GetOpenModalTweetHtml, payload)
                else {
                    return;
                };
                let Some(chirp) = s.locator.locate(&req.tweet_key, &req.col_key) else {
                    return;
                };
                let markup = s.renderer.media_gallery_markup(&chirp).or_else(|| {
                    chirp
                        .target()
                        .and_then(|target| s.renderer.media_gallery_markup(&target))
                });
                s.publisher.publish(
                    OutboundEvent::GotMediaGalleryChirpHtml,
                    &MediaGalleryPayload {
                        markup,
                        chirp,
                        modal_html: req.modal_html,
                        col_key: req.col_key,
                    },
                );
            }),
        );

        let s = Rc::clone(state);
        dispatcher.register(
            InboundEvent::LikeChirp,
            Box::new(move |_msg, payload| {
                let Some(req) = parse::<ChirpRequest>(InboundEvent::LikeChirp, payload) else {
                    return;
                };
                let Some(chirp) = s.locator.locate(&req.chirp_key, &req.col_key) else {
                    return;
                };
                s.actions.favorite(&chirp);
            }),
        );

        let s = Rc::clone(state);
        dispatcher.register(
            InboundEvent::RetweetChirp,
            Box::new(move |_msg, payload| {
                let Some(req) = parse::<ChirpRequest>(InboundEvent::RetweetChirp, payload) else {
                    return;
                };
                let Some(chirp) = s.locator.locate(&req.chirp_key, &req.col_key) else {
                    return;
                };
                s.actions.retweet(&chirp);
            }),
        );

        let s = Rc::clone(state);
        dispatcher.register(
            InboundEvent::ShowTdBanner,
            Box::new(move |_msg, payload| {
                let Some(req) = parse::<BannerPayload>(InboundEvent::ShowTdBanner, payload) else {
                    return;
                };
                let id = s.banner_id.get() + 1;
                s.banner_id.set(id);
                s.events.trigger("dataMessage", banner_message(id, &req.banner));
            }),
        );

        let s = Rc::clone(state);
        dispatcher.register(
            InboundEvent::SettingsReady,
            Box::new(move |_msg, payload| {
                let Some(req) = parse::<SettingsPayload>(InboundEvent::SettingsReady, payload)
                else {
                    return;
                };
                *s.settings.borrow_mut() = req.settings;
                info!("settings replaced from companion context");
            }),
        );
    }

    /// Routes one transported message through origin and namespace checks
    /// to its handler.
    pub fn message_arrived(&self, message: &IncomingMessage) -> Dispatch {
        self.dispatcher.dispatch(message)
    }

    /// Host finished loading columns: announce readiness and restore
    /// persisted collapsed columns.
    pub fn columns_loaded(&self) {
        self.state.publisher.publish_plain(OutboundEvent::Ready, &json!({}));
        if let Err(err) = self.collapse.restore() {
            warn!(%err, "failed to restore collapsed columns");
        }
        info!("injection layer ready");
    }

    /// Host's column set changed.
    pub fn columns_changed(&self, summaries: &[ColumnSummary]) {
        self.state
            .publisher
            .publish_plain(OutboundEvent::ColumnsChanged, &summaries);
    }

    /// A column's media preview size changed.
    pub fn media_size_updated(&self, id: &ColumnKey, size: MediaPreviewSize) {
        self.state.publisher.publish_plain(
            OutboundEvent::ColumnMediaSizeUpdated,
            &MediaSizeUpdate {
                id: id.clone(),
                size,
            },
        );
    }

    /// A gif in a chirp was clicked: describe the video and hand it to
    /// the companion context.
    pub fn gif_clicked(&self, chirp_key: &ChirpId, col_key: &ColumnKey, src: &str) {
        let Some(chirp) = self.state.locator.locate(chirp_key, col_key) else {
            return;
        };
        let Some(sizes) = chirp.entities.media.first().and_then(|m| m.sizes) else {
            debug!(chirp = %chirp_key, "gif click on chirp without sized media");
            return;
        };

        let gif_url = match src.strip_suffix(".mp4") {
            Some(stem) => format!("{stem}.gif"),
            None => src.to_string(),
        };
        let template = FilenameTemplate::new(
            self.state.settings.borrow().download_filename_format.as_str(),
        );
        let name = template.render(&media_parts(&chirp, &gif_url));

        self.state.publisher.publish_plain(
            OutboundEvent::ClickedOnGif,
            &GifClickPayload {
                tweet_key: chirp_key.clone(),
                col_key: col_key.clone(),
                video: GifVideo {
                    src: src.to_string(),
                    width: sizes.large.w,
                    height: sizes.large.h,
                    name: Some(name),
                },
            },
        );
    }

    /// A like/repost click with the modifier key held: follow (or offer
    /// to follow) the chirp's author instead.
    pub fn modified_interaction(&self, chirp_key: &ChirpId, col_key: &ColumnKey) {
        let interactions = self.state.settings.borrow().ctrl_changes_interactions;
        if !interactions.enabled {
            return;
        }
        let Some(chirp) = self.state.locator.locate(chirp_key, col_key) else {
            return;
        };
        let Some(user) = chirp.display_user() else {
            return;
        };

        match interactions.mode {
            InteractionMode::Prompt => {
                if let Ok(payload) = serde_json::to_value(&*user) {
                    self.state
                        .events
                        .trigger("uiShowFollowFromOptions", json!({ "userToFollow": payload }));
                }
            }
            InteractionMode::Owner => {
                if !user.following {
                    self.state.actions.follow(&user);
                }
            }
        }
    }

    /// Pointer entered a column: pause it when it sits at the top.
    pub fn column_hovered(&self, key: &ColumnKey) {
        if !self.state.settings.borrow().pause_scroll_on_hover {
            return;
        }
        if self.state.column_ui.scroll_position(key) == 0 {
            self.state.column_ui.pause(key);
            self.state.hover_paused.borrow_mut().insert(key.clone());
        }
    }

    /// Pointer left a column: unpause it if the hover paused it.
    pub fn column_unhovered(&self, key: &ColumnKey) {
        if self.state.hover_paused.borrow_mut().remove(key) {
            self.state.column_ui.unpause(key);
        }
    }

    /// The host's unread state changed: the title to switch to, if any.
    #[must_use]
    pub fn unread_state_changed(
        &self,
        titles: &TitleState,
        current: &str,
        read: Option<bool>,
        count: Option<u32>,
        any_unread_visible: bool,
    ) -> Option<String> {
        if !self.state.settings.borrow().update_title_on_notifications {
            return None;
        }
        titles.next_title(current, read, count, any_unread_visible)
    }

    /// A watcher bound to this injector's locator and publisher.
    #[must_use]
    pub fn watcher(&self) -> Watcher {
        Watcher::new(self.state.locator.clone(), self.state.publisher.clone())
    }

    /// The collapse controller for header-button and navigator bindings.
    #[must_use]
    pub fn collapse(&self) -> &CollapseController {
        &self.collapse
    }

    /// A copy of the live settings.
    #[must_use]
    pub fn settings(&self) -> Settings {
        self.state.settings.borrow().clone()
    }
}
