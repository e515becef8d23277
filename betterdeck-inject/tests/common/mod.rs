#![allow(dead_code)]

use betterdeck_bridge::{BridgeConfig, Envelope, IncomingMessage, Transport};
use betterdeck_inject::host::{
    ChirpActions, ChirpRenderer, ColumnSource, ColumnUi, HostEventSink,
};
use betterdeck_inject::{Collaborators, Injector, Settings};
use betterdeck_store::{KeyValue, MemoryStore};
use betterdeck_types::{Account, Chirp, ChirpId, ChirpType, Column, ColumnKey};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub struct RecordingTransport {
    pub posts: RefCell<Vec<Envelope>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self {
            posts: RefCell::new(Vec::new()),
        }
    }

    /// Parsed detail of the only recorded envelope with this name.
    pub fn detail(&self, name: &str) -> Value {
        let posts = self.posts.borrow();
        let matches: Vec<&Envelope> = posts.iter().filter(|e| e.name == name).collect();
        assert_eq!(matches.len(), 1, "expected exactly one {name} envelope");
        serde_json::from_str(&matches[0].detail).unwrap()
    }

    pub fn names(&self) -> Vec<String> {
        self.posts.borrow().iter().map(|e| e.name.clone()).collect()
    }
}

impl Transport for RecordingTransport {
    fn post(&self, envelope: Envelope, _target_origin: &str) {
        self.posts.borrow_mut().push(envelope);
    }
}

#[derive(Default)]
pub struct FakeHost {
    pub columns: RefCell<HashMap<String, Rc<Column>>>,
    pub favorited: RefCell<Vec<ChirpId>>,
    pub retweeted: RefCell<Vec<ChirpId>>,
    pub followed: RefCell<Vec<String>>,
    pub triggered: RefCell<Vec<(String, Value)>>,
    pub paused: RefCell<Vec<ColumnKey>>,
    pub unpaused: RefCell<Vec<ColumnKey>>,
    pub collapsed_ui: RefCell<Vec<(ColumnKey, bool)>>,
    pub scroll: RefCell<HashMap<String, u32>>,
    /// Chirp id → media-gallery markup the fake renderer returns.
    pub gallery_markup: RefCell<HashMap<String, String>>,
}

impl FakeHost {
    pub fn add_column(&self, column: Rc<Column>) {
        self.columns
            .borrow_mut()
            .insert(column.key.to_string(), column);
    }

    pub fn set_scroll(&self, key: &ColumnKey, position: u32) {
        self.scroll.borrow_mut().insert(key.to_string(), position);
    }
}

impl ColumnSource for FakeHost {
    fn column(&self, key: &ColumnKey) -> Option<Rc<Column>> {
        self.columns.borrow().get(key.as_str()).map(Rc::clone)
    }

    fn column_by_api_id(&self, api_id: &str) -> Option<Rc<Column>> {
        self.columns
            .borrow()
            .values()
            .find(|c| c.api_id.as_deref() == Some(api_id))
            .map(Rc::clone)
    }
}

impl ChirpActions for FakeHost {
    fn favorite(&self, chirp: &Rc<Chirp>) {
        self.favorited.borrow_mut().push(chirp.id.clone());
    }

    fn retweet(&self, chirp: &Rc<Chirp>) {
        self.retweeted.borrow_mut().push(chirp.id.clone());
    }

    fn follow(&self, account: &Rc<Account>) {
        self.followed.borrow_mut().push(account.screen_name.clone());
    }
}

impl ChirpRenderer for FakeHost {
    fn media_gallery_markup(&self, chirp: &Rc<Chirp>) -> Option<String> {
        self.gallery_markup
            .borrow()
            .get(chirp.id.as_str())
            .cloned()
    }
}

impl HostEventSink for FakeHost {
    fn trigger(&self, event: &str, payload: Value) {
        self.triggered
            .borrow_mut()
            .push((event.to_string(), payload));
    }
}

impl ColumnUi for FakeHost {
    fn pause(&self, key: &ColumnKey) {
        self.paused.borrow_mut().push(key.clone());
    }

    fn unpause(&self, key: &ColumnKey) {
        self.unpaused.borrow_mut().push(key.clone());
    }

    fn set_collapsed(&self, key: &ColumnKey, collapsed: bool) {
        self.collapsed_ui.borrow_mut().push((key.clone(), collapsed));
    }

    fn scroll_position(&self, key: &ColumnKey) -> u32 {
        self.scroll
            .borrow()
            .get(key.as_str())
            .copied()
            .unwrap_or(0)
    }
}

pub struct Fixture {
    pub host: Rc<FakeHost>,
    pub transport: Rc<RecordingTransport>,
    pub store: Rc<MemoryStore>,
    pub injector: Injector,
}

pub fn fixture(settings: Settings) -> Fixture {
    let host = Rc::new(FakeHost::default());
    let transport = Rc::new(RecordingTransport::new());
    let store = Rc::new(MemoryStore::new());
    let injector = Injector::new(
        Collaborators {
            columns: Rc::clone(&host) as Rc<dyn ColumnSource>,
            actions: Rc::clone(&host) as Rc<dyn ChirpActions>,
            renderer: Rc::clone(&host) as Rc<dyn ChirpRenderer>,
            events: Rc::clone(&host) as Rc<dyn HostEventSink>,
            column_ui: Rc::clone(&host) as Rc<dyn ColumnUi>,
            store: Rc::clone(&store) as Rc<dyn KeyValue>,
            transport: Rc::clone(&transport) as Rc<dyn Transport>,
        },
        BridgeConfig::default(),
        settings,
    );
    Fixture {
        host,
        transport,
        store,
        injector,
    }
}

pub fn chirp(id: &str) -> Rc<Chirp> {
    Rc::new(Chirp::new(id, ChirpType::Tweet))
}

pub fn chirp_with_user(id: &str, screen_name: &str) -> Rc<Chirp> {
    let mut c = Chirp::new(id, ChirpType::Tweet);
    c.user = Some(Rc::new(Account::new(screen_name, screen_name)));
    Rc::new(c)
}

/// An incoming message from the accepted host origin.
pub fn incoming(name: &str, detail: Value) -> IncomingMessage {
    IncomingMessage {
        origin: "https://tweetdeck.twitter.com".to_string(),
        envelope: Envelope {
            name: name.to_string(),
            detail: detail.to_string(),
        },
    }
}
