//! Banner raising through the host's message surface.

use serde::Deserialize;
use serde_json::{json, Value};

/// A banner request as the companion context sends it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BannerRequest {
    pub text: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub bg: Option<String>,
    #[serde(default)]
    pub fg: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub event: Option<Value>,
}

/// Builds the host `dataMessage` payload for a banner.
pub(crate) fn banner_message(id: u64, banner: &BannerRequest) -> Value {
    let mut action = json!({
        "id": format!("btd-banner-{id}"),
        "action": banner.action.as_deref().unwrap_or("url-ext"),
        "label": banner.label,
        "url": banner.url,
    });
    if let Some(event) = &banner.event {
        action["event"] = event.clone();
    }
    json!({
        "message": {
            "id": id,
            "text": banner.text,
            "colors": {
                "background": banner.bg.as_deref().unwrap_or("#b2d5ed"),
                "foreground": banner.fg.as_deref().unwrap_or("#555"),
            },
            "actions": [action],
        }
    })
}
