//! Outbound action types
//!
//! Every effect the tiles have on the outside world is one of these actions,
//! handed to a single [`Dispatch`] implementation. Two shapes exist:
//! - User events (telemetry): event name, fixed source tag, slot index
//! - Store actions: `{type, data}` messages for the parent process/store
//!
//! Dispatch is synchronous and fire-and-forget: no acknowledgement flows back.

use serde::Serialize;

/// Source tag attached to every user event emitted by the Top Sites grid
pub const TOP_SITES_SOURCE: &str = "TOP_SITES";

/// User-event names emitted by tiles and the link menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserEventKind {
    Click,
    Block,
    Pin,
    Unpin,
    OpenNewWindow,
    OpenPrivateWindow,
    Delete,
}

impl UserEventKind {
    pub fn as_str(&self) -> &str {
        match self {
            UserEventKind::Click => "CLICK",
            UserEventKind::Block => "BLOCK",
            UserEventKind::Pin => "PIN",
            UserEventKind::Unpin => "UNPIN",
            UserEventKind::OpenNewWindow => "OPEN_NEW_WINDOW",
            UserEventKind::OpenPrivateWindow => "OPEN_PRIVATE_WINDOW",
            UserEventKind::Delete => "DELETE",
        }
    }
}

/// Telemetry payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserEvent {
    pub event: UserEventKind,
    pub source: &'static str,
    pub action_position: usize,
}

/// Site reference carried by pin/unpin actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteRef {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl SiteRef {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            label: None,
        }
    }
}

/// Messages for the store, serialized as `{"type": ..., "data": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoreAction {
    TopSitesPin { site: SiteRef, index: usize },
    TopSitesUnpin { site: SiteRef },
    BlockUrl(String),
    OpenNewWindow { url: String },
    OpenPrivateWindow { url: String },
    DeleteHistoryUrl(String),
}

impl StoreAction {
    /// Wire name of the action type
    pub fn type_name(&self) -> &str {
        match self {
            StoreAction::TopSitesPin { .. } => "TOP_SITES_PIN",
            StoreAction::TopSitesUnpin { .. } => "TOP_SITES_UNPIN",
            StoreAction::BlockUrl(_) => "BLOCK_URL",
            StoreAction::OpenNewWindow { .. } => "OPEN_NEW_WINDOW",
            StoreAction::OpenPrivateWindow { .. } => "OPEN_PRIVATE_WINDOW",
            StoreAction::DeleteHistoryUrl(_) => "DELETE_HISTORY_URL",
        }
    }
}

/// Everything that crosses the dispatch boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "payload")]
pub enum Action {
    #[serde(rename = "USER_EVENT")]
    UserEvent(UserEvent),
    #[serde(rename = "STORE_ACTION")]
    SendToMain(StoreAction),
}

impl Action {
    /// Build a Top Sites user event for the given slot
    pub fn user_event(event: UserEventKind, action_position: usize) -> Self {
        Action::UserEvent(UserEvent {
            event,
            source: TOP_SITES_SOURCE,
            action_position,
        })
    }

    pub fn send_to_main(action: StoreAction) -> Self {
        Action::SendToMain(action)
    }

    /// Short human-readable description (status bar, debug log)
    pub fn describe(&self) -> String {
        match self {
            Action::UserEvent(ev) => format!(
                "{} ({} #{})",
                ev.event.as_str(),
                ev.source,
                ev.action_position
            ),
            Action::SendToMain(action) => action.type_name().to_string(),
        }
    }
}

/// The single side-effect boundary of the grid
pub trait Dispatch {
    fn dispatch(&mut self, action: Action);
}

/// Recording dispatcher, handy for tests and for batching
impl Dispatch for Vec<Action> {
    fn dispatch(&mut self, action: Action) {
        self.push(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_event_carries_source_and_position() {
        let action = Action::user_event(UserEventKind::Pin, 4);
        assert_eq!(
            action,
            Action::UserEvent(UserEvent {
                event: UserEventKind::Pin,
                source: "TOP_SITES",
                action_position: 4,
            })
        );
    }

    #[test]
    fn test_store_action_wire_shape() {
        let action = StoreAction::TopSitesPin {
            site: SiteRef::new("https://mozilla.org"),
            index: 2,
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], "TOP_SITES_PIN");
        assert_eq!(json["data"]["site"]["url"], "https://mozilla.org");
        assert_eq!(json["data"]["index"], 2);
        assert!(json["data"]["site"].get("label").is_none());
    }

    #[test]
    fn test_block_url_data_is_plain_url() {
        let json = serde_json::to_value(StoreAction::BlockUrl("https://a.com".to_string())).unwrap();
        assert_eq!(json["type"], "BLOCK_URL");
        assert_eq!(json["data"], "https://a.com");
    }

    #[test]
    fn test_action_kind_tag() {
        let json = serde_json::to_value(Action::user_event(UserEventKind::Click, 0)).unwrap();
        assert_eq!(json["kind"], "USER_EVENT");
        assert_eq!(json["payload"]["event"], "CLICK");
        assert_eq!(json["payload"]["source"], "TOP_SITES");
    }

    #[test]
    fn test_vec_dispatch_records_in_order() {
        let mut sink: Vec<Action> = Vec::new();
        sink.dispatch(Action::user_event(UserEventKind::Block, 1));
        sink.dispatch(Action::send_to_main(StoreAction::BlockUrl("x".into())));
        assert_eq!(sink.len(), 2);
        assert_eq!(sink[1].describe(), "BLOCK_URL");
    }
}
