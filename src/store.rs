//! In-memory Top Sites store
//!
//! Minimal receiver for the grid's dispatched actions so the front end has
//! something that reacts: rows are pinned, unpinned and removed, the most
//! recent user events are kept as telemetry, and window-open requests are
//! queued for the host.

use std::collections::{HashSet, VecDeque};

use crate::actions::{Action, Dispatch, StoreAction, UserEvent};
use crate::model::Link;

/// Number of user events kept; older ones are dropped
pub const TELEMETRY_CAPACITY: usize = 64;

/// Counters published to the status bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    /// User events received over the whole session
    pub events: usize,
    /// Urls currently blocked
    pub blocked: usize,
}

/// Navigation the host should perform on behalf of the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationRequest {
    NewWindow(String),
    PrivateWindow(String),
}

#[derive(Debug, Clone, Default)]
pub struct TopSitesStore {
    rows: Vec<Link>,
    blocked: HashSet<String>,
    telemetry: VecDeque<UserEvent>,
    event_count: usize,
    navigation: Option<NavigationRequest>,
    last_action: Option<String>,
}

impl TopSitesStore {
    pub fn new(rows: Vec<Link>) -> Self {
        Self {
            rows,
            ..Default::default()
        }
    }

    /// Current rows, in display order
    pub fn rows(&self) -> &[Link] {
        &self.rows
    }

    pub fn is_blocked(&self, url: &str) -> bool {
        self.blocked.contains(url)
    }

    /// Most recent user events, oldest first
    pub fn telemetry(&self) -> &VecDeque<UserEvent> {
        &self.telemetry
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            events: self.event_count,
            blocked: self.blocked.len(),
        }
    }

    fn record(&mut self, event: UserEvent) {
        if self.telemetry.len() == TELEMETRY_CAPACITY {
            self.telemetry.pop_front();
        }
        self.telemetry.push_back(event);
        self.event_count += 1;
    }

    /// Short description of the last dispatched action
    pub fn last_action(&self) -> Option<&str> {
        self.last_action.as_deref()
    }

    /// Pending window-open request, if any
    pub fn take_navigation(&mut self) -> Option<NavigationRequest> {
        self.navigation.take()
    }

    fn remove_url(&mut self, url: &str) -> Option<Link> {
        let pos = self.rows.iter().position(|link| link.url == url)?;
        Some(self.rows.remove(pos))
    }

    fn apply(&mut self, action: StoreAction) {
        match action {
            StoreAction::TopSitesPin { site, index } => {
                let mut link = self
                    .remove_url(&site.url)
                    .unwrap_or_else(|| Link::new(site.url.clone()));
                link.is_pinned = true;
                // Pinning a site by hand lifts an earlier block
                self.blocked.remove(&site.url);
                if let Some(label) = site.label {
                    link.label = Some(label);
                }
                let index = index.min(self.rows.len());
                self.rows.insert(index, link);
            }
            StoreAction::TopSitesUnpin { site } => {
                if let Some(link) = self.rows.iter_mut().find(|link| link.url == site.url) {
                    link.is_pinned = false;
                }
            }
            StoreAction::BlockUrl(url) => {
                self.remove_url(&url);
                self.blocked.insert(url);
            }
            StoreAction::DeleteHistoryUrl(url) => {
                self.remove_url(&url);
            }
            StoreAction::OpenNewWindow { url } => {
                self.navigation = Some(NavigationRequest::NewWindow(url));
            }
            StoreAction::OpenPrivateWindow { url } => {
                self.navigation = Some(NavigationRequest::PrivateWindow(url));
            }
        }
    }
}

impl Dispatch for TopSitesStore {
    fn dispatch(&mut self, action: Action) {
        match serde_json::to_string(&action) {
            Ok(json) => log::info!("dispatch {}", json),
            Err(e) => log::warn!("dispatch {} (unserializable: {})", action.describe(), e),
        }
        self.last_action = Some(action.describe());

        match action {
            Action::UserEvent(event) => self.record(event),
            Action::SendToMain(store_action) => self.apply(store_action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{SiteRef, UserEventKind};

    fn store() -> TopSitesStore {
        TopSitesStore::new(vec![
            Link::new("https://a.com"),
            Link::new("https://b.com"),
            Link::new("https://c.com"),
        ])
    }

    fn urls(store: &TopSitesStore) -> Vec<&str> {
        store.rows().iter().map(|l| l.url.as_str()).collect()
    }

    #[test]
    fn test_pin_moves_site_to_index() {
        let mut store = store();
        store.dispatch(Action::send_to_main(StoreAction::TopSitesPin {
            site: SiteRef::new("https://c.com"),
            index: 0,
        }));
        assert_eq!(urls(&store), vec!["https://c.com", "https://a.com", "https://b.com"]);
        assert!(store.rows()[0].is_pinned);
        assert_eq!(store.last_action(), Some("TOP_SITES_PIN"));
    }

    #[test]
    fn test_pin_new_site_with_label_clamps_index() {
        let mut store = store();
        store.dispatch(Action::send_to_main(StoreAction::TopSitesPin {
            site: SiteRef {
                url: "https://new.com".to_string(),
                label: Some("New".to_string()),
            },
            index: 7,
        }));
        let last = store.rows().last().unwrap();
        assert_eq!(last.url, "https://new.com");
        assert_eq!(last.title(), "New");
        assert!(last.is_pinned);
        assert_eq!(store.rows().len(), 4);
    }

    #[test]
    fn test_unpin_keeps_position() {
        let mut store = store();
        store.dispatch(Action::send_to_main(StoreAction::TopSitesPin {
            site: SiteRef::new("https://b.com"),
            index: 1,
        }));
        store.dispatch(Action::send_to_main(StoreAction::TopSitesUnpin {
            site: SiteRef::new("https://b.com"),
        }));
        assert_eq!(urls(&store), vec!["https://a.com", "https://b.com", "https://c.com"]);
        assert!(!store.rows()[1].is_pinned);
    }

    #[test]
    fn test_block_removes_and_remembers() {
        let mut store = store();
        store.dispatch(Action::send_to_main(StoreAction::BlockUrl("https://a.com".into())));
        assert_eq!(urls(&store), vec!["https://b.com", "https://c.com"]);
        assert!(store.is_blocked("https://a.com"));
    }

    #[test]
    fn test_delete_history_removes_without_blocking() {
        let mut store = store();
        store.dispatch(Action::send_to_main(StoreAction::DeleteHistoryUrl(
            "https://b.com".into(),
        )));
        assert_eq!(store.rows().len(), 2);
        assert!(!store.is_blocked("https://b.com"));
    }

    #[test]
    fn test_user_events_are_recorded() {
        let mut store = store();
        store.dispatch(Action::user_event(UserEventKind::Click, 2));
        assert_eq!(store.telemetry().len(), 1);
        assert_eq!(store.telemetry()[0].action_position, 2);
        assert_eq!(store.rows().len(), 3);
    }

    #[test]
    fn test_telemetry_keeps_recent_events_only() {
        let mut store = store();
        for position in 0..TELEMETRY_CAPACITY + 10 {
            store.dispatch(Action::user_event(UserEventKind::Click, position));
        }
        assert_eq!(store.telemetry().len(), TELEMETRY_CAPACITY);
        assert_eq!(store.telemetry()[0].action_position, 10);
        assert_eq!(store.stats().events, TELEMETRY_CAPACITY + 10);
    }

    #[test]
    fn test_pin_lifts_block() {
        let mut store = store();
        store.dispatch(Action::send_to_main(StoreAction::BlockUrl("https://a.com".into())));
        assert_eq!(store.stats().blocked, 1);

        store.dispatch(Action::send_to_main(StoreAction::TopSitesPin {
            site: SiteRef::new("https://a.com"),
            index: 0,
        }));
        assert!(!store.is_blocked("https://a.com"));
        assert_eq!(store.stats(), StoreStats { events: 0, blocked: 0 });
        assert_eq!(store.rows()[0].url, "https://a.com");
    }

    #[test]
    fn test_window_requests_are_queued_once() {
        let mut store = store();
        store.dispatch(Action::send_to_main(StoreAction::OpenPrivateWindow {
            url: "https://a.com".into(),
        }));
        assert_eq!(
            store.take_navigation(),
            Some(NavigationRequest::PrivateWindow("https://a.com".into()))
        );
        assert_eq!(store.take_navigation(), None);
    }
}
