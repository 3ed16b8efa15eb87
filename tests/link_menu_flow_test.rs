//! Tests for the link context menu of a view-mode tile
//!
//! Activating an entry dispatches its store action first and its user
//! event second, both tagged with the tile's slot, then hides the menu
//! through the owner's update callback.

use topsites::actions::{Action, StoreAction, UserEventKind, TOP_SITES_SOURCE};
use topsites::intl::Messages;
use topsites::logic::grid::TileGrid;
use topsites::logic::link_menu::LinkMenuItem;
use topsites::logic::tile::TileControls;
use topsites::model::{Link, TileInteractionState};
use topsites::store::{NavigationRequest, TopSitesStore};
use topsites::TileMode;

fn rows() -> Vec<Link> {
    let mut pinned = Link::new("https://pinned.com");
    pinned.is_pinned = true;
    vec![Link::new("https://a.com"), pinned]
}

/// Test: menu entries depend on the site's pin state
#[test]
fn test_menu_entries_per_site() {
    let rows = rows();
    let grid = TileGrid::new(&rows, 8, TileMode::View);
    let messages = Messages::new();
    let mut state = TileInteractionState::new();

    for (index, expected) in [(0, LinkMenuItem::PinTopSite), (1, LinkMenuItem::UnpinTopSite)] {
        let tile = grid.tile(index).expect("tile");
        tile.on_menu_button_click(&mut state);
        let TileControls::ContextMenu { menu, .. } = tile.view(&state, &messages).controls else {
            panic!("view mode tile without context menu");
        };
        assert!(menu.visible);
        assert_eq!(menu.source, TOP_SITES_SOURCE);
        assert_eq!(menu.items()[0], expected);
    }
}

/// Test: open in private window reaches the store and closes the menu
#[test]
fn test_private_window_flow() {
    let rows = rows();
    let grid = TileGrid::new(&rows, 8, TileMode::View);
    let messages = Messages::new();
    let mut state = TileInteractionState::new();
    let mut store = TopSitesStore::new(rows.clone());

    let tile = grid.tile(1).expect("tile 1");
    tile.on_menu_button_click(&mut state);
    let TileControls::ContextMenu { menu, .. } = tile.view(&state, &messages).controls else {
        panic!("view mode tile without context menu");
    };

    menu.activate(3, &mut store, |show| tile.on_menu_update(&mut state, show));

    assert!(!tile.is_context_menu_open(&state));
    assert_eq!(
        store.take_navigation(),
        Some(NavigationRequest::PrivateWindow("https://pinned.com".to_string()))
    );
    assert_eq!(store.telemetry()[0].event, UserEventKind::OpenPrivateWindow);
    assert_eq!(store.telemetry()[0].action_position, 1);
}

/// Test: unpin from the menu records store action before the event
#[test]
fn test_unpin_order() {
    let rows = rows();
    let grid = TileGrid::new(&rows, 8, TileMode::View);
    let messages = Messages::new();
    let mut state = TileInteractionState::new();
    let mut sink: Vec<Action> = Vec::new();

    let tile = grid.tile(1).expect("tile 1");
    tile.on_menu_button_click(&mut state);
    let TileControls::ContextMenu { menu, .. } = tile.view(&state, &messages).controls else {
        panic!("view mode tile without context menu");
    };
    menu.activate(0, &mut sink, |_| {});

    assert!(matches!(sink[0], Action::SendToMain(StoreAction::TopSitesUnpin { .. })));
    assert_eq!(sink[1], Action::user_event(UserEventKind::Unpin, 1));
}

/// Test: dispatched actions serialize to the wire shape
#[test]
fn test_wire_shape() {
    let json = serde_json::to_value(Action::user_event(UserEventKind::Click, 4))
        .expect("serializable");
    assert_eq!(json["kind"], "USER_EVENT");
    assert_eq!(json["payload"]["event"], "CLICK");
    assert_eq!(json["payload"]["source"], "TOP_SITES");
    assert_eq!(json["payload"]["action_position"], 4);

    let json = serde_json::to_value(Action::send_to_main(StoreAction::BlockUrl(
        "https://a.com".to_string(),
    )))
    .expect("serializable");
    assert_eq!(json["kind"], "STORE_ACTION");
    assert_eq!(json["payload"]["type"], "BLOCK_URL");
    assert_eq!(json["payload"]["data"], "https://a.com");
}
