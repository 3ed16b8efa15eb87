//! Interactive tile
//!
//! A `Tile` wraps one occupied slot: it knows its link, its slot index and
//! the grid mode, and turns user interactions into dispatched actions.
//! Context-menu visibility lives in the grid-owned
//! [`TileInteractionState`], so handlers that touch it take it explicitly.

use super::link_menu::{LinkMenuProps, TOP_SITES_CONTEXT_MENU_OPTIONS};
use super::tile_link::TileLinkView;
use crate::actions::{Action, Dispatch, SiteRef, StoreAction, UserEventKind, TOP_SITES_SOURCE};
use crate::intl::FormatMessage;
use crate::model::{Link, TileInteractionState};
use crate::TileMode;

/// What the host should do with the click that triggered a handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Follow the link
    Navigate(String),
    /// Swallow the click (no navigation)
    PreventDefault,
}

/// Edit-mode button kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditButtonKind {
    Pin,
    Unpin,
    Edit,
    Dismiss,
}

impl EditButtonKind {
    /// Icon class of the button
    pub fn icon_class(&self) -> &'static str {
        match self {
            EditButtonKind::Pin => "icon icon-pin",
            EditButtonKind::Unpin => "icon icon-unpin",
            EditButtonKind::Edit => "icon icon-edit",
            EditButtonKind::Dismiss => "icon icon-dismiss",
        }
    }

    fn message_id(&self) -> &'static str {
        match self {
            EditButtonKind::Pin => "edit_topsites_pin_button",
            EditButtonKind::Unpin => "edit_topsites_unpin_button",
            EditButtonKind::Edit => "edit_topsites_edit_button",
            EditButtonKind::Dismiss => "edit_topsites_dismiss_button",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditButton {
    pub kind: EditButtonKind,
    pub title: String,
}

/// Mode-specific controls attached below the tile link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileControls<'a> {
    ContextMenu {
        button_label: String,
        menu: LinkMenuProps<'a>,
    },
    EditMenu {
        buttons: Vec<EditButton>,
    },
}

/// A tile ready to draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileView<'a> {
    pub link: TileLinkView,
    pub controls: TileControls<'a>,
}

/// One occupied slot in the grid
#[derive(Debug, Clone, Copy)]
pub struct Tile<'a> {
    link: &'a Link,
    index: usize,
    mode: TileMode,
}

impl<'a> Tile<'a> {
    pub fn new(link: &'a Link, index: usize, mode: TileMode) -> Self {
        Self { link, index, mode }
    }

    pub fn link(&self) -> &'a Link {
        self.link
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn mode(&self) -> TileMode {
        self.mode
    }

    pub fn title(&self) -> &'a str {
        self.link.title()
    }

    pub fn is_context_menu_open(&self, state: &TileInteractionState) -> bool {
        state.is_open_for(self.index)
    }

    fn user_event(&self, event: UserEventKind, dispatch: &mut dyn Dispatch) {
        dispatch.dispatch(Action::user_event(event, self.index));
    }

    fn send_unpin(&self, dispatch: &mut dyn Dispatch) {
        dispatch.dispatch(Action::send_to_main(StoreAction::TopSitesUnpin {
            site: SiteRef::new(self.link.url.clone()),
        }));
    }

    /// Click on the tile's link
    ///
    /// In edit mode the click is swallowed and nothing is dispatched.
    pub fn on_link_click(&self, dispatch: &mut dyn Dispatch) -> ClickOutcome {
        match self.mode {
            TileMode::Edit => ClickOutcome::PreventDefault,
            TileMode::View => {
                self.user_event(UserEventKind::Click, dispatch);
                ClickOutcome::Navigate(self.link.url.clone())
            }
        }
    }

    /// Click on the context menu button: open this tile's menu
    pub fn on_menu_button_click(&self, state: &mut TileInteractionState) -> ClickOutcome {
        state.active_tile = Some(self.index);
        state.show_context_menu = true;
        ClickOutcome::PreventDefault
    }

    /// Visibility update reported by the link menu
    pub fn on_menu_update(&self, state: &mut TileInteractionState, show_context_menu: bool) {
        state.show_context_menu = show_context_menu;
    }

    /// Dismiss: unpin first when pinned, then block, then the BLOCK event
    pub fn on_dismiss_button_click(&self, dispatch: &mut dyn Dispatch) {
        if self.link.is_pinned {
            self.send_unpin(dispatch);
        }
        dispatch.dispatch(Action::send_to_main(StoreAction::BlockUrl(
            self.link.url.clone(),
        )));
        self.user_event(UserEventKind::Block, dispatch);
    }

    /// Toggle the pin state of this tile's site at this slot
    pub fn on_pin_button_click(&self, dispatch: &mut dyn Dispatch) {
        if self.link.is_pinned {
            self.send_unpin(dispatch);
            self.user_event(UserEventKind::Unpin, dispatch);
        } else {
            dispatch.dispatch(Action::send_to_main(StoreAction::TopSitesPin {
                site: SiteRef::new(self.link.url.clone()),
                index: self.index,
            }));
            self.user_event(UserEventKind::Pin, dispatch);
        }
    }

    /// Hand this slot to the host's edit-entry callback
    pub fn on_edit_button_click(&self, on_edit: &mut dyn FnMut(usize)) {
        on_edit(self.index);
    }

    /// Build the drawable view for the current interaction state
    pub fn view(&self, state: &TileInteractionState, intl: &dyn FormatMessage) -> TileView<'a> {
        let menu_open = self.is_context_menu_open(state);
        let title = self.title();
        let link = TileLinkView::new(self.link, title, menu_open.then_some("active"));

        let controls = match self.mode {
            TileMode::View => TileControls::ContextMenu {
                button_label: intl.format_message_with("context_menu_button_sr", &[("title", title)]),
                menu: LinkMenuProps {
                    index: self.index,
                    visible: menu_open,
                    options: TOP_SITES_CONTEXT_MENU_OPTIONS,
                    site: self.link,
                    source: TOP_SITES_SOURCE,
                },
            },
            TileMode::Edit => {
                let pin = if self.link.is_pinned {
                    EditButtonKind::Unpin
                } else {
                    EditButtonKind::Pin
                };
                let buttons = [pin, EditButtonKind::Edit, EditButtonKind::Dismiss]
                    .into_iter()
                    .map(|kind| EditButton {
                        kind,
                        title: intl.format_message(kind.message_id()),
                    })
                    .collect();
                TileControls::EditMenu { buttons }
            }
        };

        TileView { link, controls }
    }
}
