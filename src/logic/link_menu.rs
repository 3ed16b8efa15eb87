//! Link context menu
//!
//! The collaborator opened by a tile's menu button. It receives the
//! dispatch boundary, the slot index, a visibility flag, the option list,
//! the site and the source tag; it reports back only through the update
//! callback (always `false` once an item has been activated).

use crate::actions::{Action, Dispatch, SiteRef, StoreAction, UserEvent, UserEventKind};
use crate::model::Link;

/// Options as configured by a surface; `CheckPinTopSite` resolves per site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkMenuOption {
    CheckPinTopSite,
    Separator,
    OpenInNewWindow,
    OpenInPrivateWindow,
    BlockUrl,
    DeleteUrl,
}

/// Fixed option list used by Top Sites tiles
pub const TOP_SITES_CONTEXT_MENU_OPTIONS: &[LinkMenuOption] = &[
    LinkMenuOption::CheckPinTopSite,
    LinkMenuOption::Separator,
    LinkMenuOption::OpenInNewWindow,
    LinkMenuOption::OpenInPrivateWindow,
    LinkMenuOption::Separator,
    LinkMenuOption::BlockUrl,
    LinkMenuOption::DeleteUrl,
];

/// A concrete menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkMenuItem {
    PinTopSite,
    UnpinTopSite,
    Separator,
    OpenInNewWindow,
    OpenInPrivateWindow,
    BlockUrl,
    DeleteUrl,
}

impl LinkMenuItem {
    /// Message id of the label (None for separators)
    pub fn label_id(&self) -> Option<&'static str> {
        match self {
            LinkMenuItem::PinTopSite => Some("menu_action_pin"),
            LinkMenuItem::UnpinTopSite => Some("menu_action_unpin"),
            LinkMenuItem::Separator => None,
            LinkMenuItem::OpenInNewWindow => Some("menu_action_open_new_window"),
            LinkMenuItem::OpenInPrivateWindow => Some("menu_action_open_private_window"),
            LinkMenuItem::BlockUrl => Some("menu_action_dismiss"),
            LinkMenuItem::DeleteUrl => Some("menu_action_delete"),
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, LinkMenuItem::Separator)
    }

    /// Store action and user event for this entry, in dispatch order
    fn actions(&self, site: &Link, index: usize) -> Option<(StoreAction, UserEventKind)> {
        let url = site.url.clone();
        let pair = match self {
            LinkMenuItem::PinTopSite => (
                StoreAction::TopSitesPin {
                    site: SiteRef::new(url),
                    index,
                },
                UserEventKind::Pin,
            ),
            LinkMenuItem::UnpinTopSite => (
                StoreAction::TopSitesUnpin {
                    site: SiteRef::new(url),
                },
                UserEventKind::Unpin,
            ),
            LinkMenuItem::Separator => return None,
            LinkMenuItem::OpenInNewWindow => {
                (StoreAction::OpenNewWindow { url }, UserEventKind::OpenNewWindow)
            }
            LinkMenuItem::OpenInPrivateWindow => (
                StoreAction::OpenPrivateWindow { url },
                UserEventKind::OpenPrivateWindow,
            ),
            LinkMenuItem::BlockUrl => (StoreAction::BlockUrl(url), UserEventKind::Block),
            LinkMenuItem::DeleteUrl => (StoreAction::DeleteHistoryUrl(url), UserEventKind::Delete),
        };
        Some(pair)
    }
}

/// Resolve configured options into entries for `site`
pub fn resolve_options(options: &[LinkMenuOption], site: &Link) -> Vec<LinkMenuItem> {
    options
        .iter()
        .map(|option| match option {
            LinkMenuOption::CheckPinTopSite if site.is_pinned => LinkMenuItem::UnpinTopSite,
            LinkMenuOption::CheckPinTopSite => LinkMenuItem::PinTopSite,
            LinkMenuOption::Separator => LinkMenuItem::Separator,
            LinkMenuOption::OpenInNewWindow => LinkMenuItem::OpenInNewWindow,
            LinkMenuOption::OpenInPrivateWindow => LinkMenuItem::OpenInPrivateWindow,
            LinkMenuOption::BlockUrl => LinkMenuItem::BlockUrl,
            LinkMenuOption::DeleteUrl => LinkMenuItem::DeleteUrl,
        })
        .collect()
}

/// Next selectable entry after `current`, wrapping and skipping separators
pub fn next_item(items: &[LinkMenuItem], current: usize) -> usize {
    step_item(items, current, 1)
}

/// Previous selectable entry before `current`, wrapping and skipping separators
pub fn prev_item(items: &[LinkMenuItem], current: usize) -> usize {
    step_item(items, current, items.len().saturating_sub(1))
}

fn step_item(items: &[LinkMenuItem], current: usize, step: usize) -> usize {
    let len = items.len();
    if len == 0 {
        return 0;
    }
    let mut idx = current % len;
    for _ in 0..len {
        idx = (idx + step) % len;
        if !items[idx].is_separator() {
            return idx;
        }
    }
    current
}

/// Props handed from a tile to its link menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMenuProps<'a> {
    pub index: usize,
    pub visible: bool,
    pub options: &'static [LinkMenuOption],
    pub site: &'a Link,
    pub source: &'static str,
}

impl<'a> LinkMenuProps<'a> {
    pub fn items(&self) -> Vec<LinkMenuItem> {
        resolve_options(self.options, self.site)
    }

    /// Activate the entry at `selection`
    ///
    /// Dispatches the entry's store action then its user event, and asks the
    /// owner to hide the menu. Separators and out-of-range selections only
    /// hide the menu.
    pub fn activate(
        &self,
        selection: usize,
        dispatch: &mut dyn Dispatch,
        on_update: impl FnOnce(bool),
    ) {
        let items = self.items();
        if let Some((store_action, event)) = items
            .get(selection)
            .and_then(|item| item.actions(self.site, self.index))
        {
            log::debug!(
                "link menu #{}: {} for {}",
                self.index,
                store_action.type_name(),
                self.site.url
            );
            dispatch.dispatch(Action::SendToMain(store_action));
            dispatch.dispatch(Action::UserEvent(UserEvent {
                event,
                source: self.source,
                action_position: self.index,
            }));
        }
        on_update(false);
    }
}
