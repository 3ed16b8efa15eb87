//! Top Sites TUI Library
//!
//! Exposes modules for testing and for embedding the tile grid elsewhere

pub mod actions;
pub mod config;
pub mod intl;
pub mod logic;
pub mod model;
pub mod services;
pub mod store;
pub mod ui;
pub mod utils;

pub use actions::{Action, Dispatch, StoreAction, UserEvent, UserEventKind, TOP_SITES_SOURCE};
pub use model::Link;

/// Rendering mode for every tile in the grid
///
/// View mode shows the context menu button, edit mode replaces it with the
/// pin/edit/dismiss buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileMode {
    #[default]
    View,
    Edit,
}

impl TileMode {
    pub fn as_str(&self) -> &str {
        match self {
            TileMode::View => "Browse",
            TileMode::Edit => "Edit",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            TileMode::View => TileMode::Edit,
            TileMode::Edit => TileMode::View,
        }
    }
}
