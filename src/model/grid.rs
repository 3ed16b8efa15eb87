//! Grid Model
//!
//! This sub-model contains the grid-wide state shared by every tile:
//! slot count, rendering mode, the single context-menu state, and the
//! keyboard focus.

use super::types::TileInteractionState;
use crate::TileMode;

/// Default number of Top Sites slots
pub const DEFAULT_TOP_SITES_COUNT: usize = 8;

/// Grid-wide state
#[derive(Clone, Debug)]
pub struct GridModel {
    /// Number of slots rendered, independent of how many links exist
    pub count: usize,

    /// View or edit mode for every tile
    pub mode: TileMode,

    /// Context menu state, hoisted out of the tiles
    pub interaction: TileInteractionState,

    /// Slot that currently has keyboard focus
    pub focused_slot: usize,

    /// Columns used by the last render (for up/down navigation)
    pub columns: usize,
}

impl GridModel {
    /// Create a grid with `count` slots in view mode
    pub fn new(count: usize) -> Self {
        Self {
            count,
            mode: TileMode::View,
            interaction: TileInteractionState::new(),
            focused_slot: 0,
            columns: count.max(1),
        }
    }

    /// Switch between view and edit mode, closing any open menu
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.interaction.show_context_menu = false;
    }

    /// Whether any tile's context menu is visible
    pub fn has_open_menu(&self) -> bool {
        self.interaction.open_tile().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_model_creation() {
        let model = GridModel::new(DEFAULT_TOP_SITES_COUNT);
        assert_eq!(model.count, 8);
        assert_eq!(model.mode, TileMode::View);
        assert_eq!(model.focused_slot, 0);
        assert!(!model.has_open_menu());
    }

    #[test]
    fn test_toggle_mode_closes_menu() {
        let mut model = GridModel::new(4);
        model.interaction.show_context_menu = true;
        model.interaction.active_tile = Some(1);
        assert!(model.has_open_menu());

        model.toggle_mode();
        assert_eq!(model.mode, TileMode::Edit);
        assert!(!model.has_open_menu());

        model.toggle_mode();
        assert_eq!(model.mode, TileMode::View);
    }
}
