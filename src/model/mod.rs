//! Pure Application Model
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **GridModel**: slot count, mode, context-menu state, focus
//! - **UiModel**: preferences, dialogs, toast
//!
//! Link records are not part of the Model: they belong to the store and are
//! passed to the grid on every render.

pub mod grid;
pub mod types;
pub mod ui;

pub use grid::GridModel;
pub use types::*;
pub use ui::UiModel;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Grid-wide state shared by every tile
    pub grid: GridModel,

    /// UI preferences and popups
    pub ui: UiModel,
}

impl Model {
    /// Create initial model with `count` slots
    pub fn new(count: usize, vim_mode: bool) -> Self {
        Self {
            grid: GridModel::new(count),
            ui: UiModel::new(vim_mode),
        }
    }

    /// Check if any modal dialog is showing
    pub fn has_modal(&self) -> bool {
        self.ui.has_modal()
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.ui.dismiss_toast();
    }
}
