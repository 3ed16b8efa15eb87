//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! preferences, dialogs, popups, and visual state.

use std::time::Instant;

use super::types::EditFormState;
use crate::store::StoreStats;

/// UI preferences and popups
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    // ============================================
    // DIALOGS & POPUPS
    // ============================================
    /// Highlighted entry in the open link menu
    pub menu_selection: usize,

    /// Edit form for adding/editing a top site
    pub edit_form: Option<EditFormState>,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    // ============================================
    // VISUAL STATE
    // ============================================
    /// Last action that went through dispatch (status bar)
    pub last_action: Option<String>,

    /// Store counters from the latest snapshot (status bar)
    pub store_stats: StoreStats,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    /// Create initial UI model with default preferences
    pub fn new(vim_mode: bool) -> Self {
        Self {
            vim_mode,
            menu_selection: 0,
            edit_form: None,
            toast_message: None,
            last_action: None,
            store_stats: StoreStats::default(),
            should_quit: false,
        }
    }

    /// Check if a modal dialog is currently showing
    pub fn has_modal(&self) -> bool {
        self.edit_form.is_some()
    }

    /// Close all modal dialogs
    pub fn close_all_modals(&mut self) {
        self.edit_form = None;
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self) -> bool {
        if let Some((_, timestamp)) = &self.toast_message {
            crate::logic::ui::should_dismiss_toast(timestamp.elapsed().as_millis())
        } else {
            false
        }
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_model_creation() {
        let model = UiModel::new(false);
        assert!(!model.vim_mode);
        assert!(!model.should_quit);
        assert_eq!(model.menu_selection, 0);
        assert!(model.last_action.is_none());
    }

    #[test]
    fn test_has_modal() {
        let mut model = UiModel::new(false);
        assert!(!model.has_modal());

        model.edit_form = Some(EditFormState::for_slot(0, None));
        assert!(model.has_modal());

        model.close_all_modals();
        assert!(!model.has_modal());
    }

    #[test]
    fn test_toast() {
        let mut model = UiModel::new(false);
        assert!(model.toast_message.is_none());

        model.show_toast("Test".to_string());
        assert!(model.toast_message.is_some());
        assert!(!model.should_dismiss_toast());

        model.dismiss_toast();
        assert!(model.toast_message.is_none());
    }

    #[test]
    fn test_ui_model_is_cloneable() {
        let model = UiModel::new(true);
        let cloned = model.clone();
        assert!(cloned.vim_mode);
    }
}
