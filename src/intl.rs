//! Message formatting for user-visible strings
//!
//! Button titles and menu labels are looked up by message id. The built-in
//! table is English; config can override any id.

use std::collections::HashMap;

/// Formats a message id into display text
pub trait FormatMessage {
    fn format_message(&self, id: &str) -> String;

    /// Format and substitute `{name}` placeholders
    fn format_message_with(&self, id: &str, values: &[(&str, &str)]) -> String {
        let mut text = self.format_message(id);
        for (name, value) in values {
            text = text.replace(&format!("{{{}}}", name), value);
        }
        text
    }
}

fn default_message(id: &str) -> Option<&'static str> {
    let text = match id {
        "header_top_sites" => "Top Sites",
        "edit_topsites_button_text" => "Edit",
        "edit_topsites_done_button" => "Done",
        "edit_topsites_pin_button" => "Pin this site",
        "edit_topsites_unpin_button" => "Unpin this site",
        "edit_topsites_edit_button" => "Edit this site",
        "edit_topsites_dismiss_button" => "Dismiss this site",
        "context_menu_button_sr" => "Open context menu for {title}",
        "menu_action_pin" => "Pin",
        "menu_action_unpin" => "Unpin",
        "menu_action_open_new_window" => "Open in a New Window",
        "menu_action_open_private_window" => "Open in a New Private Window",
        "menu_action_dismiss" => "Dismiss",
        "menu_action_delete" => "Delete from History",
        "topsites_form_add_header" => "New Top Site",
        "topsites_form_edit_header" => "Edit Top Site",
        "topsites_form_title_placeholder" => "Enter a title",
        "topsites_form_url_placeholder" => "Type or paste a URL",
        "topsites_form_save_button" => "Save",
        "topsites_form_cancel_button" => "Cancel",
        _ => return None,
    };
    Some(text)
}

/// Message table with optional overrides
#[derive(Debug, Clone, Default)]
pub struct Messages {
    overrides: HashMap<String, String>,
}

impl Messages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overrides(overrides: HashMap<String, String>) -> Self {
        Self { overrides }
    }
}

impl FormatMessage for Messages {
    /// Unknown ids render as the id itself so missing strings stay visible
    fn format_message(&self, id: &str) -> String {
        if let Some(text) = self.overrides.get(id) {
            return text.clone();
        }
        default_message(id)
            .map(str::to_string)
            .unwrap_or_else(|| id.to_string())
    }
}
