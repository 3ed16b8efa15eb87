//! Shared types for the Model
//!
//! These types are used across multiple sub-models and represent
//! fundamental domain concepts.

use serde::{Deserialize, Serialize};

/// Optional string field, with an empty string treated as no value
pub fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// A Top Sites link record, as resolved by the favicon/screenshot pipeline
///
/// Every field except `url` is optional; an absent field means "no value"
/// and rendering degrades to a fallback instead of failing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub favicon: Option<String>,
    #[serde(default)]
    pub favicon_size: Option<u32>,
    /// Curated high-resolution icon
    #[serde(default)]
    pub tippy_top_icon: Option<String>,
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub screenshot: Option<String>,
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub guid: Option<String>,
}

impl Link {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Display title: label, else hostname, else empty
    ///
    /// Empty strings count as absent.
    pub fn title(&self) -> &str {
        non_empty(&self.label)
            .or(non_empty(&self.hostname))
            .unwrap_or("")
    }

    /// Stable identity: guid, else url (None for an empty record)
    pub fn key(&self) -> Option<&str> {
        match self.guid.as_deref() {
            Some(guid) if !guid.is_empty() => Some(guid),
            _ if !self.url.is_empty() => Some(self.url.as_str()),
            _ => None,
        }
    }

    /// Favicon size in pixels, absent counts as zero
    pub fn favicon_size(&self) -> u32 {
        self.favicon_size.unwrap_or(0)
    }
}

/// Which tile (if any) has its context menu open
///
/// Owned once by the grid, so opening one tile's menu implicitly closes
/// every other tile's menu.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TileInteractionState {
    pub show_context_menu: bool,
    pub active_tile: Option<usize>,
}

impl TileInteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the menu of the tile at `index` is visible
    pub fn is_open_for(&self, index: usize) -> bool {
        self.show_context_menu && self.active_tile == Some(index)
    }

    /// Index of the tile whose menu is visible
    pub fn open_tile(&self) -> Option<usize> {
        if self.show_context_menu {
            self.active_tile
        } else {
            None
        }
    }
}

/// Field focused in the edit form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Label,
    Url,
}

/// Edit form opened by the edit-entry callback
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditFormState {
    pub index: usize,
    pub label: String,
    pub url: String,
    pub field: FormField,
}

impl EditFormState {
    /// Start editing slot `index`, pre-filled from the link occupying it
    pub fn for_slot(index: usize, link: Option<&Link>) -> Self {
        Self {
            index,
            label: link.and_then(|l| l.label.clone()).unwrap_or_default(),
            url: link.map(|l| l.url.clone()).unwrap_or_default(),
            field: FormField::Label,
        }
    }

    pub fn focused_input_mut(&mut self) -> &mut String {
        match self.field {
            FormField::Label => &mut self.label,
            FormField::Url => &mut self.url,
        }
    }

    pub fn next_field(&mut self) {
        self.field = match self.field {
            FormField::Label => FormField::Url,
            FormField::Url => FormField::Label,
        };
    }
}
