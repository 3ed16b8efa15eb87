//! Tile link view model
//!
//! Stateless description of one tile's visual shell (anchor, icon area,
//! pin indicator, title). Derived entirely from its inputs.

use super::icon::{select_icon_variant, IconDescriptor};
use crate::model::Link;

/// Everything needed to draw a tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileLinkView {
    /// Stable identity: guid, else url
    pub key: Option<String>,
    /// `top-site-outer` plus the extra class, if any
    pub class_name: String,
    pub href: String,
    pub letter_fallback: String,
    pub icon: IconDescriptor,
    pub is_pinned: bool,
    pub title: String,
}

impl TileLinkView {
    /// Build the view for `link` shown under `title`
    pub fn new(link: &Link, title: &str, class_name: Option<&str>) -> Self {
        let icon = select_icon_variant(link, title);
        let class_name = match class_name {
            Some(extra) if !extra.is_empty() => format!("top-site-outer {}", extra),
            _ => "top-site-outer".to_string(),
        };

        Self {
            key: link.key().map(str::to_string),
            class_name,
            href: link.url.clone(),
            letter_fallback: icon.letter_fallback.clone(),
            icon,
            is_pinned: link.is_pinned,
            title: title.to_string(),
        }
    }

    /// Empty slot: an empty link with the `placeholder` class
    pub fn placeholder() -> Self {
        Self::new(&Link::default(), "", Some("placeholder"))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class_name.split_whitespace().any(|c| c == class)
    }

    pub fn is_placeholder(&self) -> bool {
        self.has_class("placeholder")
    }

    /// Class names of the title element
    pub fn title_class(&self) -> &'static str {
        if self.is_pinned {
            "title pinned"
        } else {
            "title"
        }
    }
}
