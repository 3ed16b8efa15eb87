//! Icon variant selection
//!
//! Pure decision logic mapping a link's icon metadata to the visual
//! treatment of its tile: a rich icon, or a screenshot with an optional
//! small favicon in the top-left corner.

use crate::model::{non_empty, Link};

/// Minimum favicon size (px) for the rich icon treatment
pub const MIN_RICH_FAVICON_SIZE: u32 = 96;

/// Minimum favicon size (px) for a real favicon in the screenshot corner
pub const MIN_CORNER_FAVICON_SIZE: u32 = 16;

/// Small overlay shown in the corner of a screenshot tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CornerFavicon {
    /// Favicon image URL (may be absent when the size was reported without a URL)
    Image(Option<String>),
    /// Letter fallback glyph drawn instead of an image
    Letter(String),
}

/// Rendering variant for the icon area of a tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconVariant {
    RichIcon {
        background_image: Option<String>,
        background_color: Option<String>,
    },
    Screenshot {
        screenshot: Option<String>,
        corner: Option<CornerFavicon>,
    },
}

/// Render descriptor for a tile's icon area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconDescriptor {
    pub variant: IconVariant,
    /// First character of the title, or empty
    pub letter_fallback: String,
}

impl IconDescriptor {
    /// Class names of the image element
    pub fn variant_class(&self) -> &'static str {
        match &self.variant {
            IconVariant::RichIcon { .. } => "top-site-icon rich-icon",
            IconVariant::Screenshot {
                screenshot: Some(_),
                ..
            } => "screenshot active",
            IconVariant::Screenshot { .. } => "screenshot",
        }
    }

    /// CSS-style background image value (`url(...)` or `none`)
    pub fn background_style(&self) -> String {
        let image = match &self.variant {
            IconVariant::RichIcon {
                background_image, ..
            } => background_image.as_deref(),
            IconVariant::Screenshot { screenshot, .. } => screenshot.as_deref(),
        };
        match image {
            Some(url) => format!("url({})", url),
            None => "none".to_string(),
        }
    }

    pub fn background_color(&self) -> Option<&str> {
        match &self.variant {
            IconVariant::RichIcon {
                background_color, ..
            } => background_color.as_deref(),
            IconVariant::Screenshot { .. } => None,
        }
    }

    pub fn corner_favicon(&self) -> Option<&CornerFavicon> {
        match &self.variant {
            IconVariant::Screenshot { corner, .. } => corner.as_ref(),
            IconVariant::RichIcon { .. } => None,
        }
    }

    pub fn is_rich_icon(&self) -> bool {
        matches!(self.variant, IconVariant::RichIcon { .. })
    }
}

/// First character of a title, or an empty string for an empty title
///
/// # Examples
/// ```
/// use topsites::logic::icon::letter_fallback;
///
/// assert_eq!(letter_fallback("mozilla"), "m");
/// assert_eq!(letter_fallback("Ünïcode"), "Ü");
/// assert_eq!(letter_fallback(""), "");
/// ```
pub fn letter_fallback(title: &str) -> String {
    title.chars().next().map(String::from).unwrap_or_default()
}

/// Select the icon variant for a link
///
/// First match wins:
/// 1. Curated icon present, or favicon at least [`MIN_RICH_FAVICON_SIZE`]:
///    rich icon on the curated icon (else the favicon) with its background colour.
/// 2. Otherwise a screenshot tile, with a corner overlay that is
///    - the favicon when it is at least [`MIN_CORNER_FAVICON_SIZE`],
///    - the letter fallback when a screenshot exists,
///    - absent otherwise, so an empty tile never shows two fallback glyphs.
///
/// # Arguments
/// * `link` - Link record (absent fields count as "no value")
/// * `title` - Display title, used for the letter fallback
///
/// # Examples
/// ```
/// use topsites::model::Link;
/// use topsites::logic::icon::{select_icon_variant, CornerFavicon};
///
/// let mut link = Link::new("https://example.com");
/// link.favicon = Some("https://example.com/favicon.ico".to_string());
/// link.favicon_size = Some(32);
///
/// let icon = select_icon_variant(&link, "example");
/// assert_eq!(icon.variant_class(), "screenshot");
/// assert_eq!(
///     icon.corner_favicon(),
///     Some(&CornerFavicon::Image(Some("https://example.com/favicon.ico".to_string())))
/// );
/// ```
pub fn select_icon_variant(link: &Link, title: &str) -> IconDescriptor {
    let letter = letter_fallback(title);
    let favicon_size = link.favicon_size();
    let tippy_top_icon = non_empty(&link.tippy_top_icon);
    let favicon = non_empty(&link.favicon);
    let screenshot = non_empty(&link.screenshot);

    if tippy_top_icon.is_some() || favicon_size >= MIN_RICH_FAVICON_SIZE {
        return IconDescriptor {
            variant: IconVariant::RichIcon {
                background_image: tippy_top_icon.or(favicon).map(str::to_string),
                background_color: non_empty(&link.background_color).map(str::to_string),
            },
            letter_fallback: letter,
        };
    }

    let corner = if favicon_size >= MIN_CORNER_FAVICON_SIZE {
        Some(CornerFavicon::Image(favicon.map(str::to_string)))
    } else if screenshot.is_some() {
        Some(CornerFavicon::Letter(letter.clone()))
    } else {
        None
    };

    IconDescriptor {
        variant: IconVariant::Screenshot {
            screenshot: screenshot.map(str::to_string),
            corner,
        },
        letter_fallback: letter,
    }
}
