//! Tests for icon variant selection on full tiles
//!
//! A tile shows a rich icon when a curated icon exists or the favicon is
//! large, otherwise a screenshot tile. The corner overlay is a real favicon
//! when one is big enough, a letter when only a screenshot exists, and
//! nothing for a bare link (the tile's own letter fallback covers it).

use topsites::logic::icon::{CornerFavicon, IconVariant};
use topsites::logic::tile_link::TileLinkView;
use topsites::model::Link;

fn link() -> Link {
    let mut link = Link::new("https://mozilla.org");
    link.hostname = Some("mozilla".to_string());
    link
}

/// Test: favicon of 95px stays a screenshot tile, 96px becomes rich
#[test]
fn test_rich_icon_threshold() {
    let mut small = link();
    small.favicon = Some("f.png".to_string());
    small.favicon_size = Some(95);
    let view = TileLinkView::new(&small, small.title(), None);
    assert!(!view.icon.is_rich_icon());
    assert_eq!(view.icon.corner_favicon(), Some(&CornerFavicon::Image(Some("f.png".to_string()))));

    small.favicon_size = Some(96);
    let view = TileLinkView::new(&small, small.title(), None);
    assert!(view.icon.is_rich_icon());
    assert_eq!(view.icon.background_style(), "url(f.png)");
}

/// Test: favicon under 16px with a screenshot falls back to the letter
#[test]
fn test_tiny_favicon_with_screenshot_uses_letter() {
    let mut link = link();
    link.favicon = Some("f.png".to_string());
    link.favicon_size = Some(8);
    link.screenshot = Some("shot.png".to_string());

    let view = TileLinkView::new(&link, link.title(), None);
    assert_eq!(view.icon.variant_class(), "screenshot active");
    assert_eq!(view.icon.background_style(), "url(shot.png)");
    assert_eq!(view.icon.corner_favicon(), Some(&CornerFavicon::Letter("m".to_string())));
}

/// Test: a bare link has no corner overlay and a blank screenshot
#[test]
fn test_bare_link() {
    let link = link();
    let view = TileLinkView::new(&link, link.title(), None);

    assert_eq!(
        view.icon.variant,
        IconVariant::Screenshot {
            screenshot: None,
            corner: None
        }
    );
    assert_eq!(view.icon.background_style(), "none");
    assert_eq!(view.letter_fallback, "m");
    assert_eq!(view.title, "mozilla");
}

/// Test: curated icon beats the favicon, and a rich icon with no image has no background
#[test]
fn test_curated_icon_beats_favicon() {
    let mut link = link();
    link.tippy_top_icon = Some("tippy.svg".to_string());
    link.favicon = Some("f.png".to_string());
    link.favicon_size = Some(256);
    link.background_color = Some("#fff".to_string());

    let view = TileLinkView::new(&link, link.title(), None);
    assert_eq!(view.icon.background_style(), "url(tippy.svg)");
    assert_eq!(view.icon.background_color(), Some("#fff"));

    link.tippy_top_icon = None;
    link.favicon = None;
    let view = TileLinkView::new(&link, link.title(), None);
    assert!(view.icon.is_rich_icon());
    assert_eq!(view.icon.background_style(), "none");
}

/// Test: pinned tiles mark their title
#[test]
fn test_pinned_title_class() {
    let mut link = link();
    assert_eq!(TileLinkView::new(&link, "mozilla", None).title_class(), "title");
    link.is_pinned = true;
    assert_eq!(TileLinkView::new(&link, "mozilla", None).title_class(), "title pinned");
}

/// Test: empty title gives an empty letter fallback
#[test]
fn test_empty_title() {
    let link = Link::new("https://x.org");
    let view = TileLinkView::new(&link, "", None);
    assert_eq!(view.letter_fallback, "");
}

/// Test: empty strings from the links file count as missing fields
#[test]
fn test_empty_strings_from_json() {
    let link: Link = serde_json::from_str(
        r#"{"url":"https://a.com","label":"","hostname":"a.com","tippyTopIcon":"","faviconSize":32,"screenshot":""}"#,
    )
    .expect("valid link json");

    assert_eq!(link.title(), "a.com");
    let view = TileLinkView::new(&link, link.title(), None);
    assert_eq!(view.icon.variant_class(), "screenshot");
    assert_eq!(view.icon.background_style(), "none");
    assert_eq!(view.icon.corner_favicon(), Some(&CornerFavicon::Image(None)));
    assert_eq!(view.letter_fallback, "a");
}
