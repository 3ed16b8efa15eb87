//! Edit form logic
//!
//! Validation and submission of the add/edit top site form.

use crate::actions::{Action, Dispatch, SiteRef, StoreAction};
use crate::model::EditFormState;

/// Normalize user-typed URL input
///
/// Trims whitespace and prepends `https://` when no scheme is present.
///
/// # Examples
/// ```
/// use topsites::logic::form::normalize_url;
///
/// assert_eq!(normalize_url("mozilla.org"), Some("https://mozilla.org".to_string()));
/// assert_eq!(normalize_url(" http://a.com "), Some("http://a.com".to_string()));
/// assert_eq!(normalize_url("   "), None);
/// ```
pub fn normalize_url(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.contains("://") || trimmed.starts_with("about:") {
        Some(trimmed.to_string())
    } else {
        Some(format!("https://{}", trimmed))
    }
}

/// Submit the form: pin the site at the form's slot
///
/// Returns false (and dispatches nothing) when the url is empty.
pub fn submit_edit_form(form: &EditFormState, dispatch: &mut dyn Dispatch) -> bool {
    let Some(url) = normalize_url(&form.url) else {
        return false;
    };

    let label = form.label.trim();
    let site = SiteRef {
        url,
        label: (!label.is_empty()).then(|| label.to_string()),
    };

    log::debug!("edit form: pinning {} at slot {}", site.url, form.index);
    dispatch.dispatch(Action::send_to_main(StoreAction::TopSitesPin {
        site,
        index: form.index,
    }));
    true
}
