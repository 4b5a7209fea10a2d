//! Selected category mirrored in the query string (`?category=<slug>`).
//!
//! Read once on startup, rewritten with `history.replaceState` on every
//! selection so a reload re-opens the same category.

use serde::{Deserialize, Serialize};
use web_sys::window;

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
struct CatalogQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
}

/// Category slug from a `location.search` string (with or without `?`)
pub fn parse_category(search: &str) -> Option<String> {
    serde_qs::from_str::<CatalogQuery>(search.trim_start_matches('?'))
        .unwrap_or_default()
        .category
        .filter(|slug| !slug.is_empty())
}

/// `location.search` value for a selection; empty for "All Categories"
pub fn category_search(category: Option<&str>) -> String {
    let query = CatalogQuery {
        category: category.filter(|slug| !slug.is_empty()).map(str::to_string),
    };
    match serde_qs::to_string(&query) {
        Ok(qs) if !qs.is_empty() => format!("?{}", qs),
        _ => String::new(),
    }
}

pub fn read_category_from_url() -> Option<String> {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    parse_category(&search)
}

pub fn write_category_to_url(category: Option<&str>) {
    let Some(w) = window() else {
        return;
    };
    let current_search = w.location().search().unwrap_or_default();
    let new_search = category_search(category);

    // Only update URL if it actually changed
    if current_search == new_search {
        return;
    }
    let new_url = if new_search.is_empty() {
        w.location().pathname().unwrap_or_else(|_| "/".to_string())
    } else {
        new_search
    };
    if let Ok(history) = w.history() {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url));
    }
}
