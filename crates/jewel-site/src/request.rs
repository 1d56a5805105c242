//! Query-string handling for the listing page.
//!
//! The filter state lives entirely in the URL, so every facet toggle, sort
//! change and group tab is a plain link:
//!
//! ```text
//! /diamonds?group=white&shape=round,oval&carat_min=1&carat_max=2&in_stock=1&sort=price-asc
//! ```
//!
//! Facet values may be comma lists, repeated keys, or both. Unknown values
//! are dropped; an unknown group falls back to white and an unknown sort to
//! featured.

use jewel_catalog::prelude::*;
use jewel_messaging::ContactForm;
use tracing::debug;

/// Decode a query string into key/value pairs, in order.
///
/// A malformed query decodes as empty rather than failing the page.
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    serde_urlencoded::from_str::<Vec<(String, String)>>(query).unwrap_or_else(|e| {
        debug!(error = %e, "ignoring malformed query string");
        Vec::new()
    })
}

/// First value for a key.
pub fn query_value(query: &str, key: &str) -> Option<String> {
    parse_query(query)
        .into_iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
}

/// Build the listing filter state from a query string.
pub fn filter_state_from_query(query: &str) -> FilterState {
    let pairs = parse_query(query);
    let value = |key: &str| pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str());

    let group = match value("group") {
        Some(raw) => Group::parse(raw).unwrap_or_else(|| {
            debug!(group = raw, "unknown group, using default");
            Group::default()
        }),
        None => Group::default(),
    };

    let mut state = FilterState::new(group);

    for kind in FacetKind::ALL {
        for (_, raw) in pairs.iter().filter(|(k, _)| k == kind.param()) {
            for item in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                // Repeated values must not toggle themselves back off.
                if state.is_selected(*kind, item) {
                    continue;
                }
                if !state.toggle_facet(*kind, item) {
                    debug!(facet = kind.param(), value = item, "ignoring unknown facet value");
                }
            }
        }
    }

    let min = value("carat_min").and_then(Carat::parse);
    let max = value("carat_max").and_then(Carat::parse);
    if min.is_some() || max.is_some() {
        state.set_carat_range(CaratRange::new(
            min.unwrap_or(Carat::MIN_FILTER),
            max.unwrap_or(Carat::MAX_FILTER),
        ));
    }

    state.set_in_stock_only(matches!(value("in_stock"), Some("1" | "true" | "on")));

    if let Some(sort) = value("sort") {
        state.set_sort(SortOption::from_query(sort));
    }

    state
}

/// Canonical query string for a filter state. Defaults are left out.
pub fn query_string(state: &FilterState) -> String {
    let mut pairs: Vec<(&str, String)> = vec![("group", state.group.slug())];

    for kind in FacetKind::ALL {
        let selected = state.selected(*kind);
        if !selected.is_empty() {
            pairs.push((kind.param(), selected.join(",")));
        }
    }

    if !state.carat.is_default() {
        pairs.push(("carat_min", state.carat.min.to_string()));
        pairs.push(("carat_max", state.carat.max.to_string()));
    }

    if state.in_stock_only {
        pairs.push(("in_stock", "1".to_string()));
    }

    if state.sort != SortOption::default() {
        pairs.push(("sort", state.sort.as_str().to_string()));
    }

    // Serializing string pairs cannot fail.
    serde_urlencoded::to_string(&pairs).unwrap_or_default()
}

/// Listing URL for a filter state.
pub fn listing_href(state: &FilterState) -> String {
    format!("/diamonds?{}", query_string(state))
}

/// Decode a submitted contact form. Missing fields decode as empty.
pub fn contact_form_from_body(body: &[u8]) -> ContactForm {
    serde_urlencoded::from_bytes(body).unwrap_or_else(|e| {
        debug!(error = %e, "malformed contact form body");
        ContactForm::default()
    })
}

/// Accept a redirect target only if it is a path on this site that can be
/// sent back verbatim in a `Location` header.
pub fn local_redirect(next: Option<&str>) -> &str {
    match next {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && path.chars().all(|c| c.is_ascii_graphic() && c != '\\') =>
        {
            path
        }
        _ => "/",
    }
}
