//! List view query state
//!
//! A list view is configured entirely by its query string: `page` (0-based),
//! `sort` (`field:asc|desc,...`), `filters` (`key:value,...`) and `search`.
//! The string is the single source of truth, so a view can be reproduced by
//! passing the printed query string back in.
//!
//! Malformed `sort`/`filters` segments are dropped while decoding rather than
//! reported.

mod filters;
mod pairs;
mod sort;
pub mod window;

pub use filters::FilterState;
pub use sort::{SortDirection, SortState};
pub use window::PageWindow;

use serde::Serialize;

/// Query parameter names
pub const PAGE_PARAM: &str = "page";
pub const SORT_PARAM: &str = "sort";
pub const FILTERS_PARAM: &str = "filters";
pub const SEARCH_PARAM: &str = "search";

/// Decoded query state of a list view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListQuery {
    pub page: usize,
    pub sort: SortState,
    pub filters: FilterState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Parameters this view does not interpret, kept for round-tripping
    #[serde(skip)]
    pub extra: Vec<(String, String)>,
}

impl ListQuery {
    /// Parse a query string such as `?page=2&sort=name:asc&search=jane`.
    ///
    /// A `page` that is not an unsigned integer reads as 0.
    pub fn parse(raw: &str) -> Self {
        let mut query = Self::default();
        let raw = raw.strip_prefix('?').unwrap_or(raw);

        for pair in raw.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_component(key);
            let value = decode_component(value);

            match key.as_str() {
                PAGE_PARAM => query.page = value.trim().parse().unwrap_or(0),
                SORT_PARAM => query.sort = SortState::decode(&value),
                FILTERS_PARAM => query.filters = FilterState::decode(&value),
                SEARCH_PARAM => query.set_search(&value),
                _ => query.extra.push((key, value)),
            }
        }

        query
    }

    /// Render the state back to a query string (without the leading `?`).
    ///
    /// Empty parameters are omitted, including page 0.
    pub fn to_query_string(&self) -> String {
        self.params()
            .into_iter()
            .map(|(k, v)| format!("{}={}", encode_component(&k), encode_component(&v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Non-empty parameters in canonical order.
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if self.page > 0 {
            params.push((PAGE_PARAM.to_string(), self.page.to_string()));
        }
        if !self.sort.is_empty() {
            params.push((SORT_PARAM.to_string(), self.sort.encode()));
        }
        if !self.filters.is_empty() {
            params.push((FILTERS_PARAM.to_string(), self.filters.encode()));
        }
        if let Some(ref search) = self.search {
            params.push((SEARCH_PARAM.to_string(), search.clone()));
        }
        params.extend(self.extra.iter().cloned());
        params
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Store a search term; blank terms clear the search.
    pub fn set_search(&mut self, value: &str) {
        self.search = if value.trim().is_empty() {
            None
        } else {
            Some(value.to_string())
        };
    }

    pub fn toggle_sort(&mut self, field: &str) {
        self.sort.toggle(field);
    }

    pub fn update_filter(&mut self, key: &str, value: &str) {
        self.filters.update(key, value);
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|s| s.into_owned())
        .unwrap_or(spaced)
}

/// Percent-encode a query component, leaving `:` and `,` readable.
fn encode_component(raw: &str) -> String {
    urlencoding::encode(raw)
        .replace("%3A", ":")
        .replace("%2C", ",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_query() {
        let query = ListQuery::parse("?page=3&sort=name:asc,email:desc&filters=name:acme&search=jane");
        assert_eq!(query.page, 3);
        assert_eq!(query.sort.get("name"), Some(SortDirection::Asc));
        assert_eq!(query.sort.get("email"), Some(SortDirection::Desc));
        assert_eq!(query.filters.get("name"), Some("acme"));
        assert_eq!(query.search.as_deref(), Some("jane"));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(ListQuery::parse(""), ListQuery::default());
        assert_eq!(ListQuery::parse("?"), ListQuery::default());
    }

    #[test]
    fn test_parse_bad_page_reads_zero() {
        assert_eq!(ListQuery::parse("page=abc").page, 0);
        assert_eq!(ListQuery::parse("page=-2").page, 0);
    }

    #[test]
    fn test_parse_decodes_components() {
        let query = ListQuery::parse("search=Jane+Doe&filters=name%3AAcme%20Corp");
        assert_eq!(query.search.as_deref(), Some("Jane Doe"));
        assert_eq!(query.filters.get("name"), Some("Acme Corp"));
    }

    #[test]
    fn test_to_query_string() {
        let mut query = ListQuery::default();
        query.set_page(2);
        query.toggle_sort("name");
        query.update_filter("name", "Acme Corp");
        query.set_search("jane");

        assert_eq!(
            query.to_query_string(),
            "page=2&sort=name:asc&filters=name:Acme%20Corp&search=jane"
        );
    }

    #[test]
    fn test_query_string_round_trip() {
        let raw = "page=1&sort=name:desc&filters=email:a%40b.co,name:x&search=hello%20world";
        let query = ListQuery::parse(raw);
        assert_eq!(query.to_query_string(), raw);
        assert_eq!(ListQuery::parse(&query.to_query_string()), query);
    }

    #[test]
    fn test_empty_mappings_are_omitted() {
        let mut query = ListQuery::parse("sort=name:desc&filters=name:acme");
        query.toggle_sort("name");
        query.update_filter("name", "");
        assert_eq!(query.to_query_string(), "");
    }

    #[test]
    fn test_blank_search_clears() {
        let mut query = ListQuery::parse("search=jane");
        query.set_search("  ");
        assert_eq!(query.search, None);
    }

    #[test]
    fn test_unknown_params_survive() {
        let query = ListQuery::parse("tab=archived&page=1");
        assert_eq!(query.to_query_string(), "page=1&tab=archived");
    }
}
