//! Pagination helpers for API requests
//!
//! Pages are 0-based everywhere in the console and 1-based on the wire.

use serde::{Deserialize, Deserializer, Serialize};

use crate::query::ListQuery;

/// List request parameters.
///
/// Use the builder pattern to configure pagination options.
///
/// # Example
/// ```ignore
/// let params = ListParams::new().page_size(25);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Page number (0-indexed)
    pub page: usize,
    /// Number of items per page; the server default applies when unset
    pub page_size: Option<usize>,
    /// Encoded sort parameter
    pub sort: Option<String>,
    /// Encoded filters parameter
    pub filters: Option<String>,
    /// Free-text search
    pub search: Option<String>,
}

impl ListParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size (items per page).
    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Convert to query string parameters.
    ///
    /// Uses OneAuth API parameter names:
    /// - `page`: 1-indexed page number (always sent)
    /// - `limit`: number of items per page
    /// - `sort`, `filters`, `search`: forwarded as encoded in the list view
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("page", self.page.saturating_add(1).to_string())];

        if let Some(size) = self.page_size {
            params.push(("limit", size.to_string()));
        }
        if let Some(ref sort) = self.sort {
            params.push(("sort", sort.clone()));
        }
        if let Some(ref filters) = self.filters {
            params.push(("filters", filters.clone()));
        }
        if let Some(ref search) = self.search {
            params.push(("search", search.clone()));
        }

        params
    }
}

impl From<&ListQuery> for ListParams {
    fn from(query: &ListQuery) -> Self {
        Self {
            page: query.page,
            page_size: None,
            sort: (!query.sort.is_empty()).then(|| query.sort.encode()),
            filters: (!query.filters.is_empty()).then(|| query.filters.encode()),
            search: query.search.clone(),
        }
    }
}

/// A page of records returned by a list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListResponse<T> {
    /// Records on this page; `null` from the server reads as empty
    #[serde(default = "Vec::new", deserialize_with = "null_as_empty")]
    pub data: Vec<T>,

    /// Total number of pages
    #[serde(default)]
    pub pages: usize,

    /// Total number of records across all pages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,

    /// 1-indexed page echoed by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
}

impl<T> ListResponse<T> {
    /// Total record count, falling back to the rows on this page.
    pub fn total_count(&self) -> usize {
        self.total.unwrap_or(self.data.len())
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Single-record response: either the bare record or an envelope keyed by
/// `user`/`org` with an optional message.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ItemResponse<T> {
    Wrapped {
        #[serde(alias = "user", alias = "org")]
        item: T,
        #[serde(default)]
        message: Option<String>,
    },
    Bare(T),
}

impl<T> ItemResponse<T> {
    pub fn into_item(self) -> T {
        match self {
            ItemResponse::Wrapped { item, .. } => item,
            ItemResponse::Bare(item) => item,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ItemResponse::Wrapped { message, .. } => message.as_deref(),
            ItemResponse::Bare(_) => None,
        }
    }
}
