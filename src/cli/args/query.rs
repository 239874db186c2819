//! List view query arguments

use clap::Args;

use crate::query::ListQuery;

/// Query state arguments for list commands.
///
/// `--query` seeds the state from a full query string; the individual
/// parameters override it, then `--toggle-sort` and `--filter` are applied
/// in order.
#[derive(Args, Debug, Default, Clone)]
pub struct ListQueryArgs {
    /// Full query string, e.g. "page=2&sort=name:asc&filters=name:acme"
    #[arg(long, short = 'q')]
    pub query: Option<String>,

    /// Page number (0-indexed)
    #[arg(long, short = 'p')]
    pub page: Option<usize>,

    /// Sort parameter (field:asc|desc,...)
    #[arg(long)]
    pub sort: Option<String>,

    /// Filters parameter (key:value,...)
    #[arg(long)]
    pub filters: Option<String>,

    /// Free-text search (empty clears)
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Cycle a column's sort: none → asc → desc → none (repeatable)
    #[arg(long = "toggle-sort", value_name = "FIELD")]
    pub toggle_sort: Vec<String>,

    /// Set a column filter; an empty value clears it (repeatable)
    #[arg(long = "filter", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub filter: Vec<(String, String)>,

    /// Items per page (server default when omitted)
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

impl ListQueryArgs {
    /// Build the resulting query state.
    pub fn to_query(&self) -> ListQuery {
        let mut query = self
            .query
            .as_deref()
            .map(ListQuery::parse)
            .unwrap_or_default();

        if let Some(page) = self.page {
            query.set_page(page);
        }
        if let Some(ref sort) = self.sort {
            query.sort = crate::query::SortState::decode(sort);
        }
        if let Some(ref filters) = self.filters {
            query.filters = crate::query::FilterState::decode(filters);
        }
        if let Some(ref search) = self.search {
            query.set_search(search);
        }
        for field in &self.toggle_sort {
            query.toggle_sort(field);
        }
        for (key, value) in &self.filter {
            query.update_filter(key, value);
        }

        query
    }
}

/// Characters that separate segments in the `filters` parameter
const RESERVED: [char; 2] = [',', ':'];

/// Parse `key=value`; the value may be empty.
///
/// Neither side may contain `,` or `:`, which the `filters` encoding cannot carry.
fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in '{}'", raw));
    }
    if key.contains(RESERVED) || value.contains(RESERVED) {
        return Err(format!("filter '{}' must not contain ',' or ':'", raw));
    }
    Ok((key.to_string(), value.to_string()))
}
