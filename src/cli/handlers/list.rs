//! Generic list command handler
//!
//! Every list view follows the same flow:
//! 1. Build the query state from the command line
//! 2. Check sort/filter keys against the view's columns
//! 3. Fetch one page (page sent 1-based)
//! 4. Render table, summary and pager
//! 5. Print the resulting shareable query string

use std::future::Future;

use colored::Colorize;
use log::debug;
use serde::Serialize;

use crate::cli::args::ListQueryArgs;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::models::Record;
use crate::client::{ListParams, ListResponse};
use crate::error::{Error, Result};
use crate::output::pager::{format_pager, format_summary};
use crate::output::{Column, DataTable, FilterSelect, progress};
use crate::query::{ListQuery, PageWindow};

/// Static description of a list view.
pub struct ListView {
    /// Plural resource name for messages, e.g. "users"
    pub resource: &'static str,
    /// Heading shown above the table
    pub title: &'static str,
    pub columns: &'static [Column],
    pub selects: &'static [FilterSelect],
    /// Row-level commands for the ACTIONS column
    pub actions: &'static [&'static str],
}

impl ListView {
    /// Reject `--toggle-sort`/`--filter` keys the view does not support.
    pub fn check_args(&self, args: &ListQueryArgs) -> Result<()> {
        for field in &args.toggle_sort {
            if !self.columns.iter().any(|c| c.sort && c.key == field) {
                return Err(Error::Other(format!(
                    "Cannot sort {} by '{}'. Sortable columns: {}",
                    self.resource,
                    field,
                    self.keys(|c| c.sort).join(", ")
                )));
            }
        }

        for (key, _) in &args.filter {
            let column = self.columns.iter().any(|c| c.search && c.key == key);
            let select = self.selects.iter().any(|s| s.key == key);
            if !column && !select {
                let mut keys = self.keys(|c| c.search);
                keys.extend(self.selects.iter().map(|s| s.key));
                return Err(Error::Other(format!(
                    "Cannot filter {} by '{}'. Filterable columns: {}",
                    self.resource,
                    key,
                    keys.join(", ")
                )));
            }
        }

        Ok(())
    }

    fn keys(&self, include: impl Fn(&Column) -> bool) -> Vec<&'static str> {
        self.columns
            .iter()
            .filter(|c| include(c))
            .map(|c| c.key)
            .collect()
    }

    /// Render one page of results for the given format.
    pub fn render<T: Record + Serialize>(
        &self,
        format: OutputFormat,
        query: &ListQuery,
        response: &ListResponse<T>,
    ) -> Result<String> {
        let window = PageWindow::new(response.pages, query.page);

        match format {
            OutputFormat::Json => {
                let output = ListOutput {
                    items: &response.data,
                    page: query.page,
                    pages: response.pages,
                    total: response.total_count(),
                    query: query.to_query_string(),
                    window: &window,
                };
                Ok(crate::output::json::format_json(&output)?)
            }
            OutputFormat::Table => Ok(DataTable::new(self.columns, query)
                .plain()
                .render(&response.data)),
            OutputFormat::Pretty => {
                let table = DataTable::new(self.columns, query)
                    .with_selects(self.selects)
                    .with_actions(self.actions);

                let mut lines = vec![self.title.bold().to_string()];
                if let Some(legend) = table.legend() {
                    lines.push(legend);
                }
                if let Some(ref search) = query.search {
                    lines.push(format!("Search: {}", search));
                }
                lines.push(table.render(&response.data));
                if let Some(summary) =
                    format_summary(query.page, response.data.len(), response.total_count())
                {
                    lines.push(summary);
                }
                lines.push(format_pager(&window, true));
                Ok(lines.join("\n"))
            }
        }
    }
}

/// JSON shape of a list page
#[derive(Serialize)]
struct ListOutput<'a, T: Serialize> {
    items: &'a [T],
    page: usize,
    pages: usize,
    total: usize,
    query: String,
    window: &'a PageWindow,
}

/// Run a list command: fetch one page and print it with its query string.
///
/// # Example
///
/// ```ignore
/// run_list(&ctx, &USER_VIEW, args, |params| {
///     let client = ctx.client.clone();
///     async move { client.list_users(&params).await }
/// })
/// .await
/// ```
pub async fn run_list<T, F, Fut>(
    ctx: &CommandContext,
    view: &ListView,
    args: &ListQueryArgs,
    fetcher: F,
) -> Result<()>
where
    T: Record + Serialize,
    F: FnOnce(ListParams) -> Fut,
    Fut: Future<Output = Result<ListResponse<T>>>,
{
    view.check_args(args)?;
    let query = args.to_query();

    let mut params = ListParams::from(&query);
    params.page_size = args.limit;
    debug!("Fetching {} with {:?}", view.resource, params);

    let message = format!("Loading {}...", view.resource);
    let response = progress::track(&message, ctx.interactive(), fetcher(params)).await?;

    debug!("Fetched {} {}", response.data.len(), view.resource);

    let output = view.render(ctx.format, &query, &response)?;
    println!("{}", output);

    let query_string = query.to_query_string();
    match ctx.format {
        OutputFormat::Json => {}
        OutputFormat::Table => eprintln!("?{}", query_string),
        OutputFormat::Pretty => println!("{} ?{}", "Query:".dimmed(), query_string),
    }

    Ok(())
}
