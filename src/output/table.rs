//! Table output formatting
//!
//! [`DataTable`] renders any [`Record`] list from a set of column
//! descriptors, reading sort and filter state from the view's [`ListQuery`].

use tabled::{
    Table,
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Rows},
};

use crate::client::models::Record;
use crate::output::formatters::format_date;
use crate::query::{ListQuery, SortDirection};

/// Shown in place of a table with no rows
pub const EMPTY_MESSAGE: &str = "No data available";

/// Column descriptor for a list view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Record field name, also used as the sort/filter key
    pub key: &'static str,
    pub label: &'static str,
    /// Sortable via the `sort` parameter
    pub sort: bool,
    /// Filterable via the `filters` parameter
    pub search: bool,
    /// Emphasized cell value
    pub highlight: bool,
    /// Values are timestamps rendered as dates
    pub is_date: bool,
}

impl Column {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            sort: false,
            search: false,
            highlight: false,
            is_date: false,
        }
    }

    pub const fn sortable(mut self) -> Self {
        self.sort = true;
        self
    }

    pub const fn searchable(mut self) -> Self {
        self.search = true;
        self
    }

    pub const fn highlighted(mut self) -> Self {
        self.highlight = true;
        self
    }
}

/// Dropdown-style filter with a fixed set of choices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelect {
    pub label: &'static str,
    pub key: &'static str,
    /// `(value, label)` pairs
    pub options: &'static [(&'static str, &'static str)],
}

/// Generic list table driven by column descriptors and query state.
pub struct DataTable<'a> {
    columns: &'a [Column],
    query: &'a ListQuery,
    selects: &'a [FilterSelect],
    actions: &'a [&'a str],
    decorated: bool,
}

impl<'a> DataTable<'a> {
    pub fn new(columns: &'a [Column], query: &'a ListQuery) -> Self {
        Self {
            columns,
            query,
            selects: &[],
            actions: &[],
            decorated: true,
        }
    }

    /// Dropdown filters listed in the legend.
    pub fn with_selects(mut self, selects: &'a [FilterSelect]) -> Self {
        self.selects = selects;
        self
    }

    /// Row-level commands listed in a trailing ACTIONS column.
    pub fn with_actions(mut self, actions: &'a [&'a str]) -> Self {
        self.actions = actions;
        self
    }

    /// Plain output: no borders, no indicators, no actions.
    pub fn plain(mut self) -> Self {
        self.decorated = false;
        self
    }

    /// Header text for a column: label, active filter, sort indicator.
    pub fn header_cell(&self, column: &Column) -> String {
        if !self.decorated {
            return column.label.to_string();
        }

        let mut header = column.label.to_string();
        if column.search
            && let Some(value) = self.query.filters.get(column.key)
        {
            header.push_str(&format!(" ({})", value));
        }
        if column.sort {
            header.push(' ');
            header.push_str(SortDirection::indicator(self.query.sort.get(column.key)));
        }
        header
    }

    /// Cell text for one record.
    pub fn cell<R: Record>(&self, column: &Column, record: &R) -> String {
        let Some(value) = record.field(column.key).filter(|v| !v.is_empty()) else {
            return String::new();
        };

        let value = if column.is_date {
            format_date(value).unwrap_or_else(|| value.to_string())
        } else {
            value.to_string()
        };

        if column.highlight && self.decorated {
            format!("[{}]", value)
        } else {
            value
        }
    }

    /// Render the rows, or [`EMPTY_MESSAGE`] when there are none.
    pub fn render<R: Record>(&self, rows: &[R]) -> String {
        if rows.is_empty() {
            return EMPTY_MESSAGE.to_string();
        }

        let show_actions = self.decorated && !self.actions.is_empty();
        let mut builder = Builder::default();

        let mut header: Vec<String> = self.columns.iter().map(|c| self.header_cell(c)).collect();
        if show_actions {
            header.push("ACTIONS".to_string());
        }
        builder.push_record(header);

        for row in rows {
            let mut cells: Vec<String> = self.columns.iter().map(|c| self.cell(c, row)).collect();
            if show_actions {
                cells.push(self.actions.join(" | "));
            }
            builder.push_record(cells);
        }

        let mut table = builder.build();
        if self.decorated {
            table
                .with(Style::rounded())
                .with(Modify::new(Rows::first()).with(Alignment::center()));
        } else {
            table.with(Style::blank());
        }
        table.to_string()
    }

    /// "Filters:" legend with the active choice of each dropdown bracketed.
    pub fn legend(&self) -> Option<String> {
        if self.selects.is_empty() {
            return None;
        }

        let parts: Vec<String> = self
            .selects
            .iter()
            .map(|select| {
                let active = self.query.filters.get(select.key);
                let mut choices = vec![mark("All", active.is_none())];
                choices.extend(
                    select
                        .options
                        .iter()
                        .map(|(value, label)| mark(label, active == Some(*value))),
                );
                format!("{}: {}", select.label, choices.join(" "))
            })
            .collect();

        Some(format!("Filters: {}", parts.join("  ")))
    }
}

fn mark(label: &str, active: bool) -> String {
    if active {
        format!("[{}]", label)
    } else {
        label.to_string()
    }
}

/// Vertical two-column table of a single record.
pub fn format_record<R: Record>(record: &R, columns: &[Column]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["ID".to_string(), record.id().to_string()]);
    for column in columns.iter().filter(|c| c.key != "id") {
        let value = record.field(column.key).unwrap_or_default();
        builder.push_record([column.label.to_string(), value.to_string()]);
    }

    let mut table: Table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::GlobalUser;

    const COLUMNS: &[Column] = &[
        Column::new("name", "Name").sortable().searchable().highlighted(),
        Column::new("email", "Email").sortable(),
        Column::new("hrms_user_id", "HRMS ID"),
    ];

    fn user(id: &str, name: Option<&str>, email: &str) -> GlobalUser {
        GlobalUser {
            id: id.to_string(),
            name: name.map(str::to_string),
            email: Some(email.to_string()),
            hrms_user_id: None,
            propeak_user_id: None,
            skillzengine_user_id: None,
        }
    }

    #[test]
    fn test_header_indicators() {
        let query = ListQuery::parse("sort=name:desc&filters=name:jan");
        let table = DataTable::new(COLUMNS, &query);

        assert_eq!(table.header_cell(&COLUMNS[0]), "Name (jan) ↓");
        assert_eq!(table.header_cell(&COLUMNS[1]), "Email ↕");
        assert_eq!(table.header_cell(&COLUMNS[2]), "HRMS ID");
    }

    #[test]
    fn test_header_ascending() {
        let query = ListQuery::parse("sort=email:asc");
        let table = DataTable::new(COLUMNS, &query);
        assert_eq!(table.header_cell(&COLUMNS[1]), "Email ↑");
    }

    #[test]
    fn test_filter_on_unsearchable_column_not_shown() {
        let query = ListQuery::parse("filters=email:x");
        let table = DataTable::new(COLUMNS, &query);
        assert_eq!(table.header_cell(&COLUMNS[1]), "Email ↕");
    }

    #[test]
    fn test_cells() {
        let query = ListQuery::default();
        let table = DataTable::new(COLUMNS, &query);
        let row = user("u-1", Some("Jane"), "jane@example.com");

        assert_eq!(table.cell(&COLUMNS[0], &row), "[Jane]");
        assert_eq!(table.cell(&COLUMNS[1], &row), "jane@example.com");
        assert_eq!(table.cell(&COLUMNS[2], &row), "");

        let unnamed = user("u-2", None, "x@example.com");
        assert_eq!(table.cell(&COLUMNS[0], &unnamed), "");
    }

    #[test]
    fn test_date_cell() {
        const DATED: &[Column] = &[Column {
            is_date: true,
            ..Column::new("name", "Created")
        }];
        let query = ListQuery::default();
        let table = DataTable::new(DATED, &query);
        let row = user("u-1", Some("2025-01-15T12:00:00Z"), "a@example.com");

        assert_eq!(table.cell(&DATED[0], &row), "Wed Jan 15 2025");
    }

    #[test]
    fn test_render_rows_and_actions() {
        let query = ListQuery::default();
        let rows = vec![
            user("u-1", Some("Jane"), "jane@example.com"),
            user("u-2", Some("John"), "john@example.com"),
        ];

        let output = DataTable::new(COLUMNS, &query)
            .with_actions(&["update", "delete"])
            .render(&rows);

        assert!(output.contains("Name ↕"));
        assert!(output.contains("ACTIONS"));
        assert!(output.contains("update | delete"));
        assert!(output.contains("[John]"));
        assert!(output.contains("╭"));
    }

    #[test]
    fn test_render_plain() {
        let query = ListQuery::parse("sort=name:asc");
        let rows = vec![user("u-1", Some("Jane"), "jane@example.com")];

        let output = DataTable::new(COLUMNS, &query)
            .with_actions(&["delete"])
            .plain()
            .render(&rows);

        assert!(output.contains("Name"));
        assert!(!output.contains("↑"));
        assert!(!output.contains("ACTIONS"));
        assert!(!output.contains("[Jane]"));
        assert!(!output.contains("╭"));
    }

    #[test]
    fn test_render_empty() {
        let query = ListQuery::default();
        let rows: Vec<GlobalUser> = vec![];
        assert_eq!(DataTable::new(COLUMNS, &query).render(&rows), EMPTY_MESSAGE);
    }

    #[test]
    fn test_legend_marks_active_choice() {
        const SELECTS: &[FilterSelect] = &[FilterSelect {
            label: "Status",
            key: "status",
            options: &[("active", "Active"), ("inactive", "Inactive")],
        }];

        let query = ListQuery::parse("filters=status:inactive");
        let table = DataTable::new(COLUMNS, &query).with_selects(SELECTS);
        assert_eq!(
            table.legend().as_deref(),
            Some("Filters: Status: All Active [Inactive]")
        );

        let query = ListQuery::default();
        let table = DataTable::new(COLUMNS, &query).with_selects(SELECTS);
        assert_eq!(
            table.legend().as_deref(),
            Some("Filters: Status: [All] Active Inactive")
        );

        assert_eq!(DataTable::new(COLUMNS, &query).legend(), None);
    }

    #[test]
    fn test_format_record() {
        let row = user("u-1", Some("Jane"), "jane@example.com");
        let output = format_record(&row, COLUMNS);

        assert!(output.contains("ID"));
        assert!(output.contains("u-1"));
        assert!(output.contains("HRMS ID"));
        assert!(output.contains("jane@example.com"));
    }
}
