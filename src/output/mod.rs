//! Output formatting for CLI results

pub mod formatters;
pub mod json;
pub mod pager;
pub mod progress;
pub mod table;
pub mod toast;

pub use json::print_json;
pub use table::{Column, DataTable, FilterSelect};
