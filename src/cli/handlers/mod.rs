//! Shared command handlers

pub mod list;
pub mod record;

pub use list::{ListView, run_list};
