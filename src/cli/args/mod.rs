//! Shared CLI argument types
//!
//! This module contains reusable argument structs that can be flattened
//! into commands using `#[command(flatten)]`.

mod common;
mod form;
mod global;
mod query;

pub use common::OutputFormat;
pub use form::{OrgFormArgs, UserFormArgs};
pub use global::GlobalOptions;
pub use query::ListQueryArgs;
