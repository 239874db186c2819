//! Shared output for single-record commands (get/create/update/delete)

use colored::Colorize;
use dialoguer::Confirm;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::client::models::Record;
use crate::error::Result;
use crate::output::table::format_record;
use crate::output::{Column, print_json, toast};

/// Print one record as a detail table or JSON envelope.
pub fn print_record<R: Record + Serialize>(
    format: OutputFormat,
    record: &R,
    columns: &[Column],
) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(record),
        _ => {
            println!("{}", format_record(record, columns));
            Ok(())
        }
    }
}

/// Report a successful create/update: toast plus the saved record.
pub fn print_saved<R: Record + Serialize>(
    format: OutputFormat,
    message: &str,
    record: &R,
    columns: &[Column],
) -> Result<()> {
    if format != OutputFormat::Json {
        toast::success(message);
    }
    print_record(format, record, columns)
}

/// Report a successful delete.
pub fn print_deleted(format: OutputFormat, message: &str, id: &str) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&serde_json::json!({ "deleted": true, "id": id })),
        _ => {
            toast::success(message);
            Ok(())
        }
    }
}

/// Describe a mutation that `--dry-run` skipped.
pub fn print_dry_run<P: Serialize>(action: &str, payload: &P) -> Result<()> {
    eprintln!("{}", "DRY RUN - no changes will be made".yellow());
    eprintln!();
    eprintln!("Would {}:", action.bold());
    eprintln!("{}", serde_json::to_string_pretty(payload)?);
    Ok(())
}

/// Ask before deleting. Returns `false` when the user declines.
pub fn confirm_delete(description: &str) -> Result<bool> {
    eprintln!(
        "{} Delete {}? This cannot be undone.",
        "⚠".yellow(),
        description
    );

    let confirm = Confirm::new()
        .with_prompt("Confirm deletion?")
        .default(false)
        .interact()?;

    if !confirm {
        eprintln!("Cancelled.");
    }
    Ok(confirm)
}

/// `"Jane" (ID: u-1)`, or `ID u-1` when the record has no name.
pub fn describe<R: Record>(record: &R) -> String {
    match record.field("name").filter(|n| !n.is_empty()) {
        Some(name) => format!("\"{}\" (ID: {})", name, record.id()),
        None => format!("ID {}", record.id()),
    }
}
