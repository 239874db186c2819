//! One-line success/failure notifications on stderr

use colored::Colorize;

use crate::forms::FieldErrors;

pub fn format_success(message: &str) -> String {
    format!("{} {}", "✓".green(), message)
}

pub fn format_error(message: &str) -> String {
    format!("{} {}", "✗".red(), message.red())
}

/// Per-field lines listed under a validation failure.
pub fn format_field_errors(errors: &FieldErrors) -> Vec<String> {
    errors
        .iter()
        .map(|(field, messages)| format!("  {}: {}", field.bold(), messages.join(", ")))
        .collect()
}

pub fn success(message: &str) {
    eprintln!("{}", format_success(message));
}

pub fn error(message: &str) {
    eprintln!("{}", format_error(message));
}

pub fn field_errors(errors: &FieldErrors) {
    for line in format_field_errors(errors) {
        eprintln!("{}", line);
    }
}
