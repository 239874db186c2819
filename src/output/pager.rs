//! Pagination control line shown under list tables
//!
//! Page numbers are shown 1-based; the window itself is 0-based.

use colored::Colorize;

use crate::query::PageWindow;
use crate::query::window::item_range;

const PREVIOUS: &str = "‹ Previous";
const NEXT: &str = "Next ›";
const GAP: &str = "…";

/// Render the pager line, e.g. `‹ Previous  1 … 6 7 [8] 9 10  Next ›`.
///
/// The current page is bracketed. Disabled arrows are dimmed when `color`
/// is set.
pub fn format_pager(window: &PageWindow, color: bool) -> String {
    let arrow = |label: &str, enabled: bool| {
        if color && !enabled {
            label.dimmed().to_string()
        } else {
            label.to_string()
        }
    };

    let mut buttons: Vec<String> = Vec::new();
    if window.first_shortcut {
        buttons.push("1".to_string());
        buttons.push(GAP.to_string());
    }
    for &page in &window.pages {
        let label = page.saturating_add(1).to_string();
        if page == window.current {
            let current = format!("[{}]", label);
            buttons.push(if color { current.bold().to_string() } else { current });
        } else {
            buttons.push(label);
        }
    }
    if let Some(last) = window.last_page().filter(|_| window.last_shortcut) {
        buttons.push(GAP.to_string());
        buttons.push(last.saturating_add(1).to_string());
    }

    let previous = arrow(PREVIOUS, window.previous().is_some());
    let next = arrow(NEXT, window.next().is_some());

    if buttons.is_empty() {
        format!("{}  {}", previous, next)
    } else {
        format!("{}  {}  {}", previous, buttons.join(" "), next)
    }
}

/// "Showing X to Y out of Z results", or `None` for an empty page.
pub fn format_summary(page: usize, rows: usize, total: usize) -> Option<String> {
    item_range(page, rows)
        .map(|(first, last)| format!("Showing {} to {} out of {} results", first, last, total))
}
