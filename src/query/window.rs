//! Sliding window of page buttons for list views

use serde::Serialize;

/// Maximum number of contiguous page buttons shown at once.
pub const MAX_BUTTONS: usize = 5;

/// Visible page buttons for a list view.
///
/// All indices are 0-based. `first_shortcut`/`last_shortcut` tell the
/// renderer to add a jump to the first/last page because the window does
/// not already include it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub current: usize,
    pub total: usize,
    pub pages: Vec<usize>,
    pub first_shortcut: bool,
    pub last_shortcut: bool,
}

impl PageWindow {
    /// Compute the window for `total` pages around `current`.
    ///
    /// `current` is clamped into `[0, total - 1]` first. With no pages the
    /// window is empty.
    pub fn new(total: usize, current: usize) -> Self {
        if total == 0 {
            return Self {
                current: 0,
                total: 0,
                pages: Vec::new(),
                first_shortcut: false,
                last_shortcut: false,
            };
        }

        let last = total - 1;
        let current = current.min(last);
        let half = MAX_BUTTONS / 2;

        let mut start = current.saturating_sub(half);
        let end = last.min(start.saturating_add(MAX_BUTTONS - 1));
        if end == last {
            start = (end + 1).saturating_sub(MAX_BUTTONS);
        }

        Self {
            current,
            total,
            pages: (start..=end).collect(),
            first_shortcut: start > 0,
            last_shortcut: end < last,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current > 0
    }

    pub fn has_next(&self) -> bool {
        self.total > 0 && self.current < self.total - 1
    }

    /// Page index behind the "Previous" control, if enabled
    pub fn previous(&self) -> Option<usize> {
        self.has_previous().then(|| self.current - 1)
    }

    /// Page index behind the "Next" control, if enabled
    pub fn next(&self) -> Option<usize> {
        self.has_next().then(|| self.current + 1)
    }

    pub fn last_page(&self) -> Option<usize> {
        self.total.checked_sub(1)
    }
}

/// 1-based item range shown on `page` when it holds `rows` items.
///
/// Returns `None` for an empty page.
pub fn item_range(page: usize, rows: usize) -> Option<(usize, usize)> {
    if rows == 0 {
        return None;
    }
    let first = page.saturating_mul(rows).saturating_add(1);
    Some((first, first.saturating_add(rows - 1)))
}
