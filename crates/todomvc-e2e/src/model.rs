// Observed state of the todo application UI

use std::fmt;

/// Filter views offered by the application footer.
///
/// Selecting a view changes which items are rendered; it never changes
/// item state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterView {
    All,
    Active,
    Completed,
}

impl FilterView {
    /// Link text shown in the application footer.
    pub fn link_text(self) -> &'static str {
        match self {
            FilterView::All => "All",
            FilterView::Active => "Active",
            FilterView::Completed => "Completed",
        }
    }

    /// URL fragment the footer link routes to.
    pub fn url_fragment(self) -> &'static str {
        match self {
            FilterView::All => "#/",
            FilterView::Active => "#/active",
            FilterView::Completed => "#/completed",
        }
    }
}

impl fmt::Display for FilterView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.link_text())
    }
}

/// Snapshot of one rendered todo row.
///
/// `completed` is read from the row's toggle checkbox, not from styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub title: String,
    pub completed: bool,
}
