// Error types for the todomvc-e2e suite

use thiserror::Error;

use crate::model::FilterView;

/// Result type alias for suite operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving the todo application
#[derive(Debug, Error)]
pub enum Error {
    /// TODO_APP_URL did not parse as a URL
    ///
    /// The suite falls back to the bundled fixture application only when
    /// the variable is unset. A malformed value is reported instead of
    /// silently ignored.
    #[error("Invalid application URL '{value}'")]
    InvalidAppUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    /// TODO_BROWSER named an engine Playwright does not ship
    #[error("Unknown browser '{value}'. Expected one of: chromium, firefox, webkit")]
    UnknownBrowser { value: String },

    /// A positional lookup pointed past the end of the rendered list
    ///
    /// Reported from the current item count instead of letting the
    /// automation layer wait out its action timeout on a selector that
    /// can never match.
    #[error("Todo item index {index} is out of range: the list renders {len} item(s)")]
    ItemIndexOutOfRange { index: usize, len: usize },

    /// A title-keyed lookup matched no rendered todo item
    #[error("No rendered todo item has the title '{title}'")]
    ItemNotFound { title: String },

    /// A filter link was clicked but never reported itself selected
    #[error("Filter '{view}' did not become selected within {timeout_ms}ms")]
    FilterNotSelected { view: FilterView, timeout_ms: u64 },

    /// Error from the Playwright automation layer
    ///
    /// Locator, navigation, and assertion failures surface here with the
    /// selector and timeout context the client attaches to them.
    #[error(transparent)]
    Playwright(#[from] playwright_rs::Error),
}
