//! todomvc-e2e: browser end-to-end suite for the TodoMVC reference application
//!
//! The crate drives a todo-list web application through `playwright-rs` and
//! verifies the behavior a user sees: creating, editing, deleting,
//! completing, filtering, and bulk-clearing list items.
//!
//! The library half is the interaction layer the scenario tests under
//! `tests/` compose:
//!
//! - [`session::TodoSession`] launches a browser and navigates to the
//!   application under test
//! - [`actions`] names the user gestures (create, toggle, delete, filter,
//!   clear) and self-asserts their immediate post-conditions
//! - [`fixture::TODO_APP_HTML`] is a bundled rendition of the public
//!   application, served locally so the suite runs without network access
//! - [`config::TodoAppConfig`] reads `TODO_APP_URL`, `TODO_BROWSER`, and
//!   `TODO_HEADLESS` to retarget or watch a run
//!
//! # Example
//!
//! ```ignore
//! use todomvc_e2e::actions::{create_new_todo_item, mark_todo_item_as_completed};
//! use todomvc_e2e::config::TodoAppConfig;
//! use todomvc_e2e::session::TodoSession;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = TodoAppConfig::from_env()?;
//!     let session =
//!         TodoSession::launch(&config, "https://demo.playwright.dev/todomvc/").await?;
//!     session.goto_app().await?;
//!
//!     create_new_todo_item(session.page(), "complete code challenge").await?;
//!     mark_todo_item_as_completed(session.page(), 0).await?;
//!
//!     session.close().await?;
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod config;
mod error;
pub mod fixture;
pub mod model;
pub mod selectors;
pub mod session;

// Re-export error types
pub use error::{Error, Result};

// Re-export the types scenarios touch most
pub use config::TodoAppConfig;
pub use model::{FilterView, TodoItem};
pub use session::TodoSession;
