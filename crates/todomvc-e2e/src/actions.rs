// Interaction helpers for the todo application
//
// Every helper takes the page handle and re-locates its elements on each
// call; nothing holds on to element state between gestures. Helpers with
// an observable post-condition assert it with the auto-retrying expect()
// API before returning, so a scenario that gets past a helper call can
// rely on the state the helper names.

use std::time::{Duration, Instant};

use playwright_rs::{Page, expect};

use crate::error::{Error, Result};
use crate::model::{FilterView, TodoItem};
use crate::selectors;

// Same window the expect() assertions retry over.
const FILTER_SELECT_TIMEOUT_MS: u64 = 5_000;
const FILTER_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Types `text` into the entry field and submits it with Enter.
///
/// Post-conditions asserted before returning: the last rendered row's
/// label equals `text`, and the entry field is cleared for the next
/// submission. The application trims surrounding whitespace, so `text`
/// is expected pre-trimmed and non-empty.
pub async fn create_new_todo_item(page: &Page, text: &str) -> Result<()> {
    let entry = page.locator(selectors::NEW_TODO_INPUT).await;
    entry.fill(text, None).await?;
    entry.press("Enter", None).await?;

    let items = page.locator(selectors::TODO_LIST_ITEMS).await;
    expect(items.last().locator(selectors::TODO_TITLE_LABEL))
        .to_have_text(text)
        .await?;
    expect(entry).to_have_value("").await?;

    tracing::debug!(text, "created todo item");
    Ok(())
}

/// Creates the given items in order, so scenarios share one seeding path.
pub async fn seed_todo_list(page: &Page, titles: &[&str]) -> Result<()> {
    for title in titles {
        create_new_todo_item(page, title).await?;
    }
    tracing::debug!(count = titles.len(), "seeded todo list");
    Ok(())
}

/// Checks the completion toggle of the row at `index` (0-based, within
/// the currently rendered list) and asserts the toggle reports checked.
///
/// An out-of-range `index` fails immediately with the rendered count in
/// the error.
pub async fn mark_todo_item_as_completed(page: &Page, index: usize) -> Result<()> {
    let items = page.locator(selectors::TODO_LIST_ITEMS).await;
    let len = items.count().await?;
    if index >= len {
        return Err(Error::ItemIndexOutOfRange { index, len });
    }

    let toggle = items.nth(index as i32).locator(selectors::TOGGLE_CHECKBOX);
    toggle.check(None).await?;
    expect(toggle).to_be_checked().await?;

    tracing::debug!(index, "marked todo item as completed");
    Ok(())
}

/// Checks the completion toggle of the row whose label matches `title`
/// exactly, and asserts the toggle reports checked.
///
/// Title-keyed lookup survives reordering and filtering, where a raw
/// index would silently point at a different item. With duplicate titles
/// the first matching row is toggled.
pub async fn mark_todo_item_with_title_as_completed(page: &Page, title: &str) -> Result<()> {
    let rows = page.locator(&selectors::todo_item_with_title(title)).await;
    if rows.count().await? == 0 {
        return Err(Error::ItemNotFound {
            title: title.to_string(),
        });
    }

    let toggle = rows.first().locator(selectors::TOGGLE_CHECKBOX);
    toggle.check(None).await?;
    expect(toggle).to_be_checked().await?;

    tracing::debug!(title, "marked todo item as completed");
    Ok(())
}

/// Deletes the row at `index` (0-based, within the currently rendered
/// list) through its hover-revealed destroy control.
pub async fn delete_todo_item(page: &Page, index: usize) -> Result<()> {
    let items = page.locator(selectors::TODO_LIST_ITEMS).await;
    let len = items.count().await?;
    if index >= len {
        return Err(Error::ItemIndexOutOfRange { index, len });
    }

    // The destroy control only becomes visible while the row is hovered.
    let row = items.nth(index as i32);
    row.hover(None).await?;
    row.locator(selectors::DESTROY_BUTTON).click(None).await?;

    tracing::debug!(index, "deleted todo item");
    Ok(())
}

/// Clicks the footer link for `view` and waits for it to report itself
/// selected.
///
/// Hash routing applies the `selected` class asynchronously, so the class
/// is polled rather than read once.
pub async fn select_filter_view(page: &Page, view: FilterView) -> Result<()> {
    let link = page.locator(&selectors::filter_link(view)).await;
    link.click(None).await?;

    let deadline = Instant::now() + Duration::from_millis(FILTER_SELECT_TIMEOUT_MS);
    loop {
        let class = link.get_attribute("class").await?.unwrap_or_default();
        if class.split_whitespace().any(|name| name == "selected") {
            tracing::debug!(%view, "filter view selected");
            return Ok(());
        }
        if Instant::now() >= deadline {
            return Err(Error::FilterNotSelected {
                view,
                timeout_ms: FILTER_SELECT_TIMEOUT_MS,
            });
        }
        tokio::time::sleep(FILTER_POLL_INTERVAL).await;
    }
}

/// Clicks "Clear completed", deleting every completed item.
///
/// The control is only rendered while at least one item is completed;
/// when it is absent the call is a no-op, which makes clearing idempotent
/// at zero completed items.
pub async fn clear_completed_todos(page: &Page) -> Result<()> {
    let button = page.locator(selectors::CLEAR_COMPLETED_BUTTON).await;
    if button.count().await? == 0 {
        tracing::debug!("no completed items to clear");
        return Ok(());
    }

    button.click(None).await?;
    expect(page.locator(selectors::CLEAR_COMPLETED_BUTTON).await)
        .to_be_hidden()
        .await?;

    tracing::debug!("cleared completed todo items");
    Ok(())
}

/// Label texts of the currently rendered rows, in list order.
pub async fn visible_todo_titles(page: &Page) -> Result<Vec<String>> {
    let items = page.locator(selectors::TODO_LIST_ITEMS).await;
    let len = items.count().await?;
    let mut titles = Vec::with_capacity(len);
    for index in 0..len {
        let label = items.nth(index as i32).locator(selectors::TODO_TITLE_LABEL);
        titles.push(label.inner_text().await?.trim().to_string());
    }
    Ok(titles)
}

/// Snapshot of the currently rendered rows: title plus completion state.
pub async fn visible_todos(page: &Page) -> Result<Vec<TodoItem>> {
    let items = page.locator(selectors::TODO_LIST_ITEMS).await;
    let len = items.count().await?;
    let mut todos = Vec::with_capacity(len);
    for index in 0..len {
        let row = items.nth(index as i32);
        let title = row
            .locator(selectors::TODO_TITLE_LABEL)
            .inner_text()
            .await?
            .trim()
            .to_string();
        let completed = row.locator(selectors::TOGGLE_CHECKBOX).is_checked().await?;
        todos.push(TodoItem { title, completed });
    }
    Ok(todos)
}
