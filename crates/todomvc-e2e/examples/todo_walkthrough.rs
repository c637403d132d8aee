// Walkthrough of the todo helpers against the public TodoMVC demo
//
// Run with:
// cargo run --package todomvc-e2e --example todo_walkthrough
//
// Set TODO_APP_URL to drive a different TodoMVC deployment, and
// TODO_BROWSER / TODO_HEADLESS to change how the browser launches.

use playwright_rs::expect;
use todomvc_e2e::actions::{
    clear_completed_todos, create_new_todo_item, delete_todo_item,
    mark_todo_item_with_title_as_completed, select_filter_view, visible_todo_titles,
};
use todomvc_e2e::config::TodoAppConfig;
use todomvc_e2e::model::FilterView;
use todomvc_e2e::selectors;
use todomvc_e2e::session::TodoSession;

const PUBLIC_APP_URL: &str = "https://demo.playwright.dev/todomvc/";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Launch a browser session against the demo deployment
    let config = TodoAppConfig::from_env()?;
    let app_url = config.resolve_app_url(PUBLIC_APP_URL);
    let session = TodoSession::launch(&config, &app_url).await?;
    session.goto_app().await?;
    let page = session.page();
    println!("✓ Opened {app_url}");

    // Create three items
    for title in ["walk the dog", "buy milk", "write a trip report"] {
        create_new_todo_item(page, title).await?;
    }
    println!("✓ Created three todo items");

    // Complete one of them by title
    mark_todo_item_with_title_as_completed(page, "buy milk").await?;
    println!("✓ Completed 'buy milk'");

    // The Active view hides the completed item
    select_filter_view(page, FilterView::Active).await?;
    let active = visible_todo_titles(page).await?;
    println!("✓ Active view shows {active:?}");

    // Back to All, then clear the completed item for good
    select_filter_view(page, FilterView::All).await?;
    clear_completed_todos(page).await?;
    let remaining = visible_todo_titles(page).await?;
    println!("✓ Cleared completed items, leaving {remaining:?}");

    // Edit the first item in place
    let first_row = page.locator(selectors::TODO_LIST_ITEMS).await.first();
    first_row
        .locator(selectors::TODO_TITLE_LABEL)
        .dblclick(None)
        .await?;
    let edit_field = first_row.locator(selectors::EDIT_INPUT);
    edit_field.fill("walk the dog twice", None).await?;
    edit_field.press("Enter", None).await?;
    expect(first_row.locator(selectors::TODO_TITLE_LABEL))
        .to_have_text("walk the dog twice")
        .await?;
    println!("✓ Edited the first item in place");

    // Delete what is left so a rerun starts from an empty list
    delete_todo_item(page, 0).await?;
    expect(
        page.locator(selectors::TODO_LIST_ITEMS)
            .await
            .first()
            .locator(selectors::TODO_TITLE_LABEL),
    )
    .to_have_text("write a trip report")
    .await?;
    delete_todo_item(page, 0).await?;
    expect(page.locator(selectors::TODO_LIST_ITEMS).await)
        .to_be_hidden()
        .await?;
    println!("✓ Deleted the remaining items; the list is empty again");

    // Cleanup
    session.close().await?;
    println!("\n✅ Todo walkthrough completed!");

    Ok(())
}
