// Integration tests for clearing completed todo items
//
// Tests cover:
// - Clear completed deletes completed items permanently, not just from view
// - Clearing again with nothing completed leaves the list untouched
//
// These scenarios drive a real browser and are ignored by default. With
// browsers installed (cargo xtask install-browsers), run:
//   cargo test -p todomvc-e2e -- --include-ignored

mod common;
mod todo_server;

use todomvc_e2e::actions::{
    clear_completed_todos, mark_todo_item_with_title_as_completed, seed_todo_list,
    select_filter_view, visible_todo_titles,
};
use todomvc_e2e::config::TodoAppConfig;
use todomvc_e2e::model::FilterView;
use todomvc_e2e::session::TodoSession;

use todo_server::TodoServer;

#[tokio::test]
#[ignore = "requires Playwright browsers (run with --include-ignored)"]
async fn test_clear_completed_removes_completed_items_permanently() {
    common::init_tracing();
    let server = TodoServer::start().await;
    let config = TodoAppConfig::from_env().expect("Failed to read suite configuration");
    let app_url = config.resolve_app_url(&server.url());
    let session = TodoSession::launch(&config, &app_url)
        .await
        .expect("Failed to launch browser session");
    session
        .goto_app()
        .await
        .expect("Failed to open the todo application");
    let page = session.page();

    seed_todo_list(page, &["A", "B"])
        .await
        .expect("Failed to seed todo list");
    mark_todo_item_with_title_as_completed(page, "B")
        .await
        .expect("Failed to mark todo item by title");

    clear_completed_todos(page)
        .await
        .expect("Failed to clear completed todos");

    let titles = visible_todo_titles(page)
        .await
        .expect("Failed to read todo list");
    assert_eq!(titles, ["A"], "Only the active item may survive");

    // The cleared item is gone, not merely filtered out of the current view.
    select_filter_view(page, FilterView::Completed)
        .await
        .expect("Failed to select the Completed view");
    let completed = visible_todo_titles(page)
        .await
        .expect("Failed to read the Completed view");
    assert!(
        completed.is_empty(),
        "Cleared items must not reappear under Completed, got {completed:?}"
    );

    select_filter_view(page, FilterView::All)
        .await
        .expect("Failed to return to the All view");
    let titles = visible_todo_titles(page)
        .await
        .expect("Failed to read todo list");
    assert_eq!(titles, ["A"]);

    // A second clear has nothing to remove.
    clear_completed_todos(page)
        .await
        .expect("Clearing with nothing completed must succeed");
    let titles = visible_todo_titles(page)
        .await
        .expect("Failed to read todo list");
    assert_eq!(titles, ["A"], "Clearing twice must not remove active items");
    tracing::info!("✓ clear completed deleted the item permanently");

    session.close().await.expect("Failed to close browser session");
    server.shutdown();
}

#[tokio::test]
#[ignore = "requires Playwright browsers (run with --include-ignored)"]
async fn test_clear_with_no_completed_items_is_a_noop() {
    common::init_tracing();
    let server = TodoServer::start().await;
    let config = TodoAppConfig::from_env().expect("Failed to read suite configuration");
    let app_url = config.resolve_app_url(&server.url());
    let session = TodoSession::launch(&config, &app_url)
        .await
        .expect("Failed to launch browser session");
    session
        .goto_app()
        .await
        .expect("Failed to open the todo application");
    let page = session.page();

    seed_todo_list(page, &["A", "B"])
        .await
        .expect("Failed to seed todo list");

    clear_completed_todos(page)
        .await
        .expect("Clearing with nothing completed must succeed");

    let titles = visible_todo_titles(page)
        .await
        .expect("Failed to read todo list");
    assert_eq!(titles, ["A", "B"], "A no-op clear must leave the list untouched");
    tracing::info!("✓ clear with no completed items was a no-op");

    session.close().await.expect("Failed to close browser session");
    server.shutdown();
}
