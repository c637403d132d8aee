// Selector contract of the todo application DOM
//
// Matches the markup shipped by the public TodoMVC implementations and by
// the bundled fixture. Keeping every selector here means a markup change
// in the application under test is a one-file fix.

use crate::model::FilterView;

/// Entry field for new todo items.
pub const NEW_TODO_INPUT: &str = ".new-todo";
/// Every rendered todo row, in list order.
pub const TODO_LIST_ITEMS: &str = ".todo-list li";
/// Title label inside a todo row.
pub const TODO_TITLE_LABEL: &str = "label";
/// Completion checkbox inside a todo row.
pub const TOGGLE_CHECKBOX: &str = "input.toggle";
/// Hover-revealed delete control inside a todo row.
pub const DESTROY_BUTTON: &str = "button.destroy";
/// In-place edit field of a row in editing mode.
pub const EDIT_INPUT: &str = "input.edit";
/// Footer control that deletes every completed item.
pub const CLEAR_COMPLETED_BUTTON: &str = "button.clear-completed";

/// Footer link for the given filter view, keyed by its hash fragment.
pub fn filter_link(view: FilterView) -> String {
    format!(".filters a[href='{}']", view.url_fragment())
}

/// Row whose title label matches `title` exactly.
pub fn todo_item_with_title(title: &str) -> String {
    format!(
        ".todo-list li:has(label:text-is(\"{}\"))",
        escape_selector_text(title)
    )
}

/// Escapes a string for use inside a double-quoted selector argument.
fn escape_selector_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch == '\\' || ch == '"' {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_links_are_keyed_by_fragment() {
        assert_eq!(filter_link(FilterView::All), ".filters a[href='#/']");
        assert_eq!(filter_link(FilterView::Active), ".filters a[href='#/active']");
        assert_eq!(
            filter_link(FilterView::Completed),
            ".filters a[href='#/completed']"
        );
    }

    #[test]
    fn title_lookup_matches_the_exact_label_text() {
        assert_eq!(
            todo_item_with_title("buy milk"),
            ".todo-list li:has(label:text-is(\"buy milk\"))"
        );
    }

    #[test]
    fn title_lookup_escapes_quotes_and_backslashes() {
        assert_eq!(
            todo_item_with_title(r#"say "hi""#),
            r#".todo-list li:has(label:text-is("say \"hi\""))"#
        );
        assert_eq!(
            todo_item_with_title(r"C:\todo"),
            r#".todo-list li:has(label:text-is("C:\\todo"))"#
        );
    }
}
