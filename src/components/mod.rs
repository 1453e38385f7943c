//! UI Components
//!
//! Leptos components plus the browser dialogs they use.

mod new_item_form;
mod search_box;
mod todo_row;
mod todo_list_view;
mod clear_all_button;

pub use new_item_form::NewItemForm;
pub use search_box::SearchBox;
pub use todo_row::TodoRow;
pub use todo_list_view::TodoListView;
pub use clear_all_button::ClearAllButton;

pub(crate) fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

pub(crate) fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// `None` when the user cancels
pub(crate) fn prompt(message: &str, default: &str) -> Option<String> {
    web_sys::window()
        .and_then(|win| win.prompt_with_message_and_default(message, default).ok())
        .flatten()
}
