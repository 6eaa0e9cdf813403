//! UI Components
//!
//! Leptos components for the single page.

mod connection_panel;
mod delete_confirm_button;
mod new_task_form;
mod status_line;
mod task_item;
mod task_list;
mod wallet_panel;

pub use connection_panel::ConnectionPanel;
pub use delete_confirm_button::DeleteConfirmButton;
pub use new_task_form::NewTaskForm;
pub use status_line::StatusLine;
pub use task_item::TaskItem;
pub use task_list::TaskList;
pub use wallet_panel::WalletPanel;
