//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod nav_link;
mod page_size_select;
mod pagination;
mod password_field;
mod task_filters;
mod task_form;
mod task_table;
mod toast;

pub use delete_confirm_button::DeleteConfirmButton;
pub use nav_link::NavLink;
pub use page_size_select::PageSizeSelect;
pub use pagination::Pagination;
pub use password_field::PasswordField;
pub use task_filters::TaskFilters;
pub use task_form::TaskForm;
pub use task_table::TaskTable;
pub use toast::{Toast, ToastKind, ToastMessage, TOAST_DISMISS_MS};
