//! Task List State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The client owns
//! only `page_no` and `page_size`; every other field is server-derived and
//! overwritten wholesale on each successful fetch.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Task, TaskListResponse};

/// Page size used until the user picks another
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Task list page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TasksState {
    /// Current page of task rows
    pub tasks: Vec<Task>,
    /// Client-held page cursor (1-based)
    pub page_no: u32,
    /// Client-held page size
    pub page_size: u32,
    /// Server-reported total record count
    pub total: u32,
    /// Server-reported page count
    pub total_pages: u32,
    /// Server-reported next-page flag, gates the Next button
    pub has_next: bool,
    /// Server-reported prev-page flag, gates the Prev button
    pub has_prev: bool,
}

impl TasksState {
    pub fn new() -> Self {
        Self {
            page_no: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total_pages: 1,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type TasksStore = Store<TasksState>;

/// Replace rows and pagination from a successful list response
pub fn store_apply_response(store: &TasksStore, response: TaskListResponse) {
    store.tasks().set(response.tasks);
    store.total().set(response.pagination.total);
    store.total_pages().set(response.pagination.total_pages);
    store.has_next().set(response.pagination.has_next);
    store.has_prev().set(response.pagination.has_prev);
}

/// Jump to a page; bounds are gated at the UI level by the server flags
pub fn store_set_page(store: &TasksStore, page_no: u32) {
    store.page_no().set(page_no);
}

/// Change the page size and restart from the first page
pub fn store_set_page_size(store: &TasksStore, page_size: u32) {
    store.page_size().set(page_size);
    store.page_no().set(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Pagination;

    #[test]
    fn new_state_starts_on_page_one() {
        let state = TasksState::new();
        assert_eq!(state.page_no, 1);
        assert_eq!(state.page_size, DEFAULT_PAGE_SIZE);
        assert!(state.tasks.is_empty());
    }

    #[test]
    fn page_size_change_resets_the_cursor() {
        let store = Store::new(TasksState::new());
        store_set_page(&store, 3);
        assert_eq!(store.page_no().get_untracked(), 3);

        store_set_page_size(&store, 20);
        assert_eq!(store.page_size().get_untracked(), 20);
        assert_eq!(store.page_no().get_untracked(), 1);
    }

    #[test]
    fn fetch_response_overwrites_rows_and_pagination() {
        let store = Store::new(TasksState::new());
        let response = TaskListResponse {
            tasks: vec![Task {
                id: 1,
                title: "A".to_string(),
                description: String::new(),
                status: "todo".to_string(),
            }],
            pagination: Pagination {
                total: 11,
                total_pages: 2,
                has_next: true,
                has_prev: false,
            },
        };
        store_apply_response(&store, response);
        assert_eq!(store.tasks().get_untracked().len(), 1);
        assert_eq!(store.total().get_untracked(), 11);
        assert_eq!(store.total_pages().get_untracked(), 2);
        assert!(store.has_next().get_untracked());
        assert!(!store.has_prev().get_untracked());
    }
}
