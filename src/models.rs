//! Frontend Models
//!
//! Data structures matching the backend task API.

use serde::{Deserialize, Serialize};

/// Task record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub status: String,
}

/// Create/update request body; `id` is echoed on updates only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub title: String,
    pub description: String,
    pub status: String,
}

/// Pagination block of a task-list response, overwritten wholesale on fetch
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Pagination {
    pub total: u32,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaskListResponse {
    pub tasks: Vec<Task>,
    pub pagination: Pagination,
}

/// POST /register body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterPayload {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// POST /login body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginPayload {
    pub username: String,
    pub password: String,
}

/// Login success body
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
}

/// Error body shape: `{message}` when the server explains itself
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

/// Default status for new tasks
pub const DEFAULT_STATUS: &str = "todo";

/// Task status options
pub const STATUS_OPTIONS: &[(&str, &str)] = &[
    ("todo", "Todo"),
    ("inprogress", "In Progress"),
    ("done", "Done"),
];

/// Status filter options; the empty value selects all
pub const FILTER_STATUS_OPTIONS: &[(&str, &str)] = &[
    ("", "All"),
    ("todo", "Todo"),
    ("inprogress", "In Progress"),
    ("done", "Done"),
];

/// Sortable fields
pub const SORT_FIELDS: &[(&str, &str)] = &[
    ("created_at", "Created At"),
    ("title", "Title"),
    ("description", "Description"),
    ("status", "Status"),
];

/// Sort directions
pub const SORT_ORDERS: &[(&str, &str)] = &[("asc", "Asc"), ("desc", "Desc")];

/// Selectable page sizes
pub const PAGE_SIZES: &[u32] = &[5, 10, 20, 50, 100];

/// Display label for a status code; unknown codes render as-is
pub fn status_label(status: &str) -> &str {
    STATUS_OPTIONS
        .iter()
        .find(|(value, _)| *value == status)
        .map(|(_, label)| *label)
        .unwrap_or(status)
}

/// Filter/sort form state. Two copies live on the tasks page: a draft that is
/// edited live and an applied copy that drives the fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub title: String,
    pub description: String,
    pub status: String,
    pub sort_by: String,
    pub sort_order: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            status: String::new(),
            sort_by: "created_at".to_string(),
            sort_order: "desc".to_string(),
        }
    }
}

impl FilterState {
    /// Query parameters for a list fetch; empty filter fields are omitted
    pub fn query_pairs(&self, page_no: u32, limit: u32) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page_no", page_no.to_string()),
            ("limit", limit.to_string()),
        ];
        if !self.title.is_empty() {
            pairs.push(("title", self.title.clone()));
        }
        if !self.description.is_empty() {
            pairs.push(("description", self.description.clone()));
        }
        if !self.status.is_empty() {
            pairs.push(("status", self.status.clone()));
        }
        if !self.sort_by.is_empty() {
            pairs.push(("sort_by", self.sort_by.clone()));
        }
        if !self.sort_order.is_empty() {
            pairs.push(("sort_order", self.sort_order.clone()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filters_sort_newest_first() {
        let filters = FilterState::default();
        assert!(filters.title.is_empty());
        assert!(filters.description.is_empty());
        assert!(filters.status.is_empty());
        assert_eq!(filters.sort_by, "created_at");
        assert_eq!(filters.sort_order, "desc");
    }

    #[test]
    fn query_pairs_omit_empty_text_filters() {
        let pairs = FilterState::default().query_pairs(1, 10);
        let keys: Vec<_> = pairs.iter().map(|(key, _)| *key).collect();
        assert_eq!(keys, vec!["page_no", "limit", "sort_by", "sort_order"]);
    }

    #[test]
    fn query_pairs_include_applied_filters() {
        let filters = FilterState {
            title: "Test".to_string(),
            status: "done".to_string(),
            ..FilterState::default()
        };
        let pairs = filters.query_pairs(3, 20);
        assert!(pairs.contains(&("page_no", "3".to_string())));
        assert!(pairs.contains(&("limit", "20".to_string())));
        assert!(pairs.contains(&("title", "Test".to_string())));
        assert!(pairs.contains(&("status", "done".to_string())));
        assert!(!pairs.iter().any(|(key, _)| *key == "description"));
    }

    #[test]
    fn update_payload_echoes_id_create_omits_it() {
        let update = TaskPayload {
            id: Some(7),
            title: "Write report".to_string(),
            description: String::new(),
            status: "done".to_string(),
        };
        let body = serde_json::to_string(&update).unwrap();
        assert!(body.contains("\"id\":7"));

        let create = TaskPayload { id: None, ..update };
        let body = serde_json::to_string(&create).unwrap();
        assert!(!body.contains("\"id\""));
    }

    #[test]
    fn list_response_decodes_tasks_and_pagination() {
        let body = r#"{
            "tasks": [{"id": 1, "title": "A", "description": "", "status": "todo"}],
            "pagination": {"page_no": 1, "total": 1, "total_pages": 1, "has_next": false, "has_prev": false}
        }"#;
        let decoded: TaskListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(decoded.tasks.len(), 1);
        assert_eq!(decoded.tasks[0].title, "A");
        assert_eq!(decoded.pagination.total_pages, 1);
        assert!(!decoded.pagination.has_next);
        assert!(!decoded.pagination.has_prev);
    }

    #[test]
    fn status_labels_cover_all_codes() {
        assert_eq!(status_label("todo"), "Todo");
        assert_eq!(status_label("inprogress"), "In Progress");
        assert_eq!(status_label("done"), "Done");
        assert_eq!(status_label("archived"), "archived");
    }

    #[test]
    fn error_body_message_is_optional() {
        let with: ApiMessage = serde_json::from_str(r#"{"message": "nope"}"#).unwrap();
        assert_eq!(with.message.as_deref(), Some("nope"));
        let without: ApiMessage = serde_json::from_str("{}").unwrap();
        assert!(without.message.is_none());
    }
}
