//! Backend API Bindings
//!
//! Typed wrappers over the REST endpoints, one `async fn` per operation.
//! Authenticated calls go through `Api::send`, which attaches the bearer
//! token and intercepts HTTP 401 by clearing the session and redirecting to
//! the login view. One attempt per call, no retry.

use leptos::prelude::expect_context;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::config::API_URL;
use crate::models::{
    ApiMessage, FilterState, LoginPayload, LoginResponse, RegisterPayload, TaskListResponse,
    TaskPayload,
};
use crate::router::{Route, Router};
use crate::session::Session;

/// Request failure taxonomy: invalid/expired credentials, a server-supplied
/// message, or a rejected fetch (DNS, connection refused).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Session expired")]
    Unauthorized,

    #[error("{0}")]
    Api(String),

    #[error("Network error")]
    Network,
}

/// API handle provided via context; carries the session and router so the
/// 401 interceptor can clear the token and force navigation.
#[derive(Clone, Copy)]
pub struct Api {
    session: Session,
    router: Router,
}

impl Api {
    pub fn new(session: Session, router: Router) -> Self {
        Self { session, router }
    }

    /// POST /register. Goes through the 401 interceptor like every other
    /// wrapped call; non-2xx surfaces the body message when present.
    pub async fn register(&self, payload: &RegisterPayload) -> Result<(), ApiError> {
        let body = to_body(payload)?;
        let response = self.send("POST", "/register", Some(body)).await?;
        if response.ok() {
            Ok(())
        } else {
            Err(error_from(&response, "Signup failed").await)
        }
    }

    /// POST /login. Issued without the interceptor: a 401 here means bad
    /// credentials, not an expired session. Any other non-200 status is
    /// treated as a network-level failure.
    pub async fn login(&self, payload: &LoginPayload) -> Result<String, ApiError> {
        let body = to_body(payload)?;
        let response = fetch("POST", "/login", Some(body), None).await?;
        match response.status() {
            200 => {
                let decoded: LoginResponse = read_json(&response).await?;
                decoded.access_token.ok_or(ApiError::Unauthorized)
            }
            401 => Err(ApiError::Unauthorized),
            _ => Err(ApiError::Network),
        }
    }

    /// GET /tasks with pagination and the applied filters url-encoded
    pub async fn list_tasks(
        &self,
        page_no: u32,
        limit: u32,
        filters: &FilterState,
    ) -> Result<TaskListResponse, ApiError> {
        let query = encode_query(&filters.query_pairs(page_no, limit));
        let response = self.send("GET", &format!("/tasks?{query}"), None).await?;
        if response.ok() {
            read_json(&response).await
        } else {
            Err(error_from(&response, "Failed to fetch tasks").await)
        }
    }

    /// POST /tasks
    pub async fn create_task(&self, payload: &TaskPayload) -> Result<(), ApiError> {
        let body = to_body(payload)?;
        let response = self.send("POST", "/tasks", Some(body)).await?;
        if response.ok() {
            Ok(())
        } else {
            Err(error_from(&response, "Failed to create task").await)
        }
    }

    /// PUT /tasks/{id}
    pub async fn update_task(&self, id: u32, payload: &TaskPayload) -> Result<(), ApiError> {
        let body = to_body(payload)?;
        let response = self.send("PUT", &format!("/tasks/{id}"), Some(body)).await?;
        if response.ok() {
            Ok(())
        } else {
            Err(error_from(&response, "Failed to update task").await)
        }
    }

    /// DELETE /tasks/{id}
    pub async fn delete_task(&self, id: u32) -> Result<(), ApiError> {
        let response = self.send("DELETE", &format!("/tasks/{id}"), None).await?;
        if response.ok() {
            Ok(())
        } else {
            Err(error_from(&response, "Failed to delete task").await)
        }
    }

    /// Issue one wrapped request: bearer token attached when present, 401
    /// clears the session and redirects to the login view before the error
    /// is handed back to the caller.
    async fn send(
        &self,
        method: &str,
        path: &str,
        body: Option<String>,
    ) -> Result<Response, ApiError> {
        let response = fetch(method, path, body, self.session.token()).await?;
        if response.status() == 401 {
            self.session.clear();
            self.router.redirect(Route::Login);
            return Err(ApiError::Unauthorized);
        }
        Ok(response)
    }
}

/// Get the API handle from context
pub fn use_api() -> Api {
    expect_context::<Api>()
}

async fn fetch(
    method: &str,
    path: &str,
    body: Option<String>,
    token: Option<String>,
) -> Result<Response, ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);

    let headers = Headers::new().map_err(|_| ApiError::Network)?;
    if body.is_some() {
        headers
            .set("Content-Type", "application/json")
            .map_err(|_| ApiError::Network)?;
    }
    if let Some(token) = token {
        headers
            .set("Authorization", &format!("Bearer {token}"))
            .map_err(|_| ApiError::Network)?;
    }
    opts.set_headers(&headers);

    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let url = format!("{API_URL}{path}");
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|_| ApiError::Network)?;
    let window = web_sys::window().ok_or(ApiError::Network)?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| ApiError::Network)?;
    response.dyn_into::<Response>().map_err(|_| ApiError::Network)
}

async fn read_json<T: DeserializeOwned>(response: &Response) -> Result<T, ApiError> {
    let promise = response.json().map_err(|_| ApiError::Network)?;
    let value = JsFuture::from(promise).await.map_err(|_| ApiError::Network)?;
    serde_wasm_bindgen::from_value(value).map_err(|_| ApiError::Network)
}

/// Build the error for a non-2xx response: the body's `message` field when
/// the server explains itself, else the operation's fallback string.
async fn error_from(response: &Response, fallback: &str) -> ApiError {
    let message = read_json::<ApiMessage>(response)
        .await
        .ok()
        .and_then(|body| body.message);
    ApiError::Api(message.unwrap_or_else(|| fallback.to_string()))
}

fn to_body<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|_| ApiError::Network)
}

/// Query-string characters that need escaping beyond controls
const QUERY_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'=')
    .add(b'?');

/// Encode `key=value` pairs into a query string
pub fn encode_query(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, utf8_percent_encode(value, QUERY_ENCODE_SET)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applied_title_appears_in_query() {
        let filters = FilterState {
            title: "Test".to_string(),
            ..FilterState::default()
        };
        let query = encode_query(&filters.query_pairs(1, 10));
        assert!(query.contains("title=Test"));
        assert!(query.starts_with("page_no=1&limit=10"));
    }

    #[test]
    fn default_filters_carry_no_filter_params() {
        let query = encode_query(&FilterState::default().query_pairs(1, 10));
        assert_eq!(query, "page_no=1&limit=10&sort_by=created_at&sort_order=desc");
        assert!(!query.contains("title="));
        assert!(!query.contains("description="));
        assert!(!query.contains("status="));
    }

    #[test]
    fn query_values_are_percent_encoded() {
        let pairs = vec![("title", "a b&c=d".to_string())];
        assert_eq!(encode_query(&pairs), "title=a%20b%26c%3Dd");
    }

    #[test]
    fn page_size_change_is_reflected_in_query() {
        let query = encode_query(&FilterState::default().query_pairs(1, 20));
        assert!(query.contains("page_no=1&limit=20"));
    }

    #[test]
    fn error_display_strings() {
        assert_eq!(ApiError::Network.to_string(), "Network error");
        assert_eq!(ApiError::Api("boom".to_string()).to_string(), "boom");
        assert_eq!(ApiError::Unauthorized.to_string(), "Session expired");
    }
}
