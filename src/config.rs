//! Environment Configuration

/// Backend base URL, overridable at build time via the `API_URL` env var.
pub const API_URL: &str = match option_env!("API_URL") {
    Some(url) => url,
    None => "http://127.0.0.1:5000",
};
