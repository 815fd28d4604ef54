//! Build-time configuration.
//!
//! Recognized option: `API_URL`, the backend base URL taken from the build
//! environment. Every request path is prefixed with it.

/// Backend base URL, baked in at compile time.
pub const API_URL: &str = match option_env!("API_URL") {
    Some(url) => url,
    None => DEFAULT_API_URL,
};

/// Fallback base URL for local development.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Absolute URL for a backend endpoint path such as `/logs`.
pub fn endpoint(path: &str) -> String {
    format!("{API_URL}{path}")
}
