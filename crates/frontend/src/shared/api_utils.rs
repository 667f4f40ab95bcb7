//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Compile-time override for the API base URL
const API_BASE_OVERRIDE: Option<&str> = option_env!("SALESBOARD_API_BASE_URL");

/// Port the backend listens on during local development
const DEV_API_PORT: u16 = 8000;

/// Resolve the API base URL
///
/// An explicit override wins. Otherwise loopback hosts talk to the dev
/// backend on port 8000, every other host uses same-origin `/api/`.
///
/// # Example
/// ```rust
/// # use frontend::shared::api_utils::resolve_api_base;
/// assert_eq!(resolve_api_base(None, "http:", "localhost"), "http://localhost:8000/api/");
/// ```
pub fn resolve_api_base(override_url: Option<&str>, protocol: &str, hostname: &str) -> String {
    if let Some(url) = override_url.filter(|u| !u.trim().is_empty()) {
        return url.to_string();
    }

    if hostname == "localhost" || hostname == "127.0.0.1" {
        format!("{}//{}:{}/api/", protocol, hostname, DEV_API_PORT)
    } else {
        format!("{}//{}/api/", protocol, hostname)
    }
}

/// Get the base URL for API requests from the current window location
///
/// # Returns
/// - API base URL like "http://localhost:8000/api/" or "https://example.com/api/"
/// - "/api/" if window is not available
pub fn api_base() -> String {
    if let Some(url) = API_BASE_OVERRIDE {
        return resolve_api_base(Some(url), "", "");
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return "/api/".to_string(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    resolve_api_base(None, &protocol, &hostname)
}

/// Join a base URL and an endpoint path without doubling slashes
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
