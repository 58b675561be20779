//! API utilities for frontend-backend communication
//!
//! Resolves the backend base URL and builds resource URLs.

/// Compile-time override, e.g. `HOSPITALITY_API_BASE=https://api.example.com trunk build`
const API_BASE_OVERRIDE: Option<&str> = option_env!("HOSPITALITY_API_BASE");

/// Port the backend listens on when served next to the dashboard
const BACKEND_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// Uses `HOSPITALITY_API_BASE` when it was set at build time, otherwise
/// derives the URL from the current window location on the backend port.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available (native test runs)
pub fn api_base() -> String {
    if let Some(base) = API_BASE_OVERRIDE.filter(|b| !b.trim().is_empty()) {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Join a base URL and an API path
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// URL of a single resource: `{base}/{collection}/{encoded id}`
pub fn resource_url(base: &str, collection: &str, id: &str) -> String {
    join_url(
        base,
        &format!("{}/{}", collection, urlencoding::encode(id)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:3000/", "/api/bookings"),
            "http://localhost:3000/api/bookings"
        );
        assert_eq!(join_url("", "api/tables"), "/api/tables");
    }

    #[test]
    fn test_resource_url_encodes_id() {
        assert_eq!(
            resource_url("http://h:3000", "api/tables", "a b/c"),
            "http://h:3000/api/tables/a%20b%2Fc"
        );
    }
}
