//! URL helpers for data requests
//!
//! The directory data is served next to the wasm bundle, so request URLs are
//! built from the page origin rather than a separate API host.

/// Origin of the current page, e.g. "https://dashboard.example.org"
///
/// Empty string if window is not available, which keeps paths relative.
pub fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Absolute URL for `path`; absolute inputs are returned unchanged
///
/// # Example
/// ```rust,ignore
/// let url = data_url("/data/schools.json");
/// ```
pub fn data_url(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    join_url(&origin(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("https://a.org/", "/data/x.json"), "https://a.org/data/x.json");
        assert_eq!(join_url("", "data/x.json"), "/data/x.json");
    }

    #[test]
    fn test_absolute_passthrough() {
        assert_eq!(data_url("https://cdn.org/s.json"), "https://cdn.org/s.json");
    }
}
