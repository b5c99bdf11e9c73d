//! Resolution of media paths returned by the backend.

/// Prefixes backend-relative paths (`/uploads/...`) with the base address.
///
/// Absolute URLs and other values are returned unchanged.
pub fn resolve_media_url(base_url: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", base_url.trim_end_matches('/'), path)
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path_is_prefixed() {
        assert_eq!(
            resolve_media_url("http://10.0.2.2:8000", "/uploads/pfp_1.jpg"),
            "http://10.0.2.2:8000/uploads/pfp_1.jpg"
        );
    }

    #[test]
    fn test_trailing_slash_on_base() {
        assert_eq!(
            resolve_media_url("http://h:8000/", "/uploads/a.jpg"),
            "http://h:8000/uploads/a.jpg"
        );
    }

    #[test]
    fn test_absolute_url_passes_through() {
        let url = "https://via.placeholder.com/150";
        assert_eq!(resolve_media_url("http://h:8000", url), url);
    }
}
