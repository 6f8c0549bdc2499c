//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and image URLs.

use super::config::config;

/// Get the base URL for API requests
///
/// Uses `BOOKING_API_BASE` when it was set at build time, otherwise
/// constructs the URL from the current window location on port 3000.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = config().api_base_override {
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
    format!("{}//{}:{}", protocol, hostname, config().api_port)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/courts/123");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// URL изображения для `<img src>` (аналог getImageUrl)
pub fn image_url(path: &str) -> String {
    resolve_image_url(&api_base(), config().uploads_path, path)
}

/// Абсолютные `http(s)://`, `//` и `data:` ссылки возвращаются как есть,
/// пустой путь даёт заглушку, остальное считается файлом в каталоге загрузок.
pub fn resolve_image_url(base: &str, uploads_path: &str, path: &str) -> String {
    let path = path.trim();
    if path.is_empty() {
        return config().image_placeholder.to_string();
    }
    if path.starts_with("http://")
        || path.starts_with("https://")
        || path.starts_with("//")
        || path.starts_with("data:")
    {
        return path.to_string();
    }

    let uploads = uploads_path.trim_matches('/');
    let relative = path.trim_start_matches('/');
    // сервер уже отдал путь вида "uploads/..."
    if !uploads.is_empty() && relative.starts_with(&format!("{}/", uploads)) {
        return format!("{}/{}", base.trim_end_matches('/'), relative);
    }
    if uploads.is_empty() {
        format!("{}/{}", base.trim_end_matches('/'), relative)
    } else {
        format!("{}/{}/{}", base.trim_end_matches('/'), uploads, relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:3000";

    #[test]
    fn test_absolute_urls_pass_through() {
        assert_eq!(
            resolve_image_url(BASE, "/uploads", "https://cdn.example.com/a.jpg"),
            "https://cdn.example.com/a.jpg"
        );
        assert_eq!(
            resolve_image_url(BASE, "/uploads", "data:image/png;base64,AAA"),
            "data:image/png;base64,AAA"
        );
    }

    #[test]
    fn test_relative_paths_go_to_uploads() {
        assert_eq!(
            resolve_image_url(BASE, "/uploads", "courts/1.jpg"),
            "http://localhost:3000/uploads/courts/1.jpg"
        );
        assert_eq!(
            resolve_image_url("http://localhost:3000/", "/uploads/", "/uploads/courts/1.jpg"),
            "http://localhost:3000/uploads/courts/1.jpg"
        );
        assert_eq!(
            resolve_image_url(BASE, "", "/static/x.png"),
            "http://localhost:3000/static/x.png"
        );
    }

    #[test]
    fn test_empty_path_gives_placeholder() {
        assert_eq!(resolve_image_url(BASE, "/uploads", "  "), config().image_placeholder);
    }
}
