//! Backend API configuration.
//!
//! Controllers receive an explicit `ApiConfig` at construction instead of
//! reading ambient globals; the value is provided once via context in
//! `app.rs`.

use leptos::prelude::use_context;

use super::storage;

#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Resolve the backend base URL.
    ///
    /// An operator override in localStorage wins; otherwise the URL is
    /// derived from the current window location, with the API server on
    /// port 3000.
    pub fn from_window() -> Self {
        if let Some(url) = storage::get_api_base() {
            return Self::new(url);
        }
        let window = match web_sys::window() {
            Some(w) => w,
            None => return Self::new(String::new()),
        };
        let location = window.location();
        let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
        let hostname = location
            .hostname()
            .unwrap_or_else(|_| "127.0.0.1".to_string());
        Self::new(format!("{}//{}:3000", protocol, hostname))
    }

    /// Build a full API URL from a path starting with "/".
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// The app-wide config provided in `app.rs`; falls back to window resolution
/// when called outside the component tree.
pub fn use_api_config() -> ApiConfig {
    use_context::<ApiConfig>().unwrap_or_else(ApiConfig::from_window)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_joins_once() {
        let config = ApiConfig::new("http://localhost:3000");
        assert_eq!(
            config.api_url("/api/products"),
            "http://localhost:3000/api/products"
        );

        let trailing = ApiConfig::new("http://localhost:3000/");
        assert_eq!(
            trailing.api_url("/api/products"),
            "http://localhost:3000/api/products"
        );
    }
}
