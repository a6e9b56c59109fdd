//! API route configuration.
use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::constants::DEFAULT_API_BASE_URL;
use crate::log_info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    /// Points at the local development backend.
    fn default() -> Self {
        Self::from_url(DEFAULT_API_BASE_URL)
    }
}

impl ApiConfig {
    /// Build-time configuration from the `API_BASE_URL` environment variable.
    pub fn from_build_env() -> Option<Self> {
        option_env!("API_BASE_URL").filter(|u| !u.trim().is_empty()).map(Self::from_url)
    }

    /// Create a new ApiConfig from a URL string
    pub fn from_url(url: &str) -> Self {
        Self { base_url: url.trim().trim_end_matches('/').to_string() }
    }

    /// Get the base URL for all API calls
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get a full API URL for a given path
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

thread_local! {
    static RUNTIME_OVERRIDE: RefCell<Option<ApiConfig>> = const { RefCell::new(None) };
}

/// Let the hosting page point the client at another backend before the app
/// issues its first request.
#[wasm_bindgen]
pub fn init_api_config_js(url: String) {
    let config = ApiConfig::from_url(&url);
    log_info!("API base URL overridden: {}", config.base_url());
    RUNTIME_OVERRIDE.with(|cell| *cell.borrow_mut() = Some(config));
}

/// Effective configuration: runtime override, then build-time env, then the
/// local default.
pub fn current() -> ApiConfig {
    RUNTIME_OVERRIDE
        .with(|cell| cell.borrow().clone())
        .or_else(ApiConfig::from_build_env)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = ApiConfig::from_url("https://api.example.com//");
        assert_eq!(config.base_url(), "https://api.example.com");
        assert_eq!(config.url("/login"), "https://api.example.com/login");
        assert_eq!(config.url("upload"), "https://api.example.com/upload");
    }

    #[test]
    fn default_is_local_backend() {
        assert_eq!(ApiConfig::default().url("/ats-score"), "http://127.0.0.1:8000/ats-score");
    }

    #[test]
    fn runtime_override_wins() {
        init_api_config_js("http://staging:9000/".into());
        assert_eq!(current().base_url(), "http://staging:9000");
    }
}
