//! Backend endpoint configuration.
//!
//! The browser bundle has no process environment, so the URLs are baked in
//! at build time from `OFFICEHUB_API_BASE_URL` and
//! `OFFICEHUB_STORAGE_BASE_URL`. `App` provides the resolved value as
//! context for pages and components.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api";
pub const DEFAULT_STORAGE_BASE_URL: &str = "http://127.0.0.1:8000/storage";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Prefix for REST endpoints, without a trailing slash.
    pub api_base_url: String,
    /// Prefix for uploaded images, without a trailing slash.
    pub storage_base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL, DEFAULT_STORAGE_BASE_URL)
    }
}

impl ApiConfig {
    pub fn new(api_base_url: &str, storage_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim().trim_end_matches('/').to_owned(),
            storage_base_url: storage_base_url.trim().trim_end_matches('/').to_owned(),
        }
    }

    /// Resolve from the variables captured at compile time.
    pub fn from_build_env() -> Self {
        Self::resolve(option_env!("OFFICEHUB_API_BASE_URL"), option_env!("OFFICEHUB_STORAGE_BASE_URL"))
    }

    fn resolve(api: Option<&str>, storage: Option<&str>) -> Self {
        let pick = |raw: Option<&str>, default: &'static str| -> String {
            raw.map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
                .to_owned()
        };
        Self::new(&pick(api, DEFAULT_API_BASE_URL), &pick(storage, DEFAULT_STORAGE_BASE_URL))
    }

    /// Absolute URL for a storage-relative image path.
    pub fn storage_url(&self, path: &str) -> String {
        format!("{}/{}", self.storage_base_url, path.trim_start_matches('/'))
    }
}
