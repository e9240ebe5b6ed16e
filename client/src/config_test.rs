use super::*;

#[test]
fn default_points_at_local_backend() {
    let config = ApiConfig::default();
    assert_eq!(config.api_base_url, "http://127.0.0.1:8000/api");
    assert_eq!(config.storage_base_url, "http://127.0.0.1:8000/storage");
}

#[test]
fn new_trims_trailing_slashes() {
    let config = ApiConfig::new("https://api.example.com/v1/", " https://cdn.example.com/storage// ");
    assert_eq!(config.api_base_url, "https://api.example.com/v1");
    assert_eq!(config.storage_base_url, "https://cdn.example.com/storage");
}

#[test]
fn resolve_falls_back_on_missing_or_blank_values() {
    let config = ApiConfig::resolve(None, Some("   "));
    assert_eq!(config, ApiConfig::default());

    let config = ApiConfig::resolve(Some("https://api.example.com"), None);
    assert_eq!(config.api_base_url, "https://api.example.com");
    assert_eq!(config.storage_base_url, DEFAULT_STORAGE_BASE_URL);
}

#[test]
fn storage_url_joins_relative_paths() {
    let config = ApiConfig::default();
    assert_eq!(
        config.storage_url("thumbnails/a.png"),
        "http://127.0.0.1:8000/storage/thumbnails/a.png"
    );
    assert_eq!(config.storage_url("/photos/b.png"), "http://127.0.0.1:8000/storage/photos/b.png");
}
