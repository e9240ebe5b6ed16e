use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;

fn config() -> HostConfig {
    HostConfig { port: 0, assets_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public/assets") }
}

#[tokio::test]
async fn healthz_returns_ok() {
    let response = static_routes(&config())
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_asset_returns_not_found() {
    let response = static_routes(&config())
        .oneshot(Request::builder().uri("/assets/images/does-not-exist.png").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_path_outside_static_routes_returns_not_found() {
    let response = static_routes(&config())
        .oneshot(Request::builder().uri("/api/offices").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn leptos_style_file_exists() {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let manifest = std::fs::read_to_string(root.join("Cargo.toml")).unwrap();
    let style_file = manifest
        .lines()
        .find_map(|line| line.trim().strip_prefix("style-file = "))
        .map(|value| value.trim_matches('"'))
        .expect("style-file in [package.metadata.leptos]");
    assert!(root.join(style_file).is_file(), "{style_file} is missing");
}
