use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;

fn scratch_site(name: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("conceptday-{name}-{}", std::process::id()));
    std::fs::create_dir_all(root.join("pkg")).unwrap();
    root
}

#[tokio::test]
async fn healthz_returns_ok() {
    let app = service_routes(&scratch_site("healthz"));
    let response = app
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn pkg_serves_built_assets() {
    let root = scratch_site("pkg");
    std::fs::write(root.join("pkg").join("conceptday.js"), "export {};").unwrap();
    let app = service_routes(&root);
    let response = app
        .oneshot(Request::builder().uri("/pkg/conceptday.js").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_asset_is_not_found() {
    let app = service_routes(&scratch_site("missing"));
    let response = app
        .oneshot(Request::builder().uri("/pkg/nope.wasm").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
