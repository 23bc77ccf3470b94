//! HubClient tests against a local stand-in for the hub HTTP API.

use axum::{
    extract::Path,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tempfile::TempDir;

use modelfetch_core::{FetchService, HubClient, HubConfig, HubError, ListingService};

const MODEL_BYTES: usize = 4096;
const TOKEN: &str = "hf_test_token";

async fn model_info(Path((owner, name)): Path<(String, String)>) -> Response {
    if name == "missing" {
        return StatusCode::NOT_FOUND.into_response();
    }
    Json(json!({
        "id": format!("{}/{}", owner, name),
        "siblings": [
            {"rfilename": ".gitattributes"},
            {"rfilename": "model-Q2_K.gguf"},
            {"rfilename": "README.md"},
            {"rfilename": "model-Q4_K_M.GGUF"}
        ]
    }))
    .into_response()
}

async fn resolve(
    Path((_owner, name, revision, file)): Path<(String, String, String, String)>,
    headers: HeaderMap,
) -> Response {
    if name == "broken" {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    if name == "gated" {
        let expected = format!("Bearer {}", TOKEN);
        let authorized = headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == expected);
        if !authorized {
            return StatusCode::UNAUTHORIZED.into_response();
        }
    }
    if revision != "main" || file == "missing.gguf" {
        return StatusCode::NOT_FOUND.into_response();
    }
    vec![7u8; MODEL_BYTES].into_response()
}

/// Start the stand-in hub and return its base URL.
async fn spawn_hub() -> String {
    let app = Router::new()
        .route("/api/models/{owner}/{name}", get(model_info))
        .route("/{owner}/{name}/resolve/{revision}/{*file}", get(resolve));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn client(endpoint: &str, token: Option<&str>) -> HubClient {
    HubClient::new(HubConfig {
        endpoint: endpoint.to_string(),
        token: token.map(str::to_string),
        timeout: 5,
        ..Default::default()
    })
    .unwrap()
}

#[tokio::test]
async fn test_fetch_writes_file() {
    let endpoint = spawn_hub().await;
    let temp = TempDir::new().unwrap();
    let hub = client(&endpoint, None);

    let path = hub
        .fetch("owner/repo", "model-Q2_K.gguf", temp.path())
        .await
        .unwrap();

    assert_eq!(path, temp.path().join("model-Q2_K.gguf"));
    assert_eq!(std::fs::metadata(&path).unwrap().len(), MODEL_BYTES as u64);
    assert!(!temp.path().join("model-Q2_K.gguf.incomplete").exists());
}

#[tokio::test]
async fn test_fetch_nested_filename_creates_parent() {
    let endpoint = spawn_hub().await;
    let temp = TempDir::new().unwrap();
    let hub = client(&endpoint, None);

    let path = hub
        .fetch("owner/repo", "quant/model.gguf", temp.path())
        .await
        .unwrap();

    assert_eq!(path, temp.path().join("quant/model.gguf"));
    assert!(path.is_file());
}

#[tokio::test]
async fn test_fetch_not_found_leaves_no_file() {
    let endpoint = spawn_hub().await;
    let temp = TempDir::new().unwrap();
    let hub = client(&endpoint, None);

    let result = hub.fetch("owner/repo", "missing.gguf", temp.path()).await;

    assert!(matches!(result, Err(HubError::NotFound(_))));
    assert!(!temp.path().join("missing.gguf").exists());
    assert!(!temp.path().join("missing.gguf.incomplete").exists());
}

#[tokio::test]
async fn test_fetch_failed_rename_removes_partial_file() {
    let endpoint = spawn_hub().await;
    let temp = TempDir::new().unwrap();
    std::fs::create_dir_all(temp.path().join("model.gguf/inner")).unwrap();
    let hub = client(&endpoint, None);

    let result = hub.fetch("owner/repo", "model.gguf", temp.path()).await;

    assert!(matches!(result, Err(HubError::Io(_))));
    assert!(!temp.path().join("model.gguf.incomplete").exists());
    assert!(temp.path().join("model.gguf/inner").is_dir());
}

#[tokio::test]
async fn test_fetch_server_error() {
    let endpoint = spawn_hub().await;
    let temp = TempDir::new().unwrap();
    let hub = client(&endpoint, None);

    let result = hub.fetch("owner/broken", "model.gguf", temp.path()).await;

    assert!(matches!(
        result,
        Err(HubError::HttpStatus { status: 500, .. })
    ));
}

#[tokio::test]
async fn test_fetch_sends_bearer_token() {
    let endpoint = spawn_hub().await;
    let temp = TempDir::new().unwrap();

    let anonymous = client(&endpoint, None);
    let denied = anonymous.fetch("owner/gated", "model.gguf", temp.path()).await;
    assert!(matches!(denied, Err(HubError::HttpStatus { status: 401, .. })));

    let authorized = client(&endpoint, Some(TOKEN));
    let path = authorized
        .fetch("owner/gated", "model.gguf", temp.path())
        .await
        .unwrap();
    assert!(path.is_file());
}

#[tokio::test]
async fn test_fetch_connection_refused() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let temp = TempDir::new().unwrap();
    let hub = client(&format!("http://127.0.0.1:{}", port), None);
    let result = hub.fetch("owner/repo", "model.gguf", temp.path()).await;

    assert!(matches!(result, Err(HubError::ConnectionFailed(_))));
}

#[tokio::test]
async fn test_list_files_returns_siblings_in_order() {
    let endpoint = spawn_hub().await;
    let hub = client(&endpoint, None);

    let files = hub.list_files("owner/repo").await.unwrap();

    assert_eq!(
        files,
        vec![
            ".gitattributes",
            "model-Q2_K.gguf",
            "README.md",
            "model-Q4_K_M.GGUF"
        ]
    );
}

#[tokio::test]
async fn test_list_files_missing_repository() {
    let endpoint = spawn_hub().await;
    let hub = client(&endpoint, None);

    let result = hub.list_files("owner/missing").await;

    assert!(matches!(result, Err(HubError::NotFound(ref s)) if s == "owner/missing"));
}
