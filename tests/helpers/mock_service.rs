//! テスト用の抽出サービス（axum）
//!
//! `POST /upload/` で multipart の `file` フィールドを受け取り、
//! ファイル名に応じてJSON・エラー・不正レスポンスを返す。
//!
//! - `error*`   → 500
//! - `garbage*` → 200 だがJSONでない本文
//! - それ以外   → `{"title": <拡張子を除いたファイル名>}`

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;
use tokio::task::JoinHandle;

/// 受信したmultipartフィールド
#[derive(Debug, Clone)]
pub struct ReceivedField {
    pub name: String,
    pub file_name: String,
    pub content_type: String,
    pub len: usize,
    pub user_agent: String,
}

type Received = Arc<Mutex<Vec<ReceivedField>>>;

pub struct MockService {
    addr: SocketAddr,
    received: Received,
    handle: JoinHandle<()>,
}

impl MockService {
    /// 空きポートで起動
    pub async fn start() -> Self {
        let received: Received = Arc::new(Mutex::new(Vec::new()));

        let app = Router::new()
            .route("/upload/", post(upload))
            .with_state(Arc::clone(&received));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock service");
        let addr = listener.local_addr().expect("Failed to read local addr");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock service failed");
        });

        Self {
            addr,
            received,
            handle,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}/upload/", self.addr)
    }

    pub fn received(&self) -> Vec<ReceivedField> {
        self.received.lock().expect("lock poisoned").clone()
    }
}

impl Drop for MockService {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn upload(
    State(received): State<Received>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let mut uploaded = None;

    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field.bytes().await.unwrap_or_default();

        received.lock().expect("lock poisoned").push(ReceivedField {
            name: name.clone(),
            file_name: file_name.clone(),
            content_type,
            len: bytes.len(),
            user_agent: user_agent.clone(),
        });

        if name == "file" {
            uploaded = Some(file_name);
        }
    }

    let Some(file_name) = uploaded else {
        return (StatusCode::BAD_REQUEST, "missing file field").into_response();
    };

    if file_name.starts_with("error") {
        return (StatusCode::INTERNAL_SERVER_ERROR, "extraction failed").into_response();
    }
    if file_name.starts_with("garbage") {
        return (StatusCode::OK, "not json").into_response();
    }

    let title = file_name
        .rsplit_once('.')
        .map(|(stem, _)| stem.to_string())
        .unwrap_or(file_name);
    Json(json!({ "title": title })).into_response()
}
