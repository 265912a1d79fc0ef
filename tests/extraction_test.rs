//! HTTP抽出クライアントのテスト
//!
//! ローカルのモック抽出サービスに対して実際に multipart でアップロードする

mod helpers;

use c2pa_inspect::HttpExtractor;
use c2pa_inspect_common::{
    run_round, ExtractError, ExtractionResult, ExtractionService, FileSlots, ServiceConfig,
    SlotKey, StagedImage,
};
use helpers::mock_service::MockService;
use serde_json::json;

fn image(name: &str) -> StagedImage {
    StagedImage::new(name, "image/png", vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A])
        .expect("Failed to stage image")
}

fn extractor(endpoint: String) -> HttpExtractor {
    let config = ServiceConfig::new(endpoint).expect("invalid config");
    HttpExtractor::new(config).expect("Failed to build client")
}

/// `file` フィールドで画像を送信し、JSONを受け取る
#[tokio::test]
async fn test_extract_posts_multipart_file_field() {
    let service = MockService::start().await;
    let client = extractor(service.endpoint());

    let payload = client.extract(&image("x.png")).await.expect("extraction failed");
    assert_eq!(payload, json!({"title": "x"}));

    let received = service.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].name, "file");
    assert_eq!(received[0].file_name, "x.png");
    assert_eq!(received[0].content_type, "image/png");
    assert_eq!(received[0].len, 6);
}

/// 既定のクライアントはクレート名入りの User-Agent を送る
#[tokio::test]
async fn test_default_client_user_agent() {
    let service = MockService::start().await;
    let client = extractor(service.endpoint());
    assert_eq!(client.endpoint(), service.endpoint());

    client.extract(&image("x.png")).await.expect("extraction failed");

    let received = service.received();
    assert!(received[0].user_agent.starts_with("c2pa-inspect/"));
}

/// 呼び出し側が用意した reqwest::Client をそのまま使う
#[tokio::test]
async fn test_with_client_uses_given_client() {
    let service = MockService::start().await;
    let config = ServiceConfig::new(service.endpoint()).expect("invalid config");
    let client = reqwest::Client::builder()
        .user_agent("inspect-test/1.0")
        .build()
        .expect("Failed to build client");
    let extractor = HttpExtractor::with_client(client, config);
    assert_eq!(extractor.endpoint(), service.endpoint());

    let payload = extractor.extract(&image("y.png")).await.expect("extraction failed");
    assert_eq!(payload, json!({"title": "y"}));
    assert_eq!(service.received()[0].user_agent, "inspect-test/1.0");
}

/// 非2xxはステータスエラー
#[tokio::test]
async fn test_extract_server_error_status() {
    let service = MockService::start().await;
    let client = extractor(service.endpoint());

    let err = client.extract(&image("error.png")).await.unwrap_err();
    assert_eq!(err, ExtractError::Status(500));
}

/// JSONでない本文は不正レスポンス
#[tokio::test]
async fn test_extract_non_json_body() {
    let service = MockService::start().await;
    let client = extractor(service.endpoint());

    let err = client.extract(&image("garbage.png")).await.unwrap_err();
    assert!(matches!(err, ExtractError::InvalidResponse(_)));
}

/// 接続できない場合は通信エラー
#[tokio::test]
async fn test_extract_connection_refused() {
    let client = extractor("http://127.0.0.1:1/upload/".to_string());

    let err = client.extract(&image("x.png")).await.unwrap_err();
    assert!(matches!(err, ExtractError::Transport(_)));
}

/// 片方が失敗してもラウンドは完了し、もう片方の結果は残る
#[tokio::test]
async fn test_round_partial_failure_over_http() {
    let service = MockService::start().await;
    let client = extractor(service.endpoint());

    let mut slots = FileSlots::default();
    slots.set(SlotKey::Image1, Some(image("error.png")));
    slots.set(SlotKey::Image2, Some(image("y.png")));

    let results = run_round(&client, &slots, |_, _| {}).await;

    assert_eq!(
        results,
        vec![
            ExtractionResult::absent(SlotKey::Image1),
            ExtractionResult::success(SlotKey::Image2, json!({"title": "y"})),
        ]
    );
    // 1スロット1リクエスト、リトライなし
    assert_eq!(service.received().len(), 2);
}
