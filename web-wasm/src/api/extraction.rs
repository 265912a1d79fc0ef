//! 抽出サービス連携（fetch + FormData）
//!
//! `file` フィールド1つのmultipartフォームをPOSTする。
//! Content-Type はブラウザが boundary 付きで設定するので指定しない。

use c2pa_inspect_common::{ExtractError, ExtractionService, ServiceConfig, StagedImage, UPLOAD_FIELD};
use gloo::console;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Request, RequestInit, RequestMode, Response};

/// ブラウザ版の抽出サービス
#[derive(Clone)]
pub struct FetchExtractor {
    config: ServiceConfig,
}

impl FetchExtractor {
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    async fn upload(&self, image: &StagedImage) -> Result<Value, ExtractError> {
        let (status, body) = post_image(&self.config.endpoint, image)
            .await
            .map_err(|e| ExtractError::Transport(format!("{:?}", e)))?;
        parse_payload(status, &body)
    }
}

impl ExtractionService for FetchExtractor {
    async fn extract(&self, image: &StagedImage) -> Result<Value, ExtractError> {
        let result = self.upload(image).await;
        if let Err(e) = &result {
            console::error!(format!("Error uploading file {}: {}", image.file_name(), e));
        }
        result
    }
}

/// 画像をPOSTし、(ステータス, 本文) を返す
async fn post_image(endpoint: &str, image: &StagedImage) -> Result<(u16, String), JsValue> {
    let bytes = js_sys::Uint8Array::from(image.bytes());
    let parts = js_sys::Array::of1(&bytes);
    let blob_options = BlobPropertyBag::new();
    blob_options.set_type(image.mime_type());
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &blob_options)?;

    let form = FormData::new()?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, &blob, image.file_name())?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(endpoint, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let status = resp.status();
    let body = JsFuture::from(resp.text()?).await?;

    Ok((status, body.as_string().unwrap_or_default()))
}

/// レスポンスを解釈（非2xx・JSON以外は失敗）
///
/// キー順序を保つため、JS側でパースせず本文をそのまま serde_json で読む
pub fn parse_payload(status: u16, body: &str) -> Result<Value, ExtractError> {
    if !(200..300).contains(&status) {
        return Err(ExtractError::Status(status));
    }
    serde_json::from_str(body).map_err(|e| ExtractError::InvalidResponse(e.to_string()))
}
