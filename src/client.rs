//! 抽出サービスのHTTPクライアント（reqwest）
//!
//! `file` フィールド1つのmultipartフォームをPOSTし、JSONレスポンスを返す

use c2pa_inspect_common::{ExtractError, ExtractionService, ServiceConfig, StagedImage, UPLOAD_FIELD};
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tracing::debug;

use crate::error::Result;

pub struct HttpExtractor {
    client: reqwest::Client,
    config: ServiceConfig,
}

impl HttpExtractor {
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("c2pa-inspect/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: reqwest::Client, config: ServiceConfig) -> Self {
        Self { client, config }
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

impl ExtractionService for HttpExtractor {
    async fn extract(&self, image: &StagedImage) -> std::result::Result<Value, ExtractError> {
        let part = Part::bytes(image.bytes().to_vec())
            .file_name(image.file_name().to_string())
            .mime_str(image.mime_type())
            .map_err(|e| ExtractError::Transport(e.to_string()))?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        debug!(endpoint = %self.config.endpoint, file = image.file_name(), "uploading");

        let response = self
            .client
            .post(&self.config.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ExtractError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::Status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ExtractError::InvalidResponse(e.to_string()))
    }
}
