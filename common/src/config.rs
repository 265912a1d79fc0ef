//! 抽出サービスの接続設定
//!
//! 永続化はしない。Webではホストページに埋め込んだJSONから、
//! ネイティブでは呼び出し側から渡される。

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// 既定のアップロード先
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/upload/";

/// multipartフォームのフィールド名
pub const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceConfig {
    pub endpoint: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl ServiceConfig {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let config = Self {
            endpoint: endpoint.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// JSON文字列から読み込み（欠けたフィールドは既定値）
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ServiceConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(Error::Config("endpoint is empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        assert_eq!(ServiceConfig::default().endpoint, "http://localhost:8000/upload/");
    }

    #[test]
    fn test_from_json() {
        let config = ServiceConfig::from_json(r#"{"endpoint": "https://c2pa.example/upload"}"#).unwrap();
        assert_eq!(config.endpoint, "https://c2pa.example/upload");
    }

    #[test]
    fn test_from_json_missing_field_uses_default() {
        let config = ServiceConfig::from_json("{}").unwrap();
        assert_eq!(config, ServiceConfig::default());
    }

    #[test]
    fn test_from_json_empty_endpoint() {
        let result = ServiceConfig::from_json(r#"{"endpoint": "  "}"#);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_from_json_invalid() {
        let result = ServiceConfig::from_json("not json");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(ServiceConfig::new("").is_err());
        assert!(ServiceConfig::new("http://127.0.0.1:9000/upload/").is_ok());
    }
}
