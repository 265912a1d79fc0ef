use thiserror::Error;

#[derive(Error, Debug)]
pub enum InspectError {
    #[error(transparent)]
    Common(#[from] c2pa_inspect_common::Error),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTPクライアントエラー: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, InspectError>;
