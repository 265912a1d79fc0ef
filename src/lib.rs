//! C2PA Inspect（ネイティブ）
//!
//! reqwest による抽出サービスクライアントと、ディスク上の画像を使うワークフロー駆動

pub mod client;
pub mod error;
pub mod session;
pub mod staging;

pub use client::HttpExtractor;
pub use error::{InspectError, Result};
pub use session::{Inspector, RenderedCard};
pub use staging::load_image;
