//! C2PA Inspect Common Library
//!
//! Web(WASM)とネイティブで共有されるワークフロー・抽出ラウンド・表示ロジック

pub mod config;
pub mod error;
pub mod orchestrator;
pub mod tree;
pub mod types;
pub mod workflow;

pub use config::{ServiceConfig, DEFAULT_ENDPOINT, UPLOAD_FIELD};
pub use error::{Error, Result, ValidationError};
pub use orchestrator::{run_round, ExtractError, ExtractionService};
pub use tree::{render_formatted, render_text, render_tree, TreeContent, TreeLine};
pub use types::{ExtractionResult, FileSlots, Mode, SlotKey, StagedImage, ViewMode};
pub use workflow::{Event, EventKind, Phase, ResultCard, WorkflowState};
