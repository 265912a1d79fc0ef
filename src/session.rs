//! ネイティブ用のワークフロー駆動
//!
//! 状態機械・抽出ラウンド・表示を組み合わせる（Web版 `App` と同じ流れ）

use std::path::Path;

use c2pa_inspect_common::{
    render_formatted, render_text, render_tree, run_round, tree::DEFAULT_INDENT, Event,
    ExtractionService, Mode, SlotKey, ViewMode, WorkflowState,
};
use tracing::debug;

use crate::error::Result;
use crate::staging::load_image;

/// 結果カード1枚分の表示内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCard {
    pub slot: SlotKey,
    pub title: String,
    pub body: String,
}

pub struct Inspector<S> {
    service: S,
    state: WorkflowState,
}

impl<S: ExtractionService> Inspector<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: WorkflowState::new(),
        }
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    /// イベントを適用（拒否時は状態を変えない）
    pub fn dispatch(&mut self, event: Event) -> Result<()> {
        self.state = self.state.transition(event)?;
        Ok(())
    }

    pub fn select_mode(&mut self, mode: Mode) -> Result<()> {
        self.dispatch(Event::SelectMode(mode))
    }

    /// ディスク上の画像をスロットに載せる
    pub fn stage(&mut self, slot: SlotKey, path: &Path) -> Result<()> {
        let image = load_image(path)?;
        self.dispatch(Event::SelectFile(slot, Some(image)))
    }

    /// 抽出ラウンドを実行し、結果表示へ進める
    ///
    /// 状態はラウンド完了時にまとめて更新する。途中で future を破棄しても
    /// ファイル選択の状態のまま残り、そのまま再実行できる。
    pub async fn extract(&mut self) -> Result<&WorkflowState> {
        let extracting = self.state.transition(Event::StartExtraction)?;

        let results = run_round(&self.service, extracting.slots(), |done, total| {
            debug!(done, total, "slot settled");
        })
        .await;

        self.state = extracting.transition(Event::RoundCompleted(results))?;
        Ok(&self.state)
    }

    pub fn toggle_view(&mut self) -> Result<()> {
        self.dispatch(Event::ToggleView)
    }

    pub fn reset(&mut self) -> Result<()> {
        self.dispatch(Event::Reset)
    }

    /// 表示対象の結果をテキスト化（表示形式は現在のViewModeに従う）
    pub fn render_results(&self) -> Vec<RenderedCard> {
        let view_mode = self.state.effective_view_mode();
        self.state
            .displayable_results()
            .into_iter()
            .map(|card| RenderedCard {
                slot: card.slot,
                title: card.image.file_name().to_string(),
                body: match view_mode {
                    ViewMode::Formatted => render_formatted(card.payload),
                    ViewMode::Tree => render_text(&render_tree(card.payload, 0), DEFAULT_INDENT),
                },
            })
            .collect()
    }
}
