//! ワークフロー状態機械
//!
//! モード選択 → ファイル選択 → 抽出中 → 結果表示 の4フェーズ。
//! UIイベントは `Event` に変換し、純粋関数 `WorkflowState::transition` で
//! 次の状態を得る。拒否されたイベントはエラーを返し、呼び出し側は元の状態を保持する。

use serde_json::Value;

use crate::error::{Error, Result, ValidationError};
use crate::types::{ExtractionResult, FileSlots, Mode, SlotKey, StagedImage, ViewMode};

/// ワークフローのフェーズ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    ModeSelection,
    Staging,
    Extracting,
    ResultsDisplay,
}

/// ユーザー操作・非同期処理の完了を表すイベント
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    SelectMode(Mode),
    /// `None` はファイル選択の取り消し
    SelectFile(SlotKey, Option<StagedImage>),
    StartExtraction,
    RoundCompleted(Vec<ExtractionResult>),
    ToggleView,
    Reset,
}

/// エラー報告用のイベント種別（ペイロードなし）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    SelectMode,
    SelectFile,
    StartExtraction,
    RoundCompleted,
    ToggleView,
    Reset,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::SelectMode(_) => EventKind::SelectMode,
            Event::SelectFile(..) => EventKind::SelectFile,
            Event::StartExtraction => EventKind::StartExtraction,
            Event::RoundCompleted(_) => EventKind::RoundCompleted,
            Event::ToggleView => EventKind::ToggleView,
            Event::Reset => EventKind::Reset,
        }
    }
}

/// 結果パネルに表示する1枚分のカード
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultCard<'a> {
    pub slot: SlotKey,
    pub image: &'a StagedImage,
    pub payload: &'a Value,
}

/// ワークフロー全体の状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkflowState {
    phase: Phase,
    mode: Option<Mode>,
    slots: FileSlots,
    results: Vec<ExtractionResult>,
    view_mode: ViewMode,
}

impl WorkflowState {
    pub fn new() -> Self {
        Self::default()
    }

    /// イベントを適用した次の状態を返す
    pub fn transition(&self, event: Event) -> Result<Self> {
        let kind = event.kind();

        match (self.phase, event) {
            (Phase::ModeSelection, Event::SelectMode(mode)) => Ok(Self {
                phase: Phase::Staging,
                mode: Some(mode),
                ..Self::default()
            }),

            (Phase::Staging, Event::SelectFile(slot, image)) => {
                if !self.mode.is_some_and(|mode| mode.uses(slot)) {
                    return Err(Error::SlotInactive(slot));
                }
                let mut next = self.clone();
                next.slots.set(slot, image);
                Ok(next)
            }

            (Phase::Staging, Event::StartExtraction) => {
                self.check_ready()?;
                let mut next = self.clone();
                next.phase = Phase::Extracting;
                next.results.clear();
                Ok(next)
            }

            (Phase::Extracting, Event::RoundCompleted(mut results)) => {
                // 完了順ではなくスロット順に並べる
                results.sort_by_key(|r| r.slot);
                let mut next = self.clone();
                next.phase = Phase::ResultsDisplay;
                next.results = results;
                Ok(next)
            }

            (Phase::ResultsDisplay, Event::ToggleView) if self.tree_toggle_available() => {
                let mut next = self.clone();
                next.view_mode = self.view_mode.toggled();
                Ok(next)
            }

            (Phase::ResultsDisplay, Event::Reset) => Ok(Self::default()),

            (phase, _) => Err(Error::InvalidTransition { phase, event: kind }),
        }
    }

    /// 抽出開始ガード
    pub fn check_ready(&self) -> std::result::Result<(), ValidationError> {
        match self.mode {
            Some(Mode::Compare) => {
                if self.slots.is_populated(SlotKey::Image1) && self.slots.is_populated(SlotKey::Image2) {
                    Ok(())
                } else {
                    Err(ValidationError::MissingImages)
                }
            }
            Some(Mode::Single) | None => {
                if self.slots.is_populated(SlotKey::Image1) {
                    Ok(())
                } else {
                    Err(ValidationError::MissingImage)
                }
            }
        }
    }

    /// 抽出ボタンの有効/無効判定
    pub fn can_start_extraction(&self) -> bool {
        self.phase == Phase::Staging && self.check_ready().is_ok()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    pub fn slots(&self) -> &FileSlots {
        &self.slots
    }

    pub fn results(&self) -> &[ExtractionResult] {
        &self.results
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Extracting
    }

    /// 表示対象の結果（ペイロードがあり、スロットが選択済みのもの）
    pub fn displayable_results(&self) -> Vec<ResultCard<'_>> {
        self.results
            .iter()
            .filter_map(|result| {
                let payload = result.payload.as_ref()?;
                let image = self.slots.get(result.slot)?;
                Some(ResultCard {
                    slot: result.slot,
                    image,
                    payload,
                })
            })
            .collect()
    }

    /// ツリー表示切替は1枚モードかつ表示結果1件のときのみ
    pub fn tree_toggle_available(&self) -> bool {
        self.phase == Phase::ResultsDisplay
            && self.mode == Some(Mode::Single)
            && self.displayable_results().len() == 1
    }

    /// 実際に使う表示形式（切替不可のときは常にFormatted）
    pub fn effective_view_mode(&self) -> ViewMode {
        if self.tree_toggle_available() {
            self.view_mode
        } else {
            ViewMode::Formatted
        }
    }
}
