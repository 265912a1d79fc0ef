//! アップロード・抽出ラウンドの実行
//!
//! 選択済みスロットごとに1リクエストを同時発行し、全件の完了を待つ（fan-out/fan-in）。
//! スロット単位の失敗はそのスロットの境界で捕捉し、結果なしとして記録する。
//! リトライ・タイムアウト・キャンセルは行わない。

use std::cell::Cell;
use std::future::Future;

use futures::future::join_all;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::types::{ExtractionResult, FileSlots, StagedImage};

/// スロット単位の抽出失敗
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("service responded with status {0}")]
    Status(u16),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// リモート抽出サービス
///
/// ブラウザ（fetch）・ネイティブ（reqwest）・テスト用モックがこれを実装する
pub trait ExtractionService {
    /// 1枚の画像を送信し、返却されたJSONをそのまま返す
    fn extract(&self, image: &StagedImage) -> impl Future<Output = Result<Value, ExtractError>>;
}

/// 1ラウンド実行
///
/// # Arguments
/// * `service` - 抽出サービス
/// * `slots` - ステージ済みファイル（空スロットは送信しない）
/// * `on_settled` - 進捗コールバック (完了数, 総数)
///
/// # Returns
/// 送信したスロットごとの結果（スロット順）
pub async fn run_round<S, F>(service: &S, slots: &FileSlots, on_settled: F) -> Vec<ExtractionResult>
where
    S: ExtractionService,
    F: Fn(usize, usize),
{
    let pending: Vec<_> = slots.populated().collect();
    let total = pending.len();
    let settled = Cell::new(0usize);

    debug!(total, "extraction round started");

    let requests = pending.into_iter().map(|(slot, image)| {
        let settled = &settled;
        let on_settled = &on_settled;
        async move {
            let outcome = service.extract(image).await;

            settled.set(settled.get() + 1);
            on_settled(settled.get(), total);

            match outcome {
                Ok(payload) => ExtractionResult::success(slot, payload),
                Err(e) => {
                    warn!(slot = %slot, file = image.file_name(), error = %e, "extraction failed");
                    ExtractionResult::absent(slot)
                }
            }
        }
    });

    // join_all は入力順で返す（完了順ではない）
    let results = join_all(requests).await;

    debug!(
        total,
        failed = results.iter().filter(|r| r.is_absent()).count(),
        "extraction round finished"
    );

    results
}
