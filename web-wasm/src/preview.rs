//! ステージ済み画像のプレビュー用Data URL

use base64::{engine::general_purpose::STANDARD, Engine as _};
use c2pa_inspect_common::StagedImage;

/// "data:image/png;base64,..." 形式に変換
pub fn to_data_url(image: &StagedImage) -> String {
    format!("data:{};base64,{}", image.mime_type(), STANDARD.encode(image.bytes()))
}
