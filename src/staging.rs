//! ディスク上の画像をスロットに載せる形へ読み込む

use std::path::Path;

use c2pa_inspect_common::{Error as CommonError, StagedImage};
use image::ImageFormat;

use crate::error::{InspectError, Result};

/// 拡張子から判定できないときのMIMEタイプ
const UNKNOWN_MIME: &str = "application/octet-stream";

/// 画像ファイルを読み込む
///
/// MIMEタイプは拡張子から判定する（中身の検証はしない）。
/// 画像として認識できない拡張子は `NotAnImage`。
pub fn load_image(path: &Path) -> Result<StagedImage> {
    if !path.is_file() {
        return Err(InspectError::FileNotFound(path.display().to_string()));
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let Some(mime_type) = mime_type_for(path) else {
        return Err(CommonError::NotAnImage {
            file_name,
            mime_type: UNKNOWN_MIME.to_string(),
        }
        .into());
    };

    let bytes = std::fs::read(path)?;
    Ok(StagedImage::new(file_name, mime_type, bytes)?)
}

/// 拡張子からMIMEタイプを取得
pub fn mime_type_for(path: &Path) -> Option<&'static str> {
    ImageFormat::from_path(path).ok().map(|f| f.to_mime_type())
}
