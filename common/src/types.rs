//! 共通データ型
//!
//! モード・スロット・ステージ済み画像・抽出結果

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// 検証モード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// 1枚の画像を検証
    Single,
    /// 2枚の画像を比較
    Compare,
}

impl Mode {
    /// このモードで使用するスロット（列挙順）
    pub fn active_slots(&self) -> &'static [SlotKey] {
        match self {
            Mode::Single => &[SlotKey::Image1],
            Mode::Compare => &SlotKey::ALL,
        }
    }

    pub fn uses(&self, slot: SlotKey) -> bool {
        self.active_slots().contains(&slot)
    }

    /// `<select>` の値との相互変換
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Single => "1",
            Mode::Compare => "2",
        }
    }

    pub fn from_choice(value: &str) -> Option<Self> {
        match value {
            "1" => Some(Mode::Single),
            "2" => Some(Mode::Compare),
            _ => None,
        }
    }
}

/// ファイル入力スロットのキー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKey {
    Image1,
    Image2,
}

impl SlotKey {
    /// 列挙順（結果の並び順もこれに従う）
    pub const ALL: [SlotKey; 2] = [SlotKey::Image1, SlotKey::Image2];

    pub fn as_str(&self) -> &'static str {
        match self {
            SlotKey::Image1 => "image1",
            SlotKey::Image2 => "image2",
        }
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ユーザーが選択した画像ファイル
///
/// バイト列は `Arc` で共有するため、状態のクローンは安価
#[derive(Clone, PartialEq, Eq)]
pub struct StagedImage {
    file_name: String,
    mime_type: String,
    bytes: Arc<[u8]>,
}

impl StagedImage {
    /// MIMEタイプが `image/*` でなければ `Error::NotAnImage`
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: impl Into<Arc<[u8]>>,
    ) -> Result<Self> {
        let file_name = file_name.into();
        let mime_type = mime_type.into();

        if !is_image_mime(&mime_type) {
            return Err(Error::NotAnImage { file_name, mime_type });
        }

        Ok(Self {
            file_name,
            mime_type,
            bytes: bytes.into(),
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for StagedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StagedImage")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

fn is_image_mime(mime_type: &str) -> bool {
    mime_type
        .split_once('/')
        .map(|(top, sub)| top.eq_ignore_ascii_case("image") && !sub.is_empty())
        .unwrap_or(false)
}

/// スロットごとのステージ済みファイル（各スロット最大1件）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSlots {
    image1: Option<StagedImage>,
    image2: Option<StagedImage>,
}

impl FileSlots {
    pub fn get(&self, slot: SlotKey) -> Option<&StagedImage> {
        match slot {
            SlotKey::Image1 => self.image1.as_ref(),
            SlotKey::Image2 => self.image2.as_ref(),
        }
    }

    pub fn set(&mut self, slot: SlotKey, image: Option<StagedImage>) {
        match slot {
            SlotKey::Image1 => self.image1 = image,
            SlotKey::Image2 => self.image2 = image,
        }
    }

    pub fn is_populated(&self, slot: SlotKey) -> bool {
        self.get(slot).is_some()
    }

    /// 選択済みのスロットのみ（列挙順）
    pub fn populated(&self) -> impl Iterator<Item = (SlotKey, &StagedImage)> + '_ {
        SlotKey::ALL
            .into_iter()
            .filter_map(move |slot| self.get(slot).map(|image| (slot, image)))
    }

    pub fn is_empty(&self) -> bool {
        self.image1.is_none() && self.image2.is_none()
    }

    pub fn clear(&mut self) {
        self.image1 = None;
        self.image2 = None;
    }
}

/// 1スロット分の抽出結果（失敗時は `payload` が `None`）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub slot: SlotKey,
    pub payload: Option<Value>,
}

impl ExtractionResult {
    pub fn success(slot: SlotKey, payload: Value) -> Self {
        Self { slot, payload: Some(payload) }
    }

    pub fn absent(slot: SlotKey) -> Self {
        Self { slot, payload: None }
    }

    pub fn is_absent(&self) -> bool {
        self.payload.is_none()
    }
}

/// 結果の表示形式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Formatted,
    Tree,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Formatted => ViewMode::Tree,
            ViewMode::Tree => ViewMode::Formatted,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Formatted => "formatted",
            ViewMode::Tree => "tree",
        }
    }
}
