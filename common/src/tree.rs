//! JSONのツリー表示・整形表示
//!
//! 任意のJSON値を入れ子の行リストに変換する。
//! 再帰ではなく明示的なスタックで走査し、深さの上限を設ける
//! （抽出サービスのレスポンスは信頼できないため）。

use serde_json::{map, Value};

/// 開始深さから数えた最大ネスト数
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// テキスト出力時の1階層あたりのインデント幅
pub const DEFAULT_INDENT: usize = 2;

/// ツリーの1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    pub depth: usize,
    pub content: TreeContent,
}

/// 行の内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeContent {
    /// オブジェクト以外の値そのもの
    Scalar(String),
    /// キー。値がオブジェクトなら `inline` は `None` で、子が depth+1 に続く
    Entry { key: String, inline: Option<String> },
    /// 深さ上限で打ち切った
    Truncated,
}

/// ツリー行リストを生成（深さ上限は `DEFAULT_MAX_DEPTH`）
pub fn render_tree(value: &Value, depth: usize) -> Vec<TreeLine> {
    render_tree_with_limit(value, depth, DEFAULT_MAX_DEPTH)
}

/// ツリー行リストを生成
///
/// # Arguments
/// * `value` - 任意のJSON値
/// * `depth` - 開始深さ
/// * `max_depth` - 開始深さから数えた最大ネスト数
pub fn render_tree_with_limit(value: &Value, depth: usize, max_depth: usize) -> Vec<TreeLine> {
    let Value::Object(root) = value else {
        return vec![TreeLine {
            depth,
            content: TreeContent::Scalar(scalar_text(value)),
        }];
    };

    struct Frame<'a> {
        entries: map::Iter<'a>,
        depth: usize,
    }

    let limit = depth.saturating_add(max_depth);
    let mut lines = Vec::new();
    let mut stack = vec![Frame {
        entries: root.iter(),
        depth,
    }];

    while let Some(frame) = stack.last_mut() {
        let current = frame.depth;
        let Some((key, value)) = frame.entries.next() else {
            stack.pop();
            continue;
        };

        match value {
            Value::Object(child) => {
                lines.push(TreeLine {
                    depth: current,
                    content: TreeContent::Entry {
                        key: key.clone(),
                        inline: None,
                    },
                });
                let next = current.saturating_add(1);
                if next >= limit {
                    lines.push(TreeLine {
                        depth: next,
                        content: TreeContent::Truncated,
                    });
                } else {
                    stack.push(Frame {
                        entries: child.iter(),
                        depth: next,
                    });
                }
            }
            other => lines.push(TreeLine {
                depth: current,
                content: TreeContent::Entry {
                    key: key.clone(),
                    inline: Some(scalar_text(other)),
                },
            }),
        }
    }

    lines
}

/// オブジェクト以外の値の表示文字列
///
/// 文字列は引用符なし、配列はコンパクトなJSON
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// 行リストをインデント付きテキストに変換
pub fn render_text(lines: &[TreeLine], indent: usize) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(&" ".repeat(line.depth * indent));
        match &line.content {
            TreeContent::Scalar(text) => out.push_str(text),
            TreeContent::Entry { key, inline: Some(text) } => {
                out.push_str(key);
                out.push_str(": ");
                out.push_str(text);
            }
            TreeContent::Entry { key, inline: None } => {
                out.push_str(key);
                out.push(':');
            }
            TreeContent::Truncated => out.push('…'),
        }
        out.push('\n');
    }
    out
}

/// 整形表示（2スペースインデントのJSON）
pub fn render_formatted(value: &Value) -> String {
    // Value のシリアライズは失敗しない
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
