//! JSONツリー表示コンポーネント

use c2pa_inspect_common::{render_tree, TreeContent};
use leptos::prelude::*;
use serde_json::Value;

/// 1階層あたりの左マージン
const INDENT_PX: usize = 15;

#[component]
pub fn TreeView(value: Value) -> impl IntoView {
    let lines = render_tree(&value, 0);

    view! {
        <div class="tree-view">
            {lines
                .into_iter()
                .map(|line| {
                    let style = indent_style(line.depth);
                    match line.content {
                        TreeContent::Scalar(text) => view! { <div style=style>{text}</div> }.into_any(),
                        TreeContent::Entry { key, inline } => view! {
                            <div style=style>
                                <strong>{key}":"</strong>
                                {inline.map(|text| view! { <span>" "{text}</span> })}
                            </div>
                        }
                        .into_any(),
                        TreeContent::Truncated => view! {
                            <div style=style class="text-muted">"…"</div>
                        }
                        .into_any(),
                    }
                })
                .collect_view()}
        </div>
    }
}

fn indent_style(depth: usize) -> String {
    format!("margin-left: {}px", depth * INDENT_PX)
}
