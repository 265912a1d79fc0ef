//! 結果パネルコンポーネント

use c2pa_inspect_common::{render_formatted, SlotKey, ViewMode, WorkflowState};
use leptos::prelude::*;
use serde_json::Value;

use crate::components::tree_view::TreeView;
use crate::preview::to_data_url;

/// カード1枚分の表示データ
#[derive(Clone, PartialEq)]
pub struct CardView {
    pub slot: SlotKey,
    pub title: String,
    pub preview: String,
    pub payload: Value,
}

#[component]
pub fn ResultsPanel<FT, FR>(
    state: ReadSignal<WorkflowState>,
    on_toggle: FT,
    on_reset: FR,
) -> impl IntoView
where
    FT: Fn(()) + 'static + Clone + Send + Sync,
    FR: Fn(()) + 'static + Clone + Send + Sync,
{
    let cards = Memo::new(move |_| {
        state.with(|s| {
            s.displayable_results()
                .into_iter()
                .map(|card| CardView {
                    slot: card.slot,
                    title: card.image.file_name().to_string(),
                    preview: to_data_url(card.image),
                    payload: card.payload.clone(),
                })
                .collect::<Vec<_>>()
        })
    });
    let toggle_available = move || state.with(|s| s.tree_toggle_available());
    let view_mode = move || state.with(|s| s.effective_view_mode());

    view! {
        <div class="results-panel">
            <button
                class="btn btn-danger btn-reset"
                on:click=move |_| on_reset(())
            >
                "Go Back to Home"
            </button>

            <h3>"Metadata"</h3>

            <Show when=toggle_available>
                <button
                    class="btn btn-success"
                    on:click={
                        let on_toggle = on_toggle.clone();
                        move |_| on_toggle(())
                    }
                >
                    {move || toggle_label(view_mode())}
                </button>
            </Show>

            <Show when=move || cards.with(|c| c.is_empty())>
                <p class="text-muted">"No metadata was returned for the selected image(s)."</p>
            </Show>

            <div class=move || if cards.with(|c| c.len() <= 1) { "results single" } else { "results compare" }>
                <For
                    each=move || cards.get()
                    key=|card| card.slot
                    children=move |card| {
                        view! { <MetadataCard card=card view_mode=Signal::derive(view_mode) /> }
                    }
                />
            </div>
        </div>
    }
}

#[component]
fn MetadataCard(card: CardView, view_mode: Signal<ViewMode>) -> impl IntoView {
    let payload = card.payload;

    view! {
        <div class="metadata-card">
            <img class="card-preview" src=card.preview alt=card.title.clone() />
            <h4>{card.title}</h4>
            <div class="metadata-body">
                {move || match view_mode.get() {
                    ViewMode::Formatted => view! {
                        <pre class="formatted">{render_formatted(&payload)}</pre>
                    }
                    .into_any(),
                    ViewMode::Tree => view! { <TreeView value=payload.clone() /> }.into_any(),
                }}
            </div>
        </div>
    }
}

/// 切替先の表示形式をラベルにする
fn toggle_label(current: ViewMode) -> &'static str {
    match current {
        ViewMode::Formatted => "Toggle View (Tree)",
        ViewMode::Tree => "Toggle View (Formatted)",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_label() {
        assert_eq!(toggle_label(ViewMode::Formatted), "Toggle View (Tree)");
        assert_eq!(toggle_label(ViewMode::Tree), "Toggle View (Formatted)");
    }
}
