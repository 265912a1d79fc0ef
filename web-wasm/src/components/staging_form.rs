//! ファイル選択フォームコンポーネント

use c2pa_inspect_common::{Mode, SlotKey, WorkflowState};
use leptos::prelude::*;
use web_sys::{File, HtmlInputElement};

use crate::preview::to_data_url;

#[component]
pub fn StagingForm<FF, FS>(
    mode: Mode,
    state: ReadSignal<WorkflowState>,
    notice: ReadSignal<Option<String>>,
    on_file: FF,
    on_start: FS,
) -> impl IntoView
where
    FF: Fn(SlotKey, Option<File>) + 'static + Clone + Send + Sync,
    FS: Fn(()) + 'static + Clone + Send + Sync,
{
    let heading = match mode {
        Mode::Single => "Upload Image for Metadata Extraction",
        Mode::Compare => "Compare Metadata for Two Images",
    };
    let disabled = move || state.with(start_disabled);

    let inputs = mode
        .active_slots()
        .iter()
        .map(|&slot| {
            let on_file = on_file.clone();
            let label = slot_label(mode, slot);
            let staged = Memo::new(move |_| {
                state.with(|s| {
                    s.slots()
                        .get(slot)
                        .map(|image| (image.file_name().to_string(), to_data_url(image)))
                })
            });

            view! {
                <div class="file-slot">
                    {label.map(|text| view! { <label for=slot.as_str()>{text}</label> })}
                    <input
                        type="file"
                        id=slot.as_str()
                        accept="image/*"
                        on:change=move |ev| {
                            let input: HtmlInputElement = event_target(&ev);
                            let file = input.files().and_then(|files| files.get(0));
                            on_file(slot, file);
                        }
                    />
                    {move || staged.get().map(|(file_name, data_url)| view! {
                        <div class="slot-preview">
                            <img src=data_url alt=file_name.clone() />
                            <span>{file_name}</span>
                        </div>
                    })}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="staging-form">
            <h2>{heading}</h2>
            {inputs}
            <button
                class="btn btn-primary"
                disabled=disabled
                on:click=move |_| on_start(())
            >
                "Upload & Extract Metadata"
            </button>
            <Show when=move || notice.get().is_some()>
                <p class="notice">{move || notice.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}

/// 必要なファイルが揃うまで（および抽出中は）開始ボタンを無効にする
fn start_disabled(state: &WorkflowState) -> bool {
    !state.can_start_extraction()
}

/// 2枚モードのときだけラベルを付ける
fn slot_label(mode: Mode, slot: SlotKey) -> Option<&'static str> {
    match (mode, slot) {
        (Mode::Single, _) => None,
        (Mode::Compare, SlotKey::Image1) => Some("Upload Image 1:"),
        (Mode::Compare, SlotKey::Image2) => Some("Upload Image 2:"),
    }
}
