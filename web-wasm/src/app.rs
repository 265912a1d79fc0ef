//! メインアプリケーションコンポーネント
//!
//! UIイベントを `Event` に変換して状態機械に渡し、フェーズに応じて
//! モード選択・ファイル選択・抽出中・結果表示のいずれか1つを描画する

use c2pa_inspect_common::{run_round, Event, Phase, SlotKey, StagedImage, WorkflowState};
use gloo::console;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use crate::api::FetchExtractor;
use crate::components::{
    header::Header,
    loading_indicator::LoadingIndicator,
    mode_selector::ModeSelector,
    results_panel::ResultsPanel,
    staging_form::StagingForm,
};
use crate::config::load_service_config;
use crate::file_reads::ReadTracker;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // アプリケーション状態
    let (state, set_state) = signal(WorkflowState::new());
    let (notice, set_notice) = signal(None::<String>);
    let (progress, set_progress) = signal((0usize, 0usize));
    let config = StoredValue::new(load_service_config());
    let reads = StoredValue::new(ReadTracker::new());

    let phase = Memo::new(move |_| state.with(|s| s.phase()));

    // 状態遷移（拒否されたら理由を表示し、状態は変えない）
    let dispatch = move |event: Event| -> bool {
        match state.with_untracked(|s| s.transition(event)) {
            Ok(next) => {
                set_state.set(next);
                set_notice.set(None);
                true
            }
            Err(e) => {
                set_notice.set(Some(e.to_string()));
                false
            }
        }
    };

    // ファイル選択ハンドラ（同じスロットの選び直しは最新の選択だけを反映）
    let on_file = move |slot: SlotKey, file: Option<File>| {
        let ticket = reads.try_update_value(|r| r.begin(slot));
        let Some(file) = file else {
            dispatch(Event::SelectFile(slot, None));
            return;
        };
        let Some(ticket) = ticket else {
            return;
        };

        spawn_local(async move {
            let file_name = file.name();
            let mime_type = file.type_();
            let read = gloo::file::futures::read_as_bytes(&gloo::file::File::from(file)).await;

            if !reads.with_value(|r| r.is_current(ticket)) {
                return;
            }

            let staged = match read {
                Ok(bytes) => StagedImage::new(file_name.clone(), mime_type, bytes)
                    .map_err(|e| e.to_string()),
                Err(e) => {
                    console::error!(format!("Error reading file {}: {}", file_name, e));
                    Err(format!("Could not read {}", file_name))
                }
            };

            match staged {
                Ok(image) => {
                    dispatch(Event::SelectFile(slot, Some(image)));
                }
                Err(message) => {
                    // 以前のファイルを残さない
                    dispatch(Event::SelectFile(slot, None));
                    set_notice.set(Some(message));
                }
            }
        });
    };

    // 抽出開始ハンドラ
    let on_start = move |_: ()| {
        if !dispatch(Event::StartExtraction) {
            return;
        }

        let slots = state.with_untracked(|s| s.slots().clone());
        set_progress.set((0, slots.populated().count()));

        let extractor = FetchExtractor::new(config.get_value());
        spawn_local(async move {
            let results = run_round(&extractor, &slots, |done, total| {
                set_progress.set((done, total));
            })
            .await;
            dispatch(Event::RoundCompleted(results));
        });
    };

    let on_toggle = move |_: ()| {
        dispatch(Event::ToggleView);
    };

    let on_reset = move |_: ()| {
        dispatch(Event::Reset);
    };

    view! {
        <div class="container">
            <Show when=move || phase.get() != Phase::ResultsDisplay>
                <Header />
            </Show>

            {move || match phase.get() {
                Phase::ModeSelection => view! {
                    <ModeSelector on_select=move |mode| {
                        dispatch(Event::SelectMode(mode));
                    } />
                }
                .into_any(),
                Phase::Staging => match state.with_untracked(|s| s.mode()) {
                    Some(mode) => view! {
                        <StagingForm
                            mode=mode
                            state=state
                            notice=notice
                            on_file=on_file
                            on_start=on_start
                        />
                    }
                    .into_any(),
                    None => ().into_any(),
                },
                Phase::Extracting => view! { <LoadingIndicator progress=progress /> }.into_any(),
                Phase::ResultsDisplay => view! {
                    <ResultsPanel state=state on_toggle=on_toggle on_reset=on_reset />
                }
                .into_any(),
            }}
        </div>
    }
}
