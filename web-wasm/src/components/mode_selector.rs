//! モード選択コンポーネント

use c2pa_inspect_common::Mode;
use leptos::prelude::*;

#[component]
pub fn ModeSelector<F>(on_select: F) -> impl IntoView
where
    F: Fn(Mode) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="mode-selector">
            <label for="mode">"Select an option:"</label>
            <select
                id="mode"
                on:change=move |ev| {
                    if let Some(mode) = Mode::from_choice(&event_target_value(&ev)) {
                        on_select(mode);
                    }
                }
            >
                <option value="">"-- Choose --"</option>
                <option value=Mode::Single.as_str()>"Check One Image"</option>
                <option value=Mode::Compare.as_str()>"Compare Two Images"</option>
            </select>
        </div>
    }
}
