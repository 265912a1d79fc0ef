//! 抽出中インジケーター

use leptos::prelude::*;

/// `progress` は (完了スロット数, 総スロット数)
#[component]
pub fn LoadingIndicator(progress: ReadSignal<(usize, usize)>) -> impl IntoView {
    let ratio = move || {
        let (done, total) = progress.get();
        if total == 0 { 0.0 } else { done as f32 / total as f32 }
    };

    view! {
        <div class="progress-container">
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style=move || format!("width: {}%", ratio() * 100.0)
                />
            </div>
            <p class="progress-text">
                {move || {
                    let (done, total) = progress.get();
                    format!("Extracting metadata... {}/{}", done, total)
                }}
            </p>
        </div>
    }
}
