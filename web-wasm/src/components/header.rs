//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"C2PA Metadata Verification"</h1>
            <p class="text-muted">
                "The Coalition for Content Provenance and Authenticity (C2PA) provides a framework to verify "
                "the authenticity of digital media. Verifying an image's metadata can help detect tampering, "
                "origin details, and ensure content integrity."
            </p>
        </header>
    }
}
