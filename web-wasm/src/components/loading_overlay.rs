//! 処理中オーバーレイ

use leptos::prelude::*;

#[component]
pub fn LoadingOverlay(title: &'static str, message: &'static str) -> impl IntoView {
    view! {
        <div class="overlay">
            <div class="card overlay-card">
                <div class="spinner spinner-large" />
                <h3>{title}</h3>
                <p class="text-muted text-small">{message}</p>
            </div>
        </div>
    }
}
