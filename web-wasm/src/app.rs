//! メインアプリケーションコンポーネント

use gloo::events::EventListener;
use leptos::prelude::*;
use crate::components::{footer::Footer, navigation::Navigation};
use crate::pages::{
    about::AboutPage, documentation::DocumentationPage, home::HomePage, profile::ProfilePage,
    results::ResultsPage, scan::ScanPage, team::TeamPage,
};
use crate::routes::{self, Route};
use crate::storage::LocalStore;
use crate::theme::Theme;
use crate::toast::{Toaster, Toasts};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let toasts = Toasts::provide();

    // ルーティング
    let (route, set_route) = signal(routes::current());
    if let Some(window) = web_sys::window() {
        EventListener::new(&window, "hashchange", move |_| {
            set_route.set(routes::current());
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        })
        .forget();
    }

    // テーマ
    let initial_theme = Theme::load(&LocalStore).unwrap_or_else(|e| {
        gloo::console::warn!(format!("theme not loaded: {}", e));
        Theme::default()
    });
    initial_theme.apply();
    let (theme, set_theme) = signal(initial_theme);

    let on_toggle_theme = move |_| {
        let next = theme.get_untracked().toggled();
        next.apply();
        if let Err(e) = next.save(&LocalStore) {
            toasts.error(e.to_string());
        }
        set_theme.set(next);
    };

    view! {
        <div class="app">
            <Navigation route=route theme=theme on_toggle_theme=on_toggle_theme />

            <main class="main">
                {move || match route.get() {
                    Route::Home => view! { <HomePage /> }.into_any(),
                    Route::Profile => view! { <ProfilePage /> }.into_any(),
                    Route::Scan => view! { <ScanPage /> }.into_any(),
                    Route::Results => view! { <ResultsPage /> }.into_any(),
                    Route::About => view! { <AboutPage /> }.into_any(),
                    Route::Documentation => view! { <DocumentationPage /> }.into_any(),
                    Route::Team => view! { <TeamPage /> }.into_any(),
                }}
            </main>

            <Footer />
            <Toaster />
        </div>
    }
}
