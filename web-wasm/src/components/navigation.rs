//! ナビゲーションバー

use leptos::prelude::*;
use crate::routes::{Route, NAV_LINKS};
use crate::theme::Theme;

#[component]
pub fn Navigation<FT>(
    route: ReadSignal<Route>,
    theme: ReadSignal<Theme>,
    on_toggle_theme: FT,
) -> impl IntoView
where
    FT: Fn(()) + 'static + Clone,
{
    let (is_open, set_is_open) = signal(false);

    let links = move |mobile: bool| {
        NAV_LINKS
            .into_iter()
            .map(|link| {
                let class = move || {
                    let mut classes = vec![if mobile { "nav-link nav-link-mobile" } else { "nav-link" }];
                    if route.get() == link {
                        classes.push("active");
                    }
                    classes.join(" ")
                };
                view! {
                    <a href=link.href() class=class on:click=move |_| set_is_open.set(false)>
                        {link.label()}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="navigation">
            <div class="nav-inner">
                <a href=Route::Home.href() class="brand">
                    <span class="brand-icon">"🔍"</span>
                    <span class="brand-name">"FoodScan"</span>
                </a>

                <div class="nav-links">{links(false)}</div>

                <div class="nav-actions">
                    <button
                        class="btn btn-icon"
                        title="Toggle theme"
                        on:click={
                            let on_toggle_theme = on_toggle_theme.clone();
                            move |_| on_toggle_theme(())
                        }
                    >
                        {move || if theme.get() == Theme::Dark { "☀️" } else { "🌙" }}
                    </button>
                    <button
                        class="btn btn-icon nav-menu-toggle"
                        on:click=move |_| set_is_open.update(|open| *open = !*open)
                    >
                        {move || if is_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || is_open.get()>
                <div class="nav-mobile">{links(true)}</div>
            </Show>
        </nav>
    }
}
