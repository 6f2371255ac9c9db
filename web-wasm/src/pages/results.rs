//! 解析結果
//!
//! 保存済みのプロフィール・バーコードを読み、擬似カタログの商品と突き合わせる。
//! どちらも無くても表示できる（依存する欄だけ出さない）。

use foodscan_common::{Choice, MockCatalog, ResultsView, ScoreBand};
use leptos::prelude::*;
use crate::components::{nutrient_bar::NutrientBar, step_indicator::StepIndicator};
use crate::routes::Route;
use crate::storage::{app_store, now};
use crate::toast::use_toasts;

fn load_view() -> ResultsView {
    let store = app_store();
    let profile = store.load_profile().unwrap_or_else(|e| {
        gloo::console::warn!(format!("saved profile ignored: {}", e));
        None
    });
    let barcode = store.load_barcode().unwrap_or_else(|e| {
        gloo::console::warn!(format!("saved barcode ignored: {}", e));
        None
    });
    ResultsView::build(profile, barcode, &MockCatalog)
}

fn choice_label<T: Choice>(choice: Option<T>) -> &'static str {
    choice.map(|c| c.label()).unwrap_or("Not set")
}

#[component]
pub fn ResultsPage() -> impl IntoView {
    let toasts = use_toasts();
    let results = load_view();
    let product = results.product.clone();

    let on_save = {
        let product = product.clone();
        move |_| match app_store().append_diet_log(&product, now()) {
            Ok(_) => toasts.success("Product saved to your diet log!"),
            Err(e) => toasts.error(e.to_string()),
        }
    };

    let status = match results.warning_message() {
        Some(message) => view! {
            <div class="banner banner-warning">
                <strong>"⚠️ Allergen Warning"</strong>
                <p class="text-small">{message}</p>
            </div>
        }
        .into_any(),
        None => view! {
            <div class="banner banner-safe">
                <strong>"✅ Safe for You"</strong>
                <p class="text-small">"No known allergens detected based on your profile."</p>
            </div>
        }
        .into_any(),
    };

    let card_class = if results.has_allergen_warning() {
        "card product-card ring-warning"
    } else {
        "card product-card ring-safe"
    };

    let profile_match = results.profile.clone().map(|profile| {
        let badges = results.allergy_badges();
        view! {
            <div class="match-list">
                <div class="match-row">
                    <span class="text-small">"Health Goal"</span>
                    <span class="badge badge-outline">{choice_label(profile.health_goal)}</span>
                </div>
                <div class="match-row">
                    <span class="text-small">"Diet"</span>
                    <span class="badge badge-outline">{choice_label(profile.dietary_preference)}</span>
                </div>
                <div>
                    <span class="text-small">"Allergies"</span>
                    <div class="badge-row">
                        {badges
                            .into_iter()
                            .map(|badge| {
                                let class = if badge.matched { "badge badge-danger" } else { "badge" };
                                view! { <span class=class>{badge.id}</span> }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        }
    });

    view! {
        <div class="page">
            <header class="results-header">
                <div class="results-title">
                    <a href=Route::Scan.href() class="btn btn-ghost" title="Back to scan">"←"</a>
                    <div>
                        <h1>"Product Analysis"</h1>
                        <StepIndicator current=3 />
                    </div>
                </div>
                <button class="btn btn-primary" on:click=on_save>"💾 Save to Log"</button>
            </header>

            <div class="results-grid">
                <div class="results-main">
                    <div class=card_class>
                        <div class="product-head">
                            <img src=product.image.clone() alt=product.name.clone() class="product-image" />
                            <div class="product-info">
                                <h2>{product.name.clone()}</h2>
                                <p class="text-muted">{product.brand.clone()}</p>
                                <p class="text-muted text-small">"Barcode: " {product.barcode.clone()}</p>
                                {results.barcode.clone().map(|scanned| {
                                    view! { <p class="text-muted text-small">"Scanned: " {scanned}</p> }
                                })}
                            </div>
                            <div class="score">
                                <div class=format!("score-value score-{}", results.score_band().as_str())>
                                    {product.score}
                                </div>
                                <p class="text-muted text-small">"Health Score"</p>
                            </div>
                        </div>
                        {status}
                    </div>

                    <div class="card">
                        <h3>"📊 Nutrition Facts"</h3>
                        <div class="nutrient-grid">
                            {results
                                .nutrient_rows()
                                .into_iter()
                                .map(|row| view! { <NutrientBar row=row /> })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="card">
                        <h3>"Ingredients"</h3>
                        <div class="badge-row">
                            {product
                                .ingredients
                                .iter()
                                .map(|i| view! { <span class="badge badge-outline">{i.clone()}</span> })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <aside class="results-side">
                    <div class="card">
                        <h3>"❤️ Profile Match"</h3>
                        {profile_match}
                    </div>

                    <div class="card">
                        <h3>"Better Alternatives"</h3>
                        {results
                            .alternatives
                            .iter()
                            .map(|alt| {
                                view! {
                                    <div class="alternative">
                                        <img src=alt.image.clone() alt=alt.name.clone() class="alternative-image" />
                                        <div>
                                            <h4>{alt.name.clone()}</h4>
                                            <p class="text-muted text-small">{alt.brand.clone()}</p>
                                            <p class="text-small">{alt.reason.clone()}</p>
                                            <span class=format!("badge score-{}", ScoreBand::from_score(alt.score).as_str())>
                                                "Score: " {alt.score}
                                            </span>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </aside>
            </div>
        </div>
    }
}
