//! ホーム

use leptos::prelude::*;
use crate::content::{Feature, BENEFITS, IMPACT, STEPS};
use crate::routes::Route;

fn feature_cards(features: &'static [Feature]) -> impl IntoView {
    features
        .iter()
        .map(|feature| {
            view! {
                <div class="card feature-card">
                    <div class="feature-icon">{feature.icon}</div>
                    <h3>{feature.title}</h3>
                    <p class="text-muted">{feature.description}</p>
                </div>
            }
        })
        .collect_view()
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <section class="hero">
                <h1>
                    <span class="gradient-text">"Personalized"</span>
                    <br />
                    "Food Insight Scanner"
                </h1>
                <p class="hero-tagline">"Scan. Understand. Eat Smart."</p>
                <p class="text-muted hero-lead">
                    "Transform your shopping experience with AI-powered nutrition analysis. "
                    "Get instant insights about allergens, health impacts, and personalized recommendations."
                </p>
                <a href=Route::Profile.href() class="btn btn-primary btn-large">"Get Started →"</a>
            </section>

            <section class="section">
                <h2>"Why This Project?"</h2>
                <p class="text-muted section-lead">
                    "Food allergies affect millions worldwide, and making informed dietary choices is increasingly complex. "
                    "Our solution bridges the gap between complex nutrition data and everyday shopping decisions."
                </p>
                <div class="grid grid-3">{feature_cards(&BENEFITS)}</div>
            </section>

            <section class="section">
                <h2>"How It Works"</h2>
                <p class="text-muted section-lead">"Three simple steps to smarter eating"</p>
                <div class="grid grid-3">{feature_cards(&STEPS)}</div>
            </section>

            <section class="section">
                <h2>"Impact & Benefits"</h2>
                <div class="grid grid-3">{feature_cards(&IMPACT)}</div>
            </section>
        </div>
    }
}
