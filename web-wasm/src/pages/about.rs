//! プロジェクト概要

use leptos::prelude::*;
use crate::content::{MARKET_STATS, PROBLEMS, ROADMAP, SOLUTIONS, TECHNOLOGIES};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page">
            <header class="page-header">
                <h1>"About Our Project"</h1>
                <p class="text-muted">
                    "Revolutionizing food choice decision-making through intelligent scanning and personalized nutrition insights"
                </p>
            </header>

            <div class="grid grid-2">
                <div class="card">
                    <h3>"⚠️ Problem Statement"</h3>
                    <p class="text-muted">
                        "Food allergies and dietary restrictions affect millions of people worldwide, "
                        "yet making informed food choices remains challenging due to:"
                    </p>
                    <ul class="bullet-list">
                        {PROBLEMS.iter().map(|p| view! { <li>{*p}</li> }).collect_view()}
                    </ul>
                </div>
                <div class="card">
                    <h3>"💡 Our Solution"</h3>
                    <p class="text-muted">
                        "The Personalized Food Insight Scanner leverages modern technology to provide "
                        "instant, personalized nutrition analysis:"
                    </p>
                    <ul class="bullet-list">
                        {SOLUTIONS.iter().map(|s| view! { <li>{*s}</li> }).collect_view()}
                    </ul>
                </div>
            </div>

            <section class="section">
                <h2>"Market Research"</h2>
                <div class="grid grid-4">
                    {MARKET_STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="card stat-card">
                                    <h3 class="gradient-text">{stat.value}</h3>
                                    <p>{stat.label}</p>
                                    <p class="text-muted text-small">{stat.growth}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section">
                <h2>"Technologies Used"</h2>
                <div class="grid grid-4">
                    {TECHNOLOGIES
                        .iter()
                        .map(|tech| {
                            view! {
                                <div class="card tech-card">
                                    <div class="feature-icon">{tech.icon}</div>
                                    <h3>{tech.title}</h3>
                                    <p class="text-muted text-small">{tech.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section">
                <h2>"Development Roadmap"</h2>
                <div class="roadmap">
                    {ROADMAP
                        .iter()
                        .map(|phase| {
                            view! {
                                <div class=format!("card roadmap-phase phase-{}", phase.status.as_str())>
                                    <div class="roadmap-head">
                                        <span class="badge">{phase.phase}</span>
                                        <h3>{phase.title}</h3>
                                        <span class="text-muted">{phase.timeline}</span>
                                    </div>
                                    <div class="badge-row">
                                        {phase
                                            .features
                                            .iter()
                                            .map(|f| view! { <span class="badge badge-outline">{*f}</span> })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
