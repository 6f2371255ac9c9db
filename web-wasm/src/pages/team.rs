//! チーム紹介

use leptos::prelude::*;
use crate::content::{ACHIEVEMENTS, TEAM};

#[component]
pub fn TeamPage() -> impl IntoView {
    view! {
        <div class="page">
            <header class="page-header">
                <h1>"Meet Our Team"</h1>
                <p class="text-muted">
                    "A passionate group of developers, designers, and nutrition experts dedicated to making healthy eating accessible"
                </p>
            </header>

            <div class="grid grid-2">
                {TEAM
                    .iter()
                    .map(|member| {
                        view! {
                            <div class="card member-card">
                                <img src=member.image alt=member.name class="avatar" />
                                <div>
                                    <h3>{member.name}</h3>
                                    <p class="member-role">{member.role}</p>
                                    <p class="text-muted text-small">{member.bio}</p>
                                    <div class="badge-row">
                                        {member
                                            .skills
                                            .iter()
                                            .map(|s| view! { <span class="badge badge-outline">{*s}</span> })
                                            .collect_view()}
                                    </div>
                                    <a href=format!("mailto:{}", member.email) class="text-small">
                                        {member.email}
                                    </a>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <section class="section">
                <h2>"Team Achievements"</h2>
                <div class="grid grid-3">
                    {ACHIEVEMENTS
                        .iter()
                        .map(|a| {
                            view! {
                                <div class="card feature-card">
                                    <div class="feature-icon">{a.icon}</div>
                                    <h3>{a.title}</h3>
                                    <p class="text-muted text-small">{a.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="card section cta">
                <h2>"Want to Join Us?"</h2>
                <p class="text-muted">
                    "We're always looking for talented individuals who share our passion for health technology and making a positive impact."
                </p>
                <a href="mailto:team@foodscan.app" class="btn btn-primary">"Get in Touch"</a>
            </section>
        </div>
    }
}
