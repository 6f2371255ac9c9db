//! フッター

use leptos::prelude::*;
use crate::routes::Route;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-grid">
                <div>
                    <h3 class="gradient-text">"Personalized Food Insight Scanner"</h3>
                    <p class="text-muted">"Scan. Understand. Eat Smart."</p>
                    <p class="text-muted text-small">"Making nutrition information accessible to everyone."</p>
                </div>

                <div>
                    <h4>"Quick Links"</h4>
                    <div class="footer-links">
                        <a href=Route::About.href()>"About"</a>
                        <a href=Route::Documentation.href()>"Documentation"</a>
                        <a href=Route::Team.href()>"Team"</a>
                    </div>
                </div>

                <div>
                    <h4>"Connect With Us"</h4>
                    <div class="footer-social">
                        <a href="#" class="glass-button">"GitHub"</a>
                        <a href="#" class="glass-button">"LinkedIn"</a>
                        <a href="mailto:team@foodscan.app" class="glass-button">"Email"</a>
                    </div>
                </div>
            </div>

            <p class="footer-note text-muted text-small">
                "Made with ❤️ for IDT Project | Conference 2025"
            </p>
        </footer>
    }
}
