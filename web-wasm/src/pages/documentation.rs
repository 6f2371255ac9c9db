//! ドキュメント

use leptos::prelude::*;
use crate::content::{DOCUMENTS, RESEARCH_SECTIONS};

#[component]
pub fn DocumentationPage() -> impl IntoView {
    view! {
        <div class="page">
            <header class="page-header">
                <h1>"Documentation"</h1>
                <p class="text-muted">
                    "Comprehensive research documentation, technical specifications, and project resources"
                </p>
            </header>

            <section class="section">
                <h2>"Download Resources"</h2>
                <div class="grid grid-3">
                    {DOCUMENTS
                        .iter()
                        .map(|doc| {
                            view! {
                                <div class="card doc-card">
                                    <div class="feature-icon">{doc.icon}</div>
                                    <h3>{doc.title}</h3>
                                    <p class="text-muted text-small">{doc.description}</p>
                                    <div class="doc-meta text-small">
                                        <span class="badge">{doc.kind}</span>
                                        <span>{doc.size}</span>
                                        <span>{doc.length}</span>
                                    </div>
                                    <a href="#" class="btn btn-secondary">"Download"</a>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section">
                <h2>"Research Overview"</h2>
                <div class="grid grid-2">
                    {RESEARCH_SECTIONS
                        .iter()
                        .map(|section| {
                            view! {
                                <div class="card">
                                    <h3>{section.title}</h3>
                                    <p class="text-muted">{section.content}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="card section cta">
                <h2>"Additional Resources"</h2>
                <div class="button-row">
                    <a href="#" class="btn btn-secondary">"View on GitHub"</a>
                    <a href="#" class="btn btn-secondary">"Live Demo"</a>
                    <a href="#" class="btn btn-secondary">"Video Presentation"</a>
                </div>
                <p class="text-muted text-small">
                    "For questions about the research or technical implementation, please contact our team."
                </p>
            </section>
        </div>
    }
}
