//! 3ステップの進捗表示（Profile → Scan → Results）

use leptos::prelude::*;

const TOTAL_STEPS: u8 = 3;

#[component]
pub fn StepIndicator(current: u8) -> impl IntoView {
    let caption = if current == TOTAL_STEPS {
        format!("Step {} of {} - Complete", current, TOTAL_STEPS)
    } else {
        format!("Step {} of {}", current, TOTAL_STEPS)
    };

    view! {
        <div class="step-indicator">
            {(1..=TOTAL_STEPS)
                .map(|step| {
                    let class = if step == current { "step-dot step-current" } else { "step-dot" };
                    view! { <span class=class>{step}</span> }
                })
                .collect_view()}
            <span class="step-caption">{caption}</span>
        </div>
    }
}
