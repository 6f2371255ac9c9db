//! 栄養素バーコンポーネント

use leptos::prelude::*;
use foodscan_common::NutrientRow;

#[component]
pub fn NutrientBar(row: NutrientRow) -> impl IntoView {
    let nutrient = row.nutrient;

    view! {
        <div class="nutrient">
            <div class="nutrient-header">
                <span class="nutrient-label">
                    <span>{nutrient.icon()}</span>
                    <span>{nutrient.label()}</span>
                </span>
                <span class="nutrient-value">{row.display_value()}</span>
            </div>
            <div class="progress-bar">
                <div
                    class=format!("progress-fill level-{}", row.level().as_str())
                    style=format!("width: {:.0}%", row.percentage())
                />
            </div>
        </div>
    }
}
