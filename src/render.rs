//! 端末向けの表示整形

use foodscan_common::{Allergy, Choice, DietLogEntry, NutrientRow, Profile, ResultsView};
use std::fmt::Write;

const BAR_WIDTH: usize = 20;

fn choice_label<T: Choice>(choice: Option<T>) -> &'static str {
    choice.map(|c| c.label()).unwrap_or("Not set")
}

fn allergy_label(id: &str) -> String {
    match Allergy::find(id) {
        Some(a) => format!("{} {}", a.icon, a.label),
        None => id.to_string(),
    }
}

/// `[#####.....]` 形式のバー
pub fn bar(percentage: f32) -> String {
    let filled = ((percentage.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f32).round() as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

fn nutrient_line(row: &NutrientRow) -> String {
    let nutrient = row.nutrient;
    format!(
        "  {} {:<8} {:>8}  {} {}",
        nutrient.icon(),
        nutrient.label(),
        row.display_value(),
        bar(row.percentage()),
        row.level().as_str()
    )
}

pub fn render_profile(profile: &Profile) -> String {
    let allergies = if profile.allergies.is_empty() {
        "None".to_string()
    } else {
        profile
            .allergies
            .iter()
            .map(|id| allergy_label(id))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut out = String::new();
    let _ = writeln!(out, "👤 {}", profile.name);
    let _ = writeln!(out, "  Allergies:   {}", allergies);
    let _ = writeln!(out, "  Health goal: {}", choice_label(profile.health_goal));
    let _ = writeln!(out, "  Diet:        {}", choice_label(profile.dietary_preference));
    let _ = writeln!(out, "  Created:     {}", profile.created_at.to_rfc3339());
    out
}

pub fn render_results(view: &ResultsView) -> String {
    let product = &view.product;
    let mut out = String::new();

    let _ = writeln!(out, "📊 Product Analysis");
    let _ = writeln!(out, "{} ({})", product.name, product.brand);
    let _ = writeln!(out, "  Barcode: {}", product.barcode);
    if let Some(scanned) = &view.barcode {
        let _ = writeln!(out, "  Scanned: {}", scanned);
    }
    let _ = writeln!(
        out,
        "  Health Score: {} ({})",
        product.score,
        view.score_band().as_str()
    );
    let _ = writeln!(out);

    match view.warning_message() {
        Some(message) => {
            let _ = writeln!(out, "⚠️  Allergen Warning");
            let _ = writeln!(out, "  {}", message);
        }
        None => {
            let _ = writeln!(out, "✅ Safe for You");
            let _ = writeln!(out, "  No known allergens detected based on your profile.");
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Nutrition Facts");
    for row in view.nutrient_rows() {
        let _ = writeln!(out, "{}", nutrient_line(&row));
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Ingredients");
    let _ = writeln!(out, "  {}", product.ingredients.join(", "));

    if let Some(profile) = &view.profile {
        let _ = writeln!(out);
        let _ = writeln!(out, "❤️  Profile Match");
        let _ = writeln!(out, "  Health Goal: {}", choice_label(profile.health_goal));
        let _ = writeln!(out, "  Diet:        {}", choice_label(profile.dietary_preference));
        let badges = view
            .allergy_badges()
            .iter()
            .map(|b| if b.matched { format!("{}(!)", b.id) } else { b.id.clone() })
            .collect::<Vec<_>>();
        if !badges.is_empty() {
            let _ = writeln!(out, "  Allergies:   {}", badges.join(", "));
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Better Alternatives");
    for alt in &view.alternatives {
        let _ = writeln!(
            out,
            "  - {} ({}) score {}: {}",
            alt.name, alt.brand, alt.score, alt.reason
        );
    }
    out
}

pub fn render_log(entries: &[DietLogEntry]) -> String {
    if entries.is_empty() {
        return "Diet log is empty.\n".to_string();
    }
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(
            out,
            "{}  {}  {} ({})",
            entry.id,
            entry.scanned_at.to_rfc3339(),
            entry.product.name,
            entry.product.score
        );
    }
    let _ = writeln!(out, "{} entries", entries.len());
    out
}
