//! 栄養バー表示用の計算
//!
//! 各栄養素の基準上限に対する割合と、その割合に応じた3段階レベル。

use crate::product::Nutrition;

/// 栄養素
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nutrient {
    Calories,
    Protein,
    Carbs,
    Fat,
    Fiber,
    Sugar,
    Sodium,
}

impl Nutrient {
    pub const ALL: [Nutrient; 7] = [
        Nutrient::Calories,
        Nutrient::Protein,
        Nutrient::Carbs,
        Nutrient::Fat,
        Nutrient::Fiber,
        Nutrient::Sugar,
        Nutrient::Sodium,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Nutrient::Calories => "Calories",
            Nutrient::Protein => "Protein",
            Nutrient::Carbs => "Carbs",
            Nutrient::Fat => "Fat",
            Nutrient::Fiber => "Fiber",
            Nutrient::Sugar => "Sugar",
            Nutrient::Sodium => "Sodium",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Nutrient::Calories => "kcal",
            Nutrient::Sodium => "mg",
            _ => "g",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Nutrient::Calories => "⚡",
            Nutrient::Protein => "🥩",
            Nutrient::Carbs => "🌾",
            Nutrient::Fat => "🥑",
            Nutrient::Fiber => "🥬",
            Nutrient::Sugar => "🍯",
            Nutrient::Sodium => "🧂",
        }
    }

    /// バー表示の基準上限
    pub fn reference_max(&self) -> u32 {
        match self {
            Nutrient::Calories => 400,
            Nutrient::Protein => 20,
            Nutrient::Carbs => 60,
            Nutrient::Fat => 20,
            Nutrient::Fiber => 15,
            Nutrient::Sugar => 20,
            Nutrient::Sodium => 800,
        }
    }

    pub fn value_in(&self, nutrition: &Nutrition) -> u32 {
        match self {
            Nutrient::Calories => nutrition.calories,
            Nutrient::Protein => nutrition.protein,
            Nutrient::Carbs => nutrition.carbs,
            Nutrient::Fat => nutrition.fat,
            Nutrient::Fiber => nutrition.fiber,
            Nutrient::Sugar => nutrition.sugar,
            Nutrient::Sodium => nutrition.sodium,
        }
    }
}

/// 割合レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NutrientLevel {
    Low,
    Moderate,
    High,
}

impl NutrientLevel {
    pub fn from_percentage(percentage: f32) -> Self {
        if percentage < 30.0 {
            NutrientLevel::Low
        } else if percentage < 70.0 {
            NutrientLevel::Moderate
        } else {
            NutrientLevel::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NutrientLevel::Low => "low",
            NutrientLevel::Moderate => "moderate",
            NutrientLevel::High => "high",
        }
    }
}

/// 1行分の表示データ
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutrientRow {
    pub nutrient: Nutrient,
    pub value: u32,
}

impl NutrientRow {
    pub fn rows(nutrition: &Nutrition) -> Vec<NutrientRow> {
        Nutrient::ALL
            .iter()
            .map(|&nutrient| NutrientRow {
                nutrient,
                value: nutrient.value_in(nutrition),
            })
            .collect()
    }

    /// 基準上限に対する割合（0〜100にクランプ）
    pub fn percentage(&self) -> f32 {
        let max = self.nutrient.reference_max() as f32;
        (self.value as f32 / max * 100.0).clamp(0.0, 100.0)
    }

    pub fn level(&self) -> NutrientLevel {
        NutrientLevel::from_percentage(self.percentage())
    }

    /// 例: "150kcal"
    pub fn display_value(&self) -> String {
        format!("{}{}", self.value, self.nutrient.unit())
    }
}

/// ヘルススコアの評価帯
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => ScoreBand::Good,
            60..=79 => ScoreBand::Fair,
            _ => ScoreBand::Poor,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreBand::Good => "good",
            ScoreBand::Fair => "fair",
            ScoreBand::Poor => "poor",
        }
    }
}
