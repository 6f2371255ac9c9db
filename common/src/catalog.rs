//! プロフィールフォームの選択肢
//!
//! - アレルギー一覧（ID・表示名・アイコン）
//! - 健康目標 / 食事スタイル（保存時はケバブケースのID文字列）

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 固定の選択肢を持つ列挙型
pub trait Choice: Copy + Sized + 'static {
    const ALL: &'static [Self];

    /// 保存用ID
    fn id(&self) -> &'static str;

    /// 画面表示用ラベル
    fn label(&self) -> &'static str;

    fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.id() == id)
    }
}

/// 健康目標
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HealthGoal {
    WeightLoss,
    MuscleGain,
    Maintenance,
    HeartHealth,
    Diabetes,
}

impl Choice for HealthGoal {
    const ALL: &'static [Self] = &[
        HealthGoal::WeightLoss,
        HealthGoal::MuscleGain,
        HealthGoal::Maintenance,
        HealthGoal::HeartHealth,
        HealthGoal::Diabetes,
    ];

    fn id(&self) -> &'static str {
        match self {
            HealthGoal::WeightLoss => "weight-loss",
            HealthGoal::MuscleGain => "muscle-gain",
            HealthGoal::Maintenance => "maintenance",
            HealthGoal::HeartHealth => "heart-health",
            HealthGoal::Diabetes => "diabetes",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            HealthGoal::WeightLoss => "🏃‍♂️ Weight Loss",
            HealthGoal::MuscleGain => "💪 Muscle Gain",
            HealthGoal::Maintenance => "🥗 Maintenance",
            HealthGoal::HeartHealth => "❤️ Heart Health",
            HealthGoal::Diabetes => "🩺 Diabetes Management",
        }
    }
}

/// 食事スタイル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DietaryPreference {
    Omnivore,
    Vegetarian,
    Vegan,
    Keto,
    Paleo,
    Mediterranean,
}

impl Choice for DietaryPreference {
    const ALL: &'static [Self] = &[
        DietaryPreference::Omnivore,
        DietaryPreference::Vegetarian,
        DietaryPreference::Vegan,
        DietaryPreference::Keto,
        DietaryPreference::Paleo,
        DietaryPreference::Mediterranean,
    ];

    fn id(&self) -> &'static str {
        match self {
            DietaryPreference::Omnivore => "omnivore",
            DietaryPreference::Vegetarian => "vegetarian",
            DietaryPreference::Vegan => "vegan",
            DietaryPreference::Keto => "keto",
            DietaryPreference::Paleo => "paleo",
            DietaryPreference::Mediterranean => "mediterranean",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            DietaryPreference::Omnivore => "🍖 Omnivore",
            DietaryPreference::Vegetarian => "🥬 Vegetarian",
            DietaryPreference::Vegan => "🌱 Vegan",
            DietaryPreference::Keto => "🥑 Keto",
            DietaryPreference::Paleo => "🦴 Paleo",
            DietaryPreference::Mediterranean => "🫒 Mediterranean",
        }
    }
}

/// アレルギー項目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Allergy {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const ALLERGIES: &[Allergy] = &[
    Allergy { id: "nuts", label: "Nuts", icon: "🌰" },
    Allergy { id: "dairy", label: "Dairy", icon: "🥛" },
    Allergy { id: "gluten", label: "Gluten", icon: "🌾" },
    Allergy { id: "eggs", label: "Eggs", icon: "🥚" },
    Allergy { id: "soy", label: "Soy", icon: "🫘" },
    Allergy { id: "shellfish", label: "Shellfish", icon: "🦐" },
    Allergy { id: "fish", label: "Fish", icon: "🐟" },
    Allergy { id: "sesame", label: "Sesame", icon: "🫘" },
];

impl Allergy {
    pub fn find(id: &str) -> Option<&'static Allergy> {
        ALLERGIES.iter().find(|a| a.id == id)
    }
}

/// 未選択を空文字列で保存する選択肢フィールド用シリアライザ
pub(crate) mod blank_as_none {
    use super::*;

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Choice,
        S: Serializer,
    {
        (*value).map(|c| c.id()).unwrap_or("").serialize(serializer)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: Choice,
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        if raw.is_empty() {
            return Ok(None);
        }
        T::from_id(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown option '{}'", raw)))
    }
}
