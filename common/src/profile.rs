//! ユーザープロフィール
//!
//! 保存形式（camelCase JSON、1件のみ・上書き保存）:
//! `{"name", "allergies", "healthGoal", "dietaryPreference", "createdAt"}`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{blank_as_none, DietaryPreference, HealthGoal};
use crate::error::ValidationError;

/// 保存済みプロフィール
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,

    /// アレルギーID（集合として扱う、選択順を保持）
    #[serde(default)]
    pub allergies: Vec<String>,

    #[serde(default, with = "blank_as_none")]
    pub health_goal: Option<HealthGoal>,

    #[serde(default, with = "blank_as_none")]
    pub dietary_preference: Option<DietaryPreference>,

    pub created_at: DateTime<Utc>,
}

/// 入力中のフォーム状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub name: String,
    pub allergies: Vec<String>,
    pub health_goal: Option<HealthGoal>,
    pub dietary_preference: Option<DietaryPreference>,
}

impl ProfileForm {
    /// 保存済みプロフィールからフォームを復元
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            allergies: profile.allergies.clone(),
            health_goal: profile.health_goal,
            dietary_preference: profile.dietary_preference,
        }
    }

    pub fn has_allergy(&self, id: &str) -> bool {
        self.allergies.iter().any(|a| a == id)
    }

    /// 選択済みなら外し、未選択なら末尾に追加
    pub fn toggle_allergy(&mut self, id: &str) {
        if self.has_allergy(id) {
            self.allergies.retain(|a| a != id);
        } else {
            self.allergies.push(id.to_string());
        }
    }

    /// 「スキャンへ進む」リンクの表示条件
    pub fn can_continue(&self) -> bool {
        !self.name.is_empty()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(())
    }

    /// 検証してプロフィールを作成（名前はトリム）
    pub fn to_profile(&self, created_at: DateTime<Utc>) -> Result<Profile, ValidationError> {
        self.validate()?;

        let mut allergies: Vec<String> = Vec::with_capacity(self.allergies.len());
        for id in &self.allergies {
            if !allergies.contains(id) {
                allergies.push(id.clone());
            }
        }

        Ok(Profile {
            name: self.name.trim().to_string(),
            allergies,
            health_goal: self.health_goal,
            dietary_preference: self.dietary_preference,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_empty_name_rejected() {
        let form = ProfileForm {
            name: "   ".into(),
            ..Default::default()
        };
        assert_eq!(form.to_profile(now()), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_name_trimmed() {
        let form = ProfileForm {
            name: "  Ada  ".into(),
            allergies: vec!["gluten".into()],
            health_goal: Some(HealthGoal::HeartHealth),
            dietary_preference: Some(DietaryPreference::Vegan),
        };
        let profile = form.to_profile(now()).unwrap();
        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.allergies, vec!["gluten".to_string()]);
        assert_eq!(profile.health_goal, Some(HealthGoal::HeartHealth));
        assert_eq!(profile.created_at, now());
    }

    #[test]
    fn test_toggle_allergy() {
        let mut form = ProfileForm::default();
        form.toggle_allergy("nuts");
        form.toggle_allergy("soy");
        assert_eq!(form.allergies, vec!["nuts".to_string(), "soy".to_string()]);
        form.toggle_allergy("nuts");
        assert_eq!(form.allergies, vec!["soy".to_string()]);
    }

    #[test]
    fn test_duplicate_allergies_collapsed() {
        let form = ProfileForm {
            name: "Bo".into(),
            allergies: vec!["fish".into(), "fish".into()],
            ..Default::default()
        };
        assert_eq!(form.to_profile(now()).unwrap().allergies.len(), 1);
    }

    #[test]
    fn test_serialized_shape() {
        let profile = ProfileForm {
            name: "Ada".into(),
            allergies: vec!["dairy".into()],
            health_goal: Some(HealthGoal::WeightLoss),
            dietary_preference: None,
        }
        .to_profile(now())
        .unwrap();

        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"healthGoal\":\"weight-loss\""));
        assert!(json.contains("\"dietaryPreference\":\"\""));
        assert!(json.contains("\"createdAt\":\"2025-03-01T09:30:00Z\""));
    }

    #[test]
    fn test_parse_browser_record() {
        let json = r#"{"name":"Ada","allergies":["gluten","nuts"],"healthGoal":"","dietaryPreference":"keto","createdAt":"2025-03-01T09:30:00.000Z"}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.health_goal, None);
        assert_eq!(profile.dietary_preference, Some(DietaryPreference::Keto));
        assert_eq!(profile.allergies.len(), 2);
    }

    #[test]
    fn test_parse_rejects_unknown_goal() {
        let json = r#"{"name":"Ada","healthGoal":"bulking","createdAt":"2025-03-01T09:30:00Z"}"#;
        assert!(serde_json::from_str::<Profile>(json).is_err());
    }

    #[test]
    fn test_can_continue() {
        let mut form = ProfileForm::default();
        assert!(!form.can_continue());
        form.name = "A".into();
        assert!(form.can_continue());
    }
}
