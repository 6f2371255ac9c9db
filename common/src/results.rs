//! 結果画面のビューモデル
//!
//! 保存済みプロフィールとバーコード（どちらも無くてよい）から
//! 表示に必要な値をまとめて作る。

use crate::allergen::{has_allergen_overlap, matched_allergens};
use crate::nutrition::{NutrientRow, ScoreBand};
use crate::product::{Alternative, Product, ProductCatalog};
use crate::profile::Profile;

/// プロフィール欄のアレルギーバッジ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllergyBadge {
    pub id: String,
    /// 商品のアレルゲンに含まれる
    pub matched: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub profile: Option<Profile>,
    pub barcode: Option<String>,
    pub product: Product,
    pub alternatives: Vec<Alternative>,
}

impl ResultsView {
    pub fn build<C: ProductCatalog + ?Sized>(
        profile: Option<Profile>,
        barcode: Option<String>,
        catalog: &C,
    ) -> Self {
        let product = catalog.lookup(barcode.as_deref().unwrap_or_default());
        let alternatives = catalog.alternatives(&product);
        Self {
            profile,
            barcode,
            product,
            alternatives,
        }
    }

    fn allergies(&self) -> &[String] {
        self.profile
            .as_ref()
            .map(|p| p.allergies.as_slice())
            .unwrap_or_default()
    }

    /// プロフィールが無ければ常にfalse
    pub fn has_allergen_warning(&self) -> bool {
        has_allergen_overlap(self.allergies(), &self.product.allergens)
    }

    pub fn matched_allergens(&self) -> Vec<&str> {
        matched_allergens(self.allergies(), &self.product.allergens)
    }

    /// 警告バナーの本文
    pub fn warning_message(&self) -> Option<String> {
        if !self.has_allergen_warning() {
            return None;
        }
        Some(format!(
            "This product contains ingredients you're allergic to: {}",
            self.matched_allergens().join(", ")
        ))
    }

    pub fn nutrient_rows(&self) -> Vec<NutrientRow> {
        NutrientRow::rows(&self.product.nutrition)
    }

    pub fn score_band(&self) -> ScoreBand {
        ScoreBand::from_score(self.product.score)
    }

    pub fn allergy_badges(&self) -> Vec<AllergyBadge> {
        self.allergies()
            .iter()
            .map(|id| AllergyBadge {
                id: id.clone(),
                matched: self.product.allergens.contains(id),
            })
            .collect()
    }
}
