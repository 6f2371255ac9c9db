//! 商品データ
//!
//! 商品データベース連携は未実装のため、`MockCatalog` はバーコードに関係なく
//! 固定のサンプル商品を返す。

use serde::{Deserialize, Serialize};

/// 栄養成分（1食あたり）
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
    pub fiber: u32,
    pub sugar: u32,
    pub sodium: u32,
}

/// スキャン結果の商品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub barcode: String,
    pub name: String,
    pub brand: String,
    pub image: String,
    pub nutrition: Nutrition,
    pub ingredients: Vec<String>,
    pub allergens: Vec<String>,
    pub score: u8,
}

/// おすすめの代替商品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub name: String,
    pub brand: String,
    pub score: u8,
    pub image: String,
    pub reason: String,
}

/// バーコードから商品を引く窓口
pub trait ProductCatalog {
    fn lookup(&self, barcode: &str) -> Product;

    fn alternatives(&self, product: &Product) -> Vec<Alternative>;
}

const PRODUCT_IMAGE: &str =
    "https://images.pexels.com/photos/4113990/pexels-photo-4113990.jpeg?auto=compress&cs=tinysrgb&w=400";
const ALTERNATIVE_IMAGE: &str =
    "https://images.pexels.com/photos/4113990/pexels-photo-4113990.jpeg?auto=compress&cs=tinysrgb&w=200";

/// 固定データを返すカタログ
#[derive(Debug, Clone, Copy, Default)]
pub struct MockCatalog;

impl ProductCatalog for MockCatalog {
    fn lookup(&self, barcode: &str) -> Product {
        tracing::debug!(barcode, "mock catalog lookup");
        Product {
            barcode: "0123456789012".into(),
            name: "Organic Whole Grain Cereal".into(),
            brand: "Nature's Best".into(),
            image: PRODUCT_IMAGE.into(),
            nutrition: Nutrition {
                calories: 150,
                protein: 5,
                carbs: 30,
                fat: 2,
                fiber: 8,
                sugar: 4,
                sodium: 120,
            },
            ingredients: ["Whole grain oats", "Brown rice", "Quinoa", "Honey", "Sea salt"]
                .into_iter()
                .map(String::from)
                .collect(),
            allergens: vec!["gluten".into()],
            score: 85,
        }
    }

    fn alternatives(&self, _product: &Product) -> Vec<Alternative> {
        vec![
            Alternative {
                name: "Gluten-Free Oat Cereal".into(),
                brand: "Free & Clear".into(),
                score: 92,
                image: ALTERNATIVE_IMAGE.into(),
                reason: "Gluten-free and lower in sugar".into(),
            },
            Alternative {
                name: "Protein Power Granola".into(),
                brand: "Fit Life".into(),
                score: 88,
                image: ALTERNATIVE_IMAGE.into(),
                reason: "Higher protein content".into(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_ignores_barcode() {
        let catalog = MockCatalog;
        assert_eq!(catalog.lookup("4006381333931"), catalog.lookup(""));
        assert_eq!(catalog.lookup("x").barcode, "0123456789012");
    }

    #[test]
    fn test_mock_product_shape() {
        let product = MockCatalog.lookup("0123456789012");
        assert_eq!(product.allergens, vec!["gluten".to_string()]);
        assert_eq!(product.ingredients.len(), 5);
        assert_eq!(product.nutrition.sodium, 120);
        assert_eq!(product.score, 85);
    }

    #[test]
    fn test_alternatives() {
        let catalog = MockCatalog;
        let alternatives = catalog.alternatives(&catalog.lookup(""));
        assert_eq!(alternatives.len(), 2);
        assert!(alternatives.iter().all(|a| a.score > 85));
    }
}
