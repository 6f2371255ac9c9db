//! アレルゲン照合
//!
//! プロフィールのアレルギーと商品のアレルゲンタグの共通部分を求める。

/// 商品に含まれるユーザーのアレルゲン（プロフィールの並び順）
pub fn matched_allergens<'a>(allergies: &'a [String], allergens: &[String]) -> Vec<&'a str> {
    allergies
        .iter()
        .filter(|a| allergens.contains(a))
        .map(String::as_str)
        .collect()
}

/// 共通部分が空でなければtrue
pub fn has_allergen_overlap(allergies: &[String], allergens: &[String]) -> bool {
    allergies.iter().any(|a| allergens.contains(a))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_gluten_overlaps() {
        assert!(has_allergen_overlap(&strings(&["gluten"]), &strings(&["gluten"])));
    }

    #[test]
    fn test_nuts_does_not_overlap() {
        assert!(!has_allergen_overlap(&strings(&["nuts"]), &strings(&["gluten"])));
    }

    #[test]
    fn test_empty_allergies() {
        assert!(!has_allergen_overlap(&[], &strings(&["gluten"])));
        assert!(matched_allergens(&[], &strings(&["gluten"])).is_empty());
    }

    #[test]
    fn test_matched_keeps_profile_order() {
        let allergies = strings(&["soy", "nuts", "gluten", "dairy"]);
        let allergens = strings(&["gluten", "soy"]);
        assert_eq!(matched_allergens(&allergies, &allergens), vec!["soy", "gluten"]);
    }
}
