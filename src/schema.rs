//! # Upstream Model Response Shapes
//!
//! The two JSON shapes call sites expect back from the upstream model. The
//! recovery engine itself is shape-agnostic; these types are what its `T`
//! usually is. Field aliases tolerate the camelCase spellings the model
//! produces when it ignores formatting instructions, and every numeric field
//! is optional so a partially filled object still deserializes.

use serde::{Deserialize, Serialize};

/// Macro estimate for one food item as reported by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionItem {
    /// Food name echoed back by the model
    #[serde(default, alias = "foodName", alias = "food")]
    pub name: String,
    /// Energy in kilocalories
    #[serde(default, alias = "caloriesKcal", alias = "calories")]
    pub calories_kcal: Option<f64>,
    /// Protein in grams
    #[serde(default, alias = "proteinG", alias = "protein")]
    pub protein_g: Option<f64>,
    /// Carbohydrate in grams
    #[serde(default, alias = "carbsG", alias = "carbs")]
    pub carbs_g: Option<f64>,
    /// Fat in grams
    #[serde(default, alias = "fatG", alias = "fat")]
    pub fat_g: Option<f64>,
}

impl NutritionItem {
    fn macro_values(&self) -> impl Iterator<Item = f64> {
        [self.calories_kcal, self.protein_g, self.carbs_g, self.fat_g]
            .into_iter()
            .flatten()
    }
}

/// Meal-level macro totals as reported by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionTotals {
    #[serde(default, alias = "caloriesKcal", alias = "calories")]
    pub calories_kcal: Option<f64>,
    #[serde(default, alias = "proteinG", alias = "protein")]
    pub protein_g: Option<f64>,
    #[serde(default, alias = "carbsG", alias = "carbs")]
    pub carbs_g: Option<f64>,
    #[serde(default, alias = "fatG", alias = "fat")]
    pub fat_g: Option<f64>,
}

impl NutritionTotals {
    fn macro_values(&self) -> impl Iterator<Item = f64> {
        [self.calories_kcal, self.protein_g, self.carbs_g, self.fat_g]
            .into_iter()
            .flatten()
    }
}

/// Full nutrition analysis: per-item rows plus optional totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionAnalysis {
    #[serde(default)]
    pub items: Vec<NutritionItem>,
    #[serde(default)]
    pub totals: Option<NutritionTotals>,
}

impl NutritionAnalysis {
    /// Whether the model complied with the schema but not with the task:
    /// every macro field across items and totals is zero or absent. Callers
    /// use this to trigger the fallback estimator.
    pub fn is_degenerate(&self) -> bool {
        let item_values = self.items.iter().flat_map(NutritionItem::macro_values);
        let total_values = self.totals.iter().flat_map(NutritionTotals::macro_values);
        item_values.chain(total_values).all(|value| value == 0.0)
    }
}

/// Coaching advice response: a free-text paragraph plus optional bullets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceResponse {
    #[serde(alias = "message", alias = "text")]
    pub advice: String,
    #[serde(default, alias = "bulletPoints", alias = "tips")]
    pub bullets: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_payload_deserializes() {
        let raw = r#"{
            "items": [
                {"foodName": "ไข่ดาว", "caloriesKcal": 90, "proteinG": 6.5, "carbsG": 0.5, "fatG": 7}
            ],
            "totals": {"caloriesKcal": 90, "proteinG": 6.5, "carbsG": 0.5, "fatG": 7}
        }"#;
        let analysis: NutritionAnalysis = serde_json::from_str(raw).unwrap();
        assert_eq!(analysis.items.len(), 1);
        assert_eq!(analysis.items[0].name, "ไข่ดาว");
        assert_eq!(analysis.items[0].calories_kcal, Some(90.0));
        assert!(!analysis.is_degenerate());
    }

    #[test]
    fn test_snake_case_payload_deserializes() {
        let raw = r#"{"items": [{"name": "ข้าวสวย", "calories_kcal": 325.0}]}"#;
        let analysis: NutritionAnalysis = serde_json::from_str(raw).unwrap();
        assert_eq!(analysis.items[0].calories_kcal, Some(325.0));
        assert!(!analysis.is_degenerate());
    }

    #[test]
    fn test_all_zero_payload_is_degenerate() {
        let raw = r#"{
            "items": [{"name": "ข้าวกะเพรา", "calories": 0, "protein": 0, "carbs": 0, "fat": 0}],
            "totals": {"calories": 0, "protein": 0, "carbs": 0, "fat": 0}
        }"#;
        let analysis: NutritionAnalysis = serde_json::from_str(raw).unwrap();
        assert!(analysis.is_degenerate());
    }

    #[test]
    fn test_null_and_missing_fields_are_degenerate() {
        let raw = r#"{"items": [{"name": "ไข่ต้ม", "calories": null}, {"name": "ข้าว"}]}"#;
        let analysis: NutritionAnalysis = serde_json::from_str(raw).unwrap();
        assert!(analysis.is_degenerate());
    }

    #[test]
    fn test_empty_object_is_degenerate() {
        let analysis: NutritionAnalysis = serde_json::from_str("{}").unwrap();
        assert!(analysis.items.is_empty());
        assert!(analysis.is_degenerate());
    }

    #[test]
    fn test_single_nonzero_total_is_not_degenerate() {
        let raw = r#"{"items": [], "totals": {"calories": 540}}"#;
        let analysis: NutritionAnalysis = serde_json::from_str(raw).unwrap();
        assert!(!analysis.is_degenerate());
    }

    #[test]
    fn test_advice_response_aliases() {
        let from_message: AdviceResponse =
            serde_json::from_str(r#"{"message": "กินโปรตีนเพิ่ม", "tips": ["เวย์ 1 สกู๊ป"]}"#).unwrap();
        assert_eq!(from_message.advice, "กินโปรตีนเพิ่ม");
        assert_eq!(from_message.bullets.len(), 1);

        let bare: AdviceResponse = serde_json::from_str(r#"{"advice": "ok"}"#).unwrap();
        assert!(bare.bullets.is_empty());
    }
}
