#[cfg(test)]
mod tests {
    use meal_parse::{
        estimate_fallback_nutrition, normalize_and_parse_meal, recover_structured_object,
        Confidence, NutritionAnalysis, RecoveryResult,
    };

    #[test]
    fn test_absence_over_fabrication() {
        // unknown foods never produce a zero-valued synthetic entry
        let parsed = normalize_and_parse_meal("ส้มตำ 1 จาน กับ น้ำเปล่า 1 ขวด");
        assert_eq!(parsed.items.len(), 2);
        let estimates = estimate_fallback_nutrition(&parsed, "ส้มตำ 1 จาน กับ น้ำเปล่า 1 ขวด");
        assert!(estimates.is_empty());
    }

    #[test]
    fn test_known_items_only_in_mixed_meal() {
        let text = "ส้มตำ, ไข่ดาว 2 ฟอง, เวย์โปรตีน 1 สกู๊ป";
        let parsed = normalize_and_parse_meal(text);
        let estimates = estimate_fallback_nutrition(&parsed, text);

        let names: Vec<&str> = estimates
            .iter()
            .map(|e| e.canonical_name.as_str())
            .collect();
        assert_eq!(names, vec!["ไข่ดาว", "เวย์โปรตีน"]);
    }

    #[test]
    fn test_single_unit_scaling_is_high_confidence() {
        let parsed = normalize_and_parse_meal("ไข่ต้ม 3 ฟอง");
        let estimates = estimate_fallback_nutrition(&parsed, "ไข่ต้ม 3 ฟอง");

        assert_eq!(estimates.len(), 1);
        let egg = &estimates[0];
        assert_eq!(egg.confidence, Confidence::High);
        assert_eq!(egg.assumed_serving_label, "1 ฟอง");
        assert!((egg.calories_kcal - 231.0).abs() < 1e-9);
        assert!((egg.protein_g - 18.9).abs() < 1e-9);
        assert!(egg.notes[0].contains("standard serving"));
    }

    #[test]
    fn test_composite_quantity_scaling_is_medium_confidence() {
        let parsed = normalize_and_parse_meal("ข้าวกะเพรา 2 จาน");
        let estimates = estimate_fallback_nutrition(&parsed, "ข้าวกะเพรา 2 จาน");

        assert_eq!(estimates.len(), 1);
        assert_eq!(estimates[0].confidence, Confidence::Medium);
        assert!((estimates[0].calories_kcal - 1260.0).abs() < 1e-9);
    }

    #[test]
    fn test_explicit_weight_scales_against_reference() {
        let parsed = normalize_and_parse_meal("ข้าวกะเพรา 175 กรัม");
        let estimates = estimate_fallback_nutrition(&parsed, "ข้าวกะเพรา 175 กรัม");

        assert_eq!(estimates.len(), 1);
        let krapow = &estimates[0];
        assert_eq!(krapow.confidence, Confidence::High);
        // half the 350 g reference halves the plate baseline
        assert!((krapow.calories_kcal - 315.0).abs() < 1e-9);
        assert!((krapow.protein_g - 13.0).abs() < 1e-9);
        assert!((krapow.fat_g - 13.0).abs() < 1e-9);
        assert!(krapow.notes[0].contains("reference"));
    }

    #[test]
    fn test_degenerate_model_result_flows_into_usable_estimates() {
        // the end-to-end path: parse the meal, recover a degenerate model
        // payload, then replace it with deterministic estimates
        let meal_text = "ข้าวกะเพรา 1 จาน กับ ไข่ดาว 2 ฟอง";
        let parsed = normalize_and_parse_meal(meal_text);

        let model_output = concat!(
            "```json\n",
            "{\"items\": [",
            "{\"name\": \"ข้าวกะเพรา\", \"calories\": 0, \"protein\": 0},",
            "{\"name\": \"ไข่ดาว\", \"calories\": null}",
            "], \"totals\": {\"calories\": 0}}\n",
            "```"
        );
        let analysis = match recover_structured_object::<NutritionAnalysis>(model_output) {
            RecoveryResult::Success { value, .. } => value,
            RecoveryResult::Failure { reason, .. } => panic!("recovery failed: {}", reason),
        };
        assert!(analysis.is_degenerate());

        let estimates = estimate_fallback_nutrition(&parsed, meal_text);
        assert_eq!(estimates.len(), 2);
        for estimate in &estimates {
            assert!(estimate.calories_kcal > 0.0);
            assert!(estimate.protein_g >= 0.0);
            assert!(estimate.carbs_g >= 0.0);
            assert!(estimate.fat_g >= 0.0);
        }
    }

    #[test]
    fn test_estimates_serialize_with_lowercase_confidence() {
        let parsed = normalize_and_parse_meal("เวย์โปรตีน 2 สกู๊ป");
        let estimates = estimate_fallback_nutrition(&parsed, "เวย์โปรตีน 2 สกู๊ป");
        let json = serde_json::to_string(&estimates).unwrap();
        assert!(json.contains("\"confidence\":\"high\""));
        assert!(json.contains("\"calories_kcal\":240.0"));
    }
}
