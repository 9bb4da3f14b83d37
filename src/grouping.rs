//! Grouping utilities
//!
//! Folds flat recommendation lists into nested maps for presentational
//! consumption (category cards, chat summaries). Buckets preserve the
//! incoming ranked order; no re-sorting happens here.

use crate::matcher::{LivestockRecommendation, PastureRecommendation};
use crate::scorer::CropRecommendation;
use rustc_hash::FxHashMap;

/// Group crop recommendations by crop category ("Type").
pub fn group_crops_by_type(
    recommendations: &[CropRecommendation],
) -> FxHashMap<String, Vec<CropRecommendation>> {
    let mut groups: FxHashMap<String, Vec<CropRecommendation>> = FxHashMap::default();
    for rec in recommendations {
        groups
            .entry(rec.crop.crop_type.clone())
            .or_default()
            .push(rec.clone());
    }
    groups
}

/// Group crop recommendations by category, then by crop name.
pub fn group_crops_by_type_and_crop(
    recommendations: &[CropRecommendation],
) -> FxHashMap<String, FxHashMap<String, Vec<CropRecommendation>>> {
    let mut groups: FxHashMap<String, FxHashMap<String, Vec<CropRecommendation>>> =
        FxHashMap::default();
    for rec in recommendations {
        groups
            .entry(rec.crop.crop_type.clone())
            .or_default()
            .entry(rec.crop.crop.clone())
            .or_default()
            .push(rec.clone());
    }
    groups
}

/// Group livestock recommendations by livestock category.
pub fn group_livestock_by_category(
    recommendations: &[LivestockRecommendation],
) -> FxHashMap<String, Vec<LivestockRecommendation>> {
    let mut groups: FxHashMap<String, Vec<LivestockRecommendation>> = FxHashMap::default();
    for rec in recommendations {
        groups
            .entry(rec.record.category.clone())
            .or_default()
            .push(rec.clone());
    }
    groups
}

/// Group pasture recommendations by fodder category.
pub fn group_pasture_by_category(
    recommendations: &[PastureRecommendation],
) -> FxHashMap<String, Vec<PastureRecommendation>> {
    let mut groups: FxHashMap<String, Vec<PastureRecommendation>> = FxHashMap::default();
    for rec in recommendations {
        groups
            .entry(rec.record.category.clone())
            .or_default()
            .push(rec.clone());
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::CropVariety;

    fn rec(crop_type: &str, crop: &str, variety: &str, score: u32) -> CropRecommendation {
        CropRecommendation {
            crop: CropVariety {
                crop_type: crop_type.to_string(),
                crop: crop.to_string(),
                variety: variety.to_string(),
                textures: vec![],
                min_temp_c: 15.0,
                max_temp_c: 25.0,
                min_rainfall_mm: 800.0,
                max_rainfall_mm: 1500.0,
                min_altitude_m: 1000.0,
                max_altitude_m: 2000.0,
                min_ph: 5.5,
                max_ph: 7.0,
                drought_tolerant: false,
                pest_tolerant: false,
                seed_available: false,
                farmer_preferred: false,
            },
            suitability_score: score,
            matching_factors: vec![],
            warnings: vec![],
        }
    }

    #[test]
    fn test_group_by_type_preserves_ranked_order() {
        let ranked = vec![
            rec("Cereal", "Maize", "H614", 95),
            rec("Legume", "Bean", "Rosecoco", 88),
            rec("Cereal", "Maize", "Local White", 80),
            rec("Cereal", "Sorghum", "Gadam", 75),
        ];

        let groups = group_crops_by_type(&ranked);
        assert_eq!(groups.len(), 2);

        let cereals = &groups["Cereal"];
        let varieties: Vec<&str> = cereals.iter().map(|r| r.crop.variety.as_str()).collect();
        assert_eq!(varieties, vec!["H614", "Local White", "Gadam"]);
    }

    #[test]
    fn test_two_level_grouping() {
        let ranked = vec![
            rec("Cereal", "Maize", "H614", 95),
            rec("Cereal", "Sorghum", "Gadam", 85),
            rec("Cereal", "Maize", "Local White", 80),
        ];

        let groups = group_crops_by_type_and_crop(&ranked);
        let maize = &groups["Cereal"]["Maize"];
        assert_eq!(maize.len(), 2);
        assert_eq!(maize[0].crop.variety, "H614");
        assert_eq!(maize[1].crop.variety, "Local White");
        assert_eq!(groups["Cereal"]["Sorghum"].len(), 1);
    }

    #[test]
    fn test_empty_input_yields_empty_map() {
        assert!(group_crops_by_type(&[]).is_empty());
        assert!(group_crops_by_type_and_crop(&[]).is_empty());
    }
}
