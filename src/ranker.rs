//! Crop recommendation ranking
//!
//! Applies the scorer across a whole crop catalog for one ward, then the
//! display shortlist policy the consuming screens rely on.

use crate::records::{ClimateRecord, CropVariety};
use crate::scorer::{score_crop, CropRecommendation};
use rayon::prelude::*;

/// Minimum score for a recommendation to pass the display filter.
pub const DISPLAY_THRESHOLD: u32 = 60;

/// How many recommendations to fall back to when nothing clears the
/// threshold but the ranked list is non-empty.
pub const FALLBACK_COUNT: usize = 10;

/// Score every variety in the catalog against one ward, drop zero scores,
/// sort descending, truncate to `limit`.
///
/// The sort is stable: varieties with equal scores keep catalog order.
/// An empty catalog yields an empty list, not an error.
pub fn rank_crops(
    crops: &[CropVariety],
    climate: &ClimateRecord,
    limit: usize,
) -> Vec<CropRecommendation> {
    // Parallel map preserves catalog order in the collected Vec.
    let mut recommendations: Vec<CropRecommendation> = crops
        .par_iter()
        .map(|crop| score_crop(crop, climate))
        .collect();

    recommendations.retain(|rec| rec.suitability_score > 0);
    recommendations.sort_by(|a, b| b.suitability_score.cmp(&a.suitability_score));
    recommendations.truncate(limit);
    recommendations
}

/// Display shortlist policy: keep scores >= 60; when nothing clears the
/// threshold but something scored > 0, show the top 10 anyway.
///
/// This two-tier fallback is what guarantees a ward never shows "no crops"
/// while any variety scored above zero.
pub fn shortlist_crops(ranked: Vec<CropRecommendation>) -> Vec<CropRecommendation> {
    let passing: Vec<CropRecommendation> = ranked
        .iter()
        .filter(|rec| rec.suitability_score >= DISPLAY_THRESHOLD)
        .cloned()
        .collect();

    if passing.is_empty() && !ranked.is_empty() {
        let mut top = ranked;
        top.truncate(FALLBACK_COUNT);
        top
    } else {
        passing
    }
}
