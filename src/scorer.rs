//! Crop suitability scorer
//!
//! Scores one (variety, ward) pair across the four weighted climate factors
//! plus bonuses. Deterministic, pure, and total: no input panics, no I/O,
//! a fresh recommendation per call.
//!
//! Factor order is fixed (temperature, rainfall, altitude, pH, bonuses) and
//! the matching-factor / warning lists accumulate in that order - the UI
//! renders them positionally, so ordering is part of the contract.

use crate::factors::{altitude, bonus, rainfall, soil_ph, temperature, FactorOutcome};
use crate::records::{ClimateRecord, CropVariety};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Scored crop recommendation for one ward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropRecommendation {
    pub crop: CropVariety,

    /// Unclamped weighted sum: up to 90 from the climate factors plus up to
    /// 10 bonus points
    pub suitability_score: u32,

    /// Positive matches, in factor evaluation order
    pub matching_factors: Vec<String>,

    /// Mismatch explanations, in factor evaluation order
    pub warnings: Vec<String>,
}

impl CropRecommendation {
    /// Farmer-facing suitability banding used on recommendation cards.
    pub fn suitability_label(&self) -> &'static str {
        if self.suitability_score >= 80 {
            "Highly Suitable"
        } else if self.suitability_score >= 60 {
            "Moderately Suitable"
        } else {
            "Marginally Suitable"
        }
    }
}

/// Score one crop variety against one ward's climate record.
pub fn score_crop(crop: &CropVariety, climate: &ClimateRecord) -> CropRecommendation {
    let mut score = 0;
    let mut matching_factors: SmallVec<[String; 8]> = SmallVec::new();
    let mut warnings: SmallVec<[String; 4]> = SmallVec::new();

    let mut take = |outcome: FactorOutcome| {
        score += outcome.points;
        if let Some(note) = outcome.note {
            matching_factors.push(note);
        }
        if let Some(warning) = outcome.warning {
            warnings.push(warning);
        }
    };

    take(temperature::assess(
        climate.annual_temp_c,
        crop.min_temp_c,
        crop.max_temp_c,
    ));
    take(rainfall::assess(
        climate.annual_rainfall_mm,
        crop.min_rainfall_mm,
        crop.max_rainfall_mm,
    ));
    take(altitude::assess(
        climate.altitude_m,
        crop.min_altitude_m,
        crop.max_altitude_m,
    ));
    take(soil_ph::assess(climate.soil_ph, crop.min_ph, crop.max_ph));

    let (bonus_points, bonus_notes) = bonus::assess(crop, climate.annual_rainfall_mm);
    score += bonus_points;
    matching_factors.extend(bonus_notes);

    CropRecommendation {
        crop: crop.clone(),
        suitability_score: score,
        matching_factors: matching_factors.into_vec(),
        warnings: warnings.into_vec(),
    }
}
