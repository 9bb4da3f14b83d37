//! Livestock / pasture AEZ matching
//!
//! Unlike crop scoring there are no tolerance bands here: a breed or fodder
//! variety is adapted to a zone or it is not. Each record's declared AEZ
//! label is compared (case-insensitively) against the ward's computed zone;
//! matches score exactly 100, everything else scores 0 and is dropped from
//! the output entirely.

use crate::aez::Aez;
use crate::records::{ClimateRecord, LivestockRecord, PastureRecord};
use serde::{Deserialize, Serialize};

/// Score awarded on an AEZ match; non-matches score 0.
pub const MATCH_SCORE: u32 = 100;

/// A record that declares the single AEZ it is suited to.
pub trait AezSuited {
    fn declared_aez(&self) -> &str;
}

impl AezSuited for LivestockRecord {
    fn declared_aez(&self) -> &str {
        &self.aez
    }
}

impl AezSuited for PastureRecord {
    fn declared_aez(&self) -> &str {
        &self.aez
    }
}

/// Recommendation produced by the binary AEZ matcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AezRecommendation<R> {
    pub record: R,

    /// Exactly 100 (match) or 0 (non-match) by construction
    pub suitability_score: u32,

    pub aez_match: bool,

    /// Zone resolved from the query ward's altitude and rainfall
    pub zone: Aez,
}

pub type LivestockRecommendation = AezRecommendation<LivestockRecord>;
pub type PastureRecommendation = AezRecommendation<PastureRecord>;

/// Match a catalog of AEZ-keyed records against one ward.
///
/// The zone is computed once from the ward's altitude and rainfall. Output
/// is stable-sorted descending by score and filtered to matches only, so
/// surviving entries keep catalog order.
pub fn match_by_aez<R: AezSuited + Clone>(
    records: &[R],
    climate: &ClimateRecord,
) -> Vec<AezRecommendation<R>> {
    let zone = Aez::from_climate(climate.altitude_m, climate.annual_rainfall_mm);

    let mut recommendations: Vec<AezRecommendation<R>> = records
        .iter()
        .map(|record| {
            let aez_match = zone.matches_label(record.declared_aez());
            AezRecommendation {
                record: record.clone(),
                suitability_score: if aez_match { MATCH_SCORE } else { 0 },
                aez_match,
                zone,
            }
        })
        .collect();

    recommendations.sort_by(|a, b| b.suitability_score.cmp(&a.suitability_score));
    recommendations.retain(|rec| rec.suitability_score > 0);
    recommendations
}

/// Livestock breeds suited to the ward's zone.
pub fn recommend_livestock(
    records: &[LivestockRecord],
    climate: &ClimateRecord,
) -> Vec<LivestockRecommendation> {
    match_by_aez(records, climate)
}

/// Pasture/fodder varieties suited to the ward's zone.
pub fn recommend_pasture(
    records: &[PastureRecord],
    climate: &ClimateRecord,
) -> Vec<PastureRecommendation> {
    match_by_aez(records, climate)
}
