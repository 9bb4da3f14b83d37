//! Farm Recommender Rust Implementation
//!
//! Recommendation engine for Kenyan smallholder advisory: matches crop
//! varieties, livestock breeds, and pasture/fodder varieties to a ward's
//! climate record and agro-ecological zone (AEZ).
//!
//! Two scoring models live side by side, deliberately asymmetric:
//! - Crops use a weighted multi-factor score (0-100: four climate factors
//!   worth 90 plus 10 bonus points, never clamped) with partial-credit
//!   tolerance bands per factor.
//! - Livestock and pasture use a hard binary AEZ match (100 or 0) - a breed
//!   is adapted to a zone or it is not.
//!
//! Architecture:
//! - `records`: immutable catalog value types
//! - `aez`: seven-band AEZ classifier (altitude + rainfall)
//! - `factors/`: individual weighted climate factors
//! - `scorer`: per-variety crop suitability scoring
//! - `ranker`: catalog-wide ranking and display shortlist
//! - `matcher`: livestock/pasture AEZ matching
//! - `grouping`: nested maps for presentational consumption
//! - `catalog`: CSV catalog loading with Polars

pub mod aez;
pub mod catalog;
pub mod factors;
pub mod grouping;
pub mod matcher;
pub mod ranker;
pub mod records;
pub mod scorer;

// Re-export commonly used types
pub use aez::Aez;
pub use catalog::{find_ward, Catalog};
pub use matcher::{
    recommend_livestock, recommend_pasture, AezRecommendation, AezSuited,
    LivestockRecommendation, PastureRecommendation,
};
pub use ranker::{rank_crops, shortlist_crops, DISPLAY_THRESHOLD, FALLBACK_COUNT};
pub use records::{ClimateRecord, CropVariety, LivestockRecord, PastureRecord};
pub use scorer::{score_crop, CropRecommendation};
