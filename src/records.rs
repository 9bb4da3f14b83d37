//! Catalog value types
//!
//! Immutable records loaded from the CSV catalogs. All parsing and header
//! mapping happens in `catalog`; these types are deliberately decoupled from
//! any particular column naming.

use serde::{Deserialize, Serialize};

/// Climate record for one ward.
///
/// County/subcounty names repeat across records; the (county, subcounty,
/// ward) triple is unique at ward granularity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateRecord {
    pub county: String,
    pub subcounty: String,
    pub ward: String,

    /// Ward centroid latitude (degrees)
    pub latitude: f64,

    /// Ward centroid longitude (degrees)
    pub longitude: f64,

    /// Altitude (meters above sea level)
    pub altitude_m: f64,

    /// Annual precipitation (mm)
    pub annual_rainfall_mm: f64,

    /// Annual mean temperature (°C)
    pub annual_temp_c: f64,

    /// Topsoil pH (unitless, 0-14)
    pub soil_ph: f64,
}

/// One crop variety with its suitability ranges and agronomic flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropVariety {
    /// Crop category, e.g. "Cereal"
    pub crop_type: String,

    /// Crop name, e.g. "Maize"
    pub crop: String,

    /// Variety name, e.g. "Local White"
    pub variety: String,

    /// Suitable soil texture labels (up to three in the source catalog)
    pub textures: Vec<String>,

    pub min_temp_c: f64,
    pub max_temp_c: f64,

    pub min_rainfall_mm: f64,
    pub max_rainfall_mm: f64,

    pub min_altitude_m: f64,
    pub max_altitude_m: f64,

    pub min_ph: f64,
    pub max_ph: f64,

    pub drought_tolerant: bool,
    pub pest_tolerant: bool,
    pub seed_available: bool,
    pub farmer_preferred: bool,
}

/// Livestock breed with the single AEZ it is suited to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LivestockRecord {
    /// Livestock category, e.g. "Dairy Cattle"
    pub category: String,

    /// Breed name, e.g. "Friesian"
    pub breed: String,

    /// Declared AEZ label, e.g. "zone III"
    pub aez: String,
}

/// Pasture or fodder variety with the single AEZ it is suited to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PastureRecord {
    /// Fodder category, e.g. "Grass"
    pub category: String,

    /// Pasture type, e.g. "Napier"
    pub pasture_type: String,

    /// Variety name
    pub variety: String,

    /// Declared AEZ label, e.g. "zone VI"
    pub aez: String,
}
