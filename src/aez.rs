//! Agro-Ecological Zone classification
//!
//! Kenya's seven-band AEZ system, zone I (agro-alpine highlands) through
//! zone VII (lower lowlands). A ward's zone is computed on demand from its
//! altitude and annual rainfall; it is never stored on the climate record.
//!
//! Classification is two-pass: combined altitude+rainfall bands are tried
//! first, in order I -> VII. When altitude and rainfall fall in bands that
//! do not align (e.g. high altitude but low rainfall), altitude alone
//! decides. Rainfall is therefore authoritative only when both agree.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the seven agro-ecological zones.
///
/// Serialized as the canonical catalog label ("zone I" .. "zone VII").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Aez {
    #[serde(rename = "zone I")]
    ZoneI,
    #[serde(rename = "zone II")]
    ZoneII,
    #[serde(rename = "zone III")]
    ZoneIII,
    #[serde(rename = "zone IV")]
    ZoneIV,
    #[serde(rename = "zone V")]
    ZoneV,
    #[serde(rename = "zone VI")]
    ZoneVI,
    #[serde(rename = "zone VII")]
    ZoneVII,
}

impl Aez {
    /// Classify a location from altitude (m) and annual rainfall (mm).
    ///
    /// Total function: always returns a zone, including for negative or
    /// extreme inputs.
    pub fn from_climate(altitude_m: f64, rainfall_mm: f64) -> Self {
        // Pass 1: combined altitude + rainfall bands, evaluated I -> VII.
        // Zone I - Agro-Alpine: above 2,900m, more than 1,400mm
        if altitude_m > 2900.0 && rainfall_mm > 1400.0 {
            return Aez::ZoneI;
        }
        // Zone II - Upper Highlands: 2,400-2,900m, 1,200-2,000mm
        if (2400.0..=2900.0).contains(&altitude_m) && (1200.0..=2000.0).contains(&rainfall_mm) {
            return Aez::ZoneII;
        }
        // Zone III - Lower Highlands: 1,800-2,400m, 1,000-1,800mm
        if (1800.0..=2400.0).contains(&altitude_m) && (1000.0..=1800.0).contains(&rainfall_mm) {
            return Aez::ZoneIII;
        }
        // Zone IV - Upper Midlands: 1,500-1,800m, 950-1,500mm
        if (1500.0..=1800.0).contains(&altitude_m) && (950.0..=1500.0).contains(&rainfall_mm) {
            return Aez::ZoneIV;
        }
        // Zone V - Lower Midlands: 1,200-1,500m, 850-1,200mm
        if (1200.0..=1500.0).contains(&altitude_m) && (850.0..=1200.0).contains(&rainfall_mm) {
            return Aez::ZoneV;
        }
        // Zone VI - Upper Lowlands: 600-1,200m, 700-1,100mm
        if (600.0..=1200.0).contains(&altitude_m) && (700.0..=1100.0).contains(&rainfall_mm) {
            return Aez::ZoneVI;
        }
        // Zone VII - Lower Lowlands: 0-600m, less than 700mm
        if (0.0..=600.0).contains(&altitude_m) && rainfall_mm < 700.0 {
            return Aez::ZoneVII;
        }

        // Pass 2: the bands disagree - altitude alone decides.
        if altitude_m > 2900.0 {
            Aez::ZoneI
        } else if altitude_m >= 2400.0 {
            Aez::ZoneII
        } else if altitude_m >= 1800.0 {
            Aez::ZoneIII
        } else if altitude_m >= 1500.0 {
            Aez::ZoneIV
        } else if altitude_m >= 1200.0 {
            Aez::ZoneV
        } else if altitude_m >= 600.0 {
            Aez::ZoneVI
        } else {
            Aez::ZoneVII
        }
    }

    /// Canonical label as used in the livestock/pasture catalogs.
    pub fn label(&self) -> &'static str {
        match self {
            Aez::ZoneI => "zone I",
            Aez::ZoneII => "zone II",
            Aez::ZoneIII => "zone III",
            Aez::ZoneIV => "zone IV",
            Aez::ZoneV => "zone V",
            Aez::ZoneVI => "zone VI",
            Aez::ZoneVII => "zone VII",
        }
    }

    /// Descriptive band name for display.
    pub fn band_name(&self) -> &'static str {
        match self {
            Aez::ZoneI => "Agro-Alpine",
            Aez::ZoneII => "Upper Highlands",
            Aez::ZoneIII => "Lower Highlands",
            Aez::ZoneIV => "Upper Midlands",
            Aez::ZoneV => "Lower Midlands",
            Aez::ZoneVI => "Upper Lowlands",
            Aez::ZoneVII => "Lower Lowlands",
        }
    }

    /// Case-insensitive comparison against a catalog AEZ label.
    pub fn matches_label(&self, declared: &str) -> bool {
        declared.eq_ignore_ascii_case(self.label())
    }

    /// All zones in ordinal order.
    pub fn all() -> &'static [Aez] {
        &[
            Aez::ZoneI,
            Aez::ZoneII,
            Aez::ZoneIII,
            Aez::ZoneIV,
            Aez::ZoneV,
            Aez::ZoneVI,
            Aez::ZoneVII,
        ]
    }
}

impl fmt::Display for Aez {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_bands() {
        assert_eq!(Aez::from_climate(3000.0, 1500.0), Aez::ZoneI);
        assert_eq!(Aez::from_climate(2600.0, 1400.0), Aez::ZoneII);
        assert_eq!(Aez::from_climate(2000.0, 1300.0), Aez::ZoneIII);
        assert_eq!(Aez::from_climate(1600.0, 1000.0), Aez::ZoneIV);
        assert_eq!(Aez::from_climate(1350.0, 900.0), Aez::ZoneV);
        assert_eq!(Aez::from_climate(800.0, 900.0), Aez::ZoneVI);
        assert_eq!(Aez::from_climate(300.0, 500.0), Aez::ZoneVII);
    }

    #[test]
    fn test_zone_i_boundary_is_strict() {
        // Zone I requires strictly more than 2,900m and 1,400mm; the exact
        // boundary values satisfy the zone II band instead.
        assert_eq!(Aez::from_climate(2900.0, 1400.0), Aez::ZoneII);
        assert_eq!(Aez::from_climate(2901.0, 1401.0), Aez::ZoneI);
    }

    #[test]
    fn test_altitude_fallback_when_bands_disagree() {
        // High altitude but arid: rainfall band fails, altitude decides.
        assert_eq!(Aez::from_climate(3000.0, 400.0), Aez::ZoneI);
        assert_eq!(Aez::from_climate(2500.0, 400.0), Aez::ZoneII);
        assert_eq!(Aez::from_climate(2000.0, 400.0), Aez::ZoneIII);
        // Low altitude but very wet: zone VII rainfall test fails.
        assert_eq!(Aez::from_climate(300.0, 2000.0), Aez::ZoneVII);
    }

    #[test]
    fn test_totality_over_extremes() {
        // Every input pair classifies to one of the seven zones.
        for &altitude in &[-500.0, -1.0, 0.0, 599.9, 600.0, 1500.0, 2900.0, 9000.0] {
            for &rainfall in &[-100.0, 0.0, 699.9, 700.0, 1400.0, 5000.0] {
                let zone = Aez::from_climate(altitude, rainfall);
                assert!(Aez::all().contains(&zone));
            }
        }
        // Negative altitude bottoms out at zone VII.
        assert_eq!(Aez::from_climate(-5.0, 500.0), Aez::ZoneVII);
    }

    #[test]
    fn test_nan_inputs_fall_through_to_zone_vii() {
        // NaN fails every comparison, so both passes exhaust to the default.
        assert_eq!(Aez::from_climate(f64::NAN, f64::NAN), Aez::ZoneVII);
        assert_eq!(Aez::from_climate(f64::NAN, 1000.0), Aez::ZoneVII);
    }

    #[test]
    fn test_label_matching_is_case_insensitive() {
        assert!(Aez::ZoneIII.matches_label("zone III"));
        assert!(Aez::ZoneIII.matches_label("Zone iii"));
        assert!(Aez::ZoneIII.matches_label("ZONE III"));
        assert!(!Aez::ZoneIII.matches_label("zone II"));
        assert!(!Aez::ZoneIII.matches_label(" zone III"));
    }

    #[test]
    fn test_labels_and_band_names() {
        assert_eq!(Aez::ZoneI.label(), "zone I");
        assert_eq!(Aez::ZoneVII.label(), "zone VII");
        assert_eq!(Aez::ZoneI.band_name(), "Agro-Alpine");
        assert_eq!(Aez::ZoneIV.band_name(), "Upper Midlands");
    }
}
