//! Bonus factors (nominal weight 10, uncapped)
//!
//! Agronomic flags that add on top of the four climate factors. The sum is
//! never clamped: the four factor weights total 90, so a perfect base with
//! all four bonuses reaches exactly 100. Clamping anywhere would reorder
//! varieties that differ only in bonus count.

use crate::records::CropVariety;
use smallvec::SmallVec;

pub const DROUGHT_POINTS: u32 = 3;
pub const PEST_POINTS: u32 = 3;
pub const SEED_POINTS: u32 = 2;
pub const PREFERENCE_POINTS: u32 = 2;

/// Rainfall below which drought tolerance becomes an advantage.
pub const LOW_RAINFALL_MM: f64 = 800.0;

/// Evaluate bonus flags for one variety.
///
/// Returns the bonus points and one matching-factor note per triggered
/// bonus, in fixed order: drought, pest, seed availability, preference.
pub fn assess(crop: &CropVariety, annual_rainfall_mm: f64) -> (u32, SmallVec<[String; 4]>) {
    let mut points = 0;
    let mut notes: SmallVec<[String; 4]> = SmallVec::new();

    if crop.drought_tolerant && annual_rainfall_mm < LOW_RAINFALL_MM {
        points += DROUGHT_POINTS;
        notes.push("Drought tolerant variety (good for low rainfall)".to_string());
    }

    if crop.pest_tolerant {
        points += PEST_POINTS;
        notes.push("Pest resistant variety".to_string());
    }

    if crop.seed_available {
        points += SEED_POINTS;
        notes.push("Seeds readily available".to_string());
    }

    if crop.farmer_preferred {
        points += PREFERENCE_POINTS;
        notes.push("Preferred by local farmers".to_string());
    }

    (points, notes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variety_with_flags(drought: bool, pest: bool, seed: bool, preferred: bool) -> CropVariety {
        CropVariety {
            crop_type: "Cereal".to_string(),
            crop: "Sorghum".to_string(),
            variety: "Gadam".to_string(),
            textures: vec!["sandy loam".to_string()],
            min_temp_c: 20.0,
            max_temp_c: 30.0,
            min_rainfall_mm: 400.0,
            max_rainfall_mm: 800.0,
            min_altitude_m: 0.0,
            max_altitude_m: 1500.0,
            min_ph: 5.5,
            max_ph: 7.5,
            drought_tolerant: drought,
            pest_tolerant: pest,
            seed_available: seed,
            farmer_preferred: preferred,
        }
    }

    #[test]
    fn test_all_bonuses_sum_to_ten() {
        let crop = variety_with_flags(true, true, true, true);
        let (points, notes) = assess(&crop, 500.0);
        assert_eq!(points, 10);
        assert_eq!(notes.len(), 4);
        assert_eq!(notes[0], "Drought tolerant variety (good for low rainfall)");
        assert_eq!(notes[3], "Preferred by local farmers");
    }

    #[test]
    fn test_drought_bonus_requires_low_rainfall() {
        let crop = variety_with_flags(true, false, false, false);
        assert_eq!(assess(&crop, 799.9).0, DROUGHT_POINTS);
        assert_eq!(assess(&crop, 800.0).0, 0);
        assert_eq!(assess(&crop, 1200.0).0, 0);
    }

    #[test]
    fn test_pest_bonus_is_unconditional() {
        let crop = variety_with_flags(false, true, false, false);
        assert_eq!(assess(&crop, 2000.0).0, PEST_POINTS);
    }

    #[test]
    fn test_no_flags_no_notes() {
        let crop = variety_with_flags(false, false, false, false);
        let (points, notes) = assess(&crop, 500.0);
        assert_eq!(points, 0);
        assert!(notes.is_empty());
    }
}
