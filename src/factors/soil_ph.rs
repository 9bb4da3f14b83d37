//! Soil pH factor (weight 15)
//!
//! Full credit inside the variety's [min, max] pH range. Unlike the other
//! three factors, the tolerance band is measured from the *midpoint* of the
//! range rather than the nearest bound - a faithful reproduction of the
//! original scoring, not normalized. Partial credit is therefore only
//! reachable for ranges narrower than 1.0 pH unit.

use super::{fmt_value, FactorOutcome};

pub const FULL_POINTS: u32 = 15;
pub const PARTIAL_POINTS: u32 = 7;
pub const TOLERANCE: f64 = 0.5;

/// Midpoint of the variety's suitable pH range.
pub(crate) fn midpoint(min_ph: f64, max_ph: f64) -> f64 {
    (min_ph + max_ph) / 2.0
}

/// Evaluate soil pH suitability for one variety.
pub fn assess(soil_ph: f64, min_ph: f64, max_ph: f64) -> FactorOutcome {
    if soil_ph >= min_ph && soil_ph <= max_ph {
        return FactorOutcome::matched(
            FULL_POINTS,
            format!(
                "Soil pH suitable ({} within {}-{})",
                fmt_value(soil_ph),
                fmt_value(min_ph),
                fmt_value(max_ph)
            ),
        );
    }

    // Distance from the range midpoint, not the nearest bound.
    let diff = (soil_ph - midpoint(min_ph, max_ph)).abs();

    if diff <= TOLERANCE {
        FactorOutcome::matched(
            PARTIAL_POINTS,
            format!(
                "Soil pH close match ({}, optimal {}-{})",
                fmt_value(soil_ph),
                fmt_value(min_ph),
                fmt_value(max_ph)
            ),
        )
    } else {
        FactorOutcome::missed(format!(
            "pH mismatch: Current {}, Required {}-{}",
            fmt_value(soil_ph),
            fmt_value(min_ph),
            fmt_value(max_ph)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_within_range() {
        let outcome = assess(6.0, 5.5, 7.0);
        assert_eq!(outcome.points, FULL_POINTS);
        assert_eq!(
            outcome.note.as_deref(),
            Some("Soil pH suitable (6 within 5.5-7)")
        );
    }

    #[test]
    fn test_midpoint() {
        assert_relative_eq!(midpoint(5.5, 7.0), 6.25);
        assert_relative_eq!(midpoint(6.0, 6.6), 6.3);
    }

    #[test]
    fn test_partial_credit_measured_from_midpoint() {
        // Range [6.0, 6.6], midpoint 6.3: pH 5.9 is out of range but only
        // 0.4 from the midpoint, so it still earns partial credit.
        let close = assess(5.9, 6.0, 6.6);
        assert_eq!(close.points, PARTIAL_POINTS);
        assert_eq!(
            close.note.as_deref(),
            Some("Soil pH close match (5.9, optimal 6-6.6)")
        );
    }

    #[test]
    fn test_tolerance_edge_at_exactly_half_unit() {
        // Range [6.0, 6.6], midpoint 6.3: pH 5.8 is exactly 0.5 away.
        assert_eq!(assess(5.8, 6.0, 6.6).points, PARTIAL_POINTS);
        assert_eq!(assess(5.79, 6.0, 6.6).points, 0);
    }

    #[test]
    fn test_wide_range_has_no_reachable_partial_band() {
        // Range [5.5, 7.0] has half-width 0.75 > 0.5: any out-of-range pH
        // is already beyond the midpoint tolerance.
        let outcome = assess(5.4, 5.5, 7.0);
        assert_eq!(outcome.points, 0);
        assert_eq!(
            outcome.warning.as_deref(),
            Some("pH mismatch: Current 5.4, Required 5.5-7")
        );
    }
}
