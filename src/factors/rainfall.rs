//! Rainfall factor (weight 25)
//!
//! Full credit inside the variety's [min, max] annual rainfall range.
//! Within 200mm of the nearest bound the variety earns 12 points - slightly
//! under half weight, preserved as-is from the original scoring table.

use super::{fmt_value, FactorOutcome};

pub const FULL_POINTS: u32 = 25;
pub const PARTIAL_POINTS: u32 = 12;
pub const TOLERANCE_MM: f64 = 200.0;

/// Evaluate rainfall suitability for one variety.
pub fn assess(annual_rainfall_mm: f64, min_rainfall_mm: f64, max_rainfall_mm: f64) -> FactorOutcome {
    if annual_rainfall_mm >= min_rainfall_mm && annual_rainfall_mm <= max_rainfall_mm {
        return FactorOutcome::matched(
            FULL_POINTS,
            format!(
                "Rainfall suitable ({}mm within {}-{}mm)",
                fmt_value(annual_rainfall_mm),
                fmt_value(min_rainfall_mm),
                fmt_value(max_rainfall_mm)
            ),
        );
    }

    let diff = if annual_rainfall_mm < min_rainfall_mm {
        min_rainfall_mm - annual_rainfall_mm
    } else {
        annual_rainfall_mm - max_rainfall_mm
    };

    if diff <= TOLERANCE_MM {
        FactorOutcome::matched(
            PARTIAL_POINTS,
            format!(
                "Rainfall close match ({}mm, optimal {}-{}mm)",
                fmt_value(annual_rainfall_mm),
                fmt_value(min_rainfall_mm),
                fmt_value(max_rainfall_mm)
            ),
        )
    } else {
        FactorOutcome::missed(format!(
            "Rainfall mismatch: Current {}mm, Required {}-{}mm",
            fmt_value(annual_rainfall_mm),
            fmt_value(min_rainfall_mm),
            fmt_value(max_rainfall_mm)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_range() {
        let outcome = assess(1450.0, 1000.0, 1800.0);
        assert_eq!(outcome.points, FULL_POINTS);
        assert_eq!(
            outcome.note.as_deref(),
            Some("Rainfall suitable (1450mm within 1000-1800mm)")
        );
    }

    #[test]
    fn test_tolerance_band_edges() {
        // Exactly 200mm above the maximum.
        let close = assess(2000.0, 1000.0, 1800.0);
        assert_eq!(close.points, PARTIAL_POINTS);

        let miss = assess(2000.5, 1000.0, 1800.0);
        assert_eq!(miss.points, 0);
        assert_eq!(
            miss.warning.as_deref(),
            Some("Rainfall mismatch: Current 2000.5mm, Required 1000-1800mm")
        );
    }

    #[test]
    fn test_partial_credit_is_not_half_weight() {
        // 12 of 25, not 12.5 - the asymmetry is part of the contract.
        assert_eq!(PARTIAL_POINTS, 12);
        assert_eq!(assess(900.0, 1000.0, 1800.0).points, 12);
    }
}
