//! Temperature factor (weight 30)
//!
//! Full credit when the ward's annual mean temperature falls inside the
//! variety's [min, max] range. Within 3°C of the nearest bound the variety
//! still earns half credit as a close match.

use super::{fmt_value, FactorOutcome};

pub const FULL_POINTS: u32 = 30;
pub const PARTIAL_POINTS: u32 = 15;
pub const TOLERANCE_C: f64 = 3.0;

/// Evaluate temperature suitability for one variety.
pub fn assess(annual_temp_c: f64, min_temp_c: f64, max_temp_c: f64) -> FactorOutcome {
    if annual_temp_c >= min_temp_c && annual_temp_c <= max_temp_c {
        return FactorOutcome::matched(
            FULL_POINTS,
            format!(
                "Temperature suitable ({}°C within {}-{}°C)",
                fmt_value(annual_temp_c),
                fmt_value(min_temp_c),
                fmt_value(max_temp_c)
            ),
        );
    }

    // Distance to the nearest bound
    let diff = if annual_temp_c < min_temp_c {
        min_temp_c - annual_temp_c
    } else {
        annual_temp_c - max_temp_c
    };

    if diff <= TOLERANCE_C {
        FactorOutcome::matched(
            PARTIAL_POINTS,
            format!(
                "Temperature close match ({}°C, optimal {}-{}°C)",
                fmt_value(annual_temp_c),
                fmt_value(min_temp_c),
                fmt_value(max_temp_c)
            ),
        )
    } else {
        FactorOutcome::missed(format!(
            "Temperature mismatch: Current {}°C, Required {}-{}°C",
            fmt_value(annual_temp_c),
            fmt_value(min_temp_c),
            fmt_value(max_temp_c)
        ))
    }
}
