//! Altitude factor (weight 20)
//!
//! Full credit inside the variety's [min, max] altitude range, half credit
//! within 300m of the nearest bound.

use super::{fmt_value, FactorOutcome};

pub const FULL_POINTS: u32 = 20;
pub const PARTIAL_POINTS: u32 = 10;
pub const TOLERANCE_M: f64 = 300.0;

/// Evaluate altitude suitability for one variety.
pub fn assess(altitude_m: f64, min_altitude_m: f64, max_altitude_m: f64) -> FactorOutcome {
    if altitude_m >= min_altitude_m && altitude_m <= max_altitude_m {
        return FactorOutcome::matched(
            FULL_POINTS,
            format!(
                "Altitude suitable ({}m within {}-{}m)",
                fmt_value(altitude_m),
                fmt_value(min_altitude_m),
                fmt_value(max_altitude_m)
            ),
        );
    }

    let diff = if altitude_m < min_altitude_m {
        min_altitude_m - altitude_m
    } else {
        altitude_m - max_altitude_m
    };

    if diff <= TOLERANCE_M {
        FactorOutcome::matched(
            PARTIAL_POINTS,
            format!(
                "Altitude close match ({}m, optimal {}-{}m)",
                fmt_value(altitude_m),
                fmt_value(min_altitude_m),
                fmt_value(max_altitude_m)
            ),
        )
    } else {
        FactorOutcome::missed(format!(
            "Altitude mismatch: Current {}m, Required {}-{}m",
            fmt_value(altitude_m),
            fmt_value(min_altitude_m),
            fmt_value(max_altitude_m)
        ))
    }
}
