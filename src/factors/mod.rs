//! Weighted climate factors for crop scoring
//!
//! Each factor lives in its own module with its weight, partial-credit
//! points, and tolerance band as module constants. A factor awards full
//! points inside the crop's suitable range, partial credit within the
//! tolerance band outside it, and zero points plus a warning beyond that.
//!
//! Factor weights: temperature 30, rainfall 25, altitude 20, soil pH 15,
//! bonuses up to 10 (uncapped against the base score).

pub mod altitude;
pub mod bonus;
pub mod rainfall;
pub mod soil_ph;
pub mod temperature;

/// Outcome of evaluating one climate factor.
///
/// At most one of `note` / `warning` is set: a note on full or partial
/// credit, a warning on a miss.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorOutcome {
    /// Points awarded (full weight, partial credit, or 0)
    pub points: u32,

    /// Positive matching-factor text for display
    pub note: Option<String>,

    /// Mismatch explanation naming the local value and the required range
    pub warning: Option<String>,
}

impl FactorOutcome {
    pub fn matched(points: u32, note: String) -> Self {
        FactorOutcome {
            points,
            note: Some(note),
            warning: None,
        }
    }

    pub fn missed(warning: String) -> Self {
        FactorOutcome {
            points: 0,
            note: None,
            warning: Some(warning),
        }
    }
}

/// Format a climate value the way the farmer-facing strings expect:
/// whole numbers without a decimal point, fractional values as-is.
pub(crate) fn fmt_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}
