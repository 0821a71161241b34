//! Trip inputs entered on the Home page

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::Currency;
use crate::error::AetherisError;

/// Accepted total budget in INR
pub const BUDGET_RANGE: RangeInclusive<u32> = 5_000..=1_000_000;
/// Accepted trip length in days
pub const DAYS_RANGE: RangeInclusive<u32> = 1..=30;

pub const DEFAULT_BUDGET: u32 = 50_000;
pub const DEFAULT_DAYS: u32 = 3;

/// Comfort tier label. Display only, it never changes a computed number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ComfortTier {
    #[default]
    Standard,
    Premium,
    Quantum,
}

impl fmt::Display for ComfortTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComfortTier::Standard => "Standard",
            ComfortTier::Premium => "Premium",
            ComfortTier::Quantum => "Quantum",
        };
        f.write_str(name)
    }
}

/// Budget, length and display choices for a trip
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripInputs {
    /// Total budget in INR
    pub budget: u32,
    /// Trip length in days
    pub days: u32,
    pub currency: Currency,
    pub tier: ComfortTier,
}

impl Default for TripInputs {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
            days: DEFAULT_DAYS,
            currency: Currency::default(),
            tier: ComfortTier::default(),
        }
    }
}

impl TripInputs {
    /// Enforce the widget bounds. The allocator divides by `days`, so this
    /// must run before any inputs reach it.
    pub fn validate(&self) -> Result<(), AetherisError> {
        if !BUDGET_RANGE.contains(&self.budget) {
            return Err(AetherisError::validation(format!(
                "Budget must be between {} and {} INR, got {}",
                BUDGET_RANGE.start(),
                BUDGET_RANGE.end(),
                self.budget
            )));
        }

        if !DAYS_RANGE.contains(&self.days) {
            return Err(AetherisError::validation(format!(
                "Days must be between {} and {}, got {}",
                DAYS_RANGE.start(),
                DAYS_RANGE.end(),
                self.days
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults_are_valid() {
        let inputs = TripInputs::default();
        assert_eq!(inputs.budget, 50_000);
        assert_eq!(inputs.days, 3);
        assert_eq!(inputs.currency, Currency::Inr);
        assert_eq!(inputs.tier, ComfortTier::Standard);
        assert!(inputs.validate().is_ok());
    }

    #[rstest]
    #[case(5_000, 1)]
    #[case(1_000_000, 30)]
    #[case(75_500, 14)]
    fn test_bounds_accepted(#[case] budget: u32, #[case] days: u32) {
        let inputs = TripInputs { budget, days, ..TripInputs::default() };
        assert!(inputs.validate().is_ok());
    }

    #[rstest]
    #[case(4_999, 3, "Budget")]
    #[case(1_000_001, 3, "Budget")]
    #[case(50_000, 0, "Days")]
    #[case(50_000, 31, "Days")]
    fn test_bounds_rejected(#[case] budget: u32, #[case] days: u32, #[case] field: &str) {
        let inputs = TripInputs { budget, days, ..TripInputs::default() };
        let err = inputs.validate().unwrap_err();
        assert!(matches!(err, AetherisError::Validation { .. }));
        assert!(err.to_string().contains(field));
    }

    #[test]
    fn test_tier_display() {
        assert_eq!(ComfortTier::Quantum.to_string(), "Quantum");
    }
}
