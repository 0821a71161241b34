//! Budget split into flight and hotel estimates
//!
//! Fixed shares of the INR budget are converted into the display currency.
//! 40% goes to the flight, 30% is spread over the nights, and the last 30%
//! stays unallocated. The reserve is kept on the breakdown but never shown.

use serde::{Deserialize, Serialize};

use crate::models::{Currency, TripInputs};

/// Share of the total budget estimated for the flight
pub const FLIGHT_SHARE: f64 = 0.4;
/// Share of the total budget estimated for hotels over the whole trip
pub const HOTEL_SHARE: f64 = 0.3;

/// Converted estimates for a trip
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetBreakdown {
    pub flight_estimate: f64,
    pub hotel_per_night_estimate: f64,
    pub total_converted: f64,
    /// Converted amount neither flight nor hotel claims
    pub reserve: f64,
}

pub struct BudgetAllocator;

impl BudgetAllocator {
    /// Split `total_budget_base` and convert it with `rate`.
    ///
    /// No clamping happens here. `days` must be at least 1, which
    /// [`TripInputs::validate`] guarantees for values coming from clients.
    #[must_use]
    pub fn allocate(total_budget_base: f64, days: u32, rate: f64) -> BudgetBreakdown {
        let total_converted = total_budget_base * rate;
        let flight_estimate = total_budget_base * FLIGHT_SHARE * rate;
        let hotel_per_night_estimate = (total_budget_base * HOTEL_SHARE / f64::from(days)) * rate;
        let reserve = total_budget_base * (1.0 - FLIGHT_SHARE - HOTEL_SHARE) * rate;

        BudgetBreakdown {
            flight_estimate,
            hotel_per_night_estimate,
            total_converted,
            reserve,
        }
    }

    /// Allocate validated trip inputs in their chosen currency
    #[must_use]
    pub fn for_trip(inputs: &TripInputs) -> BudgetBreakdown {
        Self::allocate(
            f64::from(inputs.budget),
            inputs.days,
            inputs.currency.rate(),
        )
    }
}

/// Format an amount for display: symbol, integer part only, thousands separators.
///
/// The fraction is truncated, not rounded, so `1199.99` shows as `1,199`.
#[must_use]
pub fn format_amount(currency: Currency, amount: f64) -> String {
    format!("{}{}", currency.symbol(), group_thousands(amount.trunc() as i64))
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}
