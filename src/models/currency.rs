//! Display currencies and their fixed rates against the INR base

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AetherisError;

/// Currency the budget is displayed in. The budget itself is always entered in INR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Inr,
    Usd,
    Eur,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Inr, Currency::Usd, Currency::Eur];

    /// ISO code
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Currency::Inr => "INR",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Inr => "₹",
            Currency::Usd => "$",
            Currency::Eur => "€",
        }
    }

    /// Multiplier from one INR
    #[must_use]
    pub fn rate(self) -> f64 {
        match self {
            Currency::Inr => 1.0,
            Currency::Usd => 0.012,
            Currency::Eur => 0.011,
        }
    }

    /// Selection label in the `"CODE (symbol)"` form, e.g. `"USD ($)"`
    #[must_use]
    pub fn label(self) -> String {
        format!("{} ({})", self.code(), self.symbol())
    }

    /// Parse a `"CODE (symbol)"` label. The code decides; the bracketed
    /// symbol must agree with it when present.
    pub fn from_label(label: &str) -> Result<Self, AetherisError> {
        let label = label.trim();
        let (code, rest) = label.split_once(' ').unwrap_or((label, ""));
        let currency = Self::from_code(code)?;

        let rest = rest.trim();
        if !rest.is_empty() {
            let symbol = rest
                .strip_prefix('(')
                .and_then(|s| s.strip_suffix(')'))
                .ok_or_else(|| {
                    AetherisError::validation(format!("Malformed currency label '{label}'"))
                })?;
            if symbol != currency.symbol() {
                return Err(AetherisError::validation(format!(
                    "Currency label '{label}' has symbol '{symbol}', expected '{}'",
                    currency.symbol()
                )));
            }
        }

        Ok(currency)
    }

    fn from_code(code: &str) -> Result<Self, AetherisError> {
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| AetherisError::validation(format!("Unknown currency '{code}'")))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Currency {
    type Err = AetherisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

/// One row of the currency table served to clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrencyRate {
    pub code: Currency,
    pub label: String,
    pub symbol: String,
    pub rate: f64,
}

impl From<Currency> for CurrencyRate {
    fn from(currency: Currency) -> Self {
        Self {
            code: currency,
            label: currency.label(),
            symbol: currency.symbol().to_string(),
            rate: currency.rate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("INR (₹)", Currency::Inr)]
    #[case("USD ($)", Currency::Usd)]
    #[case("EUR (€)", Currency::Eur)]
    #[case("usd", Currency::Usd)]
    #[case("  EUR  ", Currency::Eur)]
    fn test_from_label(#[case] label: &str, #[case] expected: Currency) {
        assert_eq!(Currency::from_label(label).unwrap(), expected);
    }

    #[rstest]
    #[case("GBP (£)")]
    #[case("USD (€)")]
    #[case("USD $")]
    #[case("")]
    fn test_from_label_rejects(#[case] label: &str) {
        let err = Currency::from_label(label).unwrap_err();
        assert!(matches!(err, AetherisError::Validation { .. }));
    }

    #[test]
    fn test_rates_and_labels() {
        assert_eq!(Currency::Inr.rate(), 1.0);
        assert_eq!(Currency::Usd.rate(), 0.012);
        assert_eq!(Currency::Eur.rate(), 0.011);
        assert_eq!(Currency::Usd.label(), "USD ($)");
        assert_eq!(Currency::default(), Currency::Inr);
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(serde_json::to_string(&Currency::Eur).unwrap(), "\"EUR\"");
        let parsed: Currency = serde_json::from_str("\"USD\"").unwrap();
        assert_eq!(parsed, Currency::Usd);
    }
}
