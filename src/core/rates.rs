//! Currency rate table.

use crate::core::error::ConvertError;
use anyhow::Result;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Conversion factors keyed by currency code, relative to an implicit base
/// unit where the factor is 1.
#[derive(Debug, Clone)]
pub struct RateTable {
    rates: HashMap<String, Decimal>,
}

impl RateTable {
    /// Builds a table from code/factor pairs. Factors must be positive:
    /// a zero factor would make the base-unit division undefined.
    pub fn new(rates: HashMap<String, Decimal>) -> Result<Self> {
        for (code, factor) in &rates {
            if *factor <= Decimal::ZERO {
                anyhow::bail!("conversion factor for {code} must be positive, got {factor}");
            }
        }
        Ok(Self { rates })
    }

    /// Looks up the conversion factor for a currency code.
    pub fn rate(&self, code: &str) -> Result<Decimal, ConvertError> {
        self.rates
            .get(code)
            .copied()
            .ok_or_else(|| ConvertError::UnknownCurrency(code.to_string()))
    }

    /// Known currency codes, sorted for stable display.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.rates.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}
