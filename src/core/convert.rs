//! Conversion engine.
//!
//! Converts an amount between two currencies by routing it through the base
//! unit: `(amount / rate(from)) * rate(to)`, rounded to 2 fractional digits
//! with half-away-from-zero semantics.

use crate::core::error::ConvertError;
use crate::core::rates::RateTable;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// A conversion as collected from the caller. The amount is kept as the raw
/// input string; validation happens in [`Converter::convert`].
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub amount: String,
    pub from_currency: String,
    pub to_currency: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    /// The parsed input amount.
    pub amount: Decimal,
    /// Converted amount, carrying exactly two fractional digits.
    pub converted_amount: Decimal,
}

pub struct Converter {
    rates: RateTable,
}

impl Converter {
    pub fn new(rates: RateTable) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Performs the conversion. Pure; depends only on the request and the
    /// rate table snapshot held by this converter.
    pub fn convert(&self, request: &ConversionRequest) -> Result<ConversionResult, ConvertError> {
        let amount = parse_amount(&request.amount)?;
        let from_rate = self.rates.rate(&request.from_currency)?;
        let to_rate = self.rates.rate(&request.to_currency)?;

        // Factors are validated positive at table construction, so the
        // division is always defined.
        let mut converted = (amount / from_rate) * to_rate;
        converted =
            converted.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        converted.rescale(2);

        Ok(ConversionResult {
            amount,
            converted_amount: converted,
        })
    }
}

fn parse_amount(input: &str) -> Result<Decimal, ConvertError> {
    let amount = Decimal::from_str(input.trim())
        .map_err(|_| ConvertError::InvalidAmount(input.to_string()))?;
    if amount < Decimal::ZERO {
        return Err(ConvertError::InvalidAmount(input.to_string()));
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn converter() -> Converter {
        let rates = HashMap::from([
            ("USD".to_string(), Decimal::new(1, 0)),
            ("EUR".to_string(), Decimal::new(82, 2)),
            ("GBP".to_string(), Decimal::new(73, 2)),
            ("JPY".to_string(), Decimal::new(10954, 2)),
        ]);
        Converter::new(RateTable::new(rates).unwrap())
    }

    fn request(amount: &str, from: &str, to: &str) -> ConversionRequest {
        ConversionRequest {
            amount: amount.to_string(),
            from_currency: from.to_string(),
            to_currency: to.to_string(),
        }
    }

    #[test]
    fn test_usd_to_eur() {
        let result = converter().convert(&request("100", "USD", "EUR")).unwrap();
        assert_eq!(result.converted_amount.to_string(), "82.00");
    }

    #[test]
    fn test_eur_to_gbp_via_base() {
        // (100 / 0.82) * 0.73 = 89.0243... -> 89.02
        let result = converter().convert(&request("100", "EUR", "GBP")).unwrap();
        assert_eq!(result.converted_amount.to_string(), "89.02");
    }

    #[test]
    fn test_zero_amount() {
        let result = converter().convert(&request("0", "JPY", "USD")).unwrap();
        assert_eq!(result.converted_amount.to_string(), "0.00");
    }

    #[test]
    fn test_same_currency_round_trips_amount() {
        let result = converter().convert(&request("100", "GBP", "GBP")).unwrap();
        assert_eq!(result.converted_amount.to_string(), "100.00");

        let result = converter()
            .convert(&request("12.345", "USD", "USD"))
            .unwrap();
        assert_eq!(result.converted_amount.to_string(), "12.35");
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        // 1.005 USD -> EUR at 1:1 would expose banker's rounding; use a
        // same-currency conversion so the factor cancels exactly.
        let result = converter().convert(&request("1.005", "USD", "USD")).unwrap();
        assert_eq!(result.converted_amount.to_string(), "1.01");
    }

    #[test]
    fn test_invalid_amounts() {
        for input in ["abc", "", "-5", "NaN", "1.2.3"] {
            let err = converter()
                .convert(&request(input, "USD", "EUR"))
                .unwrap_err();
            assert!(
                matches!(err, ConvertError::InvalidAmount(_)),
                "expected InvalidAmount for {input:?}"
            );
        }
    }

    #[test]
    fn test_unknown_currencies() {
        let err = converter()
            .convert(&request("100", "CHF", "EUR"))
            .unwrap_err();
        assert!(matches!(err, ConvertError::UnknownCurrency(code) if code == "CHF"));

        let err = converter()
            .convert(&request("100", "USD", "AUD"))
            .unwrap_err();
        assert!(matches!(err, ConvertError::UnknownCurrency(code) if code == "AUD"));
    }

    #[test]
    fn test_deterministic() {
        let req = request("42.42", "JPY", "GBP");
        let first = converter().convert(&req).unwrap();
        let second = converter().convert(&req).unwrap();
        assert_eq!(first, second);
    }
}
