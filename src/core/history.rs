//! Conversion history records and retention.

use chrono::Duration;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The payload of a saved conversion. This is the serialized body persisted
/// by the history store; field names follow the on-disk JSON layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    pub from_currency: String,
    pub to_currency: String,
    pub amount: Decimal,
    pub converted_amount: Decimal,
}

/// A persisted conversion together with its storage key. The timestamp is
/// the creation time in milliseconds since the epoch and is unique per
/// record.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRecord {
    pub timestamp: i64,
    pub conversion: Conversion,
}

/// Decides which persisted records are still visible. Records are only
/// filtered at read time; expired entries stay in storage until an explicit
/// clear.
#[derive(Debug, Clone, Copy)]
pub struct RetentionPolicy {
    window_ms: i64,
}

impl RetentionPolicy {
    pub const DEFAULT_DAYS: i64 = 30;

    pub fn days(days: i64) -> Self {
        Self {
            window_ms: Duration::days(days).num_milliseconds(),
        }
    }

    /// A record is visible iff it is strictly younger than the retention
    /// window. Both timestamps are milliseconds since the epoch.
    pub fn is_visible(&self, timestamp: i64, now: i64) -> bool {
        now - timestamp < self.window_ms
    }
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self::days(Self::DEFAULT_DAYS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY_MS: i64 = 24 * 60 * 60 * 1000;

    #[test]
    fn test_fresh_record_is_visible() {
        let policy = RetentionPolicy::default();
        let now = 1_700_000_000_000;
        assert!(policy.is_visible(now, now));
        assert!(policy.is_visible(now - 29 * DAY_MS, now));
    }

    #[test]
    fn test_expired_record_is_hidden() {
        let policy = RetentionPolicy::default();
        let now = 1_700_000_000_000;
        // Exactly 30 days old is already outside the window.
        assert!(!policy.is_visible(now - 30 * DAY_MS, now));
        assert!(!policy.is_visible(now - 45 * DAY_MS, now));
    }

    #[test]
    fn test_custom_window() {
        let policy = RetentionPolicy::days(1);
        let now = 1_700_000_000_000;
        assert!(policy.is_visible(now - DAY_MS + 1, now));
        assert!(!policy.is_visible(now - DAY_MS, now));
    }

    #[test]
    fn test_conversion_wire_layout() {
        let conversion = Conversion {
            from_currency: "USD".to_string(),
            to_currency: "EUR".to_string(),
            amount: Decimal::new(100, 0),
            converted_amount: Decimal::new(8200, 2),
        };

        let json = serde_json::to_value(&conversion).unwrap();
        assert_eq!(json["fromCurrency"], "USD");
        assert_eq!(json["toCurrency"], "EUR");
        assert_eq!(json["amount"], "100");
        assert_eq!(json["convertedAmount"], "82.00");

        let back: Conversion = serde_json::from_value(json).unwrap();
        assert_eq!(back, conversion);
    }
}
