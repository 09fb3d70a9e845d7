use super::ui;
use crate::core::{Conversion, ConversionRequest, ConvertError, Converter};
use crate::store::HistoryStore;
use anyhow::Result;

/// Runs a single conversion and prints the result. When `store` is given,
/// the conversion is also persisted to the history.
pub async fn run(
    converter: &Converter,
    store: Option<&HistoryStore>,
    amount: &str,
    from: &str,
    to: &str,
    swap: bool,
) -> Result<()> {
    let (from, to) = if swap { (to, from) } else { (from, to) };

    let request = ConversionRequest {
        amount: amount.to_string(),
        from_currency: from.to_string(),
        to_currency: to.to_string(),
    };

    let result = match converter.convert(&request) {
        Ok(result) => result,
        Err(err) => {
            let message = match &err {
                ConvertError::InvalidAmount(input) => {
                    format!("Please enter a valid amount, got {input:?}")
                }
                ConvertError::UnknownCurrency(code) => format!(
                    "Unknown currency {code}, expected one of: {}",
                    converter.rates().codes().join(", ")
                ),
            };
            eprintln!("{}", ui::style_text(&message, ui::StyleType::Error));
            return Err(err.into());
        }
    };

    println!(
        "{} {} = {}",
        result.amount,
        from,
        ui::style_text(
            &format!("{} {}", result.converted_amount, to),
            ui::StyleType::TotalValue
        )
    );

    if let Some(store) = store {
        let record = store
            .save(Conversion {
                from_currency: request.from_currency,
                to_currency: request.to_currency,
                amount: result.amount,
                converted_amount: result.converted_amount,
            })
            .await?;
        println!(
            "{}",
            ui::style_text(
                &format!("Saved to history ({})", record.timestamp),
                ui::StyleType::Subtle
            )
        );
    }

    Ok(())
}
