use super::ui;
use crate::store::HistoryStore;
use anyhow::Result;
use chrono::{TimeZone, Utc};
use comfy_table::Cell;

/// Displays all saved conversions that are still inside the retention
/// window.
pub async fn run(store: &HistoryStore) -> Result<()> {
    let records = store.list().await?;

    if records.is_empty() {
        println!(
            "{}",
            ui::style_text("No saved conversions.", ui::StyleType::Subtle)
        );
        return Ok(());
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Saved"),
        ui::header_cell("Amount"),
        ui::header_cell("From"),
        ui::header_cell("To"),
        ui::header_cell("Converted"),
    ]);

    for record in &records {
        table.add_row(vec![
            Cell::new(format_timestamp(record.timestamp)),
            ui::amount_cell(&record.conversion.amount.to_string()),
            Cell::new(&record.conversion.from_currency),
            Cell::new(&record.conversion.to_currency),
            ui::amount_cell(&record.conversion.converted_amount.to_string()),
        ]);
    }

    println!("{table}");
    println!(
        "\n{}: {}",
        ui::style_text("Saved conversions", ui::StyleType::TotalLabel),
        records.len()
    );

    Ok(())
}

fn format_timestamp(timestamp: i64) -> String {
    Utc.timestamp_millis_opt(timestamp)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}
