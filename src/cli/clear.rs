use super::ui;
use crate::store::HistoryStore;
use anyhow::Result;

/// Deletes all saved conversions, expired ones included.
pub async fn run(store: &HistoryStore) -> Result<()> {
    store.clear().await?;
    println!(
        "{}",
        ui::style_text("Cleared all saved conversions.", ui::StyleType::TotalLabel)
    );
    Ok(())
}
