pub mod cli;
pub mod core;
pub mod store;

use crate::core::config::AppConfig;
use crate::core::convert::Converter;
use crate::core::history::RetentionPolicy;
use crate::core::rates::RateTable;
use crate::store::HistoryStore;
use crate::store::disk::FjallBackend;
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

/// Commands the application can run after CLI parsing.
pub enum AppCommand {
    Convert {
        amount: String,
        from: String,
        to: String,
        save: bool,
        swap: bool,
    },
    History,
    Clear,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Currency converter starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let rates = RateTable::new(config.rates.clone())?;
    let converter = Converter::new(rates);

    match command {
        AppCommand::Convert {
            amount,
            from,
            to,
            save,
            swap,
        } => {
            // The store is only opened when the conversion is persisted.
            let store = if save {
                Some(open_history_store(&config)?)
            } else {
                None
            };
            cli::convert::run(&converter, store.as_ref(), &amount, &from, &to, swap).await
        }
        AppCommand::History => cli::history::run(&open_history_store(&config)?).await,
        AppCommand::Clear => cli::clear::run(&open_history_store(&config)?).await,
    }
}

fn open_history_store(config: &AppConfig) -> Result<HistoryStore> {
    let data_path = config.default_data_path()?.join("history");
    let backend = Arc::new(FjallBackend::open(&data_path)?);
    Ok(HistoryStore::new(
        backend,
        RetentionPolicy::days(config.retention_days),
    ))
}
