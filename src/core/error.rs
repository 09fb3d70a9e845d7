//! Error types for conversion and history storage.

type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Errors produced while converting an amount between currencies.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The amount did not parse as a finite decimal >= 0.
    #[error("invalid amount: {0:?}")]
    InvalidAmount(String),

    /// A currency code is not present in the rate table.
    #[error("unknown currency: {0}")]
    UnknownCurrency(String),
}

/// Errors produced by the history store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage write failed")]
    Write(#[source] BoxedError),

    #[error("storage read failed")]
    Read(#[source] BoxedError),
}

impl StoreError {
    pub fn write(err: impl Into<BoxedError>) -> Self {
        StoreError::Write(err.into())
    }

    pub fn read(err: impl Into<BoxedError>) -> Self {
        StoreError::Read(err.into())
    }
}
