//! Selection store error types.

use thiserror::Error;

/// Selection store error variants.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read selection store: {0}")]
    ReadFailed(String),

    #[error("failed to write selection store: {0}")]
    WriteFailed(String),

    #[error("selection store not available: {0}")]
    NotAvailable(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}
