use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("JSON error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("CSV data format error: {0}")]
    CsvDataFormatError(String),

    #[error("Invalid product: {0}")]
    InvalidProduct(String),

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Invalid promotional price: {0}")]
    InvalidPromotion(String),

    #[error("Catalog error: {0}")]
    CatalogError(String),

    // Lower layers (CSV import, quantity parsing) report through anyhow.
    #[error(transparent)]
    AnyhowError(#[from] anyhow::Error),
}

impl EngineError {
    /// True for errors caused by what the user typed, as opposed to the
    /// environment (files, configuration, poisoned state).
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidProduct(_)
                | EngineError::InvalidPrice(_)
                | EngineError::InvalidPromotion(_)
                | EngineError::CsvDataFormatError(_)
        )
    }
}
