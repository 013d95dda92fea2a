// Helper functions for price_service handlers
use crate::error::EngineError;

pub fn with_symbol(symbol: &str, display: &str) -> String {
    if display.is_empty() || symbol.is_empty() {
        display.to_string()
    } else {
        format!("{} {}", symbol, display)
    }
}

pub fn poisoned<T>(err: std::sync::PoisonError<T>) -> EngineError {
    EngineError::CatalogError(format!("catalog lock poisoned: {}", err))
}
