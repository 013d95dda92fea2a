// engine/src/services/price_service/mod.rs
// PriceService owns the settings and the catalog handle; each request kind is
// handled in its own submodule.

use super::{
    FormatPriceRequest, FormatPriceResponse,
    ImportCatalogRequest, ImportCatalogResponse,
    ParsePriceRequest, ParsePriceResponse,
    TypingRequest, TypingResponse,
};
use crate::config::settings::EngineSettings;
use crate::data::catalog::CatalogStore;
use crate::error::EngineError;
use shared::models::Product;
use std::sync::{Arc, RwLock};

pub mod format_price;
pub mod helpers;
pub mod import_catalog;
pub mod parse_price;
pub mod simulate_typing;

pub struct PriceService {
    settings: EngineSettings,
    catalog: Arc<RwLock<CatalogStore>>,
}

impl PriceService {
    pub fn new(settings: EngineSettings, catalog: Arc<RwLock<CatalogStore>>) -> Self {
        PriceService { settings, catalog }
    }

    pub fn parse_price(&self, request: ParsePriceRequest) -> ParsePriceResponse {
        tracing::info!(input = ?request.input, "Received ParsePriceRequest");
        parse_price::handle_parse_price(request)
    }

    pub fn format_price(&self, request: FormatPriceRequest) -> FormatPriceResponse {
        tracing::info!(
            input = %request.input,
            finalize = request.finalize,
            "Received FormatPriceRequest"
        );
        format_price::handle_format_price(request)
    }

    pub fn simulate_typing(&self, request: TypingRequest) -> TypingResponse {
        tracing::info!(input = %request.input, "Received TypingRequest");
        simulate_typing::handle_simulate_typing(request)
    }

    pub fn import_catalog(&self, request: ImportCatalogRequest) -> Result<ImportCatalogResponse, EngineError> {
        tracing::info!(path = %request.file_path, "Received ImportCatalogRequest");
        import_catalog::handle_import_catalog(request, &self.settings, &self.catalog)
    }

    pub fn list_products(&self) -> Result<Vec<Product>, EngineError> {
        let store = self.catalog.read().map_err(helpers::poisoned)?;
        Ok(store.list())
    }

    /// Display string prefixed with the configured currency symbol, e.g. `R$ 20.000,00`.
    pub fn display_with_symbol(&self, display: &str) -> String {
        helpers::with_symbol(&self.settings.currency_symbol, display)
    }
}
