// Handler for ImportCatalogRequest
use std::sync::RwLock;

use super::helpers;
use crate::config::settings::EngineSettings;
use crate::data::catalog::CatalogStore;
use crate::data::csv_parser::ProductCsvParser;
use crate::error::EngineError;
use crate::services::{ImportCatalogRequest, ImportCatalogResponse};

pub fn handle_import_catalog(
    req_payload: ImportCatalogRequest,
    settings: &EngineSettings,
    catalog: &RwLock<CatalogStore>,
) -> Result<ImportCatalogResponse, EngineError> {
    // The whole file is validated before the catalog is touched.
    let products = match ProductCsvParser::load_products_from_csv(&req_payload.file_path, settings) {
        Ok(p) => p,
        Err(e) => {
            tracing::error!(path = %req_payload.file_path, error_detail = %e, "Catalog import failed");
            return Err(EngineError::CsvDataFormatError(e.to_string()));
        }
    };

    let rows = products.len();
    let mut store = catalog.write().map_err(helpers::poisoned)?;
    let products_loaded = store.upsert_products(products);

    tracing::info!(path = %req_payload.file_path, rows, products_loaded, "Catalog import stored");
    Ok(ImportCatalogResponse {
        success: true,
        message: format!("Loaded {} products from {} rows", products_loaded, rows),
        products_loaded,
    })
}
