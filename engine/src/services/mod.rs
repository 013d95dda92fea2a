// Request/response surface of the engine. Every handler takes one request
// value and returns one serde-serializable response, so the same types can be
// carried over JSON by whatever transport embeds the engine.
use serde::{Deserialize, Serialize};
use shared::models::{CurrencyInput, FinalizedPrice};

pub mod price_service;

pub use price_service::PriceService;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsePriceRequest {
    #[serde(default)]
    pub input: CurrencyInput,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsePriceResponse {
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatPriceRequest {
    pub input: String,
    // Run the blur step as well as the keystroke step.
    #[serde(default)]
    pub finalize: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatPriceResponse {
    pub display: String,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypingRequest {
    pub input: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypingStep {
    pub typed: String,
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypingResponse {
    pub steps: Vec<TypingStep>,
    pub finalized: FinalizedPrice,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportCatalogRequest {
    pub file_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportCatalogResponse {
    pub success: bool,
    pub message: String,
    pub products_loaded: usize,
}
