// Engine library root: configuration, the price-field form session, product
// validation, catalog import and the request/response price service.

pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod services;
