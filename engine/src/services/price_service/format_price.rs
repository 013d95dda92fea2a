// Handler for FormatPriceRequest
use crate::models::price_field::PriceField;
use crate::services::{FormatPriceRequest, FormatPriceResponse};

pub fn handle_format_price(req_payload: FormatPriceRequest) -> FormatPriceResponse {
    let mut field = PriceField::new();
    field.on_input(&req_payload.input);
    if req_payload.finalize {
        field.on_blur();
    }
    FormatPriceResponse {
        display: field.display().to_string(),
        value: field.value(),
    }
}
