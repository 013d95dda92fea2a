// Handler for ParsePriceRequest
use crate::services::{ParsePriceRequest, ParsePriceResponse};
use shared::parse_currency;

pub fn handle_parse_price(req_payload: ParsePriceRequest) -> ParsePriceResponse {
    let value = parse_currency(req_payload.input);
    if value.is_none() {
        tracing::debug!("Input has no numeric content");
    }
    ParsePriceResponse { value }
}
