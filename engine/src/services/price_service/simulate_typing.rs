// Handler for TypingRequest: replays the input one keystroke at a time, the
// way a browser hands each edited value back to the field, then blurs.
use crate::models::price_field::PriceField;
use crate::services::{TypingRequest, TypingResponse, TypingStep};
use shared::models::FinalizedPrice;

pub fn handle_simulate_typing(req_payload: TypingRequest) -> TypingResponse {
    let mut field = PriceField::new();
    let mut steps = Vec::with_capacity(req_payload.input.len());

    for ch in req_payload.input.chars() {
        let typed = format!("{}{}", field.display(), ch);
        let display = field.on_input(&typed).to_string();
        steps.push(TypingStep { typed, display });
    }

    let value = field.on_blur();
    tracing::debug!(steps = steps.len(), value = ?value, "Typing simulation finished");

    TypingResponse {
        steps,
        finalized: FinalizedPrice {
            value,
            display: field.display().to_string(),
        },
    }
}
