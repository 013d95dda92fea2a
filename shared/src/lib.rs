pub mod models;
pub mod utils;

// The currency functions are what every consumer reaches for.
pub use utils::brazilian_format::{
    finalize_on_blur, format_price_for_input, format_price_in_real_time, parse_currency,
};
