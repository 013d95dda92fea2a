// One currency input being edited: the text the user sees plus the canonical
// value established by the last blur.
use shared::models::FinalizedPrice;
use shared::{finalize_on_blur, format_price_for_input, format_price_in_real_time};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceField {
    display: String,
    value: Option<f64>,
}

impl PriceField {
    pub fn new() -> Self {
        Self::default()
    }

    /// A field opened on an existing price, e.g. when editing a product.
    /// The value is kept as given; only the display is rounded to cents.
    /// Non-positive values open an empty field.
    pub fn with_value(value: f64) -> Self {
        if !(value.is_finite() && value > 0.0) {
            return Self::default();
        }
        Self {
            display: format_price_for_input(format!("{:.2}", value).as_str()),
            value: Some(value),
        }
    }

    /// Keystroke: the whole raw text of the input after the edit.
    /// The canonical value only changes on blur.
    pub fn on_input(&mut self, raw: &str) -> &str {
        self.display = format_price_in_real_time(raw);
        &self.display
    }

    pub fn on_blur(&mut self) -> Option<f64> {
        let FinalizedPrice { value, display } = finalize_on_blur(&self.display);
        if value.is_none() && !self.display.is_empty() {
            tracing::debug!(display = %self.display, "Clearing price field with no positive value");
        }
        self.display = display;
        self.value = value;
        self.value
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn is_empty(&self) -> bool {
        self.display.is_empty()
    }

    pub fn clear(&mut self) {
        self.display.clear();
        self.value = None;
    }
}
