use serde::{Deserialize, Serialize};

/// What a currency field can hand to the parser: text typed by the user,
/// a number that is already canonical, or nothing at all.
///
/// Deserializes untagged, so the JSON values `"1.234,56"`, `1234.56` and
/// `null` map to `Text`, `Number` and `Empty` respectively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum CurrencyInput {
    Number(f64),
    Text(String),
    #[default]
    Empty,
}

impl From<&str> for CurrencyInput {
    fn from(s: &str) -> Self {
        CurrencyInput::Text(s.to_string())
    }
}

impl From<String> for CurrencyInput {
    fn from(s: String) -> Self {
        CurrencyInput::Text(s)
    }
}

impl From<&String> for CurrencyInput {
    fn from(s: &String) -> Self {
        CurrencyInput::Text(s.clone())
    }
}

impl From<f64> for CurrencyInput {
    fn from(n: f64) -> Self {
        CurrencyInput::Number(n)
    }
}

impl<T: Into<CurrencyInput>> From<Option<T>> for CurrencyInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(CurrencyInput::Empty, Into::into)
    }
}

/// Result of finalizing a price field when it loses focus.
/// `value` is `None` and `display` is empty when the field was cleared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalizedPrice {
    pub value: Option<f64>,
    pub display: String,
}

impl FinalizedPrice {
    pub fn cleared() -> Self {
        Self {
            value: None,
            display: String::new(),
        }
    }
}

// Prices travel as plain decimals: no currency symbol, '.' as decimal point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotional_price: Option<f64>,
    #[serde(default)]
    pub stock: u32,
}

impl Product {
    /// Key used by catalog storage: the SKU when there is one, the name otherwise.
    pub fn catalog_key(&self) -> &str {
        self.sku.as_deref().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_input_from_json_values() {
        let text: CurrencyInput = serde_json::from_str(r#""1.234,56""#).unwrap();
        assert_eq!(text, CurrencyInput::Text("1.234,56".to_string()));

        let number: CurrencyInput = serde_json::from_str("1234.56").unwrap();
        assert_eq!(number, CurrencyInput::Number(1234.56));

        let empty: CurrencyInput = serde_json::from_str("null").unwrap();
        assert_eq!(empty, CurrencyInput::Empty);
    }

    #[test]
    fn test_currency_input_from_option() {
        assert_eq!(CurrencyInput::from(None::<&str>), CurrencyInput::Empty);
        assert_eq!(CurrencyInput::from(Some(20.0)), CurrencyInput::Number(20.0));
    }

    #[test]
    fn test_product_wire_format_uses_plain_decimals() {
        let product = Product {
            name: "Camiseta".to_string(),
            sku: None,
            price: 1234.56,
            promotional_price: Some(999.9),
            stock: 3,
        };
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["price"], serde_json::json!(1234.56));
        assert_eq!(json["promotional_price"], serde_json::json!(999.9));
        assert!(json.get("sku").is_none());
    }

    #[test]
    fn test_catalog_key_prefers_sku() {
        let mut product = Product {
            name: "Caneca".to_string(),
            sku: Some("CAN-01".to_string()),
            price: 35.0,
            promotional_price: None,
            stock: 0,
        };
        assert_eq!(product.catalog_key(), "CAN-01");
        product.sku = None;
        assert_eq!(product.catalog_key(), "Caneca");
    }
}
