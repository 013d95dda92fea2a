// Raw product form fields as typed, and their validation into a Product.
use crate::config::settings::EngineSettings;
use crate::error::EngineError;
use shared::models::Product;
use shared::parse_currency;
use shared::utils::brazilian_format::parse_quantity;

#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    pub name: String,
    pub sku: String,
    pub price: String,
    pub promotional_price: String,
    pub stock: String,
}

impl ProductForm {
    pub fn validate(&self, settings: &EngineSettings) -> Result<Product, EngineError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(EngineError::InvalidProduct("name is required".to_string()));
        }

        let price = parse_currency(self.price.as_str())
            .ok_or_else(|| EngineError::InvalidPrice(format!("'{}' is not a price", self.price)))?;
        if settings.require_positive_price && price <= 0.0 {
            return Err(EngineError::InvalidPrice(format!("price must be greater than zero, got {}", price)));
        }

        let promotional_price = match self.promotional_price.trim() {
            "" => None,
            raw => {
                let promo = parse_currency(raw)
                    .ok_or_else(|| EngineError::InvalidPromotion(format!("'{}' is not a price", raw)))?;
                if promo <= 0.0 {
                    return Err(EngineError::InvalidPromotion(format!("must be greater than zero, got {}", promo)));
                }
                if promo >= price {
                    return Err(EngineError::InvalidPromotion(format!(
                        "{} is not lower than the regular price {}",
                        promo, price
                    )));
                }
                Some(promo)
            }
        };

        let stock = match self.stock.trim() {
            "" => 0,
            raw => parse_quantity(raw)?,
        };

        let sku = match self.sku.trim() {
            "" => None,
            s => Some(s.to_string()),
        };

        Ok(Product {
            name: name.to_string(),
            sku,
            price,
            promotional_price,
            stock,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(price: &str, promo: &str) -> ProductForm {
        ProductForm {
            name: "Vestido floral".to_string(),
            sku: " VF-01 ".to_string(),
            price: price.to_string(),
            promotional_price: promo.to_string(),
            stock: "1.200".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        let product = form("R$ 1.234,56", "999,90").validate(&EngineSettings::default()).unwrap();
        assert_eq!(product.name, "Vestido floral");
        assert_eq!(product.sku.as_deref(), Some("VF-01"));
        assert_eq!(product.price, 1234.56);
        assert_eq!(product.promotional_price, Some(999.9));
        assert_eq!(product.stock, 1200);
    }

    #[test]
    fn test_blank_optional_fields() {
        let mut f = form("20.000", "");
        f.sku = String::new();
        f.stock = "  ".to_string();
        let product = f.validate(&EngineSettings::default()).unwrap();
        assert_eq!(product.price, 20000.0);
        assert_eq!(product.sku, None);
        assert_eq!(product.promotional_price, None);
        assert_eq!(product.stock, 0);
    }

    #[test]
    fn test_missing_name() {
        let mut f = form("10", "");
        f.name = "   ".to_string();
        assert!(matches!(f.validate(&EngineSettings::default()), Err(EngineError::InvalidProduct(_))));
    }

    #[test]
    fn test_unparseable_price() {
        let result = form("grátis", "").validate(&EngineSettings::default());
        assert!(matches!(result, Err(EngineError::InvalidPrice(_))));
    }

    #[test]
    fn test_zero_price_depends_on_settings() {
        let strict = EngineSettings::default();
        assert!(matches!(form("0,00", "").validate(&strict), Err(EngineError::InvalidPrice(_))));

        let lenient = EngineSettings {
            require_positive_price: false,
            ..EngineSettings::default()
        };
        assert_eq!(form("0,00", "").validate(&lenient).unwrap().price, 0.0);
    }

    #[test]
    fn test_promotion_must_be_lower() {
        let result = form("100,00", "100").validate(&EngineSettings::default());
        assert!(matches!(result, Err(EngineError::InvalidPromotion(_))));

        let result = form("100,00", "abc").validate(&EngineSettings::default());
        assert!(matches!(result, Err(EngineError::InvalidPromotion(_))));
    }

    #[test]
    fn test_invalid_stock() {
        let mut f = form("10", "");
        f.stock = "dez".to_string();
        let err = f.validate(&EngineSettings::default()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse quantity"));
    }
}
