use anyhow::{anyhow, Result};
use csv::{ReaderBuilder, StringRecord};
use shared::models::Product;
use std::fs::File;
use std::io::{BufReader, Read};

use crate::config::settings::EngineSettings;
use crate::models::product_form::ProductForm;

pub struct ProductCsvParser;

impl ProductCsvParser {
    // CSV Header: Nome;SKU;Preço;Preço Promocional;Estoque
    // Example Row: Vestido floral;VF-01;R$ 1.234,56;999,90;1.200
    pub fn load_products_from_csv(file_path: &str, settings: &EngineSettings) -> Result<Vec<Product>> {
        let file = File::open(file_path).map_err(|e| anyhow!("Failed to open CSV file '{}': {}", file_path, e))?;
        let products = Self::load_products(BufReader::new(file), settings)?;
        tracing::info!(path = %file_path, count = products.len(), "Loaded product catalog from CSV");
        Ok(products)
    }

    pub fn load_products<R: Read>(reader: R, settings: &EngineSettings) -> Result<Vec<Product>> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(settings.delimiter_byte()?)
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let mut products = Vec::new();

        for (idx, result) in rdr.records().enumerate() {
            let line = idx + 2; // header is line 1
            let record = result.map_err(|e| anyhow!("Error reading CSV record at line {}: {}", line, e))?;

            let name = Self::get_field(&record, &headers, "Nome")
                .ok_or_else(|| anyhow!("Missing 'Nome' field in CSV record at line {}", line))?;
            let price = Self::get_field(&record, &headers, "Preço")
                .ok_or_else(|| anyhow!("Missing 'Preço' field in CSV record at line {}", line))?;

            let form = ProductForm {
                name: name.to_string(),
                sku: Self::get_field(&record, &headers, "SKU").unwrap_or_default().to_string(),
                price: price.to_string(),
                promotional_price: Self::get_field(&record, &headers, "Preço Promocional")
                    .unwrap_or_default()
                    .to_string(),
                stock: Self::get_field(&record, &headers, "Estoque").unwrap_or_default().to_string(),
            };

            let product = form
                .validate(settings)
                .map_err(|e| anyhow!("Invalid product at line {}: {}", line, e))?;
            products.push(product);
        }
        Ok(products)
    }

    // Columns are located by header name, so their order in the file is free.
    fn get_field<'a>(record: &'a StringRecord, headers: &StringRecord, name: &str) -> Option<&'a str> {
        headers
            .iter()
            .position(|header| header == name)
            .and_then(|pos| record.get(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_load_products_from_csv_valid_data() {
        let csv_content = "\
Nome;SKU;Preço;Preço Promocional;Estoque
Vestido floral;VF-01;R$ 1.234,56;999,90;1.200
Caneca;;20.000;;
Camiseta básica;CB-02;49.90;;7";
        let tmp_file = create_test_csv(csv_content);
        let products = ProductCsvParser::load_products_from_csv(
            tmp_file.path().to_str().unwrap(),
            &EngineSettings::default(),
        )
        .unwrap();

        assert_eq!(products.len(), 3);

        assert_eq!(products[0].sku.as_deref(), Some("VF-01"));
        assert_eq!(products[0].price, 1234.56);
        assert_eq!(products[0].promotional_price, Some(999.9));
        assert_eq!(products[0].stock, 1200);

        assert_eq!(products[1].name, "Caneca");
        assert_eq!(products[1].sku, None);
        assert_eq!(products[1].price, 20000.0); // three digits after a single dot are thousands
        assert_eq!(products[1].stock, 0);

        assert_eq!(products[2].price, 49.9); // two digits after a single dot are decimals
    }

    #[test]
    fn test_optional_columns_may_be_absent() {
        let csv_content = "Preço;Nome\n15,00;Chaveiro";
        let products = ProductCsvParser::load_products(csv_content.as_bytes(), &EngineSettings::default()).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Chaveiro");
        assert_eq!(products[0].price, 15.0);
    }

    #[test]
    fn test_header_only_file() {
        let csv_content = "Nome;SKU;Preço;Preço Promocional;Estoque";
        let tmp_file = create_test_csv(csv_content);
        let products = ProductCsvParser::load_products_from_csv(
            tmp_file.path().to_str().unwrap(),
            &EngineSettings::default(),
        )
        .unwrap();
        assert!(products.is_empty());
    }

    #[test]
    fn test_missing_price_column() {
        let csv_content = "Nome;SKU\nCaneca;C-1";
        let result = ProductCsvParser::load_products(csv_content.as_bytes(), &EngineSettings::default());
        assert!(result.unwrap_err().to_string().contains("Missing 'Preço' field"));
    }

    #[test]
    fn test_invalid_price_reports_line() {
        let csv_content = "Nome;Preço\nCaneca;10,00\nPrato;sob consulta";
        let result = ProductCsvParser::load_products(csv_content.as_bytes(), &EngineSettings::default());
        let message = result.unwrap_err().to_string();
        assert!(message.contains("line 3"), "{}", message);
        assert!(message.contains("Invalid price"), "{}", message);
    }

    #[test]
    fn test_custom_delimiter() {
        let settings = EngineSettings {
            csv_delimiter: ",".to_string(),
            ..EngineSettings::default()
        };
        let csv_content = "Nome,Preço\nCaneca,\"1.234,56\"";
        let products = ProductCsvParser::load_products(csv_content.as_bytes(), &settings).unwrap();
        assert_eq!(products[0].price, 1234.56);
    }

    #[test]
    fn test_missing_file() {
        let result = ProductCsvParser::load_products_from_csv("/nonexistent/catalogo.csv", &EngineSettings::default());
        assert!(result.unwrap_err().to_string().contains("Failed to open CSV file"));
    }
}
