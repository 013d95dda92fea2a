// In-memory product catalog, the stand-in for the persistence API
use shared::models::Product;
use std::collections::BTreeMap;

pub struct CatalogStore {
    // Keyed by SKU when present, otherwise by product name.
    products: BTreeMap<String, Product>,
}

impl CatalogStore {
    pub fn new() -> Self {
        CatalogStore {
            products: BTreeMap::new(),
        }
    }

    /// Inserts or replaces products; a later product with the same key wins.
    /// Returns how many distinct keys were touched.
    pub fn upsert_products(&mut self, new_products: Vec<Product>) -> usize {
        let mut touched = std::collections::BTreeSet::new();
        for product in new_products {
            let key = product.catalog_key().to_string();
            touched.insert(key.clone());
            self.products.insert(key, product);
        }
        touched.len()
    }

    pub fn get(&self, key: &str) -> Option<&Product> {
        self.products.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Product> {
        self.products.remove(key)
    }

    // Sorted by key.
    pub fn list(&self) -> Vec<Product> {
        self.products.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}
