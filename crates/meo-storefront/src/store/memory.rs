use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use meo_core::catalog::Product;
use meo_core::error::{MeoError, Result};

use super::ProductStore;

/// Process-local store, ordered by id. Used by tests and local runs without a database.
#[derive(Default)]
pub struct MemoryProductStore {
    rows: RwLock<BTreeMap<String, Product>>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let rows = products.into_iter().map(|p| (p.id.clone(), p)).collect();
        Self { rows: RwLock::new(rows) }
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn delete_all(&self) -> Result<u64> {
        let mut rows = self.rows.write().await;
        let n = rows.len() as u64;
        rows.clear();
        Ok(n)
    }

    async fn create(&self, product: &Product) -> Result<()> {
        let mut rows = self.rows.write().await;
        if rows.contains_key(&product.id) {
            return Err(MeoError::Conflict(format!("product {} already exists", product.id)));
        }
        rows.insert(product.id.clone(), product.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Product>> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Product>> {
        Ok(self.rows.read().await.get(id).cloned())
    }
}
