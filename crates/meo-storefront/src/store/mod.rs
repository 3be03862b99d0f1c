//! Product persistence.
//!
//! Handlers and the seed tool only see `ProductStore`; the backing store is
//! chosen once at startup and injected through `AppState`.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use meo_core::catalog::Product;
use meo_core::error::Result;

pub use memory::MemoryProductStore;
pub use postgres::PgProductStore;

#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Remove every product. Returns the number of rows deleted.
    async fn delete_all(&self) -> Result<u64>;

    /// Insert one product. Fails with `Conflict` when the id exists.
    async fn create(&self, product: &Product) -> Result<()>;

    /// All products ordered by id.
    async fn list(&self) -> Result<Vec<Product>>;

    async fn get(&self, id: &str) -> Result<Option<Product>>;

    /// Release pooled connections. Safe to call more than once.
    async fn close(&self) {}
}
