use async_trait::async_trait;
use deadpool_postgres::{Manager, ManagerConfig, Object, Pool, RecyclingMethod};
use tokio_postgres::error::SqlState;
use tokio_postgres::{NoTls, Row};
use tracing::{debug, info};

use meo_core::catalog::Product;
use meo_core::error::{MeoError, Result};

use crate::config::DatabaseSection;

use super::ProductStore;

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS "Product" (
    id          TEXT PRIMARY KEY,
    name        TEXT NOT NULL,
    price       INTEGER NOT NULL,
    description TEXT NOT NULL,
    quantity    INTEGER NOT NULL
)"#;

const INSERT_SQL: &str = r#"
INSERT INTO "Product" (id, name, price, description, quantity)
VALUES ($1, $2, $3, $4, $5)"#;

/// PostgreSQL-backed product table behind a connection pool.
#[derive(Clone)]
pub struct PgProductStore {
    pool: Pool,
}

impl PgProductStore {
    /// Build the pool. Connections are opened lazily on first use.
    pub fn connect(cfg: &DatabaseSection) -> Result<Self> {
        info!(max_size = cfg.pool_size, "creating product store pool");

        let pg_config: tokio_postgres::Config = cfg
            .url
            .parse()
            .map_err(|e| MeoError::Config(format!("invalid database url: {e}")))?;

        let manager = Manager::from_config(
            pg_config,
            NoTls,
            ManagerConfig { recycling_method: RecyclingMethod::Fast },
        );

        let pool = Pool::builder(manager)
            .max_size(cfg.pool_size)
            .build()
            .map_err(|e| MeoError::Store(format!("pool build failed: {e}")))?;

        Ok(Self { pool })
    }

    /// Create the product table when it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<()> {
        let conn = self.conn().await?;
        conn.batch_execute(SCHEMA_SQL).await.map_err(query_err)?;
        debug!("product schema ensured");
        Ok(())
    }

    async fn conn(&self) -> Result<Object> {
        self.pool
            .get()
            .await
            .map_err(|e| MeoError::Store(format!("connection unavailable: {e}")))
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn delete_all(&self) -> Result<u64> {
        let conn = self.conn().await?;
        conn.execute(r#"DELETE FROM "Product""#, &[]).await.map_err(query_err)
    }

    async fn create(&self, product: &Product) -> Result<()> {
        let conn = self.conn().await?;
        conn.execute(
            INSERT_SQL,
            &[
                &product.id,
                &product.name,
                &product.price,
                &product.description,
                &product.quantity,
            ],
        )
        .await
        .map_err(|e| {
            if e.code() == Some(&SqlState::UNIQUE_VIOLATION) {
                MeoError::Conflict(format!("product {} already exists", product.id))
            } else {
                query_err(e)
            }
        })?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Product>> {
        let conn = self.conn().await?;
        let rows = conn
            .query(
                r#"SELECT id, name, price, description, quantity FROM "Product" ORDER BY id"#,
                &[],
            )
            .await
            .map_err(query_err)?;
        rows.iter().map(product_from_row).collect()
    }

    async fn get(&self, id: &str) -> Result<Option<Product>> {
        let conn = self.conn().await?;
        let row = conn
            .query_opt(
                r#"SELECT id, name, price, description, quantity FROM "Product" WHERE id = $1"#,
                &[&id],
            )
            .await
            .map_err(query_err)?;
        row.as_ref().map(product_from_row).transpose()
    }

    async fn close(&self) {
        self.pool.close();
        debug!("product store pool closed");
    }
}

fn product_from_row(row: &Row) -> Result<Product> {
    let col = |e: tokio_postgres::Error| MeoError::Store(format!("bad product row: {e}"));
    Ok(Product {
        id: row.try_get("id").map_err(col)?,
        name: row.try_get("name").map_err(col)?,
        price: row.try_get("price").map_err(col)?,
        description: row.try_get("description").map_err(col)?,
        quantity: row.try_get("quantity").map_err(col)?,
    })
}

fn query_err(e: tokio_postgres::Error) -> MeoError {
    MeoError::Store(format!("query failed: {e}"))
}
