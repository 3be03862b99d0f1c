//! Product model shared by the store, the seed tool, and the HTTP API.

use serde::{Deserialize, Serialize};

/// One catalog entry. `price` is in the smallest currency unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Single-character category code (`"A"`, `"B"`, ...).
    pub id: String,
    pub name: String,
    pub price: i32,
    pub description: String,
    /// Units in stock.
    pub quantity: i32,
}

impl Product {
    pub fn new(id: &str, name: &str, price: i32, description: &str, quantity: i32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price,
            description: description.to_string(),
            quantity,
        }
    }
}
