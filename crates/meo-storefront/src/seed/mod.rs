//! Catalog seed: reset the product table to the fixed launch catalog.
//!
//! Every run deletes all products and inserts the 15 entries below in order,
//! so the end state is the same regardless of what was stored before. A failure
//! part-way leaves the table partially populated.

use meo_core::catalog::Product;
use meo_core::error::Result;

use crate::store::ProductStore;

/// (id, name, price, description, quantity)
const CATALOG: [(&str, &str, i32, &str, i32); 15] = [
    // Notebooks/Journals
    (
        "A",
        "Premium Spiral Notebook",
        15000,
        "High-quality spiral notebook perfect for students and professionals",
        50,
    ),
    // Pens & Writing
    ("B", "Gel Pen Set", 25000, "Smooth writing gel pens in multiple colors", 100),
    // Art Supplies
    ("C", "Colored Pencil Set", 45000, "Professional grade colored pencils for artists", 30),
    // Office Supplies
    ("D", "Document Organizer", 35000, "Keep your documents organized and accessible", 25),
    // School Supplies
    ("E", "Student Starter Kit", 55000, "Complete kit for students with essential supplies", 40),
    // Planning & Organization
    ("F", "Weekly Planner", 28000, "Stay organized with this beautiful weekly planner", 35),
    // Craft Supplies
    ("G", "Craft Paper Bundle", 20000, "Assorted craft papers for all your creative projects", 60),
    // Highlighters
    ("H", "Highlighter Set", 18000, "Bright highlighters for studying and note-taking", 80),
    // Journals
    ("J", "Leather Bound Journal", 65000, "Elegant leather journal for special thoughts", 20),
    // Erasers & Correction
    ("K", "Eraser Collection", 12000, "Various erasers for different needs", 90),
    // Labels & Stickers
    ("L", "Label Maker Kit", 42000, "Create professional labels for organization", 15),
    // Markers
    ("M", "Permanent Marker Set", 32000, "Long-lasting permanent markers for various surfaces", 45),
    // Notebooks
    ("N", "Hardcover Notebook", 38000, "Durable hardcover notebook for important notes", 30),
    // Office Accessories
    ("O", "Desk Organizer Set", 48000, "Complete desk organization solution", 25),
    // Paper Products
    ("P", "Premium Paper Stack", 22000, "High-quality paper for printing and writing", 70),
];

/// The launch catalog in insertion order.
pub fn catalog() -> Vec<Product> {
    CATALOG
        .iter()
        .map(|&(id, name, price, description, quantity)| {
            Product::new(id, name, price, description, quantity)
        })
        .collect()
}

/// Replace the store contents with [`catalog`]. Returns the number of products created.
pub async fn run(store: &dyn ProductStore) -> Result<usize> {
    tracing::info!("seeding product catalog");

    let removed = store.delete_all().await?;
    tracing::info!(removed, "cleared existing products");

    let products = catalog();
    for p in &products {
        store.create(p).await?;
        tracing::info!(id = %p.id, name = %p.name, "created product");
    }

    tracing::info!(created = products.len(), "seeding completed");
    Ok(products.len())
}
