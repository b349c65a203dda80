//! Product catalogue queries and staff-only mutations.
//!
//! The mutating operations check the session role before anything goes on
//! the wire, so a CUSTOMER session cannot reach them no matter how they are
//! invoked. Input validation also runs client-side first; the backend
//! re-validates.

use crate::config;
use crate::error::Result;
use crate::models::{Product, ProductInput};

/// Query interface for banking products.
pub struct ProductQuery<'a> {
    conn: &'a crate::connection::Connection,
}

impl<'a> ProductQuery<'a> {
    pub fn new(conn: &'a crate::connection::Connection) -> Self {
        Self { conn }
    }

    /// List the full product catalogue.
    pub fn list(&self) -> Result<Vec<Product>> {
        self.conn.get(config::PRODUCTS_PATH)
    }

    /// Fetch a single product by id.
    pub fn get(&self, id: &str) -> Result<Product> {
        self.conn.get(&config::product_path(id))
    }

    /// Create a product. Staff only; input validated before submit.
    pub fn create(&self, input: &ProductInput) -> Result<Product> {
        self.conn.require_staff("creating a product")?;
        input.validate()?;
        self.conn.post(config::PRODUCTS_PATH, input)
    }

    /// Update a product. Staff only; input validated before submit.
    pub fn update(&self, id: &str, input: &ProductInput) -> Result<Product> {
        self.conn.require_staff("updating a product")?;
        input.validate()?;
        self.conn.put(&config::product_path(id), input)
    }

    /// Delete a product. Staff only.
    pub fn delete(&self, id: &str) -> Result<()> {
        self.conn.require_staff("deleting a product")?;
        self.conn.delete(&config::product_path(id))
    }
}
