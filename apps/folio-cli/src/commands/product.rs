//! # Product Commands
//!
//! Catalog maintenance from the menu.

use folio_core::{Amount, NewProduct, ProductRecord};
use folio_store::Bookstore;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CommandError, CommandResult};

/// Product DTO for the presenter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub title: String,
    pub author: String,
    pub category: String,
    pub price: Amount,
    pub stock: u32,
}

impl From<&ProductRecord> for ProductDto {
    fn from(p: &ProductRecord) -> Self {
        ProductDto {
            id: p.id.clone(),
            title: p.title.clone(),
            author: p.author.clone(),
            category: p.category.clone(),
            price: p.price,
            stock: p.stock,
        }
    }
}

impl From<ProductRecord> for ProductDto {
    fn from(p: ProductRecord) -> Self {
        ProductDto {
            id: p.id,
            title: p.title,
            author: p.author,
            category: p.category,
            price: p.price,
            stock: p.stock,
        }
    }
}

/// Adds a product and returns it with its new id.
pub fn add_product(store: &mut Bookstore, input: NewProduct) -> CommandResult<ProductDto> {
    debug!(title = %input.title, "add_product command");

    let id = store.add_product(input)?;
    get_product(store, &id)
}

/// Gets a product by its catalog id.
pub fn get_product(store: &Bookstore, id: &str) -> CommandResult<ProductDto> {
    store
        .get_product(id.trim())
        .map(ProductDto::from)
        .map_err(CommandError::from)
}

/// Replaces price and stock of a product.
pub fn update_product(
    store: &mut Bookstore,
    id: &str,
    price: f64,
    stock: u32,
) -> CommandResult<ProductDto> {
    debug!(id = %id, price, stock, "update_product command");

    let id = id.trim();
    store.update_product(id, Amount::new(price), stock)?;
    get_product(store, id)
}

/// Deletes a product, returning what was removed.
pub fn delete_product(store: &mut Bookstore, id: &str) -> CommandResult<ProductDto> {
    debug!(id = %id, "delete_product command");

    let removed = store.delete_product(id.trim())?;
    Ok(removed.into())
}

/// All products in insertion order.
pub fn list_products(store: &Bookstore) -> Vec<ProductDto> {
    store.list_products().map(ProductDto::from).collect()
}
