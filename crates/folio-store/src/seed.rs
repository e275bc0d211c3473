//! # Bootstrap Catalog
//!
//! The fixed set of books a fresh session starts with.
//!
//! ## Loaded Products
//! | id   | title               | author      | category    | price | stock |
//! |------|---------------------|-------------|-------------|-------|-------|
//! | P001 | Python 101          | John Smith  | Programming | 25.99 | 10    |
//! | P002 | Digital Marketing   | Alice Brown | Business    | 19.99 | 15    |
//! | P003 | Data Science Basics | Jane Doe    | Data        | 30.00 | 8     |
//! | P004 | AI Revolution       | Dr. Tech    | Technology  | 40.50 | 5     |
//! | P005 | History of Art      | L. Vinci    | Art         | 22.75 | 12    |
//!
//! Ids are issued by the catalog store like any other add, so they follow
//! the configured id strategy.

use folio_core::NewProduct;
use tracing::info;

use crate::bookstore::Bookstore;
use crate::error::StoreResult;

/// (title, author, category, price, stock)
const BOOTSTRAP_CATALOG: &[(&str, &str, &str, f64, u32)] = &[
    ("Python 101", "John Smith", "Programming", 25.99, 10),
    ("Digital Marketing", "Alice Brown", "Business", 19.99, 15),
    ("Data Science Basics", "Jane Doe", "Data", 30.00, 8),
    ("AI Revolution", "Dr. Tech", "Technology", 40.50, 5),
    ("History of Art", "L. Vinci", "Art", 22.75, 12),
];

/// The bootstrap books as catalog-add inputs.
pub fn bootstrap_products() -> Vec<NewProduct> {
    BOOTSTRAP_CATALOG
        .iter()
        .map(|&(title, author, category, price, stock)| {
            NewProduct::new(title, author, category, price, stock)
        })
        .collect()
}

/// Adds every bootstrap book to the store, returning the issued ids.
pub fn load_bootstrap_catalog(store: &mut Bookstore) -> StoreResult<Vec<String>> {
    let ids = bootstrap_products()
        .into_iter()
        .map(|product| store.add_product(product))
        .collect::<StoreResult<Vec<_>>>()?;

    info!(count = ids.len(), "Bootstrap catalog loaded");
    Ok(ids)
}
