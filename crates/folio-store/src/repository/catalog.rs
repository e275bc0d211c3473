//! # Catalog Store
//!
//! Products keyed by catalog id in an `IndexMap`, iterated in insertion
//! order.
//!
//! ## Key Operations
//! - Add with a freshly issued id
//! - Price/stock update (no other field is editable)
//! - Hard delete (past sales keep their snapshots)

use folio_core::validation;
use folio_core::{Amount, NewProduct, ProductRecord};
use indexmap::IndexMap;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::ids::{IdStrategy, ProductIdGenerator};

/// Insertion-ordered product catalog.
///
/// ## Usage
/// ```rust
/// use folio_core::{Amount, NewProduct};
/// use folio_store::{CatalogStore, IdStrategy};
///
/// let mut catalog = CatalogStore::new(IdStrategy::Monotonic);
/// let id = catalog.add(NewProduct::new("Dune", "Frank Herbert", "Fiction", 9.99, 3)).unwrap();
/// assert_eq!(id, "P001");
///
/// catalog.update(&id, Amount::new(11.5), 0).unwrap();
/// assert_eq!(catalog.get_by_id(&id).unwrap().stock, 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    /// Keyed by catalog id, in insertion order.
    products: IndexMap<String, ProductRecord>,
    ids: ProductIdGenerator,
}

impl CatalogStore {
    /// Creates an empty catalog using the given id strategy.
    pub fn new(strategy: IdStrategy) -> Self {
        CatalogStore {
            products: IndexMap::new(),
            ids: ProductIdGenerator::new(strategy),
        }
    }

    /// Inserts a new product and returns its id.
    ///
    /// ## Returns
    /// * `Ok(id)` - Product stored
    /// * `Err(StoreError::Domain(Validation))` - A field violates the add preconditions
    /// * `Err(StoreError::DuplicateProductId)` - Issued id is still live (CatalogSize only)
    ///
    /// A rejected add leaves the size unchanged, so under CatalogSize every
    /// later add computes the same id and is rejected too, until a delete
    /// brings the size down to a free slot.
    pub fn add(&mut self, new: NewProduct) -> StoreResult<String> {
        new.validate()?;

        let id = self.ids.next(self.products.len());
        if self.contains(&id) {
            return Err(StoreError::DuplicateProductId(id));
        }

        debug!(id = %id, title = %new.title, "Inserting product");

        self.products
            .insert(id.clone(), ProductRecord::from_new(id.clone(), new));
        Ok(id)
    }

    /// Replaces price and stock of an existing product.
    ///
    /// ## Returns
    /// * `Ok(())` - Update successful
    /// * `Err(StoreError::NotFound)` - Product doesn't exist; nothing changed
    pub fn update(&mut self, id: &str, price: Amount, stock: u32) -> StoreResult<()> {
        validation::validate_price(price)?;

        let product = self
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found("Product", id))?;

        debug!(id = %id, price = price.value(), stock, "Updating product");

        product.price = price;
        product.stock = stock;
        Ok(())
    }

    /// Removes a product and returns it.
    ///
    /// Sales that reference it are untouched: they carry their own snapshot.
    pub fn delete(&mut self, id: &str) -> StoreResult<ProductRecord> {
        // shift_remove keeps the remaining products in insertion order
        let removed = self
            .products
            .shift_remove(id)
            .ok_or_else(|| StoreError::not_found("Product", id))?;

        debug!(id = %id, "Deleting product");

        Ok(removed)
    }

    /// Gets a product by its id.
    pub fn get_by_id(&self, id: &str) -> Option<&ProductRecord> {
        self.products.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut ProductRecord> {
        self.products.get_mut(id)
    }

    /// All products in insertion order.
    pub fn list(&self) -> impl ExactSizeIterator<Item = &ProductRecord> + '_ {
        self.products.values()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.products.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn id_strategy(&self) -> IdStrategy {
        self.ids.strategy()
    }
}
