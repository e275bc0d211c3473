//! # Bookstore Service
//!
//! The single service object that owns the catalog store and the sales
//! ledger and exposes the operations the shell calls.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Bookstore                                       │
//! │                                                                         │
//! │  App startup                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  BookstoreConfig::default().id_strategy(..) ← Configure                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Bookstore::new(config)  ← Empty stores, system clock                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌───────────────────────────────────────────┐                         │
//! │  │  CatalogStore        SalesLedger   Clock  │                         │
//! │  └───────────────────────────────────────────┘                         │
//! │       ▲                     ▲                                           │
//! │       │ add/update/delete   │ register_sale (with stock debit)          │
//! │       │                     │                                           │
//! │  Menu commands, one at a time                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Single Writer
//! Every method takes `&self` or `&mut self`, so the borrow checker already
//! serializes callers. Sharing a `Bookstore` between threads would need one
//! `Mutex<Bookstore>` around the whole object: the sale transaction reads the
//! stock and then debits it, and that pair must not interleave.

use folio_core::report::{self, AuthorRevenue, RevenueSummary, TopSeller};
use folio_core::{Amount, NewProduct, ProductRecord, SaleRecord, SaleRequest};
use tracing::{debug, error, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::error::{StoreError, StoreResult};
use crate::ids::IdStrategy;
use crate::repository::catalog::CatalogStore;
use crate::repository::ledger::SalesLedger;

// =============================================================================
// Configuration
// =============================================================================

/// Bookstore configuration.
///
/// ## Example
/// ```rust
/// use folio_store::{BookstoreConfig, IdStrategy};
///
/// let config = BookstoreConfig::default().id_strategy(IdStrategy::CatalogSize);
/// assert_eq!(config.id_strategy, IdStrategy::CatalogSize);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookstoreConfig {
    /// How catalog ids are issued.
    /// Default: Monotonic
    pub id_strategy: IdStrategy,
}

impl BookstoreConfig {
    /// Sets the id strategy.
    pub fn id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.id_strategy = strategy;
        self
    }
}

// =============================================================================
// Bookstore
// =============================================================================

/// Catalog, ledger and clock of one session.
#[derive(Debug)]
pub struct Bookstore {
    catalog: CatalogStore,
    ledger: SalesLedger,
    clock: Box<dyn Clock>,
}

impl Bookstore {
    /// Creates an empty bookstore dated by the system clock.
    pub fn new(config: BookstoreConfig) -> Self {
        Bookstore::with_clock(config, SystemClock)
    }

    /// Creates an empty bookstore with an explicit date source.
    pub fn with_clock(config: BookstoreConfig, clock: impl Clock + 'static) -> Self {
        info!(id_strategy = %config.id_strategy, "Initializing bookstore");

        Bookstore {
            catalog: CatalogStore::new(config.id_strategy),
            ledger: SalesLedger::new(),
            clock: Box::new(clock),
        }
    }

    /// Read access to the catalog store.
    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// Read access to the sales ledger.
    pub fn ledger(&self) -> &SalesLedger {
        &self.ledger
    }

    // -------------------------------------------------------------------------
    // Catalog operations
    // -------------------------------------------------------------------------

    /// Adds a product and returns its new id.
    pub fn add_product(&mut self, new: NewProduct) -> StoreResult<String> {
        let id = self.catalog.add(new)?;
        info!(id = %id, "Product added");
        Ok(id)
    }

    /// Replaces price and stock of a product.
    pub fn update_product(&mut self, id: &str, price: Amount, stock: u32) -> StoreResult<()> {
        self.catalog.update(id, price, stock)?;
        info!(id = %id, "Product updated");
        Ok(())
    }

    /// Deletes a product, returning the removed record.
    pub fn delete_product(&mut self, id: &str) -> StoreResult<ProductRecord> {
        let removed = self.catalog.delete(id)?;
        info!(id = %id, "Product deleted");
        Ok(removed)
    }

    /// Gets a product by id.
    pub fn get_product(&self, id: &str) -> StoreResult<&ProductRecord> {
        self.catalog
            .get_by_id(id)
            .ok_or_else(|| StoreError::not_found("Product", id))
    }

    /// All products in insertion order.
    pub fn list_products(&self) -> impl ExactSizeIterator<Item = &ProductRecord> + '_ {
        self.catalog.list()
    }

    // -------------------------------------------------------------------------
    // Sale transaction
    // -------------------------------------------------------------------------

    /// Registers a single-product sale.
    ///
    /// ## Steps
    /// ```text
    /// 1. look up product          ── absent ──► InvalidProduct
    /// 2. quantity ≤ stock?        ── no ──────► InsufficientStock
    /// 3. price + snapshot (folio-core SaleRecord::from_product)
    /// 4. debit stock ┐
    /// 5. append sale ┘ nothing is mutated before both are certain to succeed
    /// ```
    ///
    /// ## Returns
    /// * `Ok(SaleRecord)` - The recorded sale
    /// * `Err(StoreError::InvalidProduct)` - Unknown product id
    /// * `Err(StoreError::Domain(InsufficientStock))` - Not enough copies
    /// * `Err(StoreError::Internal)` - Stock moved between check and debit
    pub fn register_sale(&mut self, request: SaleRequest) -> StoreResult<SaleRecord> {
        debug!(
            product_id = %request.product_id,
            quantity = request.quantity,
            discount = request.discount.percent(),
            "Registering sale"
        );

        let date = self.clock.today();

        let Some(product) = self.catalog.get_mut(&request.product_id) else {
            warn!(product_id = %request.product_id, "Sale rejected: unknown product");
            return Err(StoreError::InvalidProduct(request.product_id));
        };

        let sale = SaleRecord::from_product(
            product,
            request.customer_name,
            request.quantity,
            request.discount,
            date,
        )
        .inspect_err(|e| warn!(product_id = %product.id, error = %e, "Sale rejected"))?;

        settle(product, &mut self.ledger, &sale)?;

        info!(
            sale_id = %sale.id,
            product_id = %sale.product_id,
            quantity = sale.quantity,
            net = sale.net_price().value(),
            "Sale registered"
        );

        Ok(sale)
    }

    /// All sales, oldest first.
    pub fn list_sales(&self) -> &[SaleRecord] {
        self.ledger.list()
    }

    // -------------------------------------------------------------------------
    // Reports
    // -------------------------------------------------------------------------

    /// Top `n` products by copies sold, titled from the live catalog when
    /// the product still exists.
    pub fn top_sellers(&self, n: usize) -> Vec<TopSeller> {
        report::top_sellers(self.ledger.list(), n, |id| {
            self.catalog.get_by_id(id).map(|p| p.title.clone())
        })
    }

    /// Net revenue per snapshot author.
    pub fn revenue_by_author(&self) -> Vec<AuthorRevenue> {
        report::revenue_by_author(self.ledger.list())
    }

    /// Gross and net revenue.
    pub fn revenue_summary(&self) -> RevenueSummary {
        report::revenue_summary(self.ledger.list())
    }
}

/// Debits stock for an already-priced sale and records it.
///
/// The sale was priced against this product's stock, so a failed debit is a
/// broken invariant and not an operator error. Nothing is appended then.
fn settle(product: &mut ProductRecord, ledger: &mut SalesLedger, sale: &SaleRecord) -> StoreResult<()> {
    if let Err(e) = product.debit(sale.quantity) {
        error!(product_id = %sale.product_id, error = %e, "Stock debit failed after pricing");
        return Err(StoreError::Internal(format!(
            "stock debit failed for priced sale {}: {}",
            sale.id, e
        )));
    }

    ledger.append(sale.clone());
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;
    use folio_core::{CoreError, Discount};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn store() -> Bookstore {
        Bookstore::with_clock(BookstoreConfig::default(), FixedClock(today()))
    }

    fn store_with(products: &[(&str, &str, f64, u32)]) -> (Bookstore, Vec<String>) {
        let mut store = store();
        let ids = products
            .iter()
            .map(|(title, author, price, stock)| {
                store
                    .add_product(NewProduct::new(*title, *author, "Books", *price, *stock))
                    .unwrap()
            })
            .collect();
        (store, ids)
    }

    fn sell(store: &mut Bookstore, id: &str, qty: u32, pct: f64) -> StoreResult<SaleRecord> {
        store.register_sale(SaleRequest::new(
            "Ana",
            id,
            qty,
            Discount::from_percent(pct).unwrap(),
        ))
    }

    #[test]
    fn test_sale_debits_stock_and_appends() {
        let (mut store, ids) = store_with(&[("Python 101", "John Smith", 25.99, 10)]);

        let sale = sell(&mut store, &ids[0], 2, 10.0).unwrap();

        assert_eq!(store.get_product(&ids[0]).unwrap().stock, 8);
        assert_eq!(store.list_sales().len(), 1);
        assert_eq!(store.list_sales()[0], sale);
        assert!(sale.net_price().approx_eq(Amount::new(46.782)));
        assert_eq!(sale.date, today());
        assert_eq!(sale.customer_name, "Ana");
    }

    #[test]
    fn test_sale_of_entire_stock() {
        let (mut store, ids) = store_with(&[("AI Revolution", "Dr. Tech", 40.5, 5)]);

        sell(&mut store, &ids[0], 5, 0.0).unwrap();
        assert_eq!(store.get_product(&ids[0]).unwrap().stock, 0);

        let err = sell(&mut store, &ids[0], 1, 0.0).unwrap_err();
        assert!(err.is_insufficient_stock());
    }

    #[test]
    fn test_insufficient_stock_changes_nothing() {
        let (mut store, ids) = store_with(&[("AI Revolution", "Dr. Tech", 40.5, 5)]);

        let err = sell(&mut store, &ids[0], 6, 0.0).unwrap_err();

        assert_eq!(
            err,
            StoreError::Domain(CoreError::InsufficientStock {
                product_id: ids[0].clone(),
                available: 5,
                requested: 6,
            })
        );
        assert_eq!(store.get_product(&ids[0]).unwrap().stock, 5);
        assert!(store.list_sales().is_empty());
    }

    #[test]
    fn test_unknown_product_is_invalid_product() {
        let mut store = store();
        let err = sell(&mut store, "P404", 1, 0.0).unwrap_err();

        assert_eq!(err, StoreError::InvalidProduct("P404".to_string()));
        assert!(store.list_sales().is_empty());
    }

    #[test]
    fn test_zero_quantity_is_rejected_without_side_effects() {
        let (mut store, ids) = store_with(&[("T", "A", 5.0, 3)]);

        let err = sell(&mut store, &ids[0], 0, 0.0).unwrap_err();

        assert!(matches!(err, StoreError::Domain(CoreError::Validation(_))));
        assert_eq!(store.get_product(&ids[0]).unwrap().stock, 3);
        assert!(store.list_sales().is_empty());
    }

    #[test]
    fn test_get_missing_product() {
        let store = store();
        assert_eq!(
            store.get_product("P001").unwrap_err(),
            StoreError::not_found("Product", "P001")
        );
    }

    #[test]
    fn test_update_and_delete_missing_are_not_found() {
        let mut store = store();
        assert!(matches!(
            store.update_product("P001", Amount::new(1.0), 1),
            Err(StoreError::NotFound { .. })
        ));
        assert!(matches!(
            store.delete_product("P001"),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn test_delete_removes_from_list_but_keeps_sales() {
        let (mut store, ids) = store_with(&[("A", "Ann", 10.0, 5), ("B", "Bob", 10.0, 5)]);
        sell(&mut store, &ids[0], 2, 0.0).unwrap();

        store.delete_product(&ids[0]).unwrap();

        let listed: Vec<&str> = store.list_products().map(|p| p.id.as_str()).collect();
        assert_eq!(listed, vec![ids[1].as_str()]);
        assert_eq!(store.list_sales().len(), 1);
        assert_eq!(store.list_sales()[0].title, "A");
    }

    #[test]
    fn test_price_update_does_not_rewrite_history() {
        let (mut store, ids) = store_with(&[("A", "Ann", 10.0, 5)]);
        sell(&mut store, &ids[0], 1, 0.0).unwrap();

        store.update_product(&ids[0], Amount::new(99.0), 5).unwrap();

        assert_eq!(store.list_sales()[0].unit_price, Amount::new(10.0));
        assert!(store.revenue_summary().gross.approx_eq(Amount::new(10.0)));
    }

    #[test]
    fn test_top_sellers_example() {
        let (mut store, ids) = store_with(&[
            ("A", "Ann", 1.0, 50),
            ("B", "Bob", 1.0, 50),
            ("C", "Cy", 1.0, 50),
        ]);
        sell(&mut store, &ids[0], 5, 0.0).unwrap();
        sell(&mut store, &ids[1], 9, 0.0).unwrap();
        sell(&mut store, &ids[2], 2, 0.0).unwrap();
        sell(&mut store, &ids[0], 1, 0.0).unwrap();

        let top: Vec<(String, u64)> = store
            .top_sellers(3)
            .into_iter()
            .map(|t| (t.title, t.quantity))
            .collect();

        assert_eq!(
            top,
            vec![
                ("B".to_string(), 9),
                ("A".to_string(), 6),
                ("C".to_string(), 2)
            ]
        );
    }

    #[test]
    fn test_top_sellers_survives_deleted_product() {
        let (mut store, ids) = store_with(&[("Gone Book", "Ann", 1.0, 5)]);
        sell(&mut store, &ids[0], 3, 0.0).unwrap();
        store.delete_product(&ids[0]).unwrap();

        let top = store.top_sellers(3);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].title, "Gone Book");
        assert_eq!(top[0].quantity, 3);
    }

    #[test]
    fn test_revenue_by_author_uses_sale_snapshot() {
        let (mut store, ids) = store_with(&[("A", "Ann", 10.0, 5), ("B", "Ann", 20.0, 5)]);
        sell(&mut store, &ids[0], 1, 0.0).unwrap();

        // Later catalog edits to the same author's other product change nothing.
        store.update_product(&ids[1], Amount::new(1.0), 0).unwrap();
        store.delete_product(&ids[0]).unwrap();

        let rows = store.revenue_by_author();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].author, "Ann");
        assert!(rows[0].total.approx_eq(Amount::new(10.0)));
    }

    #[test]
    fn test_revenue_summary() {
        let (mut store, ids) = store_with(&[("A", "Ann", 10.0, 5), ("B", "Bob", 25.0, 5)]);
        let empty = store.revenue_summary();
        assert!(empty.gross.is_zero() && empty.net.is_zero());

        sell(&mut store, &ids[0], 1, 0.0).unwrap();
        sell(&mut store, &ids[1], 1, 20.0).unwrap();

        let summary = store.revenue_summary();
        assert_eq!(summary.sale_count, 2);
        assert!(summary.gross.approx_eq(Amount::new(35.0)));
        assert!(summary.net.approx_eq(Amount::new(30.0)));
    }

    #[test]
    fn test_listing_is_idempotent() {
        let (mut store, ids) = store_with(&[("A", "Ann", 10.0, 5)]);
        sell(&mut store, &ids[0], 1, 0.0).unwrap();

        let first: Vec<&ProductRecord> = store.list_products().collect();
        let second: Vec<&ProductRecord> = store.list_products().collect();
        assert_eq!(first, second);
        assert_eq!(store.list_sales().to_vec(), store.list_sales().to_vec());
    }

    #[test]
    fn test_independent_instances() {
        let (mut first, ids) = store_with(&[("A", "Ann", 10.0, 5)]);
        let second = store();

        sell(&mut first, &ids[0], 1, 0.0).unwrap();

        assert_eq!(second.list_products().len(), 0);
        assert!(second.list_sales().is_empty());
    }

    #[test]
    fn test_failed_debit_after_pricing_is_internal() {
        let roomy = ProductRecord::from_new("P001", NewProduct::new("A", "Ann", "Books", 10.0, 5));
        let sale = SaleRecord::from_product(&roomy, "Ana", 3, Discount::none(), today()).unwrap();

        // same product, but its stock dropped after the sale was priced
        let mut drained = roomy.clone();
        drained.stock = 1;
        let mut ledger = SalesLedger::new();

        let err = settle(&mut drained, &mut ledger, &sale).unwrap_err();

        assert!(matches!(err, StoreError::Internal(_)));
        assert!(!err.is_insufficient_stock());
        assert_eq!(drained.stock, 1);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_settle_debits_and_appends() {
        let mut product = ProductRecord::from_new("P001", NewProduct::new("A", "Ann", "Books", 10.0, 5));
        let sale = SaleRecord::from_product(&product, "Ana", 3, Discount::none(), today()).unwrap();
        let mut ledger = SalesLedger::new();

        settle(&mut product, &mut ledger, &sale).unwrap();

        assert_eq!(product.stock, 2);
        assert_eq!(ledger.list(), &[sale]);
    }
}
