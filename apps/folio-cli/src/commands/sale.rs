//! # Sale Commands
//!
//! ## Register Sale Flow
//! ```text
//! customer name
//!      │
//!      ▼
//! sale_candidate(id)        ── unknown ──► INVALID_PRODUCT (no more prompts)
//!      │
//!      ▼
//! check_quantity(id, qty)   ── too many ─► INSUFFICIENT_STOCK (no more prompts)
//!      │
//!      ▼
//! discount prompt
//!      │
//!      ▼
//! register_sale(request)    ── the store re-checks everything, then debits
//! ```
//!
//! The two pre-checks only decide whether to keep prompting. The store's
//! sale transaction is still the authority.

use chrono::NaiveDate;
use folio_core::{Amount, SaleRecord, SaleRequest};
use folio_store::{Bookstore, StoreError};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::commands::product::ProductDto;
use crate::error::{CommandError, CommandResult};

/// Sale DTO for the presenter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleDto {
    pub id: String,
    pub date: NaiveDate,
    pub customer_name: String,
    pub product_id: String,
    pub title: String,
    pub author: String,
    pub quantity: u32,
    pub unit_price: Amount,
    pub discount_percent: f64,
    pub gross_price: Amount,
    pub net_price: Amount,
}

impl From<&SaleRecord> for SaleDto {
    fn from(s: &SaleRecord) -> Self {
        SaleDto {
            id: s.id.clone(),
            date: s.date,
            customer_name: s.customer_name.clone(),
            product_id: s.product_id.clone(),
            title: s.title.clone(),
            author: s.author.clone(),
            quantity: s.quantity,
            unit_price: s.unit_price,
            discount_percent: s.discount.percent(),
            gross_price: s.gross_price(),
            net_price: s.net_price(),
        }
    }
}

/// Looks up the product a sale is about to be taken for.
///
/// An unknown id is `INVALID_PRODUCT` here rather than `NOT_FOUND`.
pub fn sale_candidate(store: &Bookstore, product_id: &str) -> CommandResult<ProductDto> {
    let product_id = product_id.trim();
    store
        .catalog()
        .get_by_id(product_id)
        .map(ProductDto::from)
        .ok_or_else(|| StoreError::InvalidProduct(product_id.to_string()).into())
}

/// Checks that `quantity` copies are on hand without touching stock.
pub fn check_quantity(store: &Bookstore, product_id: &str, quantity: u32) -> CommandResult<()> {
    let product_id = product_id.trim();
    let product = store
        .catalog()
        .get_by_id(product_id)
        .ok_or_else(|| CommandError::from(StoreError::InvalidProduct(product_id.to_string())))?;

    product.check_stock(quantity)?;
    Ok(())
}

/// Registers a sale and returns the recorded line.
pub fn register_sale(store: &mut Bookstore, request: SaleRequest) -> CommandResult<SaleDto> {
    debug!(
        product_id = %request.product_id,
        quantity = request.quantity,
        "register_sale command"
    );

    let sale = store.register_sale(request)?;
    Ok(SaleDto::from(&sale))
}

/// All sales, oldest first.
pub fn list_sales(store: &Bookstore) -> Vec<SaleDto> {
    store.list_sales().iter().map(SaleDto::from).collect()
}
