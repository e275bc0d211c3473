//! # Sales Ledger
//!
//! Append-only, chronologically ordered sale history. It is the only input
//! of every report.

use folio_core::SaleRecord;
use tracing::debug;

/// Append-only list of registered sales.
#[derive(Debug, Clone, Default)]
pub struct SalesLedger {
    sales: Vec<SaleRecord>,
}

impl SalesLedger {
    pub fn new() -> Self {
        SalesLedger::default()
    }

    /// Appends a sale. Only the sale transaction writes here.
    pub(crate) fn append(&mut self, sale: SaleRecord) {
        debug!(sale_id = %sale.id, product_id = %sale.product_id, "Appending sale");
        self.sales.push(sale);
    }

    /// All sales, oldest first.
    pub fn list(&self) -> &[SaleRecord] {
        &self.sales
    }

    pub fn len(&self) -> usize {
        self.sales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sales.is_empty()
    }
}
