//! # Report Engine
//!
//! Pure, read-only aggregations over the sales ledger.
//!
//! ## Reports
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Ledger ──► Report                                   │
//! │                                                                         │
//! │  [P001 x5, P002 x9, P003 x2, P001 x1]                                  │
//! │       │                                                                 │
//! │       ├── top_sellers(3) ──────► P002 (9), P001 (6), P003 (2)          │
//! │       │     group by product, sum qty, stable sort desc                 │
//! │       │                                                                 │
//! │       ├── revenue_by_author() ─► [(author, Σ net)] first-seen order    │
//! │       │     grouped on the SNAPSHOT author, not the live catalog        │
//! │       │                                                                 │
//! │       └── revenue_summary() ───► gross = Σ unit×qty, net = Σ net       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here mutates its input. Grouping preserves first appearance in
//! the ledger, which is chronological order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::money::Amount;
use crate::types::SaleRecord;

// =============================================================================
// Report Rows
// =============================================================================

/// One row of the bestseller report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopSeller {
    pub product_id: String,
    pub title: String,
    /// Copies sold across every sale of this product.
    pub quantity: u64,
}

/// Net revenue attributed to one author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorRevenue {
    pub author: String,
    pub total: Amount,
}

/// Gross and net revenue over the whole ledger.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RevenueSummary {
    pub sale_count: usize,
    /// Σ unit_price × quantity.
    pub gross: Amount,
    /// Σ net price (after discounts).
    pub net: Amount,
}

impl RevenueSummary {
    /// Revenue given away through discounts.
    #[inline]
    pub fn discount_total(&self) -> Amount {
        self.gross - self.net
    }
}

// =============================================================================
// Aggregations
// =============================================================================

/// Top `n` products by copies sold.
///
/// Ties keep the order in which products first appear in the ledger.
/// `live_title` resolves the current catalog title; when the product has
/// been deleted it returns `None` and the first sale's snapshot title is
/// used instead.
pub fn top_sellers<F>(sales: &[SaleRecord], n: usize, live_title: F) -> Vec<TopSeller>
where
    F: Fn(&str) -> Option<String>,
{
    // product id -> (first snapshot title, copies sold), in first-seen order
    let mut totals: IndexMap<&str, (&str, u64)> = IndexMap::new();

    for sale in sales {
        let row = totals
            .entry(sale.product_id.as_str())
            .or_insert((sale.title.as_str(), 0));
        row.1 += u64::from(sale.quantity);
    }

    // IndexMap::sort_by is stable: equal quantities stay in first-seen order
    totals.sort_by(|_, a, _, b| b.1.cmp(&a.1));

    totals
        .into_iter()
        .take(n)
        .map(|(product_id, (snapshot_title, quantity))| TopSeller {
            product_id: product_id.to_string(),
            title: live_title(product_id).unwrap_or_else(|| snapshot_title.to_string()),
            quantity,
        })
        .collect()
}

/// Net revenue per author, in first-seen author order.
pub fn revenue_by_author(sales: &[SaleRecord]) -> Vec<AuthorRevenue> {
    let mut totals: IndexMap<&str, Amount> = IndexMap::new();

    for sale in sales {
        *totals.entry(sale.author.as_str()).or_default() += sale.net_price();
    }

    totals
        .into_iter()
        .map(|(author, total)| AuthorRevenue {
            author: author.to_string(),
            total,
        })
        .collect()
}

/// Gross and net totals. An empty ledger yields zeros.
pub fn revenue_summary(sales: &[SaleRecord]) -> RevenueSummary {
    RevenueSummary {
        sale_count: sales.len(),
        gross: sales.iter().map(SaleRecord::gross_price).sum(),
        net: sales.iter().map(SaleRecord::net_price).sum(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Discount, NewProduct, ProductRecord};
    use chrono::NaiveDate;

    fn product(id: &str, title: &str, author: &str, price: f64) -> ProductRecord {
        ProductRecord::from_new(id, NewProduct::new(title, author, "Books", price, 100))
    }

    fn sale(product: &ProductRecord, qty: u32, discount_pct: f64) -> SaleRecord {
        SaleRecord::from_product(
            product,
            "customer",
            qty,
            Discount::from_percent(discount_pct).unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_top_sellers_groups_and_sorts() {
        let a = product("P001", "A", "Ann", 10.0);
        let b = product("P002", "B", "Bob", 10.0);
        let c = product("P003", "C", "Cy", 10.0);
        let sales = vec![sale(&a, 5, 0.0), sale(&b, 9, 0.0), sale(&c, 2, 0.0), sale(&a, 1, 0.0)];

        let top = top_sellers(&sales, 3, |_| None);
        let rows: Vec<(&str, u64)> = top.iter().map(|t| (t.title.as_str(), t.quantity)).collect();
        assert_eq!(rows, vec![("B", 9), ("A", 6), ("C", 2)]);
    }

    #[test]
    fn test_top_sellers_ties_keep_ledger_order() {
        let a = product("P001", "A", "Ann", 10.0);
        let b = product("P002", "B", "Bob", 10.0);
        let c = product("P003", "C", "Cy", 10.0);
        let sales = vec![sale(&c, 4, 0.0), sale(&a, 4, 0.0), sale(&b, 4, 0.0)];

        let top = top_sellers(&sales, 2, |_| None);
        let ids: Vec<&str> = top.iter().map(|t| t.product_id.as_str()).collect();
        assert_eq!(ids, vec!["P003", "P001"]);
    }

    #[test]
    fn test_top_sellers_prefers_live_title() {
        let a = product("P001", "Old Title", "Ann", 10.0);
        let b = product("P002", "Gone", "Bob", 10.0);
        let sales = vec![sale(&a, 1, 0.0), sale(&b, 2, 0.0)];

        let top = top_sellers(&sales, 5, |id| (id == "P001").then(|| "New Title".to_string()));
        assert_eq!(top[0].title, "Gone");
        assert_eq!(top[1].title, "New Title");
    }

    #[test]
    fn test_top_sellers_empty_and_zero_n() {
        assert!(top_sellers(&[], 3, |_| None).is_empty());

        let a = product("P001", "A", "Ann", 10.0);
        assert!(top_sellers(&[sale(&a, 1, 0.0)], 0, |_| None).is_empty());
    }

    #[test]
    fn test_revenue_by_author_uses_snapshot_and_first_seen_order() {
        let bob = product("P002", "B", "Bob", 20.0);
        let ann = product("P001", "A", "Ann", 10.0);
        let sales = vec![sale(&bob, 1, 50.0), sale(&ann, 2, 0.0), sale(&bob, 1, 0.0)];

        let rows = revenue_by_author(&sales);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].author, "Bob");
        assert!(rows[0].total.approx_eq(Amount::new(30.0)));
        assert_eq!(rows[1].author, "Ann");
        assert!(rows[1].total.approx_eq(Amount::new(20.0)));
    }

    #[test]
    fn test_revenue_summary_empty() {
        let summary = revenue_summary(&[]);
        assert_eq!(summary.sale_count, 0);
        assert!(summary.gross.is_zero());
        assert!(summary.net.is_zero());
    }

    #[test]
    fn test_revenue_summary_totals() {
        let ten = product("P001", "A", "Ann", 10.0);
        let twenty = product("P002", "B", "Bob", 25.0);
        let sales = vec![sale(&ten, 1, 0.0), sale(&twenty, 1, 20.0)];

        let summary = revenue_summary(&sales);
        assert_eq!(summary.sale_count, 2);
        assert!(summary.gross.approx_eq(Amount::new(35.0)));
        assert!(summary.net.approx_eq(Amount::new(30.0)));
        assert!(summary.discount_total().approx_eq(Amount::new(5.0)));
    }
}
