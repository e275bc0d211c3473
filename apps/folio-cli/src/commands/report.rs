//! # Report Commands
//!
//! Read-only views over the sales ledger.

use folio_core::{Amount, AuthorRevenue, RevenueSummary, TopSeller};
use folio_store::Bookstore;
use serde::{Deserialize, Serialize};

/// One bestseller row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopSellerDto {
    pub product_id: String,
    pub title: String,
    pub quantity: u64,
}

impl From<TopSeller> for TopSellerDto {
    fn from(row: TopSeller) -> Self {
        TopSellerDto {
            product_id: row.product_id,
            title: row.title,
            quantity: row.quantity,
        }
    }
}

/// Net revenue of one author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRevenueDto {
    pub author: String,
    pub total: Amount,
}

impl From<AuthorRevenue> for AuthorRevenueDto {
    fn from(row: AuthorRevenue) -> Self {
        AuthorRevenueDto {
            author: row.author,
            total: row.total,
        }
    }
}

/// Revenue report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueDto {
    pub sale_count: usize,
    pub gross: Amount,
    pub net: Amount,
    /// gross - net
    pub discounts: Amount,
}

impl From<RevenueSummary> for RevenueDto {
    fn from(summary: RevenueSummary) -> Self {
        RevenueDto {
            sale_count: summary.sale_count,
            gross: summary.gross,
            net: summary.net,
            discounts: summary.discount_total(),
        }
    }
}

/// Top `n` products by copies sold.
pub fn top_sellers(store: &Bookstore, n: usize) -> Vec<TopSellerDto> {
    store.top_sellers(n).into_iter().map(Into::into).collect()
}

/// Net revenue per author, in order of first sale.
pub fn revenue_by_author(store: &Bookstore) -> Vec<AuthorRevenueDto> {
    store
        .revenue_by_author()
        .into_iter()
        .map(Into::into)
        .collect()
}

/// Gross, net and discounted revenue.
pub fn revenue_summary(store: &Bookstore) -> RevenueDto {
    store.revenue_summary().into()
}
