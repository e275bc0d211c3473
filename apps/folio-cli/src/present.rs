//! # Presenter
//!
//! Renders command results for the operator.
//!
//! ## Formats
//! ```text
//! ┌──────────────┬──────────────────────────────────────────────────────────┐
//! │ text         │ P001: Python 101 by John Smith | Programming | $25.99 | │
//! │              │ Stock: 10                                               │
//! │              │ 2026-10-18 | Ana bought 2 x Python 101 for $46.78       │
//! │              │ (Discount: 10%)                                         │
//! ├──────────────┼──────────────────────────────────────────────────────────┤
//! │ json         │ the command's DTO, pretty-printed                       │
//! └──────────────┴──────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use crate::commands::{AuthorRevenueDto, ProductDto, RevenueDto, SaleDto, TopSellerDto};
use crate::error::{CliResult, CommandError};
use crate::state::{OutputFormat, ShopConfig};

/// Turns DTOs into printable blocks.
#[derive(Debug, Clone)]
pub struct Presenter {
    config: ShopConfig,
}

impl Presenter {
    pub fn new(config: &ShopConfig) -> Self {
        Presenter {
            config: config.clone(),
        }
    }

    // -------------------------------------------------------------------------
    // Catalog
    // -------------------------------------------------------------------------

    pub fn products(&self, products: &[ProductDto]) -> CliResult<String> {
        self.render(products, |products| {
            if products.is_empty() {
                return "No products registered.".to_string();
            }
            products
                .iter()
                .map(|p| self.product_line(p))
                .collect::<Vec<_>>()
                .join("\n")
        })
    }

    pub fn product_added(&self, product: &ProductDto) -> CliResult<String> {
        self.render(product, |p| {
            format!("Product '{}' added with ID: {}", p.title, p.id)
        })
    }

    pub fn product_updated(&self, product: &ProductDto) -> CliResult<String> {
        self.render(product, |p| format!("Product updated: {}", self.product_line(p)))
    }

    pub fn product_deleted(&self, product: &ProductDto) -> CliResult<String> {
        self.render(product, |p| format!("Product deleted: {} ({})", p.id, p.title))
    }

    // -------------------------------------------------------------------------
    // Sales
    // -------------------------------------------------------------------------

    pub fn sale_registered(&self, sale: &SaleDto) -> CliResult<String> {
        self.render(sale, |s| {
            format!(
                "Sale registered: {} x {} with {}% discount. Total: {}",
                s.quantity,
                s.title,
                s.discount_percent,
                self.config.format_currency(s.net_price)
            )
        })
    }

    pub fn sales(&self, sales: &[SaleDto]) -> CliResult<String> {
        self.render(sales, |sales| {
            if sales.is_empty() {
                return "No sales registered.".to_string();
            }
            sales
                .iter()
                .map(|s| {
                    format!(
                        "{} | {} bought {} x {} for {} (Discount: {}%)",
                        s.date,
                        s.customer_name,
                        s.quantity,
                        s.title,
                        self.config.format_currency(s.net_price),
                        s.discount_percent
                    )
                })
                .collect::<Vec<_>>()
                .join("\n")
        })
    }

    // -------------------------------------------------------------------------
    // Reports
    // -------------------------------------------------------------------------

    pub fn top_sellers(&self, rows: &[TopSellerDto]) -> CliResult<String> {
        self.render(rows, |rows| {
            if rows.is_empty() {
                return "No sales registered.".to_string();
            }
            rows.iter()
                .map(|r| format!("{} - {} sold", r.title, r.quantity))
                .collect::<Vec<_>>()
                .join("\n")
        })
    }

    pub fn revenue_by_author(&self, rows: &[AuthorRevenueDto]) -> CliResult<String> {
        self.render(rows, |rows| {
            if rows.is_empty() {
                return "No sales registered.".to_string();
            }
            rows.iter()
                .map(|r| format!("{}: {}", r.author, self.config.format_currency(r.total)))
                .collect::<Vec<_>>()
                .join("\n")
        })
    }

    pub fn revenue(&self, revenue: &RevenueDto) -> CliResult<String> {
        self.render(revenue, |r| {
            format!(
                "Sales: {}\nGross Income: {}\nDiscounts: {}\nNet Income (after discounts): {}",
                r.sale_count,
                self.config.format_currency(r.gross),
                self.config.format_currency(r.discounts),
                self.config.format_currency(r.net)
            )
        })
    }

    // -------------------------------------------------------------------------
    // Errors
    // -------------------------------------------------------------------------

    /// Renders a failed command. Never fails itself: if JSON rendering
    /// breaks, the text form is returned.
    pub fn error(&self, err: &CommandError) -> String {
        let text = format!("Error: {}", err.message);
        match self.config.output {
            OutputFormat::Text => text,
            OutputFormat::Json => {
                serde_json::to_string_pretty(&ErrorEnvelope { error: err }).unwrap_or(text)
            }
        }
    }

    fn product_line(&self, p: &ProductDto) -> String {
        format!(
            "{}: {} by {} | {} | {} | Stock: {}",
            p.id,
            p.title,
            p.author,
            p.category,
            self.config.format_currency(p.price),
            p.stock
        )
    }

    fn render<T, F>(&self, value: &T, text: F) -> CliResult<String>
    where
        T: Serialize + ?Sized,
        F: FnOnce(&T) -> String,
    {
        match self.config.output {
            OutputFormat::Text => Ok(text(value)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        }
    }
}

#[derive(Serialize)]
struct ErrorEnvelope<'a> {
    error: &'a CommandError,
}
