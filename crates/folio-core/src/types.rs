//! # Domain Types
//!
//! Core domain types used throughout Folio.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────────┐   ┌─────────────────┐   │
//! │  │  ProductRecord  │   │     SaleRecord      │   │    Discount     │   │
//! │  │  ─────────────  │   │  ─────────────────  │   │  ─────────────  │   │
//! │  │  id ("P001")    │◄──│  product_id (FK)    │   │  percent (f64)  │   │
//! │  │  title, author  │   │  title/author snap  │   │  10 = 10% off   │   │
//! │  │  category       │   │  unit_price snap    │   └─────────────────┘   │
//! │  │  price, stock   │   │  quantity, discount │                         │
//! │  └─────────────────┘   │  date               │                         │
//! │         ▲              └─────────────────────┘                         │
//! │         │                                                               │
//! │  ┌──────┴──────────┐   ┌─────────────────────┐                         │
//! │  │   NewProduct    │   │    SaleRequest      │   (typed inputs)        │
//! │  └─────────────────┘   └─────────────────────┘                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A sale copies title, author and unit price from the product at the moment
//! it is registered. Later catalog edits or deletions never rewrite history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Amount;
use crate::validation::{self, ValidationResult};

// =============================================================================
// Discount
// =============================================================================

/// Percentage discount applied to a sale line.
///
/// ## Accepted Range
/// `[0, 100)`. A discount of 100% or more would produce a zero or negative
/// net price and is rejected at construction time, so every `Discount` value
/// in the system is already valid.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Discount(f64);

impl Discount {
    /// Creates a discount from a percentage (10.0 = 10% off).
    pub fn from_percent(pct: f64) -> ValidationResult<Self> {
        validation::validate_discount_percent(pct)?;
        Ok(Discount(pct))
    }

    /// No discount.
    #[inline]
    pub const fn none() -> Self {
        Discount(0.0)
    }

    /// Returns the percentage.
    #[inline]
    pub const fn percent(&self) -> f64 {
        self.0
    }

    /// Multiplier applied to the gross price: `1 - pct/100`.
    #[inline]
    pub fn factor(&self) -> f64 {
        1.0 - self.0 / 100.0
    }

    /// Checks if no discount applies.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl TryFrom<f64> for Discount {
    type Error = ValidationError;

    fn try_from(pct: f64) -> Result<Self, Self::Error> {
        Discount::from_percent(pct)
    }
}

impl From<Discount> for f64 {
    fn from(discount: Discount) -> Self {
        discount.0
    }
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog entry.
///
/// Owned exclusively by the catalog store. Only `price` and `stock` change
/// after creation; `id` is immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Catalog identifier ("P001").
    pub id: String,

    pub title: String,

    pub author: String,

    pub category: String,

    /// Current unit price.
    pub price: Amount,

    /// Copies on hand.
    pub stock: u32,
}

impl ProductRecord {
    /// Builds a record from validated input and a freshly issued id.
    pub fn from_new(id: impl Into<String>, new: NewProduct) -> Self {
        ProductRecord {
            id: id.into(),
            title: new.title,
            author: new.author,
            category: new.category,
            price: new.price,
            stock: new.stock,
        }
    }

    /// Checks if `quantity` copies can be sold right now.
    #[inline]
    pub fn can_sell(&self, quantity: u32) -> bool {
        quantity <= self.stock
    }

    /// Ensures `quantity` copies are on hand.
    pub fn check_stock(&self, quantity: u32) -> CoreResult<()> {
        if self.can_sell(quantity) {
            Ok(())
        } else {
            Err(CoreError::InsufficientStock {
                product_id: self.id.clone(),
                available: self.stock,
                requested: quantity,
            })
        }
    }

    /// Removes `quantity` copies from stock.
    pub fn debit(&mut self, quantity: u32) -> CoreResult<()> {
        self.check_stock(quantity)?;
        self.stock -= quantity;
        Ok(())
    }
}

/// Input for catalog-add.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub title: String,
    pub author: String,
    pub category: String,
    pub price: Amount,
    /// Initial stock, at least 1.
    pub stock: u32,
}

impl NewProduct {
    /// Creates the input, trimming the text fields.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        stock: u32,
    ) -> Self {
        NewProduct {
            title: title.into().trim().to_string(),
            author: author.into().trim().to_string(),
            category: category.into().trim().to_string(),
            price: Amount::new(price),
            stock,
        }
    }

    /// Checks every field against the catalog-add preconditions.
    pub fn validate(&self) -> ValidationResult<()> {
        validation::validate_text_field("title", &self.title)?;
        validation::validate_text_field("author", &self.author)?;
        validation::validate_text_field("category", &self.category)?;
        validation::validate_price(self.price)?;
        validation::validate_initial_stock(self.stock)?;
        Ok(())
    }
}

// =============================================================================
// Sale
// =============================================================================

/// A registered sale. Append-only: never edited or removed once created.
///
/// ## Net Price
/// There is no stored net price field. [`SaleRecord::net_price`] always
/// recomputes `unit_price × quantity × (1 - discount/100)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    /// Sale identifier (UUID v4).
    pub id: String,

    /// Customer name as typed by the operator; may be empty.
    pub customer_name: String,

    /// Catalog id at the time of sale. The product may since be gone.
    pub product_id: String,

    /// Title at time of sale (frozen).
    pub title: String,

    /// Author at time of sale (frozen).
    pub author: String,

    /// Copies sold.
    pub quantity: u32,

    /// Unit price at time of sale (frozen).
    pub unit_price: Amount,

    pub discount: Discount,

    /// Calendar date of the sale.
    pub date: NaiveDate,
}

impl SaleRecord {
    /// Prices a sale against a product, snapshotting its fields.
    ///
    /// Fails with `InsufficientStock` when the product cannot cover the
    /// quantity. Does not touch the product's stock.
    pub fn from_product(
        product: &ProductRecord,
        customer_name: impl Into<String>,
        quantity: u32,
        discount: Discount,
        date: NaiveDate,
    ) -> CoreResult<Self> {
        validation::validate_quantity(quantity)?;
        product.check_stock(quantity)?;

        Ok(SaleRecord {
            id: Uuid::new_v4().to_string(),
            customer_name: customer_name.into().trim().to_string(),
            product_id: product.id.clone(),
            title: product.title.clone(),
            author: product.author.clone(),
            quantity,
            unit_price: product.price,
            discount,
            date,
        })
    }

    /// Price before discount: `unit_price × quantity`.
    #[inline]
    pub fn gross_price(&self) -> Amount {
        self.unit_price.multiply_quantity(self.quantity)
    }

    /// Price after discount.
    #[inline]
    pub fn net_price(&self) -> Amount {
        self.gross_price().apply_discount(self.discount)
    }
}

/// Input for registerSale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRequest {
    pub customer_name: String,
    pub product_id: String,
    pub quantity: u32,
    pub discount: Discount,
}

impl SaleRequest {
    pub fn new(
        customer_name: impl Into<String>,
        product_id: impl Into<String>,
        quantity: u32,
        discount: Discount,
    ) -> Self {
        SaleRequest {
            customer_name: customer_name.into(),
            product_id: product_id.into().trim().to_string(),
            quantity,
            discount,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn python_101() -> ProductRecord {
        ProductRecord::from_new(
            "P001",
            NewProduct::new("Python 101", "John Smith", "Programming", 25.99, 10),
        )
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_discount_range() {
        assert!(Discount::from_percent(0.0).is_ok());
        assert!(Discount::from_percent(99.5).is_ok());

        assert!(Discount::from_percent(100.0).is_err());
        assert!(Discount::from_percent(150.0).is_err());
        assert!(Discount::from_percent(-1.0).is_err());
        assert!(Discount::from_percent(f64::NAN).is_err());
    }

    #[test]
    fn test_discount_factor() {
        let d = Discount::from_percent(25.0).unwrap();
        assert!((d.factor() - 0.75).abs() < 1e-12);
        assert_eq!(d.to_string(), "25%");
        assert!(Discount::none().is_zero());
    }

    #[test]
    fn test_discount_deserialize_rejects_out_of_range() {
        let ok: Discount = serde_json::from_str("10").unwrap();
        assert_eq!(ok.percent(), 10.0);

        let err = serde_json::from_str::<Discount>("100");
        assert!(err.is_err());
    }

    #[test]
    fn test_new_product_trims_and_validates() {
        let new = NewProduct::new("  Dune ", "Frank Herbert", "Fiction", 9.99, 1);
        assert_eq!(new.title, "Dune");
        assert!(new.validate().is_ok());

        let no_title = NewProduct::new("   ", "A", "B", 9.99, 1);
        assert!(matches!(
            no_title.validate(),
            Err(ValidationError::Required { .. })
        ));

        let free = NewProduct::new("T", "A", "C", 0.0, 1);
        assert!(free.validate().is_err());

        let no_stock = NewProduct::new("T", "A", "C", 5.0, 0);
        assert!(no_stock.validate().is_err());
    }

    #[test]
    fn test_sale_snapshots_product() {
        let product = python_101();
        let discount = Discount::from_percent(10.0).unwrap();
        let sale = SaleRecord::from_product(&product, " Ana ", 2, discount, date()).unwrap();

        assert_eq!(sale.customer_name, "Ana");
        assert_eq!(sale.product_id, "P001");
        assert_eq!(sale.title, "Python 101");
        assert_eq!(sale.author, "John Smith");
        assert_eq!(sale.unit_price, Amount::new(25.99));
        assert!(sale.gross_price().approx_eq(Amount::new(51.98)));
        assert!(sale.net_price().approx_eq(Amount::new(46.782)));
        // Pricing alone never debits stock.
        assert_eq!(product.stock, 10);
    }

    #[test]
    fn test_sale_rejects_insufficient_stock() {
        let product = python_101();
        let err = SaleRecord::from_product(&product, "Ana", 11, Discount::none(), date());

        assert_eq!(
            err,
            Err(CoreError::InsufficientStock {
                product_id: "P001".to_string(),
                available: 10,
                requested: 11,
            })
        );
    }

    #[test]
    fn test_sale_rejects_zero_quantity() {
        let product = python_101();
        let err = SaleRecord::from_product(&product, "Ana", 0, Discount::none(), date());
        assert!(matches!(err, Err(CoreError::Validation(_))));
    }

    #[test]
    fn test_sale_ids_are_unique() {
        let product = python_101();
        let a = SaleRecord::from_product(&product, "", 1, Discount::none(), date()).unwrap();
        let b = SaleRecord::from_product(&product, "", 1, Discount::none(), date()).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_debit() {
        let mut product = python_101();
        product.debit(10).unwrap();
        assert_eq!(product.stock, 0);

        assert!(product.debit(1).is_err());
        assert_eq!(product.stock, 0);
    }
}
