//! # Catalog Identifiers
//!
//! Issues catalog ids of the form `"P" + zero-padded number` ("P001").
//!
//! ## Strategies
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog: P001 P002 P003        delete P002, then add                   │
//! │                                                                         │
//! │  Monotonic (default)   counter 3 → 4        → P004                      │
//! │  CatalogSize           size 2 + 1 = 3       → P003  ✗ already live      │
//! │                                                                         │
//! │  CatalogSize derives the id from the live count, so a delete followed   │
//! │  by an add can hand out an id that is still in use. The catalog store   │
//! │  rejects that case with DuplicateProductId instead of overwriting.      │
//! │  The size does not change on rejection, so adds stay blocked until a    │
//! │  delete lowers the size onto a free id.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use folio_core::{PRODUCT_ID_PREFIX, PRODUCT_ID_WIDTH};
use serde::{Deserialize, Serialize};

/// How the next catalog id is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdStrategy {
    /// Counter that only ever increases. Ids are never reused.
    #[default]
    Monotonic,
    /// `catalog size + 1`. Reproduces the legacy scheme, collisions included.
    CatalogSize,
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monotonic" => Ok(IdStrategy::Monotonic),
            "catalog-size" | "catalog_size" => Ok(IdStrategy::CatalogSize),
            other => Err(format!("unknown id strategy '{}'", other)),
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdStrategy::Monotonic => write!(f, "monotonic"),
            IdStrategy::CatalogSize => write!(f, "catalog-size"),
        }
    }
}

/// Renders a catalog id: `format_product_id(7) == "P007"`.
pub fn format_product_id(n: u64) -> String {
    format!("{}{:0width$}", PRODUCT_ID_PREFIX, n, width = PRODUCT_ID_WIDTH)
}

/// Stateful id generator owned by the catalog store.
#[derive(Debug, Clone, Default)]
pub struct ProductIdGenerator {
    strategy: IdStrategy,
    /// Ids handed out so far.
    issued: u64,
}

impl ProductIdGenerator {
    pub fn new(strategy: IdStrategy) -> Self {
        ProductIdGenerator { strategy, issued: 0 }
    }

    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    /// Returns the next id given the current catalog size.
    pub fn next(&mut self, catalog_size: usize) -> String {
        self.issued += 1;
        match self.strategy {
            IdStrategy::Monotonic => format_product_id(self.issued),
            IdStrategy::CatalogSize => format_product_id(catalog_size as u64 + 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_product_id() {
        assert_eq!(format_product_id(1), "P001");
        assert_eq!(format_product_id(42), "P042");
        assert_eq!(format_product_id(1000), "P1000");
    }

    #[test]
    fn test_monotonic_ignores_catalog_size() {
        let mut ids = ProductIdGenerator::new(IdStrategy::Monotonic);
        assert_eq!(ids.next(0), "P001");
        assert_eq!(ids.next(1), "P002");
        // catalog shrank, counter did not
        assert_eq!(ids.next(0), "P003");
    }

    #[test]
    fn test_catalog_size_follows_live_count() {
        let mut ids = ProductIdGenerator::new(IdStrategy::CatalogSize);
        assert_eq!(ids.next(0), "P001");
        assert_eq!(ids.next(1), "P002");
        assert_eq!(ids.next(1), "P002");
    }

    #[test]
    fn test_strategy_parsing() {
        assert_eq!("monotonic".parse::<IdStrategy>(), Ok(IdStrategy::Monotonic));
        assert_eq!(" Catalog-Size ".parse::<IdStrategy>(), Ok(IdStrategy::CatalogSize));
        assert!("random".parse::<IdStrategy>().is_err());
        assert_eq!(IdStrategy::CatalogSize.to_string(), "catalog-size");
    }
}
