//! # Menu Commands
//!
//! Every operation the menu can run, as plain functions.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── product.rs  ◄─── Catalog add / update / delete / list
//! ├── sale.rs     ◄─── Sale registration and history
//! └── report.rs   ◄─── Bestsellers, revenue by author, revenue summary
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Menu action                                                            │
//! │  ───────────                                                            │
//! │  let price = console.positive_float("Price: ")?;   ◄── typed input      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  fn add_product(                                                        │
//! │      store: &mut Bookstore,   ◄── Only the state it needs               │
//! │      input: NewProduct,       ◄── Already typed                         │
//! │  ) -> Result<ProductDto, CommandError>                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Presenter renders ProductDto as a console line or as JSON              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands never read input or write output, so they are tested directly
//! against a `Bookstore`.

pub mod product;
pub mod report;
pub mod sale;

pub use product::ProductDto;
pub use report::{AuthorRevenueDto, RevenueDto, TopSellerDto};
pub use sale::SaleDto;
