//! # Menu Loop
//!
//! The interactive session: show the menu, read a choice, run it, repeat.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  loop                                                                   │
//! │   ├── print menu                                                        │
//! │   ├── read choice ─── end of input ──────────────► Ok(()) (no goodbye)  │
//! │   ├── "0" ────────────────────────────────────────► "Goodbye!", Ok(())  │
//! │   ├── unknown ──► "Invalid choice." ──► loop                            │
//! │   └── action                                                            │
//! │        ├── Ok                      ──► loop                             │
//! │        ├── CliError::Command       ──► "Error: ..." ──► loop            │
//! │        ├── CliError::Json/Config   ──► "Unexpected error: ..." ──► loop │
//! │        ├── CliError::InputClosed   ──► Ok(())                           │
//! │        └── CliError::Io            ──► Err (session ends)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use folio_core::{NewProduct, SaleRequest};
use tracing::{debug, error};

use crate::commands::{product, report, sale};
use crate::console::Console;
use crate::error::{CliError, CliResult};
use crate::present::Presenter;
use crate::state::AppState;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddProduct,
    UpdateProduct,
    DeleteProduct,
    ListProducts,
    RegisterSale,
    ViewSales,
    TopSellers,
    SalesByAuthor,
    RevenueReport,
    Exit,
}

impl MenuChoice {
    /// Menu entries in display order.
    pub const ALL: [MenuChoice; 10] = [
        MenuChoice::AddProduct,
        MenuChoice::UpdateProduct,
        MenuChoice::DeleteProduct,
        MenuChoice::ListProducts,
        MenuChoice::RegisterSale,
        MenuChoice::ViewSales,
        MenuChoice::TopSellers,
        MenuChoice::SalesByAuthor,
        MenuChoice::RevenueReport,
        MenuChoice::Exit,
    ];

    /// The key the operator types.
    pub fn key(self) -> &'static str {
        match self {
            MenuChoice::AddProduct => "1",
            MenuChoice::UpdateProduct => "2",
            MenuChoice::DeleteProduct => "3",
            MenuChoice::ListProducts => "4",
            MenuChoice::RegisterSale => "5",
            MenuChoice::ViewSales => "6",
            MenuChoice::TopSellers => "7",
            MenuChoice::SalesByAuthor => "8",
            MenuChoice::RevenueReport => "9",
            MenuChoice::Exit => "0",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        MenuChoice::ALL.into_iter().find(|choice| choice.key() == input)
    }

    fn label(self, top_n: usize) -> String {
        match self {
            MenuChoice::AddProduct => "Add Product".to_string(),
            MenuChoice::UpdateProduct => "Update Product".to_string(),
            MenuChoice::DeleteProduct => "Delete Product".to_string(),
            MenuChoice::ListProducts => "List Products".to_string(),
            MenuChoice::RegisterSale => "Register Sale".to_string(),
            MenuChoice::ViewSales => "View Sales".to_string(),
            MenuChoice::TopSellers => format!("Top {} Products", top_n),
            MenuChoice::SalesByAuthor => "Sales by Author".to_string(),
            MenuChoice::RevenueReport => "Revenue Report".to_string(),
            MenuChoice::Exit => "Exit".to_string(),
        }
    }
}

/// Runs the menu until the operator exits or input ends.
pub fn run_session<R: BufRead, W: Write>(
    state: &mut AppState,
    input: R,
    output: W,
) -> CliResult<()> {
    let presenter = Presenter::new(&state.config);
    let mut console = Console::new(input, output);

    loop {
        show_menu(&mut console, state)?;

        let raw = match console.prompt("Select an option: ") {
            Err(CliError::InputClosed) => break,
            other => other?,
        };

        let Some(choice) = MenuChoice::parse(&raw) else {
            console.say("Invalid choice.")?;
            continue;
        };

        if choice == MenuChoice::Exit {
            console.say("Goodbye!")?;
            return Ok(());
        }

        debug!(?choice, "Menu choice");

        match dispatch(choice, state, &mut console, &presenter) {
            Ok(()) => {}
            Err(CliError::Command(err)) => console.say(presenter.error(&err))?,
            Err(CliError::InputClosed) => break,
            Err(CliError::Io(err)) => return Err(CliError::Io(err)),
            Err(err) => {
                error!(error = %err, "Unexpected error in menu action");
                console.say(format_args!("Unexpected error: {}", err))?;
            }
        }
    }

    debug!("Input closed, ending session");
    Ok(())
}

fn show_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    state: &AppState,
) -> CliResult<()> {
    console.say(format_args!(
        "\n========== {} ==========",
        state.config.store_name
    ))?;
    for choice in MenuChoice::ALL {
        console.say(format_args!(
            "{}. {}",
            choice.key(),
            choice.label(state.config.top_sellers)
        ))?;
    }
    Ok(())
}

fn dispatch<R: BufRead, W: Write>(
    choice: MenuChoice,
    state: &mut AppState,
    console: &mut Console<R, W>,
    presenter: &Presenter,
) -> CliResult<()> {
    match choice {
        MenuChoice::AddProduct => add_product(state, console, presenter),
        MenuChoice::UpdateProduct => update_product(state, console, presenter),
        MenuChoice::DeleteProduct => delete_product(state, console, presenter),
        MenuChoice::ListProducts => {
            console.say("\n--- Product List ---")?;
            console.say(presenter.products(&product::list_products(&state.store))?)
        }
        MenuChoice::RegisterSale => register_sale(state, console, presenter),
        MenuChoice::ViewSales => {
            console.say("\n--- Sales Records ---")?;
            console.say(presenter.sales(&sale::list_sales(&state.store))?)
        }
        MenuChoice::TopSellers => {
            let n = state.config.top_sellers;
            console.say(format_args!("\n--- Top {} Bestsellers ---", n))?;
            console.say(presenter.top_sellers(&report::top_sellers(&state.store, n))?)
        }
        MenuChoice::SalesByAuthor => {
            console.say("\n--- Sales by Author ---")?;
            console.say(presenter.revenue_by_author(&report::revenue_by_author(&state.store))?)
        }
        MenuChoice::RevenueReport => {
            console.say("\n--- Revenue Summary ---")?;
            console.say(presenter.revenue(&report::revenue_summary(&state.store))?)
        }
        MenuChoice::Exit => Ok(()),
    }
}

// =============================================================================
// Actions with prompts
// =============================================================================

fn add_product<R: BufRead, W: Write>(
    state: &mut AppState,
    console: &mut Console<R, W>,
    presenter: &Presenter,
) -> CliResult<()> {
    console.say("\n--- Add New Product ---")?;

    let title = console.text("Title: ")?;
    let author = console.text("Author: ")?;
    let category = console.text("Category: ")?;
    let price = console.positive_float("Price: ")?;
    let stock = console.positive_int("Stock quantity: ")?;

    let added = product::add_product(
        &mut state.store,
        NewProduct::new(title, author, category, price, stock),
    )?;
    console.say(presenter.product_added(&added)?)
}

fn update_product<R: BufRead, W: Write>(
    state: &mut AppState,
    console: &mut Console<R, W>,
    presenter: &Presenter,
) -> CliResult<()> {
    console.say("\n--- Update Product ---")?;

    let id = console.text("Enter Product ID: ")?;
    let current = product::get_product(&state.store, &id)?;
    console.say(format_args!("Updating '{}'", current.title))?;

    let price = console.positive_float("New Price: ")?;
    let stock = console.non_negative_int("New Stock: ")?;

    let updated = product::update_product(&mut state.store, &current.id, price, stock)?;
    console.say(presenter.product_updated(&updated)?)
}

fn delete_product<R: BufRead, W: Write>(
    state: &mut AppState,
    console: &mut Console<R, W>,
    presenter: &Presenter,
) -> CliResult<()> {
    console.say("\n--- Delete Product ---")?;

    let id = console.text("Product ID: ")?;
    let removed = product::delete_product(&mut state.store, &id)?;
    console.say(presenter.product_deleted(&removed)?)
}

fn register_sale<R: BufRead, W: Write>(
    state: &mut AppState,
    console: &mut Console<R, W>,
    presenter: &Presenter,
) -> CliResult<()> {
    console.say("\n--- Register Sale ---")?;

    let customer = console.text("Customer name: ")?;
    console.say(presenter.products(&product::list_products(&state.store))?)?;

    let id = console.text("Enter Product ID: ")?;
    let candidate = sale::sale_candidate(&state.store, &id)?;

    let quantity = console.positive_int("Quantity: ")?;
    sale::check_quantity(&state.store, &candidate.id, quantity)?;

    let discount = console.discount("Discount (%) [0 if none]: ")?;

    let recorded = sale::register_sale(
        &mut state.store,
        SaleRequest::new(customer, candidate.id, quantity, discount),
    )?;
    console.say(presenter.sale_registered(&recorded)?)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{OutputFormat, ShopConfig};
    use chrono::NaiveDate;
    use folio_store::{Bookstore, FixedClock};
    use std::io::Cursor;

    fn state_with(config: ShopConfig) -> AppState {
        let store = Bookstore::with_clock(
            config.bookstore_config(),
            FixedClock(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()),
        );
        AppState::with_store(store, config).unwrap()
    }

    fn state() -> AppState {
        state_with(ShopConfig::default())
    }

    /// Runs a scripted session and returns everything written.
    fn session(state: &mut AppState, script: &str) -> String {
        session_bytes(state, script.as_bytes())
    }

    fn session_bytes(state: &mut AppState, script: &[u8]) -> String {
        let mut out = Vec::new();
        run_session(state, Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::RegisterSale));
        assert_eq!(MenuChoice::parse(" 0 "), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("10"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_exit_says_goodbye() {
        let out = session(&mut state(), "0\n");
        assert!(out.contains("========== Folio Bookstore =========="));
        assert!(out.contains("7. Top 3 Products"));
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_end_of_input_ends_quietly() {
        let out = session(&mut state(), "4\n");
        assert!(!out.contains("Goodbye!"));
    }

    #[test]
    fn test_invalid_choice() {
        let out = session(&mut state(), "x\n0\n");
        assert!(out.contains("Invalid choice."));
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn test_list_seeded_catalog() {
        let out = session(&mut state(), "4\n0\n");
        assert!(out.contains("P001: Python 101 by John Smith | Programming | $25.99 | Stock: 10"));
        assert!(out.contains("P005: History of Art by L. Vinci | Art | $22.75 | Stock: 12"));
    }

    #[test]
    fn test_add_product_reprompts_bad_numbers() {
        let mut state = state();
        let out = session(
            &mut state,
            "1\nDune\nFrank Herbert\nFiction\nabc\n-3\n9.5\n0\n2\n0\n",
        );

        assert!(out.contains("Error: 'abc' is not a number."));
        assert!(out.contains("Error: Must be a positive number."));
        assert!(out.contains("Error: Must be a positive integer."));
        assert!(out.contains("Product 'Dune' added with ID: P006"));
        assert_eq!(state.store.get_product("P006").unwrap().stock, 2);
    }

    #[test]
    fn test_add_product_with_empty_title_is_reported() {
        let mut state = state();
        let out = session(&mut state, "1\n\nSomeone\nMisc\n5\n1\n0\n");

        assert!(out.contains("Error: title is required"));
        assert_eq!(state.store.list_products().len(), 5);
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn test_update_product_allows_zero_stock() {
        let mut state = state();
        let out = session(&mut state, "2\nP001\n30\n0\n0\n");

        assert!(out.contains("Updating 'Python 101'"));
        let product = state.store.get_product("P001").unwrap();
        assert_eq!(product.stock, 0);
        assert_eq!(product.price.value(), 30.0);
    }

    #[test]
    fn test_update_unknown_skips_prompts() {
        let out = session(&mut state(), "2\nP042\n0\n");

        assert!(out.contains("Error: Product not found: P042"));
        assert!(!out.contains("New Price: "));
    }

    #[test]
    fn test_delete_product() {
        let mut state = state();
        let out = session(&mut state, "3\nP002\n3\nP002\n0\n");

        assert!(out.contains("Product deleted: P002 (Digital Marketing)"));
        assert!(out.contains("Error: Product not found: P002"));
        assert_eq!(state.store.list_products().len(), 4);
    }

    #[test]
    fn test_register_sale_and_view() {
        let mut state = state();
        let out = session(&mut state, "5\nAna\nP001\n2\n10\n6\n0\n");

        assert!(out.contains("Sale registered: 2 x Python 101 with 10% discount. Total: $46.78"));
        assert!(out.contains("2026-10-18 | Ana bought 2 x Python 101 for $46.78 (Discount: 10%)"));
        assert_eq!(state.store.get_product("P001").unwrap().stock, 8);
        assert_eq!(state.store.list_sales().len(), 1);
    }

    #[test]
    fn test_non_utf8_input_keeps_session_alive() {
        let mut state = state();
        let out = session_bytes(&mut state, b"\xff\n5\nJos\xe9\nP004\n1\n\n6\n0\n");

        assert!(out.contains("Invalid choice"));
        assert!(out.contains("Sale registered: 1 x AI Revolution"));
        assert!(out.contains("Jos\u{FFFD} bought 1 x AI Revolution"));
        assert!(out.ends_with("Goodbye!\n"));
        assert_eq!(state.store.get_product("P004").unwrap().stock, 4);
        assert_eq!(state.store.list_sales().len(), 1);
    }

    #[test]
    fn test_register_sale_invalid_product_short_circuits() {
        let mut state = state();
        let out = session(&mut state, "5\nAna\nP999\n0\n");

        assert!(out.contains("Error: Invalid product ID: P999"));
        assert!(!out.contains("Quantity: "));
        assert!(state.store.list_sales().is_empty());
    }

    #[test]
    fn test_register_sale_insufficient_stock_skips_discount() {
        let mut state = state();
        let out = session(&mut state, "5\nAna\nP004\n6\n0\n");

        assert!(out.contains("Error: Insufficient stock for P004: available 5, requested 6"));
        assert!(!out.contains("Discount (%)"));
        assert_eq!(state.store.get_product("P004").unwrap().stock, 5);
        assert!(state.store.list_sales().is_empty());
    }

    #[test]
    fn test_reports_after_sales() {
        let mut state = state();
        let script = concat!(
            "5\nA\nP001\n5\n0\n",
            "5\nB\nP002\n9\n0\n",
            "5\nC\nP003\n2\n0\n",
            "5\nD\nP001\n1\n0\n",
            "7\n8\n9\n0\n",
        );
        let out = session(&mut state, script);

        let top = out.find("Digital Marketing - 9 sold").unwrap();
        let second = out.find("Python 101 - 6 sold").unwrap();
        let third = out.find("Data Science Basics - 2 sold").unwrap();
        assert!(top < second && second < third);

        assert!(out.contains("John Smith: $155.94"));
        assert!(out.contains("Alice Brown: $179.91"));
        assert!(out.contains("Jane Doe: $60.00"));
        assert!(out.contains("Sales: 4"));
        assert!(out.contains("Net Income (after discounts): $395.85"));
    }

    #[test]
    fn test_empty_reports() {
        let out = session(&mut state(), "6\n7\n9\n0\n");
        assert_eq!(out.matches("No sales registered.").count(), 2);
        assert!(out.contains("Gross Income: $0.00"));
    }

    #[test]
    fn test_json_output() {
        let mut state = state_with(ShopConfig {
            output: OutputFormat::Json,
            seed_catalog: false,
            ..ShopConfig::default()
        });
        let out = session(&mut state, "4\n3\nP001\n0\n");

        assert!(out.contains("[]"));
        assert!(out.contains("\"code\": \"NOT_FOUND\""));
    }
}
