//! # Folio Console Library
//!
//! Wires logging, configuration and state together and runs the menu.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging to stderr)
//! 2. Read `FOLIO_*` configuration
//! 3. Build the bookstore and load the bootstrap catalog
//! 4. Run the menu over stdin/stdout
//!
//! ## Module Organization
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  lib.rs ──────► run(): startup sequence                                 │
//! │  menu.rs ─────► session loop, one action per choice                     │
//! │  console.rs ──► input collector (prompt / validate / re-prompt)         │
//! │  commands/ ───► typed operations returning DTOs                         │
//! │  present.rs ──► text or JSON rendering                                  │
//! │  state/ ──────► AppState, ShopConfig                                    │
//! │  error.rs ────► CommandError, CliError                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod console;
pub mod error;
pub mod menu;
pub mod present;
pub mod state;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::CliResult;
use crate::state::{AppState, ShopConfig};

pub use menu::run_session;

/// Runs an interactive session on the process terminal.
pub fn run() -> CliResult<()> {
    init_tracing();

    info!("Starting Folio");

    let config = ShopConfig::from_env()?;
    let mut state = AppState::new(config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut state, stdin.lock(), stdout.lock())?;

    info!(sales = state.store.list_sales().len(), "Session finished");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never interleave with menu output.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=folio_store=trace` - Trace the store crate only
/// - Default: WARN level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
