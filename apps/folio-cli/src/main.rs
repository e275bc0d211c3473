//! # Folio Console Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Folio Console                                    │
//! │                                                                         │
//! │  main.rs ────► calls folio_cli_lib::run(), maps the outcome to an      │
//! │                exit code                                                │
//! │                                                                         │
//! │  lib.rs ─────► logging, configuration, state, menu loop                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for testability
    match folio_cli_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("folio: {}", err);
            ExitCode::FAILURE
        }
    }
}
