//! # Basket Terminal Entry Point
//!
//! The actual setup is in lib.rs so sessions can be driven from tests.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration
//! 3. Seed the cart
//! 4. Read commands from stdin until `quit` or end of input

use std::process::ExitCode;

fn main() -> ExitCode {
    match basket_terminal::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("basket: {}", err.message);
            ExitCode::FAILURE
        }
    }
}
