//! # Basket Terminal Library
//!
//! Text front end for the basket page: loads configuration, seeds a cart and
//! runs an interactive session on stdin/stdout.
//!
//! ## Module Organization
//! ```text
//! basket_terminal/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   └── cart.rs     ◄─── Cart manipulation and checkout commands
//! ├── checkout.rs     ◄─── Where checkout payloads are submitted
//! ├── session.rs      ◄─── Input loop and row addressing
//! ├── view.rs         ◄─── Page rendering and input parsing
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod checkout;
pub mod commands;
pub mod error;
pub mod session;
pub mod state;
pub mod view;

use std::io;
use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;

use checkout::PreviewSubmitter;
use error::ApiError;
use session::Session;
use state::ConfigState;

/// Runs the terminal basket.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber on stderr with env filter                      │
/// │     • Default: INFO, DEBUG for basket crates; override with RUST_LOG    │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • $BASKET_CONFIG, else the platform config dir                      │
/// │     • Environment overrides                                             │
/// │                                                                         │
/// │  3. Seed the Cart ────────────────────────────────────────────────────► │
/// │                                                                         │
/// │  4. Run the Session on stdin/stdout ──────────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), ApiError> {
    init_tracing();

    info!("Starting basket terminal");

    let config_path = std::env::var_os("BASKET_CONFIG").map(PathBuf::from);
    let config = ConfigState::load(config_path)?;
    let cart = config.build_store()?;

    info!(
        store = %config.store_name,
        items = cart.len(),
        vat = %config.tax_rate(),
        "Cart seeded"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(cart, config, PreviewSubmitter::new());
    session.run(stdin.lock(), stdout.lock())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never interleave with the rendered page.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=basket_terminal=trace` - Trace the terminal crate only
/// - Default: INFO, DEBUG for the basket crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,basket_core=debug,basket_terminal=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
