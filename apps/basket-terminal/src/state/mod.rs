//! # State Module
//!
//! Application state for the terminal app.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐        ┌──────────────────┐                      │
//! │  │   ConfigState    │──seed──►    CartStore     │  (basket-core)        │
//! │  │                  │        │                  │                      │
//! │  │  store_name      │        │  items           │                      │
//! │  │  vat_rate_bps    │        │  pending edit    │                      │
//! │  │  seed items      │        │                  │                      │
//! │  └──────────────────┘        └──────────────────┘                      │
//! │                                                                         │
//! │  ConfigState: read-only after startup                                  │
//! │  CartStore:   owned by the Session, one writer                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;

pub use config::{ConfigError, ConfigResult, ConfigState, SeedItem};
