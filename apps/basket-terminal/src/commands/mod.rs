//! # Commands Module
//!
//! All commands exposed to the view.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! └── cart.rs     ◄─── Cart manipulation and checkout
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Input line "+ 2"                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ViewEvent::Increment { row: 2 }   (view.rs)                            │
//! │       │  row 2 → "Baseball Cap, One Size"                               │
//! │       ▼                                                                 │
//! │  commands::cart::increment_quantity(&mut cart, name)                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Result<CartResponse, ApiError> ──► re-render or notice                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands take exactly the state they need: `&CartStore` for reads,
//! `&mut CartStore` for writes.

pub mod cart;
