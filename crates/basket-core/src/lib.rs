//! # basket-core: Pure Business Logic for the Basket
//!
//! This crate holds the cart rules and basket math as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Basket Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 View (basket-terminal)                          │   │
//! │  │    Header ──► Cart Table ──► Totals ──► Buy Now ──► Footer      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ basket-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ validation│   │   │
//! │  │   │ LineItem  │  │   Money   │  │ CartStore │  │  quantity │   │   │
//! │  │   │ Quantity  │  │  TaxRate  │  │  totals   │  │   rules   │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (LineItem, Quantity, TaxRate)
//! - [`money`] - Fixed-point Money type
//! - [`cart`] - The CartStore and its totals
//! - [`checkout`] - Checkout snapshot
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use basket_core::{CartStore, LineItem, Money, Quantity, TaxRate};
//!
//! let mut cart = CartStore::with_items(
//!     [
//!         LineItem::new("Cotton T-Shirt, Medium", Money::from_pence(199), Quantity::MIN).unwrap(),
//!         LineItem::new("Baseball Cap, One Size", Money::from_pence(299), Quantity::new(2).unwrap()).unwrap(),
//!     ],
//!     TaxRate::standard_vat(),
//! )
//! .unwrap();
//!
//! cart.increment("Cotton T-Shirt, Medium").unwrap();
//! assert_eq!(cart.subtotal(), Money::from_pence(996));
//!
//! // Out-of-range text is rejected and leaves the cart alone
//! assert!(cart.set_quantity("Baseball Cap, One Size", "11").is_err());
//! assert_eq!(cart.get("Baseball Cap, One Size").unwrap().quantity.get(), 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartStore, CartTotals, Outcome};
pub use checkout::CheckoutPayload;
pub use error::{CartError, CartResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Smallest quantity a line item can hold.
pub const MIN_ITEM_QUANTITY: u8 = 1;

/// Largest quantity a line item can hold.
///
/// ## Business Reason
/// The quantity field accepts 1 to 10; larger orders go through sales.
pub const MAX_ITEM_QUANTITY: u8 = 10;

/// Standard UK VAT in basis points (20%).
pub const DEFAULT_VAT_RATE_BPS: u32 = 2000;

/// Maximum length of a line item name, in characters.
pub const MAX_ITEM_NAME_LEN: usize = 200;

/// Maximum number of line items in a cart.
pub const MAX_CART_ITEMS: usize = 100;

/// Highest accepted unit price, in pence (£1,000,000).
///
/// With at most [`MAX_CART_ITEMS`] lines of [`MAX_ITEM_QUANTITY`] each and VAT
/// capped at 100%, the largest possible total is £2,000,000,000, far inside
/// the `i64` range of [`Money`].
pub const MAX_UNIT_PRICE_PENCE: i64 = 100_000_000;
