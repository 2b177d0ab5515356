//! # Domain Types
//!
//! Core domain types used throughout the basket.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    LineItem     │   │    Quantity     │   │    TaxRate      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name (key)     │   │  u8 in 1..=10   │   │  bps (u32)      │       │
//! │  │  unit_price     │   │                 │   │  2000 = 20%     │       │
//! │  │  quantity       │   │                 │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐                                                   │
//! │  │  QuantityInput  │  what the quantity field currently holds           │
//! │  │  ─────────────  │                                                   │
//! │  │  Empty          │                                                   │
//! │  │  Value(qty)     │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! A line item is identified by its `name`. The cart enforces that names are
//! unique, so a name lookup always finds at most one item.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_ITEM_QUANTITY, MIN_ITEM_QUANTITY};

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 2000 bps = 20% (UK standard VAT)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// The UK standard VAT rate (20%).
    #[inline]
    pub const fn standard_vat() -> Self {
        TaxRate(crate::DEFAULT_VAT_RATE_BPS)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::standard_vat()
    }
}

/// Formats as a percentage without trailing zeros ("20%", "8.25%").
impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        if frac == 0 {
            write!(f, "{}%", whole)
        } else if frac % 10 == 0 {
            write!(f, "{}.{}%", whole, frac / 10)
        } else {
            write!(f, "{}.{:02}%", whole, frac)
        }
    }
}

// =============================================================================
// Quantity
// =============================================================================

/// A committed line-item quantity, always within `1..=10`.
///
/// There is no way to build a `Quantity` outside the range, so a cart whose
/// items hold `Quantity` values satisfies the bound by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Quantity(u8);

impl Quantity {
    /// Smallest committed quantity.
    pub const MIN: Quantity = Quantity(MIN_ITEM_QUANTITY);

    /// Largest committed quantity.
    pub const MAX: Quantity = Quantity(MAX_ITEM_QUANTITY);

    /// Creates a quantity, rejecting values outside `1..=10`.
    ///
    /// ```rust
    /// use basket_core::types::Quantity;
    ///
    /// assert_eq!(Quantity::new(7).unwrap().get(), 7);
    /// assert!(Quantity::new(0).is_err());
    /// assert!(Quantity::new(11).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if (MIN_ITEM_QUANTITY..=MAX_ITEM_QUANTITY).contains(&value) {
            Ok(Quantity(value))
        } else {
            Err(ValidationError::OutOfRange {
                field: "quantity".to_string(),
                min: i64::from(MIN_ITEM_QUANTITY),
                max: i64::from(MAX_ITEM_QUANTITY),
            })
        }
    }

    /// Creates a quantity, clamping `value` into `1..=10`.
    ///
    /// ```rust
    /// use basket_core::types::Quantity;
    ///
    /// assert_eq!(Quantity::saturating(0), Quantity::MIN);
    /// assert_eq!(Quantity::saturating(4).get(), 4);
    /// assert_eq!(Quantity::saturating(99), Quantity::MAX);
    /// ```
    pub const fn saturating(value: u8) -> Self {
        if value < MIN_ITEM_QUANTITY {
            Quantity::MIN
        } else if value > MAX_ITEM_QUANTITY {
            Quantity::MAX
        } else {
            Quantity(value)
        }
    }

    /// Returns the numeric value.
    #[inline]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// One more, or `None` at the upper bound.
    pub fn checked_increment(&self) -> Option<Quantity> {
        (self.0 < MAX_ITEM_QUANTITY).then(|| Quantity(self.0 + 1))
    }

    /// One less, or `None` at the lower bound.
    pub fn checked_decrement(&self) -> Option<Quantity> {
        (self.0 > MIN_ITEM_QUANTITY).then(|| Quantity(self.0 - 1))
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity::MIN
    }
}

impl TryFrom<u8> for Quantity {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Quantity::new(value)
    }
}

impl From<Quantity> for u8 {
    fn from(qty: Quantity) -> u8 {
        qty.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Quantity Input
// =============================================================================

/// The accepted contents of a quantity input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityInput {
    /// The field was cleared mid-edit. Not a committed quantity.
    Empty,

    /// A valid quantity to commit.
    Value(Quantity),
}

// =============================================================================
// Line Item
// =============================================================================

/// A single product entry in the cart.
///
/// Serialises to the checkout JSON shape:
/// `{"name": "Cotton T-Shirt, Medium", "price": 1.99, "quantity": 1}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Display name; unique within a cart.
    pub name: String,

    /// Price of one unit.
    #[serde(rename = "price")]
    #[ts(type = "number")]
    pub unit_price: Money,

    /// Committed quantity.
    #[ts(type = "number")]
    pub quantity: Quantity,
}

impl LineItem {
    /// Creates a line item after validating the name and price.
    pub fn new(
        name: impl Into<String>,
        unit_price: Money,
        quantity: Quantity,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        crate::validation::validate_item_name(&name)?;
        crate::validation::validate_unit_price(unit_price)?;
        Ok(LineItem {
            name,
            unit_price,
            quantity,
        })
    }

    /// Unit price × quantity (the "Cost" column).
    pub fn line_total(&self) -> Money {
        self.unit_price
            .multiply_quantity(i64::from(self.quantity.get()))
    }
}
