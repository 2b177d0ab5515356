//! # Cart Commands
//!
//! Handlers the view calls for each basket action.
//!
//! ## Command Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  View action          Command                  Store operation         │
//! │  ───────────          ───────                  ───────────────         │
//! │  Render               get_cart                 (read only)             │
//! │  Type in field        set_quantity             set_quantity            │
//! │  Leave field          commit_quantity_edit     commit_edit             │
//! │  +                    increment_quantity       increment               │
//! │  -                    decrement_quantity       decrement               │
//! │  Delete               remove_item              remove_item             │
//! │  Buy Now              checkout                 checkout_payload        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every mutating command returns the updated cart so the view can re-render.
//! On error the store is untouched.

use basket_core::{CartStore, CartTotals, CheckoutPayload, Money, Outcome, Quantity, TaxRate};
use serde::Serialize;
use tracing::debug;

use crate::checkout::{SubmissionReceipt, Submitter};
use crate::error::ApiError;

/// One table row as the view shows it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartRow {
    pub name: String,
    pub unit_price: Money,
    pub quantity: Quantity,
    /// Quantity field text; empty while the field is cleared
    pub input_value: String,
    pub line_total: Money,
}

/// Cart response including rows and totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartRow>,
    pub totals: CartTotals,
    /// Rate the VAT line was computed at
    pub tax_rate: TaxRate,
    /// What the last command did, if it was a mutation
    #[serde(skip)]
    pub outcome: Option<Outcome>,
}

impl From<&CartStore> for CartResponse {
    fn from(cart: &CartStore) -> Self {
        let items = cart
            .items()
            .iter()
            .map(|item| CartRow {
                name: item.name.clone(),
                unit_price: item.unit_price,
                quantity: item.quantity,
                input_value: cart
                    .input_value(&item.name)
                    .unwrap_or_else(|| item.quantity.to_string()),
                line_total: item.line_total(),
            })
            .collect();

        CartResponse {
            items,
            totals: cart.totals(),
            tax_rate: cart.tax_rate(),
            outcome: None,
        }
    }
}

impl CartResponse {
    fn after(cart: &CartStore, outcome: Outcome) -> Self {
        CartResponse {
            outcome: Some(outcome),
            ..CartResponse::from(cart)
        }
    }
}

/// Result of a checkout: what was sent and the acknowledgement.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutResponse {
    pub payload: CheckoutPayload,
    pub receipt: SubmissionReceipt,
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartStore) -> CartResponse {
    debug!("get_cart command");
    CartResponse::from(cart)
}

/// Applies raw quantity-field text.
///
/// ## Arguments
/// * `name` - Item name
/// * `raw_input` - Field text: `""` or `"1"` … `"10"`
pub fn set_quantity(
    cart: &mut CartStore,
    name: &str,
    raw_input: &str,
) -> Result<CartResponse, ApiError> {
    debug!(name = %name, input = %raw_input, "set_quantity command");
    let outcome = cart.set_quantity(name, raw_input)?;
    Ok(CartResponse::after(cart, outcome))
}

/// Ends an edit on a quantity field; a cleared field shows its quantity again.
pub fn commit_quantity_edit(cart: &mut CartStore, name: &str) -> Result<CartResponse, ApiError> {
    debug!(name = %name, "commit_quantity_edit command");
    let outcome = cart.commit_edit(name)?;
    Ok(CartResponse::after(cart, outcome))
}

/// Adds one to an item's quantity (no change at 10).
pub fn increment_quantity(cart: &mut CartStore, name: &str) -> Result<CartResponse, ApiError> {
    debug!(name = %name, "increment_quantity command");
    let outcome = cart.increment(name)?;
    Ok(CartResponse::after(cart, outcome))
}

/// Subtracts one from an item's quantity (no change at 1).
pub fn decrement_quantity(cart: &mut CartStore, name: &str) -> Result<CartResponse, ApiError> {
    debug!(name = %name, "decrement_quantity command");
    let outcome = cart.decrement(name)?;
    Ok(CartResponse::after(cart, outcome))
}

/// Removes an item from the cart.
pub fn remove_item(cart: &mut CartStore, name: &str) -> Result<CartResponse, ApiError> {
    debug!(name = %name, "remove_item command");
    cart.remove_item(name)?;
    Ok(CartResponse::after(cart, Outcome::Changed))
}

/// Snapshots the cart and hands it to the submitter.
///
/// A cleared quantity field is reverted first, so what was on screen matches
/// what is sent. Items and quantities are not changed.
pub fn checkout(
    cart: &mut CartStore,
    submitter: &mut dyn Submitter,
) -> Result<CheckoutResponse, ApiError> {
    debug!(items = cart.len(), "checkout command");
    if cart.resolve_pending_edit() == Outcome::Reverted {
        debug!("Reverted cleared quantity field before checkout");
    }
    let payload = cart.checkout_payload();
    let receipt = submitter.submit(&payload)?;
    Ok(CheckoutResponse { payload, receipt })
}
