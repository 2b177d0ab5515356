//! # Cart Store
//!
//! The in-memory basket: an ordered list of line items plus the one quantity
//! field that may be mid-edit.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  View Event               Operation               State Change          │
//! │  ──────────               ─────────               ────────────          │
//! │                                                                         │
//! │  Type "7" ───────────────► set_quantity() ──────► items[i].qty = 7     │
//! │                                                                         │
//! │  Clear field ────────────► set_quantity("") ────► pending = Some(name) │
//! │                                                                         │
//! │  Leave field ────────────► commit_edit() ───────► pending = None       │
//! │                                                                         │
//! │  Click + / - ────────────► increment() ─────────► qty ± 1 (in bounds)  │
//! │                            decrement()                                  │
//! │                                                                         │
//! │  Click delete ───────────► remove_item() ───────► items.remove(i)      │
//! │                                                                         │
//! │  Buy Now ────────────────► checkout_payload() ──► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Names are unique (checked on every insert)
//! - Every committed quantity is in `1..=10` (enforced by [`Quantity`])
//! - A cleared field never reaches the totals: the committed quantity stays in
//!   place until a valid value is typed, and leaving the field reverts it
//! - Acting on any item, or checking out, ends a pending edit
//! - An operation that returns `Err` has not modified the store

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::checkout::CheckoutPayload;
use crate::error::{CartError, CartResult};
use crate::money::Money;
use crate::types::{LineItem, QuantityInput, TaxRate};
use crate::validation::{
    parse_quantity_input, validate_cart_size, validate_item_name, validate_unit_price,
};

/// What a successful store operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Committed state changed; totals may differ.
    Changed,

    /// Nothing observable changed (e.g. `+` at 10, or retyping the same value).
    Unchanged,

    /// The item's field is now cleared and awaiting a value.
    Pending,

    /// A cleared field was abandoned and shows the committed quantity again.
    Reverted,
}

/// Totals summary for the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: u32,
    #[ts(type = "number")]
    pub subtotal: Money,
    #[ts(type = "number")]
    pub vat: Money,
    #[ts(type = "number")]
    pub total: Money,
}

/// The basket.
///
/// Owned by the caller and mutated only through `&mut self`, so there is a
/// single writer by construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CartStore {
    items: Vec<LineItem>,
    tax_rate: TaxRate,
    /// Name of the item whose quantity field is currently cleared.
    pending_edit: Option<String>,
}

impl CartStore {
    /// Creates an empty store.
    pub fn new(tax_rate: TaxRate) -> Self {
        CartStore {
            items: Vec::new(),
            tax_rate,
            pending_edit: None,
        }
    }

    /// Creates a store seeded with `items`, in order.
    ///
    /// Fails on the first invalid or duplicate item.
    pub fn with_items<I>(items: I, tax_rate: TaxRate) -> CartResult<Self>
    where
        I: IntoIterator<Item = LineItem>,
    {
        let mut store = CartStore::new(tax_rate);
        for item in items {
            store.add_item(item)?;
        }
        Ok(store)
    }

    /// Appends an item to the end of the cart.
    pub fn add_item(&mut self, item: LineItem) -> CartResult<()> {
        validate_item_name(&item.name)?;
        validate_unit_price(item.unit_price)?;
        validate_cart_size(self.items.len())?;

        if self.position(&item.name).is_some() {
            return Err(CartError::DuplicateItem(item.name));
        }

        self.items.push(item);
        Ok(())
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Applies raw quantity-field text to an item.
    ///
    /// ## Behavior
    /// - `""`: the field is cleared. Returns `Pending`; the committed quantity and
    ///   totals are untouched. Any other item's pending edit is reverted.
    /// - `"1"` … `"10"`: commits the quantity and ends any pending edit.
    /// - Anything else: `InvalidQuantityInput`, nothing changes.
    pub fn set_quantity(&mut self, name: &str, raw_input: &str) -> CartResult<Outcome> {
        let input = parse_quantity_input(raw_input).map_err(|_| CartError::InvalidQuantityInput {
            input: raw_input.to_string(),
        })?;
        let index = self.index_of(name)?;

        match input {
            QuantityInput::Empty => {
                self.pending_edit = Some(name.to_string());
                Ok(Outcome::Pending)
            }
            QuantityInput::Value(quantity) => {
                let was_pending = self.clear_pending(name);
                let item = &mut self.items[index];
                if item.quantity == quantity {
                    Ok(if was_pending { Outcome::Reverted } else { Outcome::Unchanged })
                } else {
                    item.quantity = quantity;
                    Ok(Outcome::Changed)
                }
            }
        }
    }

    /// Adds one to an item's quantity. `Unchanged` at the upper bound.
    pub fn increment(&mut self, name: &str) -> CartResult<Outcome> {
        let index = self.index_of(name)?;
        let was_pending = self.clear_pending(name);
        let item = &mut self.items[index];

        match item.quantity.checked_increment() {
            Some(quantity) => {
                item.quantity = quantity;
                Ok(Outcome::Changed)
            }
            None if was_pending => Ok(Outcome::Reverted),
            None => Ok(Outcome::Unchanged),
        }
    }

    /// Subtracts one from an item's quantity. `Unchanged` at the lower bound.
    pub fn decrement(&mut self, name: &str) -> CartResult<Outcome> {
        let index = self.index_of(name)?;
        let was_pending = self.clear_pending(name);
        let item = &mut self.items[index];

        match item.quantity.checked_decrement() {
            Some(quantity) => {
                item.quantity = quantity;
                Ok(Outcome::Changed)
            }
            None if was_pending => Ok(Outcome::Reverted),
            None => Ok(Outcome::Unchanged),
        }
    }

    /// Removes an item, keeping the order of the rest.
    pub fn remove_item(&mut self, name: &str) -> CartResult<LineItem> {
        let index = self.index_of(name)?;
        self.clear_pending(name);
        Ok(self.items.remove(index))
    }

    /// Ends an edit on an item's field (the field lost focus).
    ///
    /// A cleared field goes back to showing the committed quantity.
    pub fn commit_edit(&mut self, name: &str) -> CartResult<Outcome> {
        self.index_of(name)?;
        if self.clear_pending(name) {
            Ok(Outcome::Reverted)
        } else {
            Ok(Outcome::Unchanged)
        }
    }

    /// Reverts whichever field is cleared, if any. Called before checkout so
    /// the page and the payload agree.
    pub fn resolve_pending_edit(&mut self) -> Outcome {
        match self.pending_edit.take() {
            Some(_) => Outcome::Reverted,
            None => Outcome::Unchanged,
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Looks up an item by name.
    pub fn get(&self, name: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Returns the number of line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> u32 {
        self.items
            .iter()
            .map(|item| u32::from(item.quantity.get()))
            .sum()
    }

    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    /// Name of the item whose field is cleared, if any.
    pub fn pending_edit(&self) -> Option<&str> {
        self.pending_edit.as_deref()
    }

    /// Text the item's quantity field shows: `""` while cleared, otherwise
    /// the committed quantity. `None` for unknown names.
    pub fn input_value(&self, name: &str) -> Option<String> {
        let item = self.get(name)?;
        if self.pending_edit() == Some(name) {
            Some(String::new())
        } else {
            Some(item.quantity.to_string())
        }
    }

    /// Σ unit price × quantity.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// VAT on the subtotal.
    pub fn vat(&self) -> Money {
        self.subtotal().calculate_tax(self.tax_rate)
    }

    /// Subtotal plus VAT.
    pub fn total(&self) -> Money {
        let subtotal = self.subtotal();
        subtotal + subtotal.calculate_tax(self.tax_rate)
    }

    /// All derived values, computed from one pass over the items.
    pub fn totals(&self) -> CartTotals {
        let subtotal = self.subtotal();
        let vat = subtotal.calculate_tax(self.tax_rate);
        CartTotals {
            item_count: self.len(),
            total_quantity: self.total_quantity(),
            subtotal,
            vat,
            total: subtotal + vat,
        }
    }

    /// Snapshot for submission. Does not modify the store.
    pub fn checkout_payload(&self) -> CheckoutPayload {
        let totals = self.totals();
        CheckoutPayload {
            items: self.items.clone(),
            subtotal: totals.subtotal,
            vat: totals.vat,
            total: totals.total,
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name == name)
    }

    fn index_of(&self, name: &str) -> CartResult<usize> {
        self.position(name)
            .ok_or_else(|| CartError::ItemNotFound(name.to_string()))
    }

    /// Ends any pending edit. Returns whether it belonged to `name`.
    fn clear_pending(&mut self, name: &str) -> bool {
        self.pending_edit.take().as_deref() == Some(name)
    }
}
