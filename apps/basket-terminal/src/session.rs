//! # Session
//!
//! Owns the cart for one run and drives the read → command → render loop.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  input line ──► ViewEvent ──► row → item name ──► commands::cart::*     │
//! │                    │                                    │               │
//! │               parse error                        Ok / Err(ApiError)     │
//! │                    │                                    │               │
//! │                    ▼                                    ▼               │
//! │               notice, keep going           re-render, or notice if      │
//! │                                            recoverable, else stop       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use basket_core::CartStore;
use tracing::{debug, info, warn};

use crate::checkout::Submitter;
use crate::commands::cart::{self, CartResponse, CheckoutResponse};
use crate::error::ApiError;
use crate::state::ConfigState;
use crate::view::{self, ViewEvent};

/// What the view should show after an event.
#[derive(Debug, Clone)]
pub enum Reply {
    /// The basket page
    Page(CartResponse),
    /// The checkout preview
    Checkout(CheckoutResponse),
    /// The command list
    Help,
    /// Nothing; the session ends
    Quit,
}

/// One interactive basket session.
pub struct Session<S: Submitter> {
    cart: CartStore,
    config: ConfigState,
    submitter: S,
}

impl<S: Submitter> Session<S> {
    pub fn new(cart: CartStore, config: ConfigState, submitter: S) -> Self {
        Self {
            cart,
            config,
            submitter,
        }
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    /// Resolves a 1-based table row to the item name shown there.
    fn name_at(&self, row: usize) -> Result<String, ApiError> {
        row.checked_sub(1)
            .and_then(|index| self.cart.items().get(index))
            .map(|item| item.name.clone())
            .ok_or_else(|| ApiError::not_found("Row", &row.to_string()))
    }

    /// Applies one event to the cart.
    pub fn handle(&mut self, event: ViewEvent) -> Result<Reply, ApiError> {
        let name = match event.row() {
            Some(row) => Some(self.name_at(row)?),
            None => None,
        };
        let name = name.as_deref().unwrap_or_default();

        let reply = match event {
            ViewEvent::Show => Reply::Page(cart::get_cart(&self.cart)),
            ViewEvent::Help => Reply::Help,
            ViewEvent::Quit => Reply::Quit,
            ViewEvent::SetQuantity { value, .. } => {
                Reply::Page(cart::set_quantity(&mut self.cart, name, &value)?)
            }
            ViewEvent::Clear { .. } => Reply::Page(cart::set_quantity(&mut self.cart, name, "")?),
            ViewEvent::Blur { .. } => Reply::Page(cart::commit_quantity_edit(&mut self.cart, name)?),
            ViewEvent::Increment { .. } => {
                Reply::Page(cart::increment_quantity(&mut self.cart, name)?)
            }
            ViewEvent::Decrement { .. } => {
                Reply::Page(cart::decrement_quantity(&mut self.cart, name)?)
            }
            ViewEvent::Remove { .. } => Reply::Page(cart::remove_item(&mut self.cart, name)?),
            ViewEvent::Buy => {
                Reply::Checkout(cart::checkout(&mut self.cart, &mut self.submitter)?)
            }
        };

        Ok(reply)
    }

    /// Runs until `quit` or end of input.
    ///
    /// Rejected actions print a notice and leave the cart as it was. Only
    /// unrecoverable errors (terminal I/O, serialisation) end the loop early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<(), ApiError> {
        info!(store = %self.config.store_name, items = self.cart.len(), "Session started");
        write!(output, "{}", view::render(&cart::get_cart(&self.cart), &self.config))?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let event = match line.parse::<ViewEvent>() {
                Ok(event) => event,
                Err(err) => {
                    debug!(line = %line, error = %err, "Unparsed input");
                    write!(output, "{}", view::render_notice(&err.to_string()))?;
                    continue;
                }
            };

            match self.handle(event) {
                Ok(Reply::Page(page)) => write!(output, "{}", view::render(&page, &self.config))?,
                Ok(Reply::Checkout(done)) => write!(output, "{}", view::render_checkout(&done)?)?,
                Ok(Reply::Help) => write!(output, "{}", view::render_help())?,
                Ok(Reply::Quit) => break,
                Err(err) if err.is_recoverable() => {
                    warn!(error = %err, "Action rejected");
                    write!(output, "{}", view::render_notice(&err.message))?;
                }
                Err(err) => return Err(err),
            }
            output.flush()?;
        }

        info!("Session ended");
        Ok(())
    }
}
