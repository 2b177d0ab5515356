//! # Terminal View
//!
//! Renders the basket page as text and parses input lines into events.
//!
//! ## Page Layout
//! ```text
//! AKQA
//!
//! Your Basket
//! Items you have added to your basket are shown below.
//! Adjust the quantities or remove items before continuing your purchase.
//!
//!  #  Product                   Price  Quantity      Cost
//!  1  Cotton T-Shirt, Medium    £1.99  [ 1]  + -    £1.99
//!  2  Baseball Cap, One Size    £2.99  [ 2]  + -    £5.98
//!  3  Swim Shorts, Medium       £3.99  [ 1]  + -    £3.99
//!
//!     Subtotal                                     £11.96
//!     VAT @ 20%                                     £2.39
//!     Total Cost                                   £14.35
//!
//! [ Buy Now » ]
//!
//! © 2013 AKQA Ltd. Registered in England; 2964394
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::commands::cart::{CartResponse, CheckoutResponse};
use crate::state::ConfigState;

// =============================================================================
// Events
// =============================================================================

/// A user action, addressed by 1-based table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// Redraw the basket
    Show,
    /// List commands
    Help,
    /// Type into a row's quantity field
    SetQuantity { row: usize, value: String },
    /// Empty a row's quantity field
    Clear { row: usize },
    /// Leave a row's quantity field
    Blur { row: usize },
    /// Press `+`
    Increment { row: usize },
    /// Press `-`
    Decrement { row: usize },
    /// Press delete
    Remove { row: usize },
    /// Press Buy Now
    Buy,
    /// End the session
    Quit,
}

/// Why an input line is not an event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseEventError {
    #[error("Type a command, or `help` for a list")]
    Empty,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("`{command}` needs {argument}")]
    MissingArgument {
        command: String,
        argument: &'static str,
    },

    #[error("Not a row number: {0}")]
    InvalidRow(String),

    #[error("Unexpected extra input: {0}")]
    TrailingInput(String),
}

impl FromStr for ViewEvent {
    type Err = ParseEventError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let command = parts.next().ok_or(ParseEventError::Empty)?;
        let lowered = command.to_lowercase();

        let row = |parts: &mut std::str::SplitWhitespace<'_>| -> Result<usize, ParseEventError> {
            let raw = parts.next().ok_or_else(|| ParseEventError::MissingArgument {
                command: command.to_string(),
                argument: "a row number",
            })?;
            match raw.parse::<usize>() {
                Ok(row) if row > 0 => Ok(row),
                _ => Err(ParseEventError::InvalidRow(raw.to_string())),
            }
        };

        let event = match lowered.as_str() {
            "show" | "ls" => ViewEvent::Show,
            "help" | "?" => ViewEvent::Help,
            "buy" => ViewEvent::Buy,
            "quit" | "exit" | "q" => ViewEvent::Quit,
            "set" => {
                let row = row(&mut parts)?;
                let value = parts.next().ok_or_else(|| ParseEventError::MissingArgument {
                    command: command.to_string(),
                    argument: "a quantity (use `clear` to empty the field)",
                })?;
                ViewEvent::SetQuantity {
                    row,
                    value: value.to_string(),
                }
            }
            "clear" => ViewEvent::Clear { row: row(&mut parts)? },
            "blur" | "done" => ViewEvent::Blur { row: row(&mut parts)? },
            "+" | "inc" => ViewEvent::Increment { row: row(&mut parts)? },
            "-" | "dec" => ViewEvent::Decrement { row: row(&mut parts)? },
            "rm" | "del" | "remove" => ViewEvent::Remove { row: row(&mut parts)? },
            _ => return Err(ParseEventError::UnknownCommand(command.to_string())),
        };

        let rest: Vec<&str> = parts.collect();
        if !rest.is_empty() {
            return Err(ParseEventError::TrailingInput(rest.join(" ")));
        }

        Ok(event)
    }
}

impl ViewEvent {
    /// The row this event addresses, if any.
    pub fn row(&self) -> Option<usize> {
        match self {
            ViewEvent::SetQuantity { row, .. }
            | ViewEvent::Clear { row }
            | ViewEvent::Blur { row }
            | ViewEvent::Increment { row }
            | ViewEvent::Decrement { row }
            | ViewEvent::Remove { row } => Some(*row),
            ViewEvent::Show | ViewEvent::Help | ViewEvent::Buy | ViewEvent::Quit => None,
        }
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// The basket page for one cart state.
pub struct Page<'a> {
    cart: &'a CartResponse,
    config: &'a ConfigState,
}

impl<'a> Page<'a> {
    pub fn new(cart: &'a CartResponse, config: &'a ConfigState) -> Self {
        Page { cart, config }
    }

    fn write_table(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (cart, config) = (self.cart, self.config);

        if cart.items.is_empty() {
            writeln!(f, "Your basket is empty.")?;
            writeln!(f)?;
        } else {
            let name_width = cart
                .items
                .iter()
                .map(|row| row.name.chars().count())
                .max()
                .unwrap_or(0)
                .max("Product".len());

            writeln!(
                f,
                "{:>2}  {:<name_width$}  {:>8}  {:<12}  {:>9}",
                "#", "Product", "Price", "Quantity", "Cost"
            )?;

            for (index, row) in cart.items.iter().enumerate() {
                let field = format!("[{:>2}]  + -", row.input_value);
                writeln!(
                    f,
                    "{:>2}  {:<name_width$}  {:>8}  {:<12}  {:>9}",
                    index + 1,
                    row.name,
                    config.format_currency(row.unit_price),
                    field,
                    config.format_currency(row.line_total),
                )?;
            }
            writeln!(f)?;
        }

        let vat_label = format!("VAT @ {}", cart.tax_rate);
        for (label, amount) in [
            ("Subtotal", cart.totals.subtotal),
            (vat_label.as_str(), cart.totals.vat),
            ("Total Cost", cart.totals.total),
        ] {
            writeln!(f, "    {:<14}{:>12}", label, config.format_currency(amount))?;
        }
        Ok(())
    }
}

impl fmt::Display for Page<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.config.store_name)?;
        writeln!(f)?;
        writeln!(f, "Your Basket")?;
        writeln!(f, "Items you have added to your basket are shown below.")?;
        writeln!(
            f,
            "Adjust the quantities or remove items before continuing your purchase."
        )?;
        writeln!(f)?;

        self.write_table(f)?;
        writeln!(f)?;
        writeln!(f, "[ Buy Now » ]")?;
        writeln!(f)?;
        writeln!(f, "{}", self.config.footer)
    }
}

/// Renders the whole page.
pub fn render(cart: &CartResponse, config: &ConfigState) -> String {
    Page::new(cart, config).to_string()
}

/// Renders the "order would be sent" notice after Buy Now.
pub fn render_checkout(checkout: &CheckoutResponse) -> serde_json::Result<String> {
    Ok(format!(
        "Order preview (not sent):\n{}\nReference: {}\n",
        checkout.payload.to_json_pretty()?,
        checkout.receipt.reference
    ))
}

/// Renders a one-line notice for a rejected action.
pub fn render_notice(message: &str) -> String {
    format!("! {}\n", message)
}

/// Command reference.
pub fn render_help() -> String {
    [
        "Commands:",
        "  show               redraw the basket",
        "  set <row> <qty>    type a quantity (1-10) into a row",
        "  clear <row>        empty a row's quantity field",
        "  blur <row>         leave a row's quantity field",
        "  + <row>, - <row>   adjust a quantity by one",
        "  rm <row>           remove an item",
        "  buy                check out",
        "  quit               leave",
    ]
    .join("\n")
        + "\n"
}
