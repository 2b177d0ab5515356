//! # Checkout Payload
//!
//! The snapshot handed to a submitter when the customer buys.
//!
//! ## Wire Shape
//! ```json
//! {
//!   "cart": [
//!     { "name": "Cotton T-Shirt, Medium", "price": 1.99, "quantity": 1 },
//!     { "name": "Baseball Cap, One Size", "price": 2.99, "quantity": 2 },
//!     { "name": "Swim Shorts, Medium",    "price": 3.99, "quantity": 1 }
//!   ],
//!   "subtotal": 11.96,
//!   "vat": 2.392,
//!   "total": 14.352
//! }
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::LineItem;

/// Items and totals at the moment of checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CheckoutPayload {
    #[serde(rename = "cart")]
    pub items: Vec<LineItem>,
    #[ts(type = "number")]
    pub subtotal: Money,
    #[ts(type = "number")]
    pub vat: Money,
    #[ts(type = "number")]
    pub total: Money,
}

impl CheckoutPayload {
    /// Checks if there is anything to buy.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Compact JSON, as sent to a submitter.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Indented JSON, for display.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartStore;
    use crate::types::{Quantity, TaxRate};

    fn seeded() -> CartStore {
        let items = [
            ("Cotton T-Shirt, Medium", 199, 1),
            ("Baseball Cap, One Size", 299, 2),
            ("Swim Shorts, Medium", 399, 1),
        ]
        .into_iter()
        .map(|(name, pence, qty)| {
            LineItem::new(name, Money::from_pence(pence), Quantity::new(qty).unwrap()).unwrap()
        });
        CartStore::with_items(items, TaxRate::standard_vat()).unwrap()
    }

    #[test]
    fn test_json_shape() {
        let payload = seeded().checkout_payload();
        let json: serde_json::Value = serde_json::from_str(&payload.to_json().unwrap()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "cart": [
                    {"name": "Cotton T-Shirt, Medium", "price": 1.99, "quantity": 1},
                    {"name": "Baseball Cap, One Size", "price": 2.99, "quantity": 2},
                    {"name": "Swim Shorts, Medium", "price": 3.99, "quantity": 1}
                ],
                "subtotal": 11.96,
                "vat": 2.392,
                "total": 14.352
            })
        );
    }

    #[test]
    fn test_empty_payload() {
        let payload = CartStore::new(TaxRate::standard_vat()).checkout_payload();
        assert!(payload.is_empty());
        assert_eq!(payload.to_json().unwrap(), r#"{"cart":[],"subtotal":0.0,"vat":0.0,"total":0.0}"#);
    }
}
