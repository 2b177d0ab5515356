//! # Validation Module
//!
//! Input validation for the basket.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: View (basket-terminal)                                       │
//! │  └── Raw text from the quantity field, row numbers                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Quantity text → QuantityInput                                     │
//! │  └── Item name / price rules                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Types                                                        │
//! │  └── Quantity cannot hold a value outside 1..=10                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Quantity, QuantityInput};
use crate::{MAX_CART_ITEMS, MAX_ITEM_NAME_LEN, MAX_UNIT_PRICE_PENCE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Quantity Input
// =============================================================================

/// Parses the raw text of a quantity input field.
///
/// ## Rules
/// Equivalent to the pattern `^([1-9]|10)$`, plus the empty string:
///
/// | Input            | Result                         |
/// |------------------|--------------------------------|
/// | `""`             | `QuantityInput::Empty`         |
/// | `"1"` … `"9"`    | `QuantityInput::Value(n)`      |
/// | `"10"`           | `QuantityInput::Value(10)`     |
/// | anything else    | `Err(InvalidFormat)`           |
///
/// No trimming: `" 5"` and `"05"` are rejected like any other text that is
/// not exactly a quantity.
///
/// ```rust
/// use basket_core::types::QuantityInput;
/// use basket_core::validation::parse_quantity_input;
///
/// assert_eq!(parse_quantity_input("").unwrap(), QuantityInput::Empty);
/// assert!(matches!(parse_quantity_input("10"), Ok(QuantityInput::Value(q)) if q.get() == 10));
/// assert!(parse_quantity_input("0").is_err());
/// assert!(parse_quantity_input("11").is_err());
/// ```
pub fn parse_quantity_input(raw: &str) -> ValidationResult<QuantityInput> {
    let value = match raw.as_bytes() {
        [] => return Ok(QuantityInput::Empty),
        [d @ b'1'..=b'9'] => d - b'0',
        [b'1', b'0'] => 10,
        _ => {
            return Err(ValidationError::InvalidFormat {
                field: "quantity".to_string(),
                reason: "must be a whole number from 1 to 10".to_string(),
            })
        }
    };

    Quantity::new(value).map(QuantityInput::Value)
}

// =============================================================================
// Item Validators
// =============================================================================

/// Validates a line item name.
///
/// ## Rules
/// - Must not be empty or whitespace only
/// - At most 200 characters
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Zero is allowed (free items); negative prices are not
/// - At most £1,000,000, so line totals and the subtotal cannot overflow
pub fn validate_unit_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    if price > Money::from_pence(MAX_UNIT_PRICE_PENCE) {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_UNIT_PRICE_PENCE / 100,
        });
    }

    Ok(())
}

/// Validates that the cart has room for one more item.
///
/// ## Rules
/// - Must not exceed MAX_CART_ITEMS (100)
pub fn validate_cart_size(current_items: usize) -> ValidationResult<()> {
    if current_items >= MAX_CART_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "cart items".to_string(),
            min: 0,
            max: MAX_CART_ITEMS as i64,
        });
    }

    Ok(())
}

/// Validates a tax rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn value(raw: &str) -> Option<u8> {
        match parse_quantity_input(raw) {
            Ok(QuantityInput::Value(q)) => Some(q.get()),
            _ => None,
        }
    }

    #[test]
    fn test_parse_quantity_input_accepts_one_to_ten() {
        for n in 1..=10u8 {
            assert_eq!(value(&n.to_string()), Some(n));
        }
    }

    #[test]
    fn test_parse_quantity_input_empty_is_pending() {
        assert_eq!(parse_quantity_input("").unwrap(), QuantityInput::Empty);
    }

    #[test]
    fn test_parse_quantity_input_rejects() {
        for bad in ["0", "11", "-1", "abc", "05", "010", " 5", "5 ", "1.0", "+3", "100", "١"] {
            assert!(parse_quantity_input(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Swim Shorts, Medium").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
        assert!(validate_item_name(&"A".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_unit_price() {
        assert!(validate_unit_price(Money::zero()).is_ok());
        assert!(validate_unit_price(Money::from_pence(199)).is_ok());
        assert!(validate_unit_price(Money::from_pence(-1)).is_err());
    }

    #[test]
    fn test_validate_unit_price_upper_bound() {
        assert!(validate_unit_price(Money::from_pence(MAX_UNIT_PRICE_PENCE)).is_ok());
        assert!(validate_unit_price(Money::from_units(MAX_UNIT_PRICE_PENCE * 100 + 1)).is_err());

        let yacht: Money = "500000000000000".parse().unwrap();
        assert!(matches!(
            validate_unit_price(yacht),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_cart_size() {
        assert!(validate_cart_size(0).is_ok());
        assert!(validate_cart_size(MAX_CART_ITEMS - 1).is_ok());
        assert!(validate_cart_size(MAX_CART_ITEMS).is_err());
    }

    #[test]
    fn test_validate_tax_rate_bps() {
        assert!(validate_tax_rate_bps(0).is_ok());
        assert!(validate_tax_rate_bps(2000).is_ok());
        assert!(validate_tax_rate_bps(10000).is_ok());
        assert!(validate_tax_rate_bps(10001).is_err());
    }
}
