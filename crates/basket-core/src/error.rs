//! # Error Types
//!
//! Domain-specific error types for basket-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  basket-core errors (this file)                                        │
//! │  ├── CartError        - Cart operation failures                        │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  basket-terminal errors (app)                                          │
//! │  └── ApiError         - What the view sees                             │
//! │                                                                         │
//! │  Flow: ValidationError → CartError → ApiError → View notice            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A `CartError` never leaves the store half-modified: every operation that
//! returns one has left the cart exactly as it was.

use thiserror::Error;

// =============================================================================
// Cart Error
// =============================================================================

/// Cart operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// The raw quantity text is not empty and not an integer in 1..=10.
    ///
    /// ## When This Occurs
    /// ```text
    /// User types "0", "11", "abc", "05" into the quantity field
    ///      │
    ///      ▼
    /// InvalidQuantityInput { input: "11" }
    ///      │
    ///      ▼
    /// Field keeps showing the previous value
    /// ```
    #[error("Invalid quantity input: {input:?}")]
    InvalidQuantityInput { input: String },

    /// No line item with this name.
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// A line item with this name is already in the cart.
    #[error("Item already in cart: {0}")]
    DuplicateItem(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g. a price that is not a decimal number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;
