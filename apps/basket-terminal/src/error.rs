//! # API Error Types
//!
//! What the view sees when a command fails.
//!
//! ## Error Translation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow                                           │
//! │                                                                         │
//! │  CartError::InvalidQuantityInput ──► VALIDATION_ERROR  (notice, no-op)  │
//! │  CartError::ItemNotFound ──────────► NOT_FOUND         (notice, no-op)  │
//! │  CartError::DuplicateItem ─────────► CART_ERROR                         │
//! │  ConfigError::* ───────────────────► CONFIG_ERROR      (fatal at start) │
//! │  io::Error (terminal) ─────────────► INTERNAL          (fatal)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use basket_core::CartError;
use serde::Serialize;

use crate::state::ConfigError;

/// Serialisable command error.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    /// Error category for display decisions
    pub code: ErrorCode,

    /// Human-readable message
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Item or row does not exist
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Cart operation failed
    CartError,

    /// Configuration could not be loaded
    ConfigError,

    /// Checkout could not be submitted
    CheckoutError,

    /// Terminal I/O or serialisation failure
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a checkout error.
    pub fn checkout(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CheckoutError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// Whether the session can carry on after this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self.code, ErrorCode::ConfigError | ErrorCode::Internal)
    }
}

/// Converts cart errors to API errors.
impl From<CartError> for ApiError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::InvalidQuantityInput { input } => ApiError::validation(format!(
                "Quantity must be a whole number from {} to {}, got {:?}",
                basket_core::MIN_ITEM_QUANTITY,
                basket_core::MAX_ITEM_QUANTITY,
                input
            )),
            CartError::ItemNotFound(name) => ApiError::not_found("Item", &name),
            CartError::DuplicateItem(name) => {
                ApiError::new(ErrorCode::CartError, format!("{} is already in the basket", name))
            }
            CartError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts configuration errors to API errors.
impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("Terminal I/O failed: {}", err);
        ApiError::internal(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("Serialisation failed: {}", err);
        ApiError::internal("Could not serialise checkout payload")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
