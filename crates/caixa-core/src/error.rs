//! # Error Types
//!
//! Domain-specific error types for caixa-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  caixa-core errors (this file)                                         │
//! │  ├── CoreError        - Transaction-rule failures                      │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → UI adapter → operator message     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every failure here is operator input that needs correcting, not a
//! systemic fault: the operation is rejected whole, state is unchanged, and
//! the adapter shows one message. There is no retry or recovery logic.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (amounts, quantities)
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Transaction-rule violations.
///
/// These are raised by the finalize flow when the till is not in a state
/// that allows committing the sale. They should be caught and translated to
/// operator-facing messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Finalize was requested with nothing in the cart.
    #[error("the cart is empty")]
    EmptyCart,

    /// Finalize was requested with no customer being served.
    #[error("no customer is being served")]
    NoActiveCustomer,

    /// Finalize was requested before a payment method was selected.
    #[error("no payment method selected")]
    NoPaymentMethod,

    /// Cash handed over does not cover the total.
    ///
    /// ## When This Occurs
    /// Only for cash payments: the tendered amount is compared against the
    /// cart total at finalize time. Non-cash methods never hit this check.
    #[error("cash tendered {tendered} does not cover the total {total}")]
    InsufficientCash { tendered: Money, total: Money },

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when operator input doesn't meet requirements, before any
/// state is touched.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Quantity must be a positive whole number.
    #[error("quantity must be a positive whole number, got {quantity}")]
    InvalidQuantity { quantity: i64 },

    /// The customer selector was confirmed with nothing chosen.
    #[error("no customer selected")]
    NoCustomerSelected,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
