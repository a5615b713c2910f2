//! # Validation Module
//!
//! Input validation for operator-supplied values.
//!
//! Validation runs before any state is touched, so a rejected input leaves
//! the till exactly as it was. The adapter layer is expected to have already
//! turned raw field text into typed values; these checks enforce the domain
//! rules on top of that.
//!
//! ## Usage
//! ```rust
//! use caixa_core::validation::{validate_customer, validate_quantity};
//!
//! assert!(validate_quantity(3).is_ok());
//! assert!(validate_quantity(0).is_err());
//! assert_eq!(validate_customer("  Maria  ").unwrap(), "Maria");
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates an item quantity.
///
/// ## Rules
/// - Must be positive (> 0). Zero and negative counts are operator typos.
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::InvalidQuantity { quantity });
    }

    Ok(())
}

/// Validates a customer identifier from the selection list.
///
/// ## Rules
/// - Must not be blank once trimmed (the selector's "no choice" value)
///
/// ## Returns
/// The trimmed identifier.
pub fn validate_customer(identifier: &str) -> ValidationResult<&str> {
    let identifier = identifier.trim();

    if identifier.is_empty() {
        return Err(ValidationError::NoCustomerSelected);
    }

    Ok(identifier)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(100).is_ok());

        assert!(matches!(
            validate_quantity(0),
            Err(ValidationError::InvalidQuantity { quantity: 0 })
        ));
        assert!(validate_quantity(-3).is_err());
    }

    #[test]
    fn test_validate_customer() {
        assert_eq!(validate_customer("Maria").unwrap(), "Maria");
        assert_eq!(validate_customer("  João  ").unwrap(), "João");

        assert!(validate_customer("").is_err());
        assert!(validate_customer("   ").is_err());
    }
}
