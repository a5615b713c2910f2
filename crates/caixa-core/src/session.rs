//! # Session Module
//!
//! Tracks the single customer being served at the counter.
//!
//! Single-till model: at most one active customer, no queueing and no
//! history. Calling the next customer simply overwrites the current one.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validation::validate_customer;

/// The customer currently being served, if any.
///
/// Starts unset on a fresh till and is cleared again by a successful
/// finalize. The adapter renders the unset state as "none".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    customer: Option<String>,
}

impl Session {
    /// Creates a session with no active customer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls a customer to the counter, replacing any prior active customer.
    ///
    /// ## Errors
    /// [`ValidationError::NoCustomerSelected`] when the identifier is blank;
    /// the previous customer (if any) stays active.
    pub fn call_customer(&mut self, identifier: &str) -> Result<(), ValidationError> {
        let identifier = validate_customer(identifier)?;
        self.customer = Some(identifier.to_string());
        Ok(())
    }

    /// The active customer identifier, if one is being served.
    pub fn active_customer(&self) -> Option<&str> {
        self.customer.as_deref()
    }

    /// True while a customer is being served.
    pub fn has_active_customer(&self) -> bool {
        self.customer.is_some()
    }

    /// Ends the attendance, back to "none".
    pub fn clear(&mut self) {
        self.customer = None;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unset() {
        let session = Session::new();
        assert!(session.active_customer().is_none());
        assert!(!session.has_active_customer());
    }

    #[test]
    fn test_call_customer() {
        let mut session = Session::new();
        session.call_customer("Maria").unwrap();
        assert_eq!(session.active_customer(), Some("Maria"));
    }

    #[test]
    fn test_call_trims_identifier() {
        let mut session = Session::new();
        session.call_customer("  João  ").unwrap();
        assert_eq!(session.active_customer(), Some("João"));
    }

    #[test]
    fn test_blank_identifier_rejected_and_state_kept() {
        let mut session = Session::new();
        session.call_customer("Maria").unwrap();

        assert!(matches!(
            session.call_customer("   "),
            Err(ValidationError::NoCustomerSelected)
        ));
        // Rejected call left the previous customer active
        assert_eq!(session.active_customer(), Some("Maria"));
    }

    #[test]
    fn test_next_customer_overwrites() {
        let mut session = Session::new();
        session.call_customer("Maria").unwrap();
        session.call_customer("José").unwrap();
        assert_eq!(session.active_customer(), Some("José"));
    }

    #[test]
    fn test_clear() {
        let mut session = Session::new();
        session.call_customer("Maria").unwrap();
        session.clear();
        assert!(!session.has_active_customer());
    }
}
