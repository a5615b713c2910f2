//! # Domain Types
//!
//! Payment-related types shared across the till.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────────────────┐                 │
//! │  │  PaymentMethod  │   │      PaymentSelection       │                 │
//! │  │  ─────────────  │   │  ─────────────────────────  │                 │
//! │  │  Cash           │   │  method: Option<Method>     │                 │
//! │  │  Card           │   │  tendered: Money            │                 │
//! │  │  Pix            │   │  (reset per transaction)    │                 │
//! │  └─────────────────┘   └─────────────────────────────┘                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Payment Method
// =============================================================================

/// How the customer pays. Closed set: the counter accepts nothing else.
///
/// Only [`PaymentMethod::Cash`] involves tendered money and change; the
/// other methods settle exactly and never show change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash payment.
    Cash,
    /// Card payment on the counter terminal.
    Card,
    /// Instant bank transfer.
    Pix,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::Pix => "pix",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Payment Selection
// =============================================================================

/// The operator's payment choice for the transaction in progress.
///
/// Starts unset with zero tendered; [`PaymentSelection::reset`] returns it
/// to that state after finalize or cancel. Tendered money is only meaningful
/// while the method is cash, but the value is kept regardless so switching
/// methods back and forth does not lose the typed amount.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PaymentSelection {
    /// Selected method, `None` until the operator picks one.
    pub method: Option<PaymentMethod>,

    /// Cash handed over by the customer. Zero when unset.
    pub tendered: Money,
}

impl PaymentSelection {
    /// Creates an unset selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the payment method, replacing any previous choice.
    pub fn select_method(&mut self, method: PaymentMethod) {
        self.method = Some(method);
    }

    /// Records the cash amount handed over.
    pub fn set_tendered(&mut self, amount: Money) {
        self.tendered = amount;
    }

    /// True when the selected method is cash.
    pub fn is_cash(&self) -> bool {
        self.method == Some(PaymentMethod::Cash)
    }

    /// Returns the selection to its initial unset state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
