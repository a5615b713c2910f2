//! # Checkout Module
//!
//! Change-due calculation for the payment panel.
//!
//! ## Outcome, not a signed number
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  total R$ 13,50, cash                                                   │
//! │                                                                         │
//! │  tendered R$ 20,00 ──► Change(R$ 6,50)     rendered "R$ 6,50"           │
//! │  tendered R$ 10,00 ──► Shortfall(R$ 3,50)  rendered "Falta R$ 3,50"     │
//! │  tendered unset    ──► NothingDue          rendered "R$ 0,00"           │
//! │                                                                         │
//! │  any non-cash method ──► NothingDue, whatever was typed                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A shortfall is a distinct outcome the adapter must render differently,
//! never a negative change amount handed to the operator.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;
use crate::types::{PaymentMethod, PaymentSelection};

// =============================================================================
// Change Due
// =============================================================================

/// What the payment panel shows for the current total and payment input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
pub enum ChangeDue {
    /// Nothing to return: non-cash method, or no tendered cash yet.
    NothingDue,

    /// Cash covers the total; return this much to the customer.
    Change(Money),

    /// Cash falls short of the total by this much.
    Shortfall(Money),
}

impl ChangeDue {
    /// True when the tendered cash covers the total (change ≥ 0).
    pub fn is_covered(&self) -> bool {
        !matches!(self, ChangeDue::Shortfall(_))
    }
}

/// Renders the localized payment-panel text: `R$ 0,00`, the change amount,
/// or `Falta R$ X` for the amount still owed.
impl fmt::Display for ChangeDue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeDue::NothingDue => write!(f, "{}", Money::zero()),
            ChangeDue::Change(amount) => write!(f, "{amount}"),
            ChangeDue::Shortfall(missing) => write!(f, "Falta {missing}"),
        }
    }
}

// =============================================================================
// Calculation
// =============================================================================

/// Derives the change due from the total and the current payment selection.
///
/// Pure function: recompute it on every change to the total, the method, or
/// the tendered amount — nothing is cached.
///
/// Non-cash methods settle exactly, so they never show change; the same
/// `NothingDue` applies while no cash has been handed over.
///
/// ## Example
/// ```rust
/// use caixa_core::{change_due, ChangeDue, Money, PaymentMethod, PaymentSelection};
///
/// let mut payment = PaymentSelection::new();
/// payment.select_method(PaymentMethod::Cash);
/// payment.set_tendered(Money::from_centavos(2000));
///
/// let due = change_due(Money::from_centavos(1350), &payment);
/// assert_eq!(due, ChangeDue::Change(Money::from_centavos(650)));
/// ```
pub fn change_due(total: Money, payment: &PaymentSelection) -> ChangeDue {
    match payment.method {
        Some(PaymentMethod::Cash) if payment.tendered.is_positive() => {
            let diff = payment.tendered - total;
            if diff.is_negative() {
                ChangeDue::Shortfall(diff.abs())
            } else {
                ChangeDue::Change(diff)
            }
        }
        _ => ChangeDue::NothingDue,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn cash(tendered_centavos: i64) -> PaymentSelection {
        let mut payment = PaymentSelection::new();
        payment.select_method(PaymentMethod::Cash);
        payment.set_tendered(Money::from_centavos(tendered_centavos));
        payment
    }

    #[test]
    fn test_cash_with_change() {
        let due = change_due(Money::from_centavos(1350), &cash(2000));
        assert_eq!(due, ChangeDue::Change(Money::from_centavos(650)));
        assert!(due.is_covered());
    }

    #[test]
    fn test_cash_exact_is_zero_change() {
        let due = change_due(Money::from_centavos(1350), &cash(1350));
        assert_eq!(due, ChangeDue::Change(Money::zero()));
    }

    #[test]
    fn test_cash_shortfall() {
        let due = change_due(Money::from_centavos(1350), &cash(1000));
        assert_eq!(due, ChangeDue::Shortfall(Money::from_centavos(350)));
        assert!(!due.is_covered());
    }

    #[test]
    fn test_cash_without_tendered_shows_nothing() {
        let due = change_due(Money::from_centavos(1350), &cash(0));
        assert_eq!(due, ChangeDue::NothingDue);
    }

    #[test]
    fn test_non_cash_never_shows_change() {
        for method in [PaymentMethod::Card, PaymentMethod::Pix] {
            let mut payment = PaymentSelection::new();
            payment.select_method(method);
            payment.set_tendered(Money::from_centavos(5000));

            let due = change_due(Money::from_centavos(1350), &payment);
            assert_eq!(due, ChangeDue::NothingDue);
        }
    }

    #[test]
    fn test_unset_method_shows_nothing() {
        let payment = PaymentSelection::new();
        let due = change_due(Money::from_centavos(1350), &payment);
        assert_eq!(due, ChangeDue::NothingDue);
    }

    #[test]
    fn test_display_variants() {
        assert_eq!(ChangeDue::NothingDue.to_string(), "R$ 0,00");
        assert_eq!(
            ChangeDue::Change(Money::from_centavos(650)).to_string(),
            "R$ 6,50"
        );
        assert_eq!(
            ChangeDue::Shortfall(Money::from_centavos(350)).to_string(),
            "Falta R$ 3,50"
        );
    }
}
