//! # Till Module
//!
//! The till owns one transaction's worth of mutable state and the
//! finalize/cancel transitions over it.
//!
//! ## Transaction Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Till Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐  call_customer  ┌──────────┐   add_item    ┌──────────┐  │
//! │  │  Fresh   │───────────────► │ Serving  │─────────────► │ Ringing  │  │
//! │  │  load    │                 │ customer │               │ up items │  │
//! │  └──────────┘                 └──────────┘               └────┬─────┘  │
//! │       ▲                                                       │        │
//! │       │                    select_payment / set_tendered      │        │
//! │       │                                                       ▼        │
//! │       │         finalize (full reset)                  ┌──────────┐    │
//! │       └◄───────────────────────────────────────────────│  Tender  │    │
//! │                                                        └──────────┘    │
//! │       cancel (confirmed): cart + payment reset, customer KEPT          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation runs to completion before the next operator event is
//! processed; there is exactly one logical actor. The [`TillState`] wrapper
//! at the bottom exists so an adapter host with its own event threads can
//! still hold the till safely.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use caixa_core::{
    change_due, Cart, ChangeDue, CoreError, CoreResult, Money, PaymentMethod, PaymentSelection,
    Session,
};

use crate::snapshot::{CartRow, FinalizedSale, TillSnapshot};

// =============================================================================
// Till
// =============================================================================

/// One counter till: cart, session, and payment selection, owned explicitly.
///
/// Mutators return the updated [`TillSnapshot`] so the adapter can re-render
/// from the return value alone. Failed operations return the error and leave
/// every part of the state untouched.
#[derive(Debug, Default)]
pub struct Till {
    cart: Cart,
    session: Session,
    payment: PaymentSelection,
}

impl Till {
    /// Creates a till in the fresh-load state: empty cart, no customer,
    /// payment unset.
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Customer
    // -------------------------------------------------------------------------

    /// Calls a customer to the counter.
    ///
    /// ## Errors
    /// `NoCustomerSelected` when the identifier is blank.
    pub fn call_customer(&mut self, identifier: &str) -> CoreResult<TillSnapshot> {
        self.session.call_customer(identifier)?;
        debug!(customer = %identifier.trim(), "customer called");
        Ok(self.snapshot())
    }

    // -------------------------------------------------------------------------
    // Cart
    // -------------------------------------------------------------------------

    /// Adds `quantity` units of a product to the cart, merging same-name
    /// lines and keeping the incoming price.
    ///
    /// ## Errors
    /// `InvalidQuantity` when `quantity ≤ 0`.
    pub fn add_item(
        &mut self,
        name: &str,
        unit_price: Money,
        quantity: i64,
    ) -> CoreResult<TillSnapshot> {
        self.cart.add_item(name, unit_price, quantity)?;
        debug!(item = %name, quantity, total = %self.cart.total(), "item added");
        Ok(self.snapshot())
    }

    /// Removes the cart row at `index` (0-based display order).
    ///
    /// A stale index is ignored: the adapter sends whatever the last
    /// rendered table said, and that row may already be gone.
    pub fn remove_item(&mut self, index: usize) -> TillSnapshot {
        match self.cart.remove_item(index) {
            Some(item) => debug!(item = %item.name, index, "item removed"),
            None => warn!(index, len = self.cart.item_count(), "remove ignored, no such row"),
        }
        self.snapshot()
    }

    // -------------------------------------------------------------------------
    // Payment
    // -------------------------------------------------------------------------

    /// Selects the payment method.
    pub fn select_payment(&mut self, method: PaymentMethod) -> TillSnapshot {
        self.payment.select_method(method);
        debug!(%method, "payment method selected");
        self.snapshot()
    }

    /// Records the cash amount handed over by the customer.
    pub fn set_tendered(&mut self, amount: Money) -> TillSnapshot {
        self.payment.set_tendered(amount);
        debug!(tendered = %amount, "tendered amount set");
        self.snapshot()
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Grand total of the cart.
    pub fn total(&self) -> Money {
        self.cart.total()
    }

    /// Change due for the current total and payment input. Derived fresh on
    /// every call.
    pub fn change_due(&self) -> ChangeDue {
        change_due(self.cart.total(), &self.payment)
    }

    /// Builds the full render snapshot of the current state.
    pub fn snapshot(&self) -> TillSnapshot {
        TillSnapshot {
            customer: self.session.active_customer().map(str::to_string),
            items: self.cart.items().iter().map(CartRow::from).collect(),
            total: self.cart.total(),
            payment_method: self.payment.method,
            tendered: self.payment.tendered,
            change: self.change_due(),
        }
    }

    // -------------------------------------------------------------------------
    // Finalize
    // -------------------------------------------------------------------------

    /// Commits the sale.
    ///
    /// Preconditions, first failure wins:
    /// 1. cart non-empty, else `EmptyCart`
    /// 2. a customer is being served, else `NoActiveCustomer`
    /// 3. a payment method is selected, else `NoPaymentMethod`
    /// 4. for cash, tendered ≥ total, else `InsufficientCash`
    ///
    /// All checks run before any mutation, so a failed finalize leaves the
    /// till exactly as it was. On success the emitted [`FinalizedSale`]
    /// carries frozen rows and the till returns to the fresh-load state:
    /// cart empty, payment unset, customer none.
    pub fn finalize(&mut self) -> CoreResult<FinalizedSale> {
        if self.cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }
        let customer = self
            .session
            .active_customer()
            .ok_or(CoreError::NoActiveCustomer)?
            .to_string();
        let payment_method = self.payment.method.ok_or(CoreError::NoPaymentMethod)?;

        let total = self.cart.total();
        if payment_method == PaymentMethod::Cash && self.payment.tendered < total {
            return Err(CoreError::InsufficientCash {
                tendered: self.payment.tendered,
                total,
            });
        }

        let sale = FinalizedSale {
            id: Uuid::new_v4().to_string(),
            customer,
            items: self.cart.items().iter().map(CartRow::from).collect(),
            total,
            payment_method,
            change: self.change_due(),
            finalized_at: Utc::now(),
        };

        self.cart.clear();
        self.payment.reset();
        self.session.clear();

        info!(
            sale_id = %sale.id,
            customer = %sale.customer,
            total = %sale.total,
            method = %sale.payment_method,
            "sale finalized"
        );
        Ok(sale)
    }

    // -------------------------------------------------------------------------
    // Cancel
    // -------------------------------------------------------------------------

    /// Abandons the transaction in progress.
    ///
    /// With an empty cart and no active customer there is nothing to cancel
    /// and `confirm` is never invoked. Otherwise the collaborator-supplied
    /// `confirm` decides: declined leaves the till untouched; confirmed
    /// clears the cart and payment selection. The active customer stays —
    /// only finalize ends the attendance.
    pub fn cancel<F>(&mut self, confirm: F) -> CancelOutcome
    where
        F: FnOnce() -> bool,
    {
        if self.cart.is_empty() && !self.session.has_active_customer() {
            return CancelOutcome::NothingToCancel;
        }

        if !confirm() {
            debug!("cancel declined by operator");
            return CancelOutcome::Declined;
        }

        self.cart.clear();
        self.payment.reset();
        info!("sale cancelled");
        CancelOutcome::Cancelled
    }
}

/// How a cancel request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelOutcome {
    /// Empty cart and no active customer: nothing happened, no prompt shown.
    NothingToCancel,

    /// The operator answered no; state is unchanged.
    Declined,

    /// Cart and payment selection were reset.
    Cancelled,
}

// =============================================================================
// Shared Till State
// =============================================================================

/// Adapter-managed till handle.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Till>>` because:
/// - `Arc`: the host's event handlers share one till
/// - `Mutex`: only one operation touches the till at a time
///
/// The domain itself stays single-actor; the lock just lets a windowing or
/// IPC host hold the till from whichever thread its callbacks land on.
#[derive(Debug, Clone, Default)]
pub struct TillState {
    till: Arc<Mutex<Till>>,
}

impl TillState {
    /// Creates a fresh till behind a shared handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the till.
    ///
    /// ## Usage
    /// ```rust
    /// use caixa_register::TillState;
    ///
    /// let state = TillState::new();
    /// let snapshot = state.with_till(|till| till.snapshot());
    /// assert!(snapshot.items.is_empty());
    /// ```
    pub fn with_till<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Till) -> R,
    {
        let till = self.till.lock().expect("till mutex poisoned");
        f(&till)
    }

    /// Executes a function with write access to the till.
    pub fn with_till_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Till) -> R,
    {
        let mut till = self.till.lock().expect("till mutex poisoned");
        f(&mut till)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
