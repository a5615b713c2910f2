//! # caixa-register: Till State & Transaction Orchestration
//!
//! The stateful layer between a UI adapter and [`caixa_core`]. It owns the
//! single till's mutable state and exposes the operator-facing operations as
//! plain methods that return render snapshots.
//!
//! ## Module Organization
//! ```text
//! caixa_register/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── till.rs         ◄─── Till, TillState, finalize/cancel transitions
//! ├── snapshot.rs     ◄─── CartRow, TillSnapshot, FinalizedSale DTOs
//! └── bin/till.rs     ◄─── Terminal reference adapter
//! ```
//!
//! ## Collaborator contract
//!
//! The adapter feeds events in and renders what comes back:
//!
//! ```rust
//! use caixa_core::{Money, PaymentMethod};
//! use caixa_register::Till;
//!
//! let mut till = Till::new();
//! till.call_customer("Maria").unwrap();
//! till.add_item("Arroz 5kg", Money::from_centavos(500), 2).unwrap();
//! let snapshot = till.select_payment(PaymentMethod::Cash);
//! assert_eq!(snapshot.total.to_string(), "R$ 10,00");
//!
//! till.set_tendered(Money::from_centavos(1000));
//! let sale = till.finalize().unwrap();
//! assert_eq!(sale.customer, "Maria");
//! ```
//!
//! Dialogs stay on the adapter side: cancel takes the confirmation answer as
//! a closure, and failures come back as typed errors for the adapter to turn
//! into messages.

pub mod snapshot;
pub mod till;

pub use snapshot::{CartRow, FinalizedSale, TillSnapshot};
pub use till::{CancelOutcome, Till, TillState};
