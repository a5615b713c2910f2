//! # caixa-core: Pure Business Logic for Caixa POS
//!
//! This crate is the **heart** of the counter till. It contains all business
//! logic as pure functions and plain state types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Caixa POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  UI Adapter (external)                          │   │
//! │  │    customer list ──► product buttons ──► cart table ──► dialogs │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ calls / snapshots                      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  caixa-register (till layer)                    │   │
//! │  │    add_item, call_customer, finalize, cancel                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ caixa-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────┐       │   │
//! │  │   │  money   │  │   cart   │  │ checkout │  │ session  │       │   │
//! │  │   │  Money   │  │   Cart   │  │ChangeDue │  │ Session  │       │   │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └──────────┘       │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO RENDERING • NO DIALOGS • PURE STATE + FUNCTIONS  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Line items and the cart they live in
//! - [`checkout`] - Change-due calculation for cash payments
//! - [`session`] - The single active customer
//! - [`types`] - Payment method and payment selection
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every calculation is deterministic
//! 2. **No I/O**: Rendering, dialogs, and storage are FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in centavos (i64)
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use caixa_core::{Cart, Money};
//!
//! let mut cart = Cart::new();
//! cart.add_item("Arroz 5kg", Money::from_centavos(500), 2).unwrap();
//! cart.add_item("Feijão 1kg", Money::from_centavos(350), 1).unwrap();
//!
//! assert_eq!(cart.total(), Money::from_centavos(1350));
//! assert_eq!(cart.total().to_string(), "R$ 13,50");
//! ```

pub mod cart;
pub mod checkout;
pub mod error;
pub mod money;
pub mod session;
pub mod types;
pub mod validation;

// Re-exports for convenience: `use caixa_core::Money` instead of
// `use caixa_core::money::Money`
pub use cart::{Cart, LineItem};
pub use checkout::{change_due, ChangeDue};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Money, ParseMoneyError};
pub use session::Session;
pub use types::{PaymentMethod, PaymentSelection};
