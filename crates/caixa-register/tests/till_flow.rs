//! End-to-end walkthroughs of the till, driven the way a front-end drives
//! it: call a customer, ring up items, pick a payment, finalize or cancel,
//! and re-render from the returned snapshots.

use caixa_core::{ChangeDue, CoreError, Money, PaymentMethod};
use caixa_register::{CancelOutcome, Till, TillState};

fn money(centavos: i64) -> Money {
    Money::from_centavos(centavos)
}

#[test]
fn full_cash_sale_walkthrough() {
    let mut till = Till::new();

    till.call_customer("Maria").unwrap();
    till.add_item("Rice", money(500), 2).unwrap();
    let snapshot = till.add_item("Beans", money(350), 1).unwrap();
    assert_eq!(snapshot.total, money(1350));

    // Payment panel updates as the operator types
    till.select_payment(PaymentMethod::Cash);
    let snapshot = till.set_tendered(money(1000));
    assert_eq!(snapshot.change, ChangeDue::Shortfall(money(350)));
    assert_eq!(snapshot.change.to_string(), "Falta R$ 3,50");

    let snapshot = till.set_tendered(money(2000));
    assert_eq!(snapshot.change, ChangeDue::Change(money(650)));

    let sale = till.finalize().unwrap();
    assert_eq!(sale.customer, "Maria");
    assert_eq!(sale.total, money(1350));
    assert_eq!(sale.payment_method, PaymentMethod::Cash);
    assert_eq!(sale.change, ChangeDue::Change(money(650)));
    assert_eq!(sale.items.len(), 2);
    assert!(!sale.id.is_empty());

    // One atomic reset: cart, payment, customer
    let snapshot = till.snapshot();
    assert!(snapshot.items.is_empty());
    assert_eq!(snapshot.total, Money::zero());
    assert!(snapshot.payment_method.is_none());
    assert!(snapshot.tendered.is_zero());
    assert!(snapshot.customer.is_none());
}

#[test]
fn repeated_adds_merge_into_one_row() {
    let mut till = Till::new();
    till.add_item("Rice", money(500), 2).unwrap();
    let snapshot = till.add_item("Rice", money(500), 3).unwrap();

    assert_eq!(snapshot.items.len(), 1);
    assert_eq!(snapshot.items[0].quantity, 5);
    assert_eq!(snapshot.items[0].line_total, money(2500));
}

#[test]
fn finalize_failures_in_precedence_order() {
    let mut till = Till::new();

    // 1. empty cart beats every other missing piece
    assert!(matches!(till.finalize(), Err(CoreError::EmptyCart)));

    // 2. then the missing customer
    till.add_item("Rice", money(500), 1).unwrap();
    assert!(matches!(till.finalize(), Err(CoreError::NoActiveCustomer)));

    // 3. then the missing payment method
    till.call_customer("Maria").unwrap();
    assert!(matches!(till.finalize(), Err(CoreError::NoPaymentMethod)));

    // 4. finally the cash shortfall
    till.select_payment(PaymentMethod::Cash);
    till.set_tendered(money(100));
    assert!(matches!(
        till.finalize(),
        Err(CoreError::InsufficientCash { .. })
    ));

    // The failed attempts changed nothing
    assert_eq!(till.snapshot().total, money(500));
}

#[test]
fn non_cash_sale_finalizes_without_tendered_cash() {
    let mut till = Till::new();
    till.call_customer("José").unwrap();
    till.add_item("Café 500g", money(1290), 1).unwrap();
    till.select_payment(PaymentMethod::Card);

    let sale = till.finalize().unwrap();
    assert_eq!(sale.change, ChangeDue::NothingDue);
}

#[test]
fn cancel_flow_and_its_asymmetry_with_finalize() {
    let mut till = Till::new();

    // Fresh till: nothing to cancel, the operator is never prompted
    let outcome = till.cancel(|| unreachable!("no prompt on a fresh till"));
    assert_eq!(outcome, CancelOutcome::NothingToCancel);

    till.call_customer("Maria").unwrap();
    till.add_item("Rice", money(500), 2).unwrap();
    till.select_payment(PaymentMethod::Cash);
    till.set_tendered(money(2000));

    // Declined: everything stays
    assert_eq!(till.cancel(|| false), CancelOutcome::Declined);
    let snapshot = till.snapshot();
    assert_eq!(snapshot.items.len(), 1);
    assert_eq!(snapshot.tendered, money(2000));

    // Confirmed: cart and payment go, the customer stays on
    assert_eq!(till.cancel(|| true), CancelOutcome::Cancelled);
    let snapshot = till.snapshot();
    assert!(snapshot.items.is_empty());
    assert!(snapshot.payment_method.is_none());
    assert!(snapshot.tendered.is_zero());
    assert_eq!(snapshot.change, ChangeDue::NothingDue);
    assert_eq!(snapshot.customer.as_deref(), Some("Maria"));
}

#[test]
fn snapshot_rows_render_ready() {
    let mut till = Till::new();
    till.add_item("Feijão 1kg", money(350), 3).unwrap();

    let snapshot = till.snapshot();
    let row = &snapshot.items[0];
    assert_eq!(row.name, "Feijão 1kg");
    assert_eq!(row.unit_price.to_string(), "R$ 3,50");
    assert_eq!(row.line_total.to_string(), "R$ 10,50");
    assert_eq!(snapshot.total.to_string(), "R$ 10,50");
}

#[test]
fn shared_state_drives_one_till_from_handles() {
    let state = TillState::new();
    let handle = state.clone();

    handle.with_till_mut(|t| t.add_item("Rice", money(500), 1)).unwrap();
    state.with_till_mut(|t| t.call_customer("Maria")).unwrap();
    state.with_till_mut(|t| t.select_payment(PaymentMethod::Pix));

    let sale = state.with_till_mut(|t| t.finalize()).unwrap();
    assert_eq!(sale.total, money(500));
    assert!(handle.with_till(|t| t.snapshot()).items.is_empty());
}
