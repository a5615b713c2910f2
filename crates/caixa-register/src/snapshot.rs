//! # Snapshot Module
//!
//! Adapter-facing views of the till: the render snapshot returned by every
//! mutation and the record emitted by a successful finalize.
//!
//! These are data transfer objects: camelCase on the wire, built fresh from
//! the owned state each time so the adapter never holds a live reference
//! into the till.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use caixa_core::{ChangeDue, LineItem, Money, PaymentMethod};

// =============================================================================
// Cart Row
// =============================================================================

/// One rendered cart row: `{name, qty, unit price, line total}` plus the
/// per-row removal index implied by its position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartRow {
    pub name: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub line_total: Money,
}

impl From<&LineItem> for CartRow {
    fn from(item: &LineItem) -> Self {
        CartRow {
            name: item.name.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price,
            line_total: item.line_total(),
        }
    }
}

// =============================================================================
// Till Snapshot
// =============================================================================

/// Everything the adapter needs to re-render after an operation.
///
/// The change field is derived, never stored: it is recomputed from total,
/// method, and tendered on every snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TillSnapshot {
    /// Active customer, `None` rendered as "none".
    pub customer: Option<String>,

    /// Cart rows in display order.
    pub items: Vec<CartRow>,

    /// Grand total across all rows.
    pub total: Money,

    /// Selected payment method, if any.
    pub payment_method: Option<PaymentMethod>,

    /// Cash handed over so far (zero when unset).
    pub tendered: Money,

    /// What the payment panel shows.
    pub change: ChangeDue,
}

// =============================================================================
// Finalized Sale
// =============================================================================

/// The record emitted when a sale commits, for the adapter to display.
///
/// Rows are frozen copies taken at finalize time; the till behind them has
/// already been reset when the adapter receives this.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizedSale {
    /// Sale id (UUID v4).
    pub id: String,

    /// Customer the sale was rung up for.
    pub customer: String,

    /// Frozen cart rows.
    pub items: Vec<CartRow>,

    /// Total charged.
    pub total: Money,

    /// How the customer paid.
    pub payment_method: PaymentMethod,

    /// Change returned for cash payments; `NothingDue` otherwise.
    pub change: ChangeDue,

    /// When the sale committed.
    pub finalized_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_row_from_line_item() {
        let item = LineItem {
            name: "Arroz 5kg".to_string(),
            unit_price: Money::from_centavos(500),
            quantity: 2,
        };

        let row = CartRow::from(&item);
        assert_eq!(row.name, "Arroz 5kg");
        assert_eq!(row.line_total, Money::from_centavos(1000));
    }

    #[test]
    fn test_row_serializes_camel_case() {
        let row = CartRow {
            name: "Feijão 1kg".to_string(),
            quantity: 1,
            unit_price: Money::from_centavos(350),
            line_total: Money::from_centavos(350),
        };

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["unitPrice"], 350);
        assert_eq!(json["lineTotal"], 350);
    }
}
