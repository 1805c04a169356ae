//! Order-side types fed into the signing pipeline.
//!
//! All monetary amounts are integer cents. Tax consistency
//! (`subtotal + GST + QST == total`) is a precondition supplied by the
//! order-management side and re-checked by the payload mapper.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A point-of-sale order as handed to the compliance adapter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub order_id: String,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderLine>,

    /// Amount before tax, cents
    pub subtotal_cents: i64,

    /// Federal GST (TPS), cents
    pub gst_cents: i64,

    /// Québec QST (TVQ), cents
    pub qst_cents: i64,

    /// Amount after tax, cents
    pub total_cents: i64,

    pub payment_method: PaymentMethod,
}

/// One line item on an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    pub description: String,
    pub quantity: i64,

    /// Unit price, cents
    pub unit_price_cents: i64,
}

/// Payment method, with its WEB-SRM wire code.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Credit,
    Debit,
    Other,
}

impl PaymentMethod {
    /// The `modPai` wire code.
    pub fn wire_code(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "ARG",
            PaymentMethod::Credit => "CRE",
            PaymentMethod::Debit => "DEB",
            PaymentMethod::Other => "AUT",
        }
    }
}
