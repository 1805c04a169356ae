//! Order-to-payload mapping.
//!
//! The payload skeleton carries empty `signa` placeholders; the chain
//! signature is computed over this exact shape and the real values are
//! injected afterwards, so the bytes that were signed are preserved in
//! the chain record's `canonical` field.

use chrono::SecondsFormat;
use serde_json::{json, Value};
use websrm_core::Order;

use crate::error::RuntimeError;

/// Activity code for a recorded sale.
pub const ACTIVITY_RECORD: &str = "ENR";

/// Map an order to the transaction payload skeleton.
///
/// Amounts are carried through as integer cents, never recalculated; the
/// tax arithmetic is the order-management side's responsibility and is
/// only re-checked here.
///
/// # Errors
///
/// `RuntimeError::InconsistentAmounts` when
/// `subtotal + GST + QST != total`.
pub fn map_order_to_payload(order: &Order) -> Result<Value, RuntimeError> {
    if order.subtotal_cents + order.gst_cents + order.qst_cents != order.total_cents {
        return Err(RuntimeError::InconsistentAmounts {
            subtotal: order.subtotal_cents,
            gst: order.gst_cents,
            qst: order.qst_cents,
            total: order.total_cents,
        });
    }

    let items: Vec<Value> = order
        .items
        .iter()
        .map(|line| {
            json!({
                "desc": line.description,
                "qte": line.quantity,
                "prixUnit": line.unit_price_cents,
            })
        })
        .collect();

    Ok(json!({
        "acti": ACTIVITY_RECORD,
        "idTrans": order.order_id,
        "datTrans": order.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        "modPai": order.payment_method.wire_code(),
        "montST": order.subtotal_cents,
        "montTPS": order.gst_cents,
        "montTVQ": order.qst_cents,
        "montTot": order.total_cents,
        "items": items,
        "signa": {
            "preced": "",
            "actu": "",
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use websrm_core::{OrderLine, PaymentMethod};

    fn sample_order() -> Order {
        Order {
            order_id: "ORD-001".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 0).unwrap(),
            items: vec![
                OrderLine {
                    description: "Poutine".to_string(),
                    quantity: 2,
                    unit_price_cents: 1200,
                },
                OrderLine {
                    description: "Café".to_string(),
                    quantity: 1,
                    unit_price_cents: 268,
                },
            ],
            subtotal_cents: 2668,
            gst_cents: 133,
            qst_cents: 267,
            total_cents: 3068,
            payment_method: PaymentMethod::Debit,
        }
    }

    #[test]
    fn test_payload_shape() {
        let payload = map_order_to_payload(&sample_order()).unwrap();

        assert_eq!(payload["acti"], "ENR");
        assert_eq!(payload["idTrans"], "ORD-001");
        assert_eq!(payload["datTrans"], "2024-03-15T14:30:00Z");
        assert_eq!(payload["modPai"], "DEB");
        assert_eq!(payload["montST"], 2668);
        assert_eq!(payload["montTPS"], 133);
        assert_eq!(payload["montTVQ"], 267);
        assert_eq!(payload["montTot"], 3068);
        assert_eq!(payload["items"].as_array().unwrap().len(), 2);
        assert_eq!(payload["items"][0]["desc"], "Poutine");
        assert_eq!(payload["items"][1]["prixUnit"], 268);
    }

    #[test]
    fn test_signature_placeholders_present() {
        let payload = map_order_to_payload(&sample_order()).unwrap();
        assert_eq!(payload["signa"]["preced"], "");
        assert_eq!(payload["signa"]["actu"], "");
    }

    #[test]
    fn test_inconsistent_amounts_rejected() {
        let mut order = sample_order();
        order.total_cents += 1;

        let err = map_order_to_payload(&order).unwrap_err();
        assert!(matches!(err, RuntimeError::InconsistentAmounts { .. }));
    }

    #[test]
    fn test_amounts_carried_not_recalculated() {
        // Line items that do not sum to the subtotal are still accepted:
        // only the subtotal/tax/total relation is checked here.
        let mut order = sample_order();
        order.items[0].unit_price_cents = 9999;

        assert!(map_order_to_payload(&order).is_ok());
    }
}
