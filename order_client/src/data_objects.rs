use serde::{Deserialize, Serialize};

/// An order as the server reports it. The client never builds one of these itself; every instance is a mirror of the
/// server's last response, keyed by the server-assigned `id`.
///
/// `status` is owned by the server. The client passes whatever string comes back straight through and only uses it to
/// pick a display badge, so new server-side statuses do not break deserialization.
///
/// The timestamps are kept as raw strings: the server emits offset date-times for `createdAt` but naive local
/// date-times for `processedAt`, so the client treats both as opaque and formats them best-effort at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub customer_name: String,
    pub product_name: String,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<String>,
}

/// Payload for both create (POST) and update (PUT) calls. `status` must be absent from the JSON when unset, not null,
/// so that an update without a status leaves the server value alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub customer_name: String,
    pub product_name: String,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn orders_deserialize_from_server_payload() {
        let json = include_str!("./test_assets/orders.json");
        let orders: Vec<Order> = serde_json::from_str(json).unwrap();
        assert_eq!(orders.len(), 3);
        assert_eq!(orders[0].id, 12);
        assert_eq!(orders[0].customer_name, "Alice");
        assert_eq!(orders[0].quantity, 2);
        assert_eq!(orders[0].status.as_deref(), Some("PROCESSED"));
        assert_eq!(orders[0].created_at.as_deref(), Some("2025-06-02T09:14:55.120+02:00"));
        assert_eq!(orders[0].processed_at.as_deref(), Some("2025-06-02T09:15:02"));
        // `status: null` and a missing `processedAt` both come out as None
        assert_eq!(orders[1].status, None);
        assert_eq!(orders[1].processed_at, None);
        assert_eq!(orders[2].status.as_deref(), Some("NEW"));
    }

    #[test]
    fn request_without_status_has_no_status_key() {
        let request =
            OrderRequest { customer_name: "Alice".into(), product_name: "Widget".into(), quantity: 2, status: None };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["customerName"], "Alice");
        assert_eq!(json["productName"], "Widget");
        assert_eq!(json["quantity"], 2);
        assert!(json.get("status").is_none());
    }

    #[test]
    fn request_with_status_serializes_it() {
        let request = OrderRequest {
            customer_name: "Bob".into(),
            product_name: "Gadget".into(),
            quantity: 1,
            status: Some("CANCELLED".into()),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["status"], "CANCELLED");
    }
}
