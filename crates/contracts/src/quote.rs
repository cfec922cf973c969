//! Quote-request and contact-form wire shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::ProductId;

/// Body of `POST /api/quote/items`.
///
/// `quote_id` is absent on the first item of a session; the server opens a
/// quote and returns its id in the acknowledgment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteItemRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_id: Option<Uuid>,
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Acknowledgment for quote mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub quote_id: Option<Uuid>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of `POST /api/contact`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
}

/// Acknowledgment for the contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_item_omits_quote_id() {
        let req = QuoteItemRequest {
            quote_id: None,
            product_id: ProductId::Number(12),
            quantity: 2,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"product_id":12,"quantity":2}"#);
    }

    #[test]
    fn test_quote_ack_parses() {
        let resp: QuoteResponse = serde_json::from_str(
            r#"{"success":true,"quote_id":"7f9c0d8e-2f4b-4b6a-9a21-3d1c5e8b9f00"}"#,
        )
        .unwrap();
        assert!(resp.success);
        assert!(resp.quote_id.is_some());
        assert!(resp.created_at.is_none());
    }
}
