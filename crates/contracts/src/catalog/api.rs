use serde::{Deserialize, Serialize};

use super::product::{Product, ProductId};

/// Envelope for product list endpoints.
///
/// A missing `products` array is treated as an empty list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Envelope for the single-product endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub product: Option<Product>,
}

/// One entry of the manual-order persistence payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReorderItem {
    pub id: ProductId,
    pub sort_order: i32,
}

/// Body of `PUT /api/products/reorder/{type}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReorderRequest {
    pub items: Vec<ReorderItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_without_products_array() {
        let resp: ProductsResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(resp.success);
        assert!(resp.products.is_empty());
    }

    #[test]
    fn test_failure_envelope() {
        let resp: ProductsResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(!resp.success);
        assert!(resp.products.is_empty());
    }

    #[test]
    fn test_reorder_request_shape() {
        let req = ReorderRequest {
            items: vec![
                ReorderItem {
                    id: ProductId::Number(7),
                    sort_order: 0,
                },
                ReorderItem {
                    id: ProductId::Text("b2".to_string()),
                    sort_order: 1,
                },
            ],
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(
            json,
            r#"{"items":[{"id":7,"sort_order":0},{"id":"b2","sort_order":1}]}"#
        );
    }
}
