//! API client for the product endpoints.

use contracts::catalog::{ProductResponse, ProductsResponse, ProductType, ReorderRequest};
use gloo_net::http::{Request, RequestBuilder};

use crate::shared::config::ApiConfig;
use crate::shared::storage;

/// Attach the stored access token, when present, to an admin request.
fn with_auth(request: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
        None => request,
    }
}

/// Public product list for one section: `GET /api/products?type={type}`.
pub async fn fetch_products(
    config: &ApiConfig,
    product_type: ProductType,
) -> Result<ProductsResponse, String> {
    Request::get(&config.api_url("/api/products"))
        .query([("type", product_type.as_str())])
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())
}

/// Single product for the detail view: `GET /api/products/{id}`.
pub async fn fetch_product(config: &ApiConfig, id: &str) -> Result<ProductResponse, String> {
    Request::get(&config.api_url(&format!("/api/products/{}", id)))
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())
}

/// Authenticated list for the admin widget:
/// `GET /api/products/by-type/{type}`.
pub async fn fetch_products_by_type(
    config: &ApiConfig,
    product_type: ProductType,
) -> Result<ProductsResponse, String> {
    let url = config.api_url(&format!("/api/products/by-type/{}", product_type.as_str()));
    with_auth(Request::get(&url))
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())
}

/// Persist a manual order: `PUT /api/products/reorder/{type}`.
///
/// Acknowledgment only; the response body never drives UI state.
pub async fn persist_order(
    config: &ApiConfig,
    product_type: ProductType,
    payload: &ReorderRequest,
) -> Result<(), String> {
    let url = config.api_url(&format!("/api/products/reorder/{}", product_type.as_str()));
    let response = with_auth(Request::put(&url))
        .json(payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}
