//! Session quote state.
//!
//! Items are added fire-and-continue; the quote correlation id is persisted
//! to localStorage only when the server acknowledges an item.

use contracts::catalog::ProductId;
use contracts::quote::{QuoteItemRequest, QuoteResponse};
use gloo_net::http::Request;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::config::ApiConfig;
use crate::shared::storage;

async fn add_quote_item(
    config: &ApiConfig,
    request: &QuoteItemRequest,
) -> Result<QuoteResponse, String> {
    Request::post(&config.api_url("/api/quote/items"))
        .json(request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())
}

#[derive(Clone, Copy)]
pub struct QuoteState {
    pub item_count: RwSignal<usize>,
}

impl QuoteState {
    pub fn new() -> Self {
        Self {
            item_count: RwSignal::new(0),
        }
    }

    /// Add one unit of a product to the session quote.
    ///
    /// The count bumps on acknowledgment; a failure only logs and the
    /// browsing flow is never blocked.
    pub fn add(&self, config: &ApiConfig, product_id: ProductId) {
        let count = self.item_count;
        let config = config.clone();
        spawn_local(async move {
            let request = QuoteItemRequest {
                quote_id: storage::get_quote_id(),
                product_id,
                quantity: 1,
            };
            match add_quote_item(&config, &request).await {
                Ok(resp) if resp.success => {
                    if let Some(id) = resp.quote_id {
                        storage::save_quote_id(&id);
                    }
                    count.try_update(|c| *c += 1);
                }
                Ok(_) => log::warn!("quote item rejected by server"),
                Err(err) => log::error!("quote item submit failed: {}", err),
            }
        });
    }
}

pub fn provide_quote_state() {
    provide_context(QuoteState::new());
}

pub fn use_quote() -> QuoteState {
    use_context::<QuoteState>().expect("QuoteState not provided")
}
