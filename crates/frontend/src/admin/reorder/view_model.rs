use contracts::catalog::{Product, ProductType, ReorderRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::api;
use crate::catalog::state::{apply_drop, ingest_products, LoadState};
use crate::shared::config::ApiConfig;

/// ViewModel for the admin drag-reorder widget.
///
/// Reordering is optimistic: the list mutates on drop and the new order is
/// pushed to the backend without awaiting the response.
#[derive(Clone)]
pub struct ManualOrderViewModel {
    config: ApiConfig,
    pub product_type: RwSignal<ProductType>,
    pub products: RwSignal<Vec<Product>>,
    pub load_state: RwSignal<LoadState>,
    pub reorder_enabled: RwSignal<bool>,
    pub drag_source: RwSignal<Option<usize>>,
    fetch_epoch: RwSignal<u64>,
}

impl ManualOrderViewModel {
    pub fn new(config: ApiConfig, initial_type: ProductType) -> Self {
        Self {
            config,
            product_type: RwSignal::new(initial_type),
            products: RwSignal::new(Vec::new()),
            load_state: RwSignal::new(LoadState::Idle),
            reorder_enabled: RwSignal::new(false),
            drag_source: RwSignal::new(None),
            fetch_epoch: RwSignal::new(0),
        }
    }

    /// Fetch the selected type's list via the authenticated endpoint.
    pub fn load(&self) {
        self.fetch_epoch.update(|e| *e += 1);
        let epoch = self.fetch_epoch.get_untracked();
        self.load_state.set(LoadState::Loading);
        self.drag_source.set(None);

        let config = self.config.clone();
        let product_type = self.product_type.get_untracked();
        let products = self.products;
        let load_state = self.load_state;
        let fetch_epoch = self.fetch_epoch;
        spawn_local(async move {
            let result = api::fetch_products_by_type(&config, product_type).await;
            if fetch_epoch.try_get_untracked() != Some(epoch) {
                return;
            }
            if let Err(err) = &result {
                log::error!("admin list fetch failed for {}: {}", product_type, err);
            }
            let (state, list) = ingest_products(result);
            products.try_set(list);
            load_state.try_set(state);
        });
    }

    pub fn set_product_type(&self, product_type: ProductType) {
        if self.product_type.get_untracked() == product_type {
            return;
        }
        self.product_type.set(product_type);
        self.load();
    }

    /// Drag is disabled until the operator switches it on.
    pub fn toggle_reorder(&self) {
        self.reorder_enabled.update(|v| *v = !*v);
        self.drag_source.set(None);
    }

    /// Apply a completed drag gesture.
    ///
    /// `dest = None` means the item was dropped outside a valid target: the
    /// gesture is a no-op. Otherwise the local order changes immediately
    /// and the dense payload is sent without awaiting; a persist failure
    /// only logs; local order is never rolled back, so display and server
    /// state may diverge until the next full refetch.
    pub fn handle_drop(&self, source: usize, dest: Option<usize>) {
        self.drag_source.set(None);
        let Some((items, payload_items)) =
            apply_drop(self.products.get_untracked(), source, dest)
        else {
            return;
        };
        self.products.set(items);

        let payload = ReorderRequest {
            items: payload_items,
        };
        let config = self.config.clone();
        let product_type = self.product_type.get_untracked();
        spawn_local(async move {
            if let Err(err) = api::persist_order(&config, product_type, &payload).await {
                log::error!("order persist failed for {}: {}", product_type, err);
            }
        });
    }
}
