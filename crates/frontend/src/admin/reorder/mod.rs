pub mod view_model;

use std::collections::HashMap;

use contracts::catalog::{Product, ProductType};
use leptos::prelude::*;
use serde::Deserialize;
use wasm_bindgen::JsValue;
use web_sys::window;

use crate::catalog::state::LoadState;
use crate::shared::config::use_api_config;
use crate::shared::images::resolve_image_url;

use view_model::ManualOrderViewModel;

#[derive(Debug, Default, Deserialize)]
struct AdminQuery {
    #[serde(rename = "type")]
    product_type: Option<String>,
}

/// Restore the selected product type from the query string on load.
fn initial_product_type() -> ProductType {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let query: AdminQuery = serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    query
        .product_type
        .as_deref()
        .and_then(ProductType::from_str)
        .unwrap_or(ProductType::CalibrationBlock)
}

/// Mirror the selected product type into the query string.
fn sync_query_string(product_type: ProductType) {
    let query_string = serde_qs::to_string(&HashMap::from([(
        "type".to_string(),
        product_type.as_str().to_string(),
    )]))
    .unwrap_or_default();
    let new_search = format!("?{}", query_string);

    let current = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    if current == new_search {
        return;
    }
    if let Some(w) = window() {
        if let Ok(history) = w.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&new_search));
        }
    }
}

/// Admin widget: reorder one product type's display order by dragging rows.
#[component]
#[allow(non_snake_case)]
pub fn AdminReorderPage() -> impl IntoView {
    let config = use_api_config();
    let vm = ManualOrderViewModel::new(config.clone(), initial_product_type());
    vm.load();

    {
        let vm = vm.clone();
        Effect::new(move |_| {
            sync_query_string(vm.product_type.get());
        });
    }

    let type_vm = vm.clone();
    let toggle_vm = vm.clone();
    let toggle_class_vm = vm.clone();
    let toggle_label_vm = vm.clone();
    let refresh_vm = vm.clone();
    let hint_vm = vm.clone();
    let rows_vm = vm.clone();
    let base_url = config.base_url.clone();

    view! {
        <div class="content admin-reorder">
            <div class="header">
                <h2>{"Display Order"}</h2>
                <div class="header-actions">
                    <button
                        class="btn btn-secondary"
                        class:active=move || toggle_class_vm.reorder_enabled.get()
                        on:click=move |_| toggle_vm.toggle_reorder()
                    >
                        {move || {
                            if toggle_label_vm.reorder_enabled.get() {
                                "Done reordering"
                            } else {
                                "Enable reordering"
                            }
                        }}
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| refresh_vm.load()>
                        {"Refresh"}
                    </button>
                </div>
            </div>

            <div class="type-filter">
                {ProductType::ALL
                    .into_iter()
                    .map(|product_type| {
                        let vm = type_vm.clone();
                        let active_vm = type_vm.clone();
                        view! {
                            <button
                                class="btn btn-filter"
                                class:active=move || active_vm.product_type.get() == product_type
                                on:click=move |_| vm.set_product_type(product_type)
                            >
                                {product_type.display_name()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || {
                hint_vm.reorder_enabled.get().then(|| view! {
                    <p class="reorder-hint">
                        {"Drag rows to change the display order. Changes are saved as you drop."}
                    </p>
                })
            }}

            {move || {
                if rows_vm.load_state.get() == LoadState::Loading {
                    return view! { <div class="loading-indicator">{"Loading products..."}</div> }
                        .into_any();
                }
                let products = rows_vm.products.get();
                if products.is_empty() {
                    return view! { <div class="empty-results">{"No products found"}</div> }
                        .into_any();
                }
                let vm = rows_vm.clone();
                let base_url = base_url.clone();
                view! {
                    <div class="reorder-list">
                        {products
                            .into_iter()
                            .enumerate()
                            .map(|(index, product)| {
                                view! { <ReorderRow vm=vm.clone() index=index product=product base_url=base_url.clone() /> }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn ReorderRow(
    vm: ManualOrderViewModel,
    index: usize,
    product: Product,
    base_url: String,
) -> impl IntoView {
    let image_src = resolve_image_url(&product, &base_url);

    let drag_vm = vm.clone();
    let over_vm = vm.clone();
    let drop_vm = vm.clone();
    let end_vm = vm.clone();
    let draggable_vm = vm.clone();
    let dragging_vm = vm.clone();

    view! {
        <div
            class="reorder-row"
            draggable=move || if draggable_vm.reorder_enabled.get() { "true" } else { "false" }
            class:dragging=move || dragging_vm.drag_source.get() == Some(index)
            on:dragstart=move |ev| {
                if !drag_vm.reorder_enabled.get_untracked() {
                    ev.prevent_default();
                    return;
                }
                if let Some(dt) = ev.data_transfer() {
                    let _ = dt.set_data("text/plain", &index.to_string());
                    dt.set_effect_allowed("move");
                }
                drag_vm.drag_source.set(Some(index));
            }
            on:dragover=move |ev| {
                // required for the element to accept a drop
                if over_vm.reorder_enabled.get_untracked() {
                    ev.prevent_default();
                }
            }
            on:drop=move |ev| {
                ev.prevent_default();
                if let Some(source) = drop_vm.drag_source.get_untracked() {
                    drop_vm.handle_drop(source, Some(index));
                }
            }
            on:dragend=move |_| {
                // fires without a preceding drop when the gesture is cancelled
                if let Some(source) = end_vm.drag_source.get_untracked() {
                    end_vm.handle_drop(source, None);
                }
            }
        >
            <span class="reorder-position">{index + 1}</span>
            <img class="reorder-thumb" src=image_src alt=product.name.clone() />
            <span class="reorder-name">{product.name.clone()}</span>
            <span class="reorder-sort badge">{product.sort_order}</span>
        </div>
    }
}
