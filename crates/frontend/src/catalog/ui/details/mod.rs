use contracts::catalog::{MetaValue, Product};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::catalog::api;
use crate::catalog::state::LoadState;
use crate::quote::use_quote;
use crate::shared::config::use_api_config;
use crate::shared::images::resolve_image_url;

fn meta_block(label: &'static str, value: Option<&MetaValue>) -> Option<AnyView> {
    let lines = value?.lines();
    if lines.is_empty() {
        return None;
    }
    Some(
        view! {
            <div class="product-meta">
                <h4>{label}</h4>
                <ul>
                    {lines.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                </ul>
            </div>
        }
        .into_any(),
    )
}

/// Product detail view, shared by all catalog sections.
#[component]
#[allow(non_snake_case)]
pub fn ProductDetailsPage() -> impl IntoView {
    let config = use_api_config();
    let quote = use_quote();
    let params = use_params_map();

    let product = RwSignal::new(None::<Product>);
    let load_state = RwSignal::new(LoadState::Idle);
    let fetch_epoch = RwSignal::new(0u64);

    // Refetches when the route param changes; stale completions are dropped.
    {
        let config = config.clone();
        Effect::new(move |_| {
            let Some(id) = params.get().get("id") else {
                return;
            };
            fetch_epoch.update(|e| *e += 1);
            let epoch = fetch_epoch.get_untracked();
            load_state.set(LoadState::Loading);

            let config = config.clone();
            spawn_local(async move {
                let result = api::fetch_product(&config, &id).await;
                if fetch_epoch.try_get_untracked() != Some(epoch) {
                    return;
                }
                match result {
                    Ok(resp) if resp.success && resp.product.is_some() => {
                        product.try_set(resp.product);
                        load_state.try_set(LoadState::Loaded);
                    }
                    Ok(_) => {
                        log::warn!("product {} not found", id);
                        product.try_set(None);
                        load_state.try_set(LoadState::Failed);
                    }
                    Err(err) => {
                        log::error!("product {} fetch failed: {}", id, err);
                        product.try_set(None);
                        load_state.try_set(LoadState::Failed);
                    }
                }
            });
        });
    }

    let base_url = config.base_url.clone();
    let quote_config = config.clone();

    view! {
        <div class="content product-details">
            {move || {
                if load_state.get() == LoadState::Loading {
                    return view! { <div class="loading-indicator">{"Loading product..."}</div> }
                        .into_any();
                }
                let Some(p) = product.get() else {
                    return view! { <div class="empty-results">{"Product not available"}</div> }
                        .into_any();
                };
                let image_src = resolve_image_url(&p, &base_url);
                let description = p.description.clone().unwrap_or_default();
                let material = p.material.as_ref().or(p.materials.as_ref()).cloned();
                let product_id = p.id.clone();
                let quote_config = quote_config.clone();
                view! {
                    <div class="product-details-layout">
                        <img class="product-details-image" src=image_src alt=p.name.clone() />
                        <div class="product-details-body">
                            <h2>{p.name.clone()}</h2>
                            {p.category.clone().map(|c| view! { <span class="badge badge-category">{c}</span> })}
                            <p>{description}</p>
                            {meta_block("Material", material.as_ref())}
                            {meta_block("Dimensions", p.dimensions.as_ref())}
                            {meta_block("Standards", p.standards.as_ref())}
                            <button
                                class="btn btn-primary"
                                on:click=move |_| quote.add(&quote_config, product_id.clone())
                            >
                                {"Add to quote"}
                            </button>
                        </div>
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
