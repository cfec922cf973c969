use contracts::catalog::Product;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

use crate::catalog::sections::CatalogSection;
use crate::catalog::state::LoadState;
use crate::catalog::view_model::CatalogViewModel;
use crate::shared::components::SearchInput;
use crate::shared::config::use_api_config;
use crate::shared::images::resolve_image_url;

/// One catalog-browsing page, parameterized by its section configuration.
///
/// The same component serves all three sections; routing, filtering and
/// headings come from the section's static tables.
#[component]
#[allow(non_snake_case)]
pub fn CatalogPage(section: &'static CatalogSection) -> impl IntoView {
    let config = use_api_config();
    let navigate = use_navigate();
    let vm = CatalogViewModel::new(
        section,
        config.clone(),
        Callback::new(move |path: String| navigate(&path, NavigateOptions::default())),
    );

    // Route → selection half of the two-way category binding; selection →
    // route runs through set_category.
    let location = use_location();
    vm.sync_route_category(&location.pathname.get_untracked());
    {
        let vm = vm.clone();
        Effect::new(move |_| {
            vm.sync_route_category(&location.pathname.get());
        });
    }

    // Fresh fetch on mount; nothing is cached across navigations.
    vm.load();

    let title_vm = vm.clone();
    let description_vm = vm.clone();
    let buttons_vm = vm.clone();
    let search_vm = vm.clone();
    let counts_vm = vm.clone();
    let clear_vm = vm.clone();
    let refresh_vm = vm.clone();
    let grid_vm = vm.clone();
    let base_url = config.base_url.clone();

    view! {
        <div class="content catalog-page">
            <div class="header">
                <div class="catalog-heading">
                    <h2>{move || title_vm.heading().title}</h2>
                    <p class="catalog-description">{move || description_vm.heading().description}</p>
                </div>
                <div class="header-actions">
                    <SearchInput
                        value=search_vm.search_term
                        on_change=Callback::new(move |term: String| search_vm.set_search_term(term))
                        placeholder="Search by name or description...".to_string()
                    />
                    <button class="btn btn-secondary" on:click=move |_| refresh_vm.load()>
                        {"Refresh"}
                    </button>
                </div>
            </div>

            <div class="category-filter">
                {section
                    .registry
                    .labels()
                    .map(|label| {
                        let vm = buttons_vm.clone();
                        let active_vm = buttons_vm.clone();
                        view! {
                            <button
                                class="btn btn-filter"
                                class:active=move || active_vm.selected_category.get() == label
                                on:click=move |_| vm.set_category(label)
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="result-summary">
                <span>
                    {move || {
                        format!(
                            "Showing {} of {} products",
                            counts_vm.filtered().len(),
                            counts_vm.total_count(),
                        )
                    }}
                </span>
                {move || {
                    clear_vm.has_active_filters().then(|| {
                        let vm = clear_vm.clone();
                        view! {
                            <button class="btn-link" on:click=move |_| vm.clear_filters()>
                                {"Clear filters"}
                            </button>
                        }
                    })
                }}
            </div>

            {move || {
                if grid_vm.load_state.get() == LoadState::Loading {
                    return view! { <div class="loading-indicator">{"Loading products..."}</div> }
                        .into_any();
                }
                let filtered = grid_vm.filtered();
                if filtered.is_empty() {
                    return view! { <div class="empty-results">{"No products found"}</div> }
                        .into_any();
                }
                let vm = grid_vm.clone();
                let base_url = base_url.clone();
                view! {
                    <div class="product-grid">
                        {filtered
                            .into_iter()
                            .map(|product| {
                                let vm = vm.clone();
                                view! { <ProductCard product=product base_url=base_url.clone() on_select=Callback::new(move |p: Product| vm.view_details(&p)) /> }
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
fn ProductCard(
    product: Product,
    base_url: String,
    #[prop(into)] on_select: Callback<Product>,
) -> impl IntoView {
    let image_src = resolve_image_url(&product, &base_url);
    let name = product.name.clone();
    let description = product.description.clone().unwrap_or_default();
    let category = product.category.clone();
    let selected = product.clone();

    view! {
        <div class="product-card" on:click=move |_| on_select.run(selected.clone())>
            <img class="product-card-image" src=image_src alt=name.clone() />
            <div class="product-card-body">
                <h3>{name}</h3>
                {category.map(|c| view! { <span class="badge badge-category">{c}</span> })}
                <p>{description}</p>
            </div>
        </div>
    }
}
