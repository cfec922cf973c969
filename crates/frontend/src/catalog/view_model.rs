use contracts::catalog::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::config::ApiConfig;

use super::api;
use super::filter::filter_products;
use super::registry::ALL_CATEGORY;
use super::sections::CatalogSection;
use super::state::{ingest_products, LoadState};
use super::text::{self, SectionText};

/// ViewModel for one catalog-browsing section.
///
/// Holds the fetched list, the load state machine and the active filters;
/// the three section pages instantiate this against their static
/// `CatalogSection` instead of each carrying its own copy of the logic.
#[derive(Clone)]
pub struct CatalogViewModel {
    section: &'static CatalogSection,
    config: ApiConfig,
    navigate: Callback<String>,
    pub products: RwSignal<Vec<Product>>,
    pub load_state: RwSignal<LoadState>,
    pub selected_category: RwSignal<String>,
    pub search_term: RwSignal<String>,
    fetch_epoch: RwSignal<u64>,
}

impl CatalogViewModel {
    pub fn new(
        section: &'static CatalogSection,
        config: ApiConfig,
        navigate: Callback<String>,
    ) -> Self {
        Self {
            section,
            config,
            navigate,
            products: RwSignal::new(Vec::new()),
            load_state: RwSignal::new(LoadState::Idle),
            selected_category: RwSignal::new(ALL_CATEGORY.to_string()),
            search_term: RwSignal::new(String::new()),
            fetch_epoch: RwSignal::new(0),
        }
    }

    pub fn section(&self) -> &'static CatalogSection {
        self.section
    }

    /// Fetch the section's products.
    ///
    /// The epoch counter drops completions that were superseded by a newer
    /// fetch, and `try_set` makes completions after view disposal no-ops.
    pub fn load(&self) {
        self.fetch_epoch.update(|e| *e += 1);
        let epoch = self.fetch_epoch.get_untracked();
        self.load_state.set(LoadState::Loading);

        let section = self.section;
        let config = self.config.clone();
        let products = self.products;
        let load_state = self.load_state;
        let fetch_epoch = self.fetch_epoch;
        spawn_local(async move {
            let result = api::fetch_products(&config, section.product_type).await;
            if fetch_epoch.try_get_untracked() != Some(epoch) {
                return;
            }
            match &result {
                Err(err) => log::error!("{}: products fetch failed: {}", section.key, err),
                Ok(resp) if !resp.success => {
                    log::warn!("{}: products fetch returned success=false", section.key)
                }
                Ok(_) => {}
            }
            let (state, list) = ingest_products(result);
            products.try_set(list);
            load_state.try_set(state);
        });
    }

    /// Select a category and route to its path: selection and URL move in
    /// lock-step. Unknown labels fail open to `All`.
    pub fn set_category(&self, label: &str) {
        let canonical = self.section.registry.canonical_label(label);
        self.selected_category.set(canonical.to_string());
        self.navigate
            .run(self.section.registry.path_for(canonical).to_string());
    }

    /// Adopt the category carried by the current route path; the other half
    /// of the two-way binding. Does not navigate.
    pub fn sync_route_category(&self, path: &str) {
        let label = self.section.registry.label_for_path(path);
        if self.selected_category.get_untracked() != label {
            self.selected_category.set(label.to_string());
        }
    }

    /// Synchronous; never navigates.
    pub fn set_search_term(&self, term: String) {
        self.search_term.set(term);
    }

    /// Reset search and category and return to the section root.
    pub fn clear_filters(&self) {
        self.search_term.set(String::new());
        self.selected_category.set(ALL_CATEGORY.to_string());
        self.navigate
            .run(self.section.registry.root_path().to_string());
    }

    /// Pure delegation to the detail route.
    pub fn view_details(&self, product: &Product) {
        self.navigate.run(format!("/products/{}", product.id));
    }

    /// Category + search applied to the fetched list, input order preserved.
    pub fn filtered(&self) -> Vec<Product> {
        filter_products(
            &self.products.get(),
            &self.selected_category.get(),
            &self.search_term.get(),
        )
    }

    pub fn total_count(&self) -> usize {
        self.products.get().len()
    }

    pub fn has_active_filters(&self) -> bool {
        self.selected_category.get() != ALL_CATEGORY || !self.search_term.get().is_empty()
    }

    /// Heading text for the active category (falls back to the `All` entry).
    pub fn heading(&self) -> SectionText {
        text::text_for(self.section, &self.selected_category.get())
    }
}
