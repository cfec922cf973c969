use leptos::prelude::*;

use crate::quote;
use crate::routes::routes::AppRoutes;
use crate::shared::config::ApiConfig;

#[component]
#[allow(non_snake_case)]
pub fn App() -> impl IntoView {
    // Explicit API configuration for every controller, resolved once at startup.
    provide_context(ApiConfig::from_window());
    quote::provide_quote_state();

    view! {
        <AppRoutes />
    }
}
