use leptos::prelude::*;
use leptos_router::components::A;

use crate::catalog::sections::SECTIONS;
use crate::quote::use_quote;

#[component]
#[allow(non_snake_case)]
pub fn Header() -> impl IntoView {
    let quote = use_quote();

    view! {
        <header class="site-header">
            <A href="/" attr:class="brand">{"NDT Block Works"}</A>
            <nav class="site-nav">
                {SECTIONS
                    .into_iter()
                    .map(|section| {
                        view! {
                            <A href=section.registry.root_path()>
                                {section.product_type.display_name()}
                            </A>
                        }
                    })
                    .collect_view()}
                <A href="/contact">{"Contact"}</A>
            </nav>
            <div class="quote-indicator" title="Items in your quote request">
                {"Quote"}
                {move || {
                    let count = quote.item_count.get();
                    (count > 0).then(|| view! { <span class="badge">{count}</span> })
                }}
            </div>
        </header>
    }
}
