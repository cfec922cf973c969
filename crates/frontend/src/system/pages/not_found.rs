use leptos::prelude::*;
use leptos_router::components::A;

#[component]
#[allow(non_snake_case)]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="content not-found">
            <h2>{"Page not found"}</h2>
            <A href="/">{"Back to the home page"}</A>
        </div>
    }
}
