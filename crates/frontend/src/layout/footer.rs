use leptos::prelude::*;
use leptos_router::components::A;

#[component]
#[allow(non_snake_case)]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <span>{"© NDT Block Works"}</span>
            <A href="/contact">{"Contact"}</A>
            <A href="/admin/reorder">{"Admin"}</A>
        </footer>
    }
}
