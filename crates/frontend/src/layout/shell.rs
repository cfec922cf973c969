use leptos::prelude::*;

use super::footer::Footer;
use super::header::Header;

/// Page chrome around the routed content.
#[component]
#[allow(non_snake_case)]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="shell">
            <Header />
            <main class="shell-main">{children()}</main>
            <Footer />
        </div>
    }
}
