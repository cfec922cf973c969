use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::admin::reorder::AdminReorderPage;
use crate::catalog::sections::{FLAWED_SPECIMENS, REFERENCE_STANDARDS, VALIDATION_BLOCKS};
use crate::catalog::ui::details::ProductDetailsPage;
use crate::catalog::ui::list::CatalogPage;
use crate::layout::Shell;
use crate::system::pages::{ContactPage, HomePage, NotFoundPage};

/// Route table. Each catalog section gets a root route and a category
/// route onto the same page component; the page reads the category back
/// from the path.
#[component]
#[allow(non_snake_case)]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />

                    <Route
                        path=path!("/reference-standards")
                        view=|| view! { <CatalogPage section=&REFERENCE_STANDARDS /> }
                    />
                    <Route
                        path=path!("/reference-standards/:category")
                        view=|| view! { <CatalogPage section=&REFERENCE_STANDARDS /> }
                    />

                    <Route
                        path=path!("/validation-blocks")
                        view=|| view! { <CatalogPage section=&VALIDATION_BLOCKS /> }
                    />
                    <Route
                        path=path!("/validation-blocks/:category")
                        view=|| view! { <CatalogPage section=&VALIDATION_BLOCKS /> }
                    />

                    <Route
                        path=path!("/flawed-specimens")
                        view=|| view! { <CatalogPage section=&FLAWED_SPECIMENS /> }
                    />
                    <Route
                        path=path!("/flawed-specimens/:category")
                        view=|| view! { <CatalogPage section=&FLAWED_SPECIMENS /> }
                    />

                    <Route path=path!("/products/:id") view=ProductDetailsPage />
                    <Route path=path!("/contact") view=ContactPage />
                    <Route path=path!("/admin/reorder") view=AdminReorderPage />
                </Routes>
            </Shell>
        </Router>
    }
}
