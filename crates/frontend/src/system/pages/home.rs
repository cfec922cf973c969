use leptos::prelude::*;
use leptos_router::components::A;

use crate::catalog::registry::ALL_CATEGORY;
use crate::catalog::sections::SECTIONS;
use crate::catalog::text;

/// Landing page: hero copy plus one card per catalog section.
#[component]
#[allow(non_snake_case)]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="content home-page">
            <section class="hero">
                <h1>{"Reference Standards for Nondestructive Testing"}</h1>
                <p>
                    {"Calibration blocks, validation blocks and flawed specimens, \
                      machined to spec and delivered with certification."}
                </p>
                <A href="/reference-standards" attr:class="btn btn-primary">
                    {"Browse the catalog"}
                </A>
            </section>

            <section class="section-cards">
                {SECTIONS
                    .into_iter()
                    .map(|section| {
                        let heading = text::text_for(section, ALL_CATEGORY);
                        view! {
                            <A href=section.registry.root_path() attr:class="section-card">
                                <h3>{heading.title}</h3>
                                <p>{heading.description}</p>
                            </A>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
