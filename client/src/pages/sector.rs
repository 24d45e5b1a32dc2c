//! Landing screen for an enabled sector.
//!
//! The sector workspace itself is served elsewhere; this page confirms the
//! selection and links back to the sector grid.

#[cfg(test)]
#[path = "sector_test.rs"]
mod sector_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::icon::Icon;
use crate::pages::home::SECTORS_ANCHOR_ID;
use crate::state::sectors::{SectorDescriptor, SectorRegistry};

/// Resolve a `/:sector` path segment against the registry.
pub(crate) fn resolve_sector<'a>(registry: &'a SectorRegistry, segment: &str) -> Option<&'a SectorDescriptor> {
    registry.find_by_route(&format!("/{segment}"))
}

#[component]
pub fn SectorPage() -> impl IntoView {
    let registry = expect_context::<SectorRegistry>();
    let params = use_params_map();
    let segment = move || params.read().get("sector").unwrap_or_default();
    let back_href = format!("/#{SECTORS_ANCHOR_ID}");

    view! {
        <div class="sector-page">
            {move || match resolve_sector(&registry, &segment()) {
                Some(sector) => {
                    view! {
                        <div class="card sector-page__card">
                            <div class="sector-card__badge sector-card__badge--enabled">
                                <Icon glyph=sector.icon() size=28 class="text-sky"/>
                            </div>
                            <h1 class="sector-page__title">{sector.label().to_owned()}</h1>
                            <p class="sector-page__subtitle">{sector.subtitle().to_owned()}</p>
                        </div>
                    }
                        .into_any()
                }
                None => view! { <p class="sector-page__missing">"Sector not available."</p> }.into_any(),
            }}
            <a class="btn sector-page__back" href=back_href>"Back to sectors"</a>
        </div>
    }
}
