//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{home::HomePage, sector::SectorPage};
use crate::state::content::PRODUCT_NAME;
use crate::state::sectors::SectorRegistry;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Build the sector registry once for the lifetime of the app.
///
/// An inconsistent builtin table is logged and replaced by an empty
/// registry; the page still renders.
fn mount_registry() -> SectorRegistry {
    SectorRegistry::builtin().unwrap_or_else(|e| {
        log::error!("sector registry rejected: {e}");
        SectorRegistry::default()
    })
}

/// Root application component.
///
/// Provides the sector registry context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(mount_registry());

    view! {
        <Stylesheet id="leptos" href="/pkg/quantix.css"/>
        <Title text=PRODUCT_NAME/>
        <Meta name="description" content="Two-stage stochastic production planning across sectors."/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=ParamSegment("sector") view=SectorPage/>
            </Routes>
        </Router>
    }
}
