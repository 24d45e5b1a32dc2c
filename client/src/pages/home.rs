//! Landing page: hero, feature summary, and sector selection.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the public root route. The only interactive pieces are the
//! "Select Sector" call-to-action, which scrolls to the sector grid, and the
//! grid itself, which hands enabled sector routes to the router.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::icon::{Glyph, Icon};
use crate::components::sector_grid::SectorGrid;
use crate::state::content::{
    FEATURES, PRODUCT_NAME, PRODUCT_TAGLINE, PRODUCT_VERSION, api_docs_display, api_docs_url, quick_stats,
};
use crate::state::sectors::SectorRegistry;

/// DOM id of the sector section; also usable as a `#sectors` link target.
pub const SECTORS_ANCHOR_ID: &str = "sectors";

#[component]
pub fn HomePage() -> impl IntoView {
    let registry = expect_context::<SectorRegistry>();
    let navigate = use_navigate();
    let sectors_ref = NodeRef::<leptos::html::Section>::new();

    let on_navigate = Callback::new(move |route: String| navigate(&route, NavigateOptions::default()));

    let on_select_sector = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let anchor = sectors_ref.get_untracked();
            crate::util::scroll::scroll_to_anchor(anchor.as_deref());
        }
    };

    let stats = quick_stats(&registry)
        .into_iter()
        .map(|stat| {
            view! {
                <div class="hero__stat">
                    <p class="hero__stat-label">{stat.label}</p>
                    <p class="hero__stat-value">{stat.value}</p>
                </div>
            }
        })
        .collect_view();

    let features = FEATURES
        .iter()
        .map(|feature| {
            view! {
                <div class="card feature-card">
                    <div class=format!("feature-card__badge {}", feature.tone.css_modifier())>
                        <Icon glyph=feature.icon size=22/>
                    </div>
                    <h3 class="feature-card__title">{feature.title}</h3>
                    <p class="feature-card__description">{feature.description}</p>
                </div>
            }
        })
        .collect_view();

    let docs_url = api_docs_url();

    view! {
        <div class="home-page">
            <header class="navbar">
                <div class="navbar__brand">
                    <div class="navbar__logo">
                        <Icon glyph=Glyph::Zap size=16/>
                    </div>
                    <span class="navbar__name">{PRODUCT_NAME}</span>
                    <span class="navbar__version">{PRODUCT_VERSION}</span>
                </div>
            </header>

            <main class="home-page__main">
                <section class="hero">
                    <h1 class="hero__title">
                        "Plan with Confidence."
                        <br/>
                        <span class="hero__accent">"Execute with Precision."</span>
                    </h1>
                    <p class="hero__tagline">
                        "A next-generation optimization that models uncertainty and prepares your production strategy for every scenario"
                    </p>
                    <div class="hero__actions">
                        <button type="button" class="btn btn--primary hero__cta" on:click=on_select_sector>
                            "Select Sector"
                            <Icon glyph=Glyph::ArrowRight size=16/>
                        </button>
                    </div>
                    <div class="hero__stats">{stats}</div>
                </section>

                <section class="features">
                    <div class="section-heading">
                        <h2>"How It Works"</h2>
                        <p>"Three core capabilities that power every optimization run."</p>
                    </div>
                    <div class="features__grid">{features}</div>
                </section>

                <section class="sectors" id=SECTORS_ANCHOR_ID node_ref=sectors_ref>
                    <div class="section-heading">
                        <h2>"Supported Sectors"</h2>
                    </div>
                    <SectorGrid registry=registry on_navigate=on_navigate/>
                </section>
            </main>

            <footer class="footer">
                <p>
                    {format!("{PRODUCT_NAME} · {PRODUCT_TAGLINE} · API at ")}
                    <a href=docs_url class="footer__link">{api_docs_display(docs_url)}</a>
                </p>
            </footer>
        </div>
    }
}
