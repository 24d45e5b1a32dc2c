//! Sector selection grid.
//!
//! DESIGN
//! ======
//! One card per registry entry, in registry order, keyed by label. Every
//! visual decision on a card goes through [`CardPresentation::for_enabled`],
//! which only sees the `enabled` flag. Clicks are routed through
//! [`dispatch_activation`] with the navigation capability supplied by the
//! caller.

#[cfg(test)]
#[path = "sector_grid_test.rs"]
mod sector_grid_test;

use leptos::prelude::*;

use crate::components::icon::{Glyph, Icon};
use crate::state::sectors::{SectorDescriptor, SectorRegistry};
use crate::util::navigation::dispatch_activation;

/// Class and attribute choices for one card, derived from `enabled` alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardPresentation {
    pub card_class: &'static str,
    pub badge_class: &'static str,
    pub icon_class: &'static str,
    pub subtitle_class: &'static str,
    pub action_class: &'static str,
    pub disabled: bool,
}

impl CardPresentation {
    pub const fn for_enabled(enabled: bool) -> Self {
        if enabled {
            Self {
                card_class: "card sector-card sector-card--enabled",
                badge_class: "sector-card__badge sector-card__badge--enabled",
                icon_class: "text-sky",
                subtitle_class: "sector-card__subtitle text-teal",
                action_class: "sector-card__action text-sky",
                disabled: false,
            }
        } else {
            Self {
                card_class: "card sector-card sector-card--disabled",
                badge_class: "sector-card__badge sector-card__badge--disabled",
                icon_class: "text-muted",
                subtitle_class: "sector-card__subtitle text-muted",
                action_class: "sector-card__action text-muted",
                disabled: true,
            }
        }
    }
}

/// Presentation for `sector`.
pub fn card_presentation(sector: &SectorDescriptor) -> CardPresentation {
    CardPresentation::for_enabled(sector.is_enabled())
}

/// Everything needed to render one card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectorCardModel {
    /// Stable identity of the card across renders (the sector label).
    pub key: String,
    pub look: CardPresentation,
    pub sector: SectorDescriptor,
}

/// Card models for `registry`, in registry order.
pub fn card_models(registry: &SectorRegistry) -> Vec<SectorCardModel> {
    registry
        .iter()
        .map(|sector| SectorCardModel {
            key: sector.label().to_owned(),
            look: card_presentation(sector),
            sector: sector.clone(),
        })
        .collect()
}

/// Grid of sector cards.
///
/// `on_navigate` is invoked with a sector route when an enabled card is
/// activated.
#[component]
pub fn SectorGrid(registry: SectorRegistry, on_navigate: Callback<String>) -> impl IntoView {
    view! {
        <div class="sector-grid">
            <For
                each=move || card_models(&registry)
                key=|card| card.key.clone()
                children=move |card| view! { <SectorCard card=card on_navigate=on_navigate/> }
            />
        </div>
    }
}

/// A single sector card.
#[component]
pub fn SectorCard(card: SectorCardModel, on_navigate: Callback<String>) -> impl IntoView {
    let SectorCardModel { look, sector, .. } = card;
    let label = sector.label().to_owned();
    let subtitle = sector.subtitle().to_owned();
    let action = sector.action_label().to_owned();
    let icon = sector.icon();

    let on_click = move |_| {
        dispatch_activation(&sector, |route| on_navigate.run(route.to_owned()));
    };

    view! {
        <button
            type="button"
            class=look.card_class
            disabled=look.disabled
            on:click=on_click
        >
            <div class=look.badge_class>
                <Icon glyph=icon size=20 class=look.icon_class/>
            </div>
            <p class="sector-card__label">{label}</p>
            <p class=look.subtitle_class>{subtitle}</p>
            <div class=look.action_class>
                {action}
                <Icon glyph=Glyph::ChevronRight size=13/>
            </div>
        </button>
    }
}
