//! Sector activation dispatch.
//!
//! The navigation capability is passed in by the caller (the router's
//! `use_navigate` in the app, a recording closure in tests), so the guard
//! below can be exercised without a browser.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use crate::state::sectors::SectorDescriptor;

/// Why an activation did not navigate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The sector is not selectable.
    Disabled,
    /// The sector claims to be enabled but has nowhere to go.
    MissingRoute,
}

/// Outcome of activating one sector card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Activation {
    Navigated(String),
    Ignored(IgnoreReason),
}

/// Handle a click on a sector card.
///
/// Calls `navigate` exactly once with the sector's route when the sector is
/// enabled *and* has a route; otherwise does nothing. Both conditions are
/// checked: `enabled` alone does not imply a usable route.
pub fn dispatch_activation(sector: &SectorDescriptor, navigate: impl FnOnce(&str)) -> Activation {
    if !sector.is_enabled() {
        log::debug!("ignoring activation of disabled sector {}", sector.label());
        return Activation::Ignored(IgnoreReason::Disabled);
    }
    let Some(route) = sector.route() else {
        log::debug!("ignoring activation of sector {} without route", sector.label());
        return Activation::Ignored(IgnoreReason::MissingRoute);
    };
    log::info!("navigating to sector {} at {route}", sector.label());
    navigate(route);
    Activation::Navigated(route.to_owned())
}
