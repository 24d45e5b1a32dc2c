use std::cell::RefCell;

use super::*;
use crate::components::icon::Glyph;
use crate::state::sectors::SectorRegistry;

fn activate(sector: &SectorDescriptor) -> (Activation, Vec<String>) {
    let calls = RefCell::new(Vec::new());
    let outcome = dispatch_activation(sector, |route| calls.borrow_mut().push(route.to_owned()));
    (outcome, calls.into_inner())
}

#[test]
fn enabled_sector_navigates_once_to_its_route() {
    let sector = SectorDescriptor::enabled("Agriculture", "Crops", "/agriculture", Glyph::Wheat);
    let (outcome, calls) = activate(&sector);
    assert_eq!(outcome, Activation::Navigated("/agriculture".to_owned()));
    assert_eq!(calls, ["/agriculture"]);
}

#[test]
fn disabled_sector_never_navigates() {
    let sector = SectorDescriptor::coming_soon("Pharma", "Quality", Glyph::Flask);
    let (outcome, calls) = activate(&sector);
    assert_eq!(outcome, Activation::Ignored(IgnoreReason::Disabled));
    assert!(calls.is_empty());
}

#[test]
fn disabled_sector_with_route_never_navigates() {
    let sector = SectorDescriptor::raw("Pharma", false, Some("/pharma"));
    let (outcome, calls) = activate(&sector);
    assert_eq!(outcome, Activation::Ignored(IgnoreReason::Disabled));
    assert!(calls.is_empty());
}

#[test]
fn enabled_sector_without_route_never_navigates() {
    let sector = SectorDescriptor::raw("Broken", true, None);
    let (outcome, calls) = activate(&sector);
    assert_eq!(outcome, Activation::Ignored(IgnoreReason::MissingRoute));
    assert!(calls.is_empty());
}

#[test]
fn repeated_activation_is_not_deduplicated() {
    let sector = SectorDescriptor::enabled("Agriculture", "Crops", "/agriculture", Glyph::Wheat);
    let calls = RefCell::new(Vec::new());
    for _ in 0..2 {
        dispatch_activation(&sector, |route| calls.borrow_mut().push(route.to_owned()));
    }
    assert_eq!(calls.into_inner(), ["/agriculture", "/agriculture"]);
}

#[test]
fn builtin_registry_navigates_only_for_agriculture() {
    let registry = SectorRegistry::builtin().unwrap();
    let mut navigated = Vec::new();
    for sector in registry.iter() {
        if let (Activation::Navigated(route), _) = activate(sector) {
            navigated.push(route);
        }
    }
    assert_eq!(navigated, ["/agriculture"]);
}
