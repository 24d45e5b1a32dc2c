use super::*;

// =============================================================
// Builtin registry
// =============================================================

#[test]
fn builtin_registry_is_valid() {
    let registry = SectorRegistry::builtin().unwrap();
    assert_eq!(registry.len(), 4);
    assert!(!registry.is_empty());
}

#[test]
fn builtin_enabled_iff_route_present() {
    let registry = SectorRegistry::builtin().unwrap();
    for sector in registry.iter() {
        assert_eq!(sector.is_enabled(), sector.route().is_some(), "{}", sector.label());
    }
}

#[test]
fn builtin_preserves_display_order() {
    let registry = SectorRegistry::builtin().unwrap();
    let labels: Vec<_> = registry.iter().map(SectorDescriptor::label).collect();
    assert_eq!(labels, ["Agriculture", "Manufacturing", "Pharma", "Food & Beverage"]);
}

#[test]
fn builtin_labels_are_unique() {
    let registry = SectorRegistry::builtin().unwrap();
    let labels: HashSet<_> = registry.iter().map(SectorDescriptor::label).collect();
    assert_eq!(labels.len(), registry.len());
}

#[test]
fn builtin_only_agriculture_is_enabled() {
    let registry = SectorRegistry::builtin().unwrap();
    assert_eq!(registry.enabled_count(), 1);
    let agriculture = registry.get("Agriculture").unwrap();
    assert_eq!(agriculture.route(), Some("/agriculture"));
    assert_eq!(agriculture.action_label(), OPEN_ACTION);
    assert_eq!(agriculture.icon(), Glyph::Wheat);
}

#[test]
fn builtin_summary_counts_active_sectors() {
    assert_eq!(SectorRegistry::builtin().unwrap().summary(), "4 (1 Active)");
}

#[test]
fn builtin_iteration_is_stable_across_clones() {
    let registry = SectorRegistry::builtin().unwrap();
    let copy = registry.clone();
    assert!(registry.iter().eq(copy.iter()));
}

// =============================================================
// Constructors
// =============================================================

#[test]
fn coming_soon_has_no_route() {
    let sector = SectorDescriptor::coming_soon("Mining", "Ore blending", Glyph::Factory);
    assert!(!sector.is_enabled());
    assert_eq!(sector.route(), None);
    assert_eq!(sector.action_label(), COMING_SOON_ACTION);
    assert_eq!(sector.subtitle(), "Ore blending");
}

#[test]
fn enabled_carries_route_and_open_action() {
    let sector = SectorDescriptor::enabled("Energy", "Grid dispatch", "/energy", Glyph::Zap);
    assert!(sector.is_enabled());
    assert_eq!(sector.route(), Some("/energy"));
    assert_eq!(sector.action_label(), OPEN_ACTION);
}

// =============================================================
// Validation
// =============================================================

#[test]
fn new_rejects_duplicate_labels() {
    let err = SectorRegistry::new(vec![
        SectorDescriptor::coming_soon("Pharma", "a", Glyph::Flask),
        SectorDescriptor::coming_soon("Pharma", "b", Glyph::Flask),
    ])
    .unwrap_err();
    assert_eq!(err, SectorError::DuplicateLabel("Pharma".to_owned()));
}

#[test]
fn new_rejects_enabled_without_route() {
    let err = SectorRegistry::new(vec![SectorDescriptor::raw("Broken", true, None)]).unwrap_err();
    assert_eq!(err, SectorError::EnabledWithoutRoute("Broken".to_owned()));
}

#[test]
fn new_rejects_disabled_with_route() {
    let err = SectorRegistry::new(vec![SectorDescriptor::raw("Broken", false, Some("/broken"))]).unwrap_err();
    assert_eq!(err, SectorError::DisabledWithRoute("Broken".to_owned()));
}

#[test]
fn new_rejects_relative_route() {
    let err = SectorRegistry::new(vec![SectorDescriptor::raw("Broken", true, Some("broken"))]).unwrap_err();
    assert_eq!(
        err,
        SectorError::InvalidRoute { label: "Broken".to_owned(), route: "broken".to_owned() }
    );
}

#[test]
fn new_accepts_empty_registry() {
    let registry = SectorRegistry::new(Vec::new()).unwrap();
    assert!(registry.is_empty());
    assert_eq!(registry.summary(), "0 (0 Active)");
}

#[test]
fn sector_error_messages_name_the_sector() {
    assert_eq!(
        SectorError::EnabledWithoutRoute("Pharma".to_owned()).to_string(),
        "sector Pharma is enabled but has no route"
    );
}

// =============================================================
// Lookup
// =============================================================

#[test]
fn find_by_route_matches_enabled_sector() {
    let registry = SectorRegistry::builtin().unwrap();
    assert_eq!(registry.find_by_route("/agriculture").map(SectorDescriptor::label), Some("Agriculture"));
    assert!(registry.find_by_route("/pharma").is_none());
}

#[test]
fn get_returns_none_for_unknown_label() {
    let registry = SectorRegistry::builtin().unwrap();
    assert!(registry.get("Aerospace").is_none());
}
