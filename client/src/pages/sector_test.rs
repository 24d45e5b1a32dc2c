use super::*;

#[test]
fn resolve_sector_finds_enabled_route() {
    let registry = SectorRegistry::builtin().unwrap();
    assert_eq!(resolve_sector(&registry, "agriculture").map(SectorDescriptor::label), Some("Agriculture"));
}

#[test]
fn resolve_sector_rejects_coming_soon_and_unknown() {
    let registry = SectorRegistry::builtin().unwrap();
    assert!(resolve_sector(&registry, "pharma").is_none());
    assert!(resolve_sector(&registry, "").is_none());
    assert!(resolve_sector(&registry, "nowhere").is_none());
}
