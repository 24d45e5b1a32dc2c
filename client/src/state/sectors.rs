//! Sector registry: the ordered, immutable list of sectors offered on the
//! landing page.
//!
//! DESIGN
//! ======
//! Every card on the sector grid is derived from a `SectorDescriptor`, so the
//! enabled/route pairing is enforced here once, at construction, instead of
//! at each render or click site. The registry is built when the app mounts
//! and is never mutated afterwards; clones share the same backing slice.

#[cfg(test)]
#[path = "sectors_test.rs"]
mod sectors_test;

use std::collections::HashSet;
use std::sync::Arc;

use crate::components::icon::Glyph;

/// Action-row text for a selectable sector.
pub const OPEN_ACTION: &str = "Open";
/// Action-row text for a sector that is not available yet.
pub const COMING_SOON_ACTION: &str = "Coming soon";

/// Error returned by [`SectorRegistry::new`] when authored sector data is
/// inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SectorError {
    /// Two descriptors share a label; labels key the rendered cards.
    #[error("duplicate sector label: {0}")]
    DuplicateLabel(String),
    /// An enabled sector has no navigation target.
    #[error("sector {0} is enabled but has no route")]
    EnabledWithoutRoute(String),
    /// A disabled sector carries a navigation target.
    #[error("sector {0} is disabled but has a route")]
    DisabledWithRoute(String),
    /// A route that is not an absolute in-app path.
    #[error("sector {label} has invalid route {route:?}")]
    InvalidRoute { label: String, route: String },
}

/// Immutable description of one sector card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectorDescriptor {
    label: String,
    subtitle: String,
    enabled: bool,
    route: Option<String>,
    action_label: String,
    icon: Glyph,
}

impl SectorDescriptor {
    /// A selectable sector that navigates to `route`.
    pub fn enabled(label: impl Into<String>, subtitle: impl Into<String>, route: impl Into<String>, icon: Glyph) -> Self {
        Self {
            label: label.into(),
            subtitle: subtitle.into(),
            enabled: true,
            route: Some(route.into()),
            action_label: OPEN_ACTION.to_owned(),
            icon,
        }
    }

    /// A sector shown on the grid but not selectable yet.
    pub fn coming_soon(label: impl Into<String>, subtitle: impl Into<String>, icon: Glyph) -> Self {
        Self {
            label: label.into(),
            subtitle: subtitle.into(),
            enabled: false,
            route: None,
            action_label: COMING_SOON_ACTION.to_owned(),
            icon,
        }
    }

    /// Unchecked constructor for exercising malformed descriptors in tests.
    #[cfg(test)]
    pub(crate) fn raw(label: &str, enabled: bool, route: Option<&str>) -> Self {
        Self {
            label: label.to_owned(),
            subtitle: String::new(),
            enabled,
            route: route.map(str::to_owned),
            action_label: if enabled { OPEN_ACTION } else { COMING_SOON_ACTION }.to_owned(),
            icon: Glyph::Package,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn route(&self) -> Option<&str> {
        self.route.as_deref()
    }

    pub fn action_label(&self) -> &str {
        &self.action_label
    }

    pub fn icon(&self) -> Glyph {
        self.icon
    }

    fn validate(&self) -> Result<(), SectorError> {
        match (self.enabled, self.route.as_deref()) {
            (true, None) => Err(SectorError::EnabledWithoutRoute(self.label.clone())),
            (false, Some(_)) => Err(SectorError::DisabledWithRoute(self.label.clone())),
            (true, Some(route)) if !route.starts_with('/') => {
                Err(SectorError::InvalidRoute { label: self.label.clone(), route: route.to_owned() })
            }
            _ => Ok(()),
        }
    }
}

/// Ordered, validated collection of sectors. Iteration order is display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectorRegistry {
    sectors: Arc<[SectorDescriptor]>,
}

impl SectorRegistry {
    /// Validate `sectors` and freeze them into a registry.
    ///
    /// # Errors
    ///
    /// Returns the first [`SectorError`] found, in registry order.
    pub fn new(sectors: Vec<SectorDescriptor>) -> Result<Self, SectorError> {
        let mut seen = HashSet::with_capacity(sectors.len());
        for sector in &sectors {
            if !seen.insert(sector.label.as_str()) {
                return Err(SectorError::DuplicateLabel(sector.label.clone()));
            }
            sector.validate()?;
        }
        Ok(Self { sectors: sectors.into() })
    }

    /// The sectors offered by the product, in display order.
    ///
    /// # Errors
    ///
    /// Only fails if the table below is edited into an inconsistent state.
    pub fn builtin() -> Result<Self, SectorError> {
        Self::new(vec![
            SectorDescriptor::enabled("Agriculture", "Weather-driven crop planning", "/agriculture", Glyph::Wheat),
            SectorDescriptor::coming_soon("Manufacturing", "Demand-driven production", Glyph::Factory),
            SectorDescriptor::coming_soon("Pharma", "Quality risk management", Glyph::Flask),
            SectorDescriptor::coming_soon("Food & Beverage", "Perishable production", Glyph::Package),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectorDescriptor> {
        self.sectors.iter()
    }

    pub fn len(&self) -> usize {
        self.sectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }

    /// Look up a sector by its label.
    pub fn get(&self, label: &str) -> Option<&SectorDescriptor> {
        self.sectors.iter().find(|s| s.label == label)
    }

    /// Look up the enabled sector whose route is `route`.
    pub fn find_by_route(&self, route: &str) -> Option<&SectorDescriptor> {
        self.sectors.iter().find(|s| s.enabled && s.route.as_deref() == Some(route))
    }

    pub fn enabled_count(&self) -> usize {
        self.sectors.iter().filter(|s| s.enabled).count()
    }

    /// Short availability summary, e.g. `4 (1 Active)`.
    pub fn summary(&self) -> String {
        format!("{} ({} Active)", self.len(), self.enabled_count())
    }
}
