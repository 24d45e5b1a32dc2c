//! Static marketing copy for the landing page.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::components::icon::Glyph;
use crate::state::sectors::SectorRegistry;

/// Product name shown in the navbar and footer.
pub const PRODUCT_NAME: &str = "Quantix";
/// Version tag shown next to the product name.
pub const PRODUCT_VERSION: &str = "v1.0";
/// Footer tagline.
pub const PRODUCT_TAGLINE: &str = "Two-Stage Stochastic Production Planning";

/// Colour family applied to a feature tile's icon badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Sky,
    Teal,
    Amber,
}

impl Tone {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Sky => "tone--sky",
            Self::Teal => "tone--teal",
            Self::Amber => "tone--amber",
        }
    }
}

/// One tile in the "How It Works" section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureHighlight {
    pub icon: Glyph,
    pub tone: Tone,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [FeatureHighlight; 3] = [
    FeatureHighlight {
        icon: Glyph::GitBranch,
        tone: Tone::Sky,
        title: "Two-Stage Pipeline",
        description: "Commit first-stage decisions, then adapt each scenario with full recourse optimization.",
    },
    FeatureHighlight {
        icon: Glyph::BarChart,
        tone: Tone::Teal,
        title: "Scenario Modelling",
        description: "Build probability-weighted scenarios and stress-test your plan against every outcome.",
    },
    FeatureHighlight {
        icon: Glyph::TrendingUp,
        tone: Tone::Amber,
        title: "Profit Maximization",
        description: "Linear-programming solver maximizes expected profit while respecting all operational constraints.",
    },
];

/// One cell of the hero stats row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuickStat {
    pub label: &'static str,
    pub value: String,
}

/// Hero stats. The sector cell is derived from the registry so it cannot
/// drift from the grid below it.
pub fn quick_stats(registry: &SectorRegistry) -> Vec<QuickStat> {
    vec![
        QuickStat { label: "Solver", value: "PuLP / CBC".to_owned() },
        QuickStat { label: "Method", value: "2-Stage SP".to_owned() },
        QuickStat { label: "Sectors", value: registry.summary() },
    ]
}

/// Link target for the API documentation mentioned in the footer.
///
/// Set `QUANTIX_API_DOCS_URL` at build time to point at a deployed service.
pub fn api_docs_url() -> &'static str {
    option_env!("QUANTIX_API_DOCS_URL").unwrap_or("http://localhost:8000/docs")
}

/// Human-readable form of [`api_docs_url`] without the scheme.
pub fn api_docs_display(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}
