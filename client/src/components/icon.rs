//! Inline SVG glyphs.
//!
//! Glyphs are stroke-only 24x24 outlines coloured through `currentColor`, so
//! callers tint them with a CSS class. Nothing here carries behavior.

#[cfg(test)]
#[path = "icon_test.rs"]
mod icon_test;

use leptos::prelude::*;

/// Symbolic glyph identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    Wheat,
    Factory,
    Flask,
    Package,
    Zap,
    ArrowRight,
    ChevronRight,
    GitBranch,
    BarChart,
    TrendingUp,
}

impl Glyph {
    /// SVG path data for the glyph outline.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Self::Wheat => &[
                "M2 22 16 8",
                "M3.47 12.53 5 11l1.53 1.53a3.5 3.5 0 0 1 0 4.94L5 19l-1.53-1.53a3.5 3.5 0 0 1 0-4.94Z",
                "M7.47 8.53 9 7l1.53 1.53a3.5 3.5 0 0 1 0 4.94L9 15l-1.53-1.53a3.5 3.5 0 0 1 0-4.94Z",
                "M11.47 4.53 13 3l1.53 1.53a3.5 3.5 0 0 1 0 4.94L13 11l-1.53-1.53a3.5 3.5 0 0 1 0-4.94Z",
                "M20 2h2v2a4 4 0 0 1-4 4h-2V6a4 4 0 0 1 4-4Z",
            ],
            Self::Factory => &[
                "M2 20a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V8l-7 5V8l-7 5V4a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2Z",
                "M17 18h1",
                "M12 18h1",
                "M7 18h1",
            ],
            Self::Flask => &[
                "M10 2v7.527a2 2 0 0 1-.211.896L4.72 20.55a1 1 0 0 0 .9 1.45h12.76a1 1 0 0 0 .9-1.45l-5.069-10.127A2 2 0 0 1 14 9.527V2",
                "M8.5 2h7",
                "M7 16h10",
            ],
            Self::Package => &[
                "M11 21.73a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73z",
                "M12 22V12",
                "m3.3 7 7.703 4.734a2 2 0 0 0 1.994 0L20.7 7",
                "m7.5 4.27 9 5.15",
            ],
            Self::Zap => &[
                "M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z",
            ],
            Self::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Self::ChevronRight => &["m9 18 6-6-6-6"],
            Self::GitBranch => &[
                "M6 3v12",
                "M18 9a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
                "M6 21a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
                "M18 9a9 9 0 0 1-9 9",
            ],
            Self::BarChart => &["M3 3v18h18", "M18 17V9", "M13 17V5", "M8 17v-3"],
            Self::TrendingUp => &["m22 7-8.5 8.5-5-5L2 17", "M16 7h6v6"],
        }
    }
}

/// Render `glyph` as an inline SVG of `size` pixels.
#[component]
pub fn Icon(
    glyph: Glyph,
    #[prop(default = 20)] size: u32,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let paths = glyph
        .paths()
        .iter()
        .map(|&d| view! { <path d=d></path> })
        .collect_view();

    let size = size.to_string();

    view! {
        <svg
            class=format!("icon {class}")
            width=size.clone()
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {paths}
        </svg>
    }
}
