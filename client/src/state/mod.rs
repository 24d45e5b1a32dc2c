//! Application data shared through Leptos context.
//!
//! Everything here is immutable after mount; there is no reactive domain
//! state on the landing page.

pub mod content;
pub mod sectors;
