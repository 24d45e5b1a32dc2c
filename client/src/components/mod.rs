//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and the sector grid from data passed in by
//! pages; none of them reach for globals beyond Leptos context.

pub mod icon;
pub mod sector_grid;
