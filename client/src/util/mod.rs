//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser capabilities (routing, scrolling) from
//! page and component logic to improve reuse and testability.

pub mod navigation;
pub mod scroll;
