//! Smooth scrolling to an in-page anchor.
//!
//! TRADE-OFFS
//! ==========
//! The anchor is resolved on every trigger rather than cached, so a section
//! that has not mounted yet simply produces no scroll. SSR paths never see a
//! mounted element and therefore never scroll.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Scroll animation style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Vertical alignment of the target within the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollAlign {
    Start,
    Center,
    End,
    Nearest,
}

/// Parameters handed to the scroll-into-view capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollRequest {
    pub behavior: ScrollBehavior,
    pub block: ScrollAlign,
}

impl ScrollRequest {
    /// Smooth scroll aligning the target's top edge with the viewport's.
    pub const SMOOTH_TO_START: Self = Self { behavior: ScrollBehavior::Smooth, block: ScrollAlign::Start };
}

/// Something that can be scrolled into view.
pub trait ScrollTarget {
    fn scroll_into_view(&self, request: ScrollRequest);
}

/// Scroll `anchor` to the top of the viewport if it is mounted.
///
/// Returns whether a scroll was requested. The request is fire-and-forget;
/// a second trigger mid-animation just issues another request.
pub fn scroll_to_anchor<T: ScrollTarget + ?Sized>(anchor: Option<&T>) -> bool {
    let Some(anchor) = anchor else {
        log::debug!("scroll anchor not mounted; skipping");
        return false;
    };
    anchor.scroll_into_view(ScrollRequest::SMOOTH_TO_START);
    true
}

#[cfg(feature = "hydrate")]
impl ScrollTarget for web_sys::Element {
    fn scroll_into_view(&self, request: ScrollRequest) {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(match request.behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        options.set_block(match request.block {
            ScrollAlign::Start => web_sys::ScrollLogicalPosition::Start,
            ScrollAlign::Center => web_sys::ScrollLogicalPosition::Center,
            ScrollAlign::End => web_sys::ScrollLogicalPosition::End,
            ScrollAlign::Nearest => web_sys::ScrollLogicalPosition::Nearest,
        });
        self.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
