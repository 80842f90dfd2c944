//! Scroll-driven helpers shared by the frame-throttled scroll dispatcher.

/// Coalesces scroll events so the dispatcher runs at most once per frame.
#[derive(Debug, Default)]
pub struct FrameThrottle {
    ticking: bool,
}

impl FrameThrottle {
    /// Returns `true` when the caller should schedule a frame callback.
    pub fn request(&mut self) -> bool {
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    /// Called from the frame callback once the work has run.
    pub fn complete(&mut self) {
        self.ticking = false;
    }

    pub fn is_pending(&self) -> bool {
        self.ticking
    }
}

pub fn back_to_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Scroll destination for an in-page anchor, leaving room for the fixed navbar.
pub fn anchor_scroll_top(target_offset_top: f64, navbar_offset: f64) -> f64 {
    target_offset_top - navbar_offset
}

/// Anchors that should be intercepted: same-page fragments that name an element.
pub fn in_page_fragment(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    (!id.is_empty()).then_some(id)
}

/// Vertical translation of the `index`-th parallax layer.
pub fn parallax_offset(scroll_y: f64, index: usize, factor: f64) -> f64 {
    let speed = (index as f64 + 1.0) * factor;
    -(scroll_y * speed)
}
