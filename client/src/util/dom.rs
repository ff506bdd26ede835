//! DOM measurement and scrolling helpers for the carousel (browser only).

use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Whether the element intersects the viewport vertically. Horizontal
/// position is deliberately ignored: the carousel scrolls sideways inside
/// its container, and a partially off-axis slide must not stop the timer.
#[must_use]
pub fn is_vertically_visible(element: &Element) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let inner_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let rect = element.get_bounding_client_rect();
    rect.top() < inner_height && rect.bottom() > 0.0
}

/// Smooth-scroll the container's `index`-th child into view. Out-of-range
/// indices are ignored.
pub fn scroll_child_into_view(container: &Element, index: usize) {
    let Ok(index) = u32::try_from(index) else {
        return;
    };
    if let Some(child) = container.children().item(index) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Nearest);
        options.set_inline(ScrollLogicalPosition::Start);
        child.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// The slide index the container has been manually scrolled to, derived
/// from the scroll offset and the first slide's rendered width.
#[must_use]
pub fn observed_slide_index(container: &Element) -> Option<usize> {
    let first = container.children().item(0)?;
    let width = first.get_bounding_client_rect().width();
    if width <= 0.0 {
        return None;
    }
    let index = (f64::from(container.scroll_left()) / width).round();
    if index.is_sign_negative() {
        return Some(0);
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Some(index as usize)
}
