//! Upcoming-episode carousel controller.
//!
//! DESIGN
//! ======
//! One atomic record owns the active index, the item count, and the
//! in-progress gesture, so the auto-advance timer and touch handlers cannot
//! observe half-updated state. The controller is rendering-agnostic: it
//! never touches the DOM. Navigation operations bump `sync_seq`, and the
//! rendering component watches that counter to scroll the active slide into
//! view (the `*_seq` one-shot-effect convention used across the UI state).
//!
//! All operations are infallible; index arithmetic is modular and guarded
//! against empty or single-item collections.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// Horizontal displacement (in CSS pixels) required to read a touch as a
/// swipe.
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// Seconds between auto-advance ticks.
pub const AUTO_ADVANCE_SECS: u64 = 15;

/// Controller state for a horizontally-paged list of items.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CarouselState {
    item_count: usize,
    active_index: usize,
    interacting: bool,
    gesture_start: Option<(f64, f64)>,
    sync_seq: u64,
}

impl CarouselState {
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// The focused slide, or `None` while the collection is empty.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        (self.item_count > 0).then_some(self.active_index)
    }

    /// True while a touch gesture is in progress; suppresses auto-advance.
    #[must_use]
    pub fn is_interacting(&self) -> bool {
        self.interacting
    }

    /// Monotonic counter of visual-sync requests. Bumped by `advance`,
    /// `retreat`, and `go_to`; not bumped by scroll reconciliation, where
    /// the view has already moved.
    #[must_use]
    pub fn sync_seq(&self) -> u64 {
        self.sync_seq
    }

    #[must_use]
    pub fn auto_advance_enabled(&self) -> bool {
        self.item_count > 1
    }

    /// Replace the item count when data loads or changes. Dropping to one
    /// or zero items resets the index; shrinking collections clamp it.
    pub fn set_item_count(&mut self, count: usize) {
        self.item_count = count;
        if count <= 1 {
            self.active_index = 0;
        } else if self.active_index >= count {
            self.active_index = count - 1;
        }
    }

    /// Step to the next slide, wrapping. No-op with fewer than two items.
    pub fn advance(&mut self) {
        if self.item_count > 1 {
            self.active_index = (self.active_index + 1) % self.item_count;
            self.sync_seq += 1;
        }
    }

    /// Step to the previous slide, wrapping. No-op with fewer than two items.
    pub fn retreat(&mut self) {
        if self.item_count > 1 {
            self.active_index = (self.active_index + self.item_count - 1) % self.item_count;
            self.sync_seq += 1;
        }
    }

    /// Jump to a slide. Out-of-range requests clamp rather than error.
    pub fn go_to(&mut self, index: i64) {
        if self.item_count == 0 {
            return;
        }
        let max = self.item_count - 1;
        self.active_index = usize::try_from(index.max(0)).unwrap_or(0).min(max);
        self.sync_seq += 1;
    }

    /// A touch landed: remember where it started and block auto-advance.
    pub fn on_gesture_start(&mut self, x: f64, y: f64) {
        self.interacting = true;
        self.gesture_start = Some((x, y));
    }

    /// The touch lifted. A horizontally-dominant displacement beyond the
    /// threshold navigates (rightward swipe retreats, leftward advances);
    /// anything else is ignored. Interaction always ends here.
    pub fn on_gesture_end(&mut self, x: f64, y: f64) {
        if let Some((start_x, start_y)) = self.gesture_start.take() {
            let dx = x - start_x;
            let dy = y - start_y;
            if dx.abs() > SWIPE_THRESHOLD && dx.abs() > dy.abs() {
                if dx > 0.0 {
                    self.retreat();
                } else {
                    self.advance();
                }
            }
        }
        self.interacting = false;
    }

    /// The touch ended without usable coordinates; drop the gesture.
    pub fn on_gesture_cancel(&mut self) {
        self.gesture_start = None;
        self.interacting = false;
    }

    /// Reconcile the logical index to a slide position observed from manual
    /// scrolling. Clamped; does not request a visual sync.
    pub fn on_visual_position_change(&mut self, observed: usize) {
        if self.item_count == 0 {
            return;
        }
        self.active_index = observed.min(self.item_count - 1);
    }

    /// One auto-advance tick. Interaction wins over a concurrently scheduled
    /// tick because the flag is checked here, at fire time. Returns whether
    /// the index moved.
    pub fn tick(&mut self) -> bool {
        if self.auto_advance_enabled() && !self.interacting {
            self.advance();
            true
        } else {
            false
        }
    }
}
