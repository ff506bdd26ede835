use super::*;

fn with_items(count: usize) -> CarouselState {
    let mut state = CarouselState::default();
    state.set_item_count(count);
    state
}

#[test]
fn empty_carousel_has_no_active_index() {
    let state = CarouselState::default();
    assert_eq!(state.active_index(), None);
    assert!(!state.auto_advance_enabled());
}

#[test]
fn advance_wraps_modulo_item_count() {
    let mut state = with_items(3);
    assert_eq!(state.active_index(), Some(0));
    state.advance();
    assert_eq!(state.active_index(), Some(1));
    state.advance();
    assert_eq!(state.active_index(), Some(2));
    state.advance();
    assert_eq!(state.active_index(), Some(0));
}

#[test]
fn k_advances_land_on_k_mod_n() {
    let mut state = with_items(4);
    for _ in 0..10 {
        state.advance();
    }
    assert_eq!(state.active_index(), Some(10 % 4));
}

#[test]
fn retreat_wraps_backwards() {
    let mut state = with_items(3);
    state.retreat();
    assert_eq!(state.active_index(), Some(2));
    state.retreat();
    assert_eq!(state.active_index(), Some(1));
}

#[test]
fn single_item_navigation_is_a_no_op() {
    let mut state = with_items(1);
    let seq = state.sync_seq();
    state.advance();
    state.retreat();
    assert_eq!(state.active_index(), Some(0));
    assert_eq!(state.sync_seq(), seq);
    assert!(!state.auto_advance_enabled());
}

#[test]
fn empty_navigation_is_a_no_op() {
    let mut state = CarouselState::default();
    state.advance();
    state.retreat();
    state.go_to(2);
    assert_eq!(state.active_index(), None);
    assert_eq!(state.sync_seq(), 0);
}

#[test]
fn navigation_bumps_sync_seq() {
    let mut state = with_items(3);
    state.advance();
    state.retreat();
    state.go_to(2);
    assert_eq!(state.sync_seq(), 3);
}

#[test]
fn go_to_clamps_out_of_range_requests() {
    let mut state = with_items(3);
    state.go_to(99);
    assert_eq!(state.active_index(), Some(2));
    state.go_to(-1);
    assert_eq!(state.active_index(), Some(0));
}

#[test]
fn shrinking_item_count_clamps_index() {
    let mut state = with_items(5);
    state.go_to(4);
    state.set_item_count(3);
    assert_eq!(state.active_index(), Some(2));
    state.set_item_count(1);
    assert_eq!(state.active_index(), Some(0));
    state.set_item_count(0);
    assert_eq!(state.active_index(), None);
}

#[test]
fn leftward_swipe_advances() {
    let mut state = with_items(3);
    state.on_gesture_start(200.0, 100.0);
    assert!(state.is_interacting());
    state.on_gesture_end(120.0, 100.0);
    assert_eq!(state.active_index(), Some(1));
    assert!(!state.is_interacting());
}

#[test]
fn rightward_swipe_retreats() {
    let mut state = with_items(3);
    state.on_gesture_start(100.0, 100.0);
    state.on_gesture_end(180.0, 100.0);
    assert_eq!(state.active_index(), Some(2));
    assert!(!state.is_interacting());
}

#[test]
fn vertical_scroll_does_not_navigate() {
    let mut state = with_items(3);
    state.on_gesture_start(100.0, 100.0);
    state.on_gesture_end(110.0, 180.0);
    assert_eq!(state.active_index(), Some(0));
    assert!(!state.is_interacting());
}

#[test]
fn sub_threshold_swipe_does_not_navigate() {
    let mut state = with_items(3);
    state.on_gesture_start(100.0, 100.0);
    state.on_gesture_end(100.0 + SWIPE_THRESHOLD, 100.0);
    assert_eq!(state.active_index(), Some(0));
}

#[test]
fn gesture_cancel_never_navigates() {
    let mut state = with_items(3);
    state.on_gesture_start(200.0, 100.0);
    state.on_gesture_cancel();
    assert_eq!(state.active_index(), Some(0));
    assert!(!state.is_interacting());
    // A later lift without a start does nothing.
    state.on_gesture_end(0.0, 0.0);
    assert_eq!(state.active_index(), Some(0));
}

#[test]
fn tick_suppressed_while_interacting_then_resumes() {
    let mut state = with_items(3);
    state.on_gesture_start(100.0, 100.0);
    assert!(!state.tick());
    assert_eq!(state.active_index(), Some(0));
    state.on_gesture_end(100.0, 100.0);
    assert!(state.tick());
    assert_eq!(state.active_index(), Some(1));
}

#[test]
fn tick_is_a_no_op_for_short_collections() {
    let mut state = with_items(1);
    assert!(!state.tick());
    let mut empty = CarouselState::default();
    assert!(!empty.tick());
}

#[test]
fn visual_position_change_reconciles_without_sync_request() {
    let mut state = with_items(4);
    let seq = state.sync_seq();
    state.on_visual_position_change(2);
    assert_eq!(state.active_index(), Some(2));
    assert_eq!(state.sync_seq(), seq);
    state.on_visual_position_change(99);
    assert_eq!(state.active_index(), Some(3));
}
