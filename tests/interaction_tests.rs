use gantt_rs::interaction::{DragPhase, InteractionState, drag_time_delta};

#[test]
fn pointer_down_enters_dragging_once() {
    let mut state = InteractionState::default();
    assert_eq!(state.phase(), DragPhase::Idle);

    assert!(state.on_pointer_down(100.0));
    assert_eq!(state.phase(), DragPhase::Dragging);

    // A second down without an up in between is out-of-sequence.
    assert!(!state.on_pointer_down(150.0));
    assert_eq!(state.phase(), DragPhase::Dragging);
}

#[test]
fn moves_while_idle_are_ignored() {
    let mut state = InteractionState::default();
    assert_eq!(state.on_pointer_move(250.0), None);
    assert_eq!(state.phase(), DragPhase::Idle);
}

#[test]
fn moves_while_dragging_yield_pixel_deltas() {
    let mut state = InteractionState::default();
    state.on_pointer_down(100.0);

    assert_eq!(state.on_pointer_move(130.0), Some(30.0));
    assert_eq!(state.on_pointer_move(110.0), Some(-20.0));
}

#[test]
fn pointer_up_returns_to_idle_exactly_once() {
    let mut state = InteractionState::default();
    state.on_pointer_down(0.0);

    assert!(state.on_pointer_up());
    assert_eq!(state.phase(), DragPhase::Idle);
    assert!(!state.on_pointer_up());
}

#[test]
fn dragging_right_moves_window_left() {
    // Content follows the pointer: positive pixel delta, negative time delta.
    let delta = drag_time_delta(210.0, 10.0, 420.0);
    assert_eq!(delta, -5.0);
}

#[test]
fn drag_delta_with_degenerate_inner_width_is_zero() {
    assert_eq!(drag_time_delta(50.0, 10.0, 0.0), 0.0);
    assert_eq!(drag_time_delta(50.0, 10.0, f64::NAN), 0.0);
}
