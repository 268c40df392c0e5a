use super::*;

#[test]
fn nav_state_defaults_closed() {
    let state = NavState::default();
    assert!(!state.sidebar_open);
    assert!(!state.user_menu_open);
}

#[test]
fn toggles_flip_independently() {
    let mut state = NavState::default();
    state.toggle_sidebar();
    assert!(state.sidebar_open);
    assert!(!state.user_menu_open);

    state.toggle_user_menu();
    assert!(state.user_menu_open);

    state.toggle_sidebar();
    assert!(!state.sidebar_open);
    assert!(state.user_menu_open);
}

#[test]
fn close_is_idempotent() {
    let mut state = NavState { sidebar_open: true, user_menu_open: true };
    state.close_sidebar();
    state.close_sidebar();
    state.close_user_menu();
    assert_eq!(state, NavState::default());
}

#[test]
fn focus_moving_outside_closes_menu() {
    let mut state = NavState { sidebar_open: false, user_menu_open: true };
    state.on_menu_focus_out(false);
    assert!(!state.user_menu_open);
}

#[test]
fn focus_moving_inside_keeps_menu_open() {
    let mut state = NavState { sidebar_open: false, user_menu_open: true };
    state.on_menu_focus_out(true);
    assert!(state.user_menu_open);
}
