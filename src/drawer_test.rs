use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn ui_state_default_everything_closed() {
    let state = UiState::default();
    assert!(!state.nav_open);
    assert!(!state.cart_open);
    assert!(!state.overlay_active);
    assert!(!state.body_scroll_locked);
}

#[test]
fn overlay_policy_default_is_derived() {
    assert_eq!(OverlayPolicy::default(), OverlayPolicy::Derived);
}

// =============================================================
// Open / close / toggle
// =============================================================

#[test]
fn open_activates_overlay_and_locks_scroll() {
    let mut state = UiState::default();
    state.open(Drawer::Nav);
    assert!(state.nav_open);
    assert!(state.overlay_active);
    assert!(state.body_scroll_locked);
}

#[test]
fn open_is_idempotent() {
    let mut once = UiState::default();
    once.open(Drawer::Cart);
    let mut twice = once;
    twice.open(Drawer::Cart);
    assert_eq!(once, twice);
}

#[test]
fn close_on_closed_drawer_is_noop() {
    let mut state = UiState::default();
    state.close(Drawer::Nav, OverlayPolicy::Derived);
    assert_eq!(state, UiState::default());
}

#[test]
fn toggle_flips_and_reports_new_state() {
    let mut state = UiState::default();
    assert!(state.toggle(Drawer::Nav, OverlayPolicy::Derived));
    assert!(state.nav_open);
    assert!(!state.toggle(Drawer::Nav, OverlayPolicy::Derived));
    assert!(!state.nav_open);
    assert!(!state.overlay_active);
}

// =============================================================
// Shared overlay
// =============================================================

#[test]
fn derived_policy_keeps_overlay_for_remaining_drawer() {
    let mut state = UiState::default();
    state.open(Drawer::Nav);
    state.open(Drawer::Cart);
    state.close(Drawer::Nav, OverlayPolicy::Derived);
    assert!(state.cart_open);
    assert!(state.overlay_active);
    assert!(state.body_scroll_locked);

    state.close(Drawer::Cart, OverlayPolicy::Derived);
    assert!(!state.overlay_active);
    assert!(!state.body_scroll_locked);
}

#[test]
fn legacy_policy_clears_overlay_even_with_other_drawer_open() {
    let mut state = UiState::default();
    state.open(Drawer::Nav);
    state.open(Drawer::Cart);
    state.close(Drawer::Nav, OverlayPolicy::Legacy);
    assert!(state.cart_open);
    assert!(!state.overlay_active);
    assert!(!state.body_scroll_locked);
}

#[test]
fn both_drawers_can_be_open_at_once() {
    let mut state = UiState::default();
    state.open(Drawer::Nav);
    state.open(Drawer::Cart);
    assert!(state.nav_open && state.cart_open);
}

#[test]
fn policy_deserializes_from_lowercase_names() {
    let derived: OverlayPolicy = serde_json::from_str("\"derived\"").expect("derived parses");
    let legacy: OverlayPolicy = serde_json::from_str("\"legacy\"").expect("legacy parses");
    assert_eq!(derived, OverlayPolicy::Derived);
    assert_eq!(legacy, OverlayPolicy::Legacy);
}
