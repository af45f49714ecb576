#![allow(clippy::float_cmp)]

use super::*;

const DELAY: u32 = 2500;

#[test]
fn new_toast_is_hidden_and_empty() {
    let toast = Toast::new();
    assert!(!toast.is_visible());
    assert_eq!(toast.message(), "");
    assert_eq!(toast.pending(), None);
}

#[test]
fn show_sets_text_visibility_and_deadline() {
    let mut toast = Toast::new();
    let token = toast.show("hello", 1000.0, DELAY);
    assert!(toast.is_visible());
    assert_eq!(toast.message(), "hello");
    assert_eq!(toast.expires_at(), Some(3500.0));
    assert_eq!(toast.pending().map(|p| p.token), Some(token));
}

#[test]
fn dismiss_hides_but_keeps_message() {
    let mut toast = Toast::new();
    let token = toast.show("A", 0.0, DELAY);
    assert!(toast.dismiss(token));
    assert!(!toast.is_visible());
    assert_eq!(toast.message(), "A");
    assert_eq!(toast.pending(), None);
}

#[test]
fn second_show_supersedes_first_timer() {
    let mut toast = Toast::new();
    let first = toast.show("A", 0.0, DELAY);
    let second = toast.show("B", 1000.0, DELAY);
    assert_ne!(first, second);

    // The first timer fires late; it must not hide B.
    assert!(!toast.dismiss(first));
    assert!(toast.is_visible());
    assert_eq!(toast.message(), "B");

    assert!(toast.dismiss(second));
    assert!(!toast.is_visible());
    assert_eq!(toast.message(), "B");
}

#[test]
fn advance_before_deadline_keeps_toast_visible() {
    let mut toast = Toast::new();
    toast.show("A", 0.0, DELAY);
    assert!(!toast.advance_to(2499.0));
    assert!(toast.is_visible());
}

#[test]
fn advance_past_deadline_hides_toast() {
    let mut toast = Toast::new();
    toast.show("A", 0.0, DELAY);
    assert!(toast.advance_to(2500.0));
    assert!(!toast.is_visible());
    assert_eq!(toast.message(), "A");
}

#[test]
fn restart_extends_deadline() {
    let mut toast = Toast::new();
    toast.show("A", 0.0, DELAY);
    toast.show("B", 2000.0, DELAY);
    assert!(!toast.advance_to(2600.0));
    assert!(toast.is_visible());
    assert!(toast.advance_to(4500.0));
}

#[test]
fn dismiss_without_pending_is_noop() {
    let mut toast = Toast::new();
    assert!(!toast.dismiss(TimerToken(1)));
    assert!(!toast.advance_to(1.0e9));
}
