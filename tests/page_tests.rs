// Host-side tests for page chrome rules.

use desk_core::page::*;

const SECTIONS: [(&str, f64); 4] = [("home", 0.0), ("about", 900.0), ("work", 1800.0), ("contact", 2700.0)];

#[test]
fn active_section_switches_early() {
    assert_eq!(active_section(0.0, SECTIONS), Some("home"));
    assert_eq!(active_section(599.0, SECTIONS), Some("home"));
    assert_eq!(active_section(600.0, SECTIONS), Some("about"));
    assert_eq!(active_section(2400.0, SECTIONS), Some("contact"));
    assert_eq!(active_section(99_999.0, SECTIONS), Some("contact"));
}

#[test]
fn no_section_before_first() {
    assert_eq!(active_section(0.0, [("late", 1000.0)]), None);
    assert_eq!(active_section(0.0, std::iter::empty()), None);
}

#[test]
fn nav_scrolled_after_threshold() {
    assert!(!nav_is_scrolled(0.0));
    assert!(!nav_is_scrolled(100.0));
    assert!(nav_is_scrolled(100.5));
}

#[test]
fn anchors_resolve_to_ids() {
    assert_eq!(anchor_target("#about"), Some("about"));
    assert_eq!(anchor_target("#"), None);
    assert_eq!(anchor_target("about"), None);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn loader_delay_is_positive() {
    assert!(LOADER_HIDE_DELAY_MS > 0);
}
