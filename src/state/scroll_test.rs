use super::*;

fn sections() -> Vec<(String, f64)> {
    vec![
        ("home".to_owned(), 0.0),
        ("about".to_owned(), 800.0),
        ("projects".to_owned(), 1600.0),
    ]
}

// =============================================================
// Sticky header
// =============================================================

#[test]
fn not_sticky_below_threshold() {
    assert!(!is_sticky(99.0));
}

#[test]
fn not_sticky_exactly_at_threshold() {
    assert!(!is_sticky(100.0));
}

#[test]
fn sticky_past_threshold() {
    assert!(is_sticky(101.0));
}

// =============================================================
// Active section
// =============================================================

#[test]
fn first_section_active_before_second_comes_into_reach() {
    // Second section (top 800) activates at 650; below that the first wins.
    assert_eq!(active_section(600.0, &sections()), Some("home"));
}

#[test]
fn second_section_active_within_lookahead() {
    // 670 >= 800 - 150.
    assert_eq!(active_section(670.0, &sections()), Some("about"));
}

#[test]
fn last_section_wins_deep_in_the_page() {
    assert_eq!(active_section(1500.0, &sections()), Some("projects"));
}

#[test]
fn ties_break_to_latest_in_document_order() {
    let stacked = vec![("a".to_owned(), 400.0), ("b".to_owned(), 400.0)];
    assert_eq!(active_section(400.0, &stacked), Some("b"));
}

#[test]
fn none_active_before_any_section_is_reached() {
    let below_fold = vec![("a".to_owned(), 500.0)];
    assert_eq!(active_section(0.0, &below_fold), None);
}

#[test]
fn empty_section_list_yields_none() {
    let empty: Vec<(String, f64)> = Vec::new();
    assert_eq!(active_section(1000.0, &empty), None);
}

#[test]
fn top_of_page_activates_a_zero_offset_section() {
    assert_eq!(active_section(0.0, &sections()), Some("home"));
}

// =============================================================
// Derived ScrollState
// =============================================================

#[test]
fn recompute_combines_sticky_and_active() {
    let state = ScrollState::recompute(1500.0, &sections());
    assert!(state.sticky);
    assert_eq!(state.active.as_deref(), Some("projects"));
}

#[test]
fn recompute_at_top_is_default_plus_home() {
    let state = ScrollState::recompute(0.0, &sections());
    assert!(!state.sticky);
    assert_eq!(state.active.as_deref(), Some("home"));
}

// =============================================================
// Reveal stagger
// =============================================================

#[test]
fn stagger_delays_step_by_300ms() {
    assert_eq!(stagger_delay_ms(0), 0);
    assert_eq!(stagger_delay_ms(1), 300);
    assert_eq!(stagger_delay_ms(2), 600);
}
