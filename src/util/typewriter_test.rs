use super::*;

fn core() -> TypewriterCore {
    TypewriterCore::new(["ab", "xyz"])
}

// =============================================================
// Typing
// =============================================================

#[test]
fn starts_empty() {
    assert_eq!(core().current(), "");
}

#[test]
fn first_tick_is_scheduled_at_type_speed() {
    assert_eq!(core().initial_delay_ms(), TYPE_SPEED_MS);
}

#[test]
fn types_one_character_per_tick() {
    let mut tw = core();
    assert_eq!(tw.advance(), TYPE_SPEED_MS);
    assert_eq!(tw.current(), "a");
}

#[test]
fn holds_after_final_character() {
    let mut tw = core();
    tw.advance();
    let delay = tw.advance();
    assert_eq!(tw.current(), "ab");
    assert_eq!(delay, HOLD_MS);
}

// =============================================================
// Deleting and looping
// =============================================================

#[test]
fn deletes_at_back_speed_after_hold() {
    let mut tw = core();
    tw.advance(); // "a"
    tw.advance(); // "ab", hold
    assert_eq!(tw.advance(), BACK_SPEED_MS); // hold elapses
    assert_eq!(tw.current(), "ab");
    assert_eq!(tw.advance(), BACK_SPEED_MS); // "a"
    assert_eq!(tw.current(), "a");
}

#[test]
fn moves_to_next_word_after_deleting() {
    let mut tw = core();
    // Type "ab", hold, delete back to empty.
    for _ in 0..4 {
        tw.advance();
    }
    let delay = tw.advance();
    assert_eq!(tw.current(), "");
    assert_eq!(delay, TYPE_SPEED_MS);
    tw.advance();
    assert_eq!(tw.current(), "x");
}

#[test]
fn wraps_around_after_the_last_word() {
    let mut tw = core();
    // "ab": 2 type + 1 hold-release + 2 delete = 5 ticks.
    // "xyz": 3 type + 1 hold-release + 3 delete = 7 ticks.
    for _ in 0..12 {
        tw.advance();
    }
    tw.advance();
    assert_eq!(tw.current(), "a");
}

// =============================================================
// Edge cases
// =============================================================

#[test]
fn single_character_word_holds_immediately() {
    let mut tw = TypewriterCore::new(["z"]);
    assert_eq!(tw.advance(), HOLD_MS);
    assert_eq!(tw.current(), "z");
}

#[test]
fn single_word_list_loops_onto_itself() {
    let mut tw = TypewriterCore::new(["ok"]);
    for _ in 0..5 {
        tw.advance();
    }
    assert_eq!(tw.current(), "");
    tw.advance();
    assert_eq!(tw.current(), "o");
}

#[test]
fn empty_string_list_stays_blank() {
    let mut tw = TypewriterCore::new(Vec::<String>::new());
    assert_eq!(tw.current(), "");
    assert_eq!(tw.advance(), HOLD_MS);
    assert_eq!(tw.current(), "");
}

#[test]
fn multibyte_words_are_sliced_on_char_boundaries() {
    let mut tw = TypewriterCore::new(["héllo"]);
    tw.advance();
    tw.advance();
    assert_eq!(tw.current(), "hé");
}
