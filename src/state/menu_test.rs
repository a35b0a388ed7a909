use super::*;

#[test]
fn menu_starts_closed() {
    assert!(!MenuState::default().open);
}

#[test]
fn toggle_opens_a_closed_menu() {
    let mut menu = MenuState::default();
    menu.toggle();
    assert!(menu.open);
}

#[test]
fn toggle_closes_an_open_menu() {
    let mut menu = MenuState { open: true };
    menu.toggle();
    assert!(!menu.open);
}

#[test]
fn nav_activation_closes_an_open_menu() {
    let mut menu = MenuState { open: true };
    menu.close_if_open();
    assert!(!menu.open);
}

#[test]
fn nav_activation_is_noop_when_closed() {
    let mut menu = MenuState::default();
    menu.close_if_open();
    assert_eq!(menu, MenuState::default());
}
