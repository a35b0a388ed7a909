use super::*;

// =============================================================
// Defaults and parsing
// =============================================================

#[test]
fn default_theme_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn from_stored_parses_light() {
    assert_eq!(Theme::from_stored("light"), Theme::Light);
}

#[test]
fn from_stored_parses_dark() {
    assert_eq!(Theme::from_stored("dark"), Theme::Dark);
}

#[test]
fn from_stored_unknown_falls_back_to_dark() {
    assert_eq!(Theme::from_stored(""), Theme::Dark);
    assert_eq!(Theme::from_stored("solarized"), Theme::Dark);
}

#[test]
fn as_str_round_trips() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_stored(theme.as_str()), theme);
    }
}

// =============================================================
// Toggling
// =============================================================

#[test]
fn toggle_flips_dark_to_light() {
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn toggle_twice_returns_to_start() {
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
}

// =============================================================
// Derived presentation values
// =============================================================

#[test]
fn particle_colors_differ_per_theme() {
    assert_eq!(Theme::Light.particle_color(), "#5a6861");
    assert_eq!(Theme::Dark.particle_color(), "#a4b2ac");
}

#[test]
fn icon_class_matches_theme() {
    assert_eq!(Theme::Light.icon_class(), "fas fa-sun");
    assert_eq!(Theme::Dark.icon_class(), "fas fa-moon");
}
