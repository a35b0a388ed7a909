#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Color theme of the site.
///
/// Persisted in localStorage under the `theme` key; the `<body>` element
/// carries a `light` class exactly when the in-memory value is `Light`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Parse a stored preference. Anything unrecognized falls back to dark.
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        match value {
            "light" => Self::Light,
            _ => Self::Dark,
        }
    }

    /// The value written back to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Particle and link color for this theme.
    #[must_use]
    pub fn particle_color(self) -> &'static str {
        match self {
            Self::Light => "#5a6861",
            Self::Dark => "#a4b2ac",
        }
    }

    /// Icon shown on the theme toggle control.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-sun",
            Self::Dark => "fas fa-moon",
        }
    }
}
