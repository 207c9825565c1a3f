//! Light/dark theme signal.

use ratatui::style::Color;

/// Root attribute carrying the page theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Attribute value that selects the dark theme. Anything else is light.
pub const DARK_TOKEN: &str = "dark";

/// Theme of the page the starfield is drawn on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Derive the theme from the raw attribute value.
    ///
    /// Only an exact match against [`DARK_TOKEN`] selects [`Theme::Dark`];
    /// a missing attribute or any other value falls back to [`Theme::Light`].
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some(DARK_TOKEN) => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// Attribute value written to the page root for this theme.
    pub fn as_attribute(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => DARK_TOKEN,
        }
    }

    /// Toggle between light and dark.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Background colour painted behind the stars.
    pub fn background(self) -> Color {
        match self {
            Theme::Light => Color::Rgb(248, 249, 250),
            Theme::Dark => Color::Rgb(13, 17, 23),
        }
    }

    /// Foreground colour for text drawn over the background.
    pub fn foreground(self) -> Color {
        match self {
            Theme::Light => Color::Rgb(33, 37, 41),
            Theme::Dark => Color::Rgb(222, 226, 230),
        }
    }
}
