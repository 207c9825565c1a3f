//! Star colour palettes.

use rand::Rng;
use ratatui::style::Color;

use crate::theme::Theme;

/// An sRGB star colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StarColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl StarColor {
    /// Build a colour from a packed `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }
}

impl From<StarColor> for Color {
    fn from(c: StarColor) -> Self {
        Color::Rgb(c.r, c.g, c.b)
    }
}

impl std::fmt::Display for StarColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A fixed set of four star colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette([StarColor; 4]);

impl Palette {
    pub const fn new(colors: [StarColor; 4]) -> Self {
        Self(colors)
    }

    /// Palette used for the given theme.
    pub fn for_theme(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Dark => &DARK_PALETTE,
            Theme::Light => &LIGHT_PALETTE,
        }
    }

    pub fn colors(&self) -> &[StarColor; 4] {
        &self.0
    }

    pub fn contains(&self, color: StarColor) -> bool {
        self.0.contains(&color)
    }

    /// Pick one entry uniformly at random.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> StarColor {
        self.0[rng.random_range(0..self.0.len())]
    }
}

/// Bright stars for a dark background.
pub const DARK_PALETTE: Palette = Palette::new([
    StarColor::from_hex(0xffffff),
    StarColor::from_hex(0xf8f9fa),
    StarColor::from_hex(0xe9ecef),
    StarColor::from_hex(0xdee2e6),
]);

/// Muted stars for a light background.
pub const LIGHT_PALETTE: Palette = Palette::new([
    StarColor::from_hex(0x495057),
    StarColor::from_hex(0x6c757d),
    StarColor::from_hex(0xadb5bd),
    StarColor::from_hex(0xced4da),
]);

/// Resolve a star colour for the current theme.
pub fn resolve_color<R: Rng + ?Sized>(theme: Theme, rng: &mut R) -> StarColor {
    Palette::for_theme(theme).pick(rng)
}
