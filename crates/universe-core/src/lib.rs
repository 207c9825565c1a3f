//! Core types shared by the universe crates.
//!
//! This crate holds the value types the starfield renderer and its host agree
//! on: the light/dark [`Theme`] signal, the two fixed star [`Palette`]s and
//! viewport [`Size`]s.

mod geometry;
mod palette;
mod theme;

pub use geometry::Size;
pub use palette::{DARK_PALETTE, LIGHT_PALETTE, Palette, StarColor, resolve_color};
pub use theme::{DARK_TOKEN, THEME_ATTRIBUTE, Theme};
