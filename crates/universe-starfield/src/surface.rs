//! Drawing surfaces.

use ratatui::{
    style::Color,
    symbols::Marker,
    widgets::canvas::{Canvas, Circle, Context, Points},
};
use universe_core::{Size, StarColor};

/// A 2D drawing surface the starfield paints into.
///
/// Coordinates are device pixels with the origin in the top-left corner and
/// `y` growing downward.
pub trait Surface: Default {
    fn size(&self) -> Size;

    /// Change the pixel dimensions of the surface.
    fn resize(&mut self, size: Size);

    /// Erase everything drawn so far.
    fn clear(&mut self);

    /// Fill a circle centred at `(x, y)`.
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: StarColor);
}

/// One filled circle recorded by a [`CanvasSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: StarColor,
}

/// Surface backed by a ratatui [`Canvas`] drawn with Braille dots.
///
/// Every terminal cell covers 2x4 device pixels, see [`Size::from_cells`].
#[derive(Debug, Default, Clone)]
pub struct CanvasSurface {
    size: Size,
    dots: Vec<Dot>,
}

impl CanvasSurface {
    /// Dots painted since the last clear.
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    /// Canvas widget showing the current frame over `background`.
    pub fn canvas(&self, background: Color) -> Canvas<'_, impl Fn(&mut Context) + '_> {
        let width = self.size.width as f64;
        let height = self.size.height as f64;

        Canvas::default()
            .marker(Marker::Braille)
            .background_color(background)
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(move |ctx| {
                for dot in &self.dots {
                    // Canvas y grows upward
                    let y = height - dot.y;
                    let color = Color::from(dot.color);
                    if dot.radius >= 1.0 {
                        ctx.draw(&Circle {
                            x: dot.x,
                            y,
                            radius: dot.radius,
                            color,
                        });
                    } else {
                        ctx.draw(&Points {
                            coords: &[(dot.x, y)],
                            color,
                        });
                    }
                }
            })
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
    }

    fn clear(&mut self) {
        self.dots.clear();
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: StarColor) {
        self.dots.push(Dot {
            x,
            y,
            radius,
            color,
        });
    }
}
