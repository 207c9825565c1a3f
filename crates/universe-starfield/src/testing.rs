//! Test doubles.

use universe_core::{Size, StarColor};

use crate::surface::{Dot, Surface};

/// Surface that records every call for inspection.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub size: Size,
    pub resizes: Vec<Size>,
    pub clears: usize,
    pub circles: Vec<Dot>,
}

impl Surface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
        self.resizes.push(size);
    }

    fn clear(&mut self) {
        self.clears += 1;
        self.circles.clear();
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: StarColor) {
        self.circles.push(Dot {
            x,
            y,
            radius,
            color,
        });
    }
}
