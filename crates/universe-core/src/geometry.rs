//! Viewport dimensions.

/// Width and height of a viewport or drawing surface, in device pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Device pixels covered by a terminal area drawn with Braille dots.
    ///
    /// Each cell is a 2x4 dot matrix.
    pub const fn from_cells(columns: u16, rows: u16) -> Self {
        Self {
            width: columns as u32 * 2,
            height: rows as u32 * 4,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
