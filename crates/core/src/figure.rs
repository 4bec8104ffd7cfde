//! Figure module - the active falling piece

use crate::shape::Shape;

/// Active falling piece: a shape anchored at its top-left cell
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Figure {
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
}

impl Figure {
    pub fn new(shape: Shape, x: i32, y: i32) -> Self {
        Self { shape, x, y }
    }

    /// Create a figure horizontally centered in a field of `width` columns
    pub fn centered(shape: Shape, width: usize) -> Self {
        let x = (width as i32 - shape.size() as i32) / 2;
        Self::new(shape, x, 0)
    }

    /// Iterate occupied cells in field coordinates
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .occupied()
            .map(move |(dx, dy)| (self.x + dx as i32, self.y + dy as i32))
    }

    /// Same figure moved by (dx, dy)
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            shape: self.shape.clone(),
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Same anchor with the shape rotated clockwise
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated_cw(),
            x: self.x,
            y: self.y,
        }
    }
}
