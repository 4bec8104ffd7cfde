//! Field module - manages the playing grid
//!
//! The field is a `height x width` grid where each cell is either empty or
//! occupied by a settled block. Storage is a flat row-major buffer.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom
//! (row 0 is the top).

use crate::types::{FIELD_HEIGHT, FIELD_WIDTH};

/// The playing field - flat row-major storage of occupied flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    width: usize,
    height: usize,
    /// Row-major cells (y * width + x)
    cells: Vec<bool>,
}

impl Field {
    /// Create an empty field with the given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y * self.width + x
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if (x, y) lies inside the field
    pub fn is_in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    /// Get cell at (x, y)
    ///
    /// No bounds checking beyond the slice's own; callers validate with
    /// [`Field::is_in_bounds`] first.
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)]
    }

    /// Set cell at (x, y); same contract as [`Field::get`]
    pub fn set(&mut self, x: usize, y: usize, occupied: bool) {
        let idx = self.index(x, y);
        self.cells[idx] = occupied;
    }

    /// Check if (x, y) is inside the field and occupied
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.is_in_bounds(x, y) && self.get(x as usize, y as usize)
    }

    fn row(&self, y: usize) -> &[bool] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height {
            return false;
        }
        self.row(y).iter().all(|&cell| cell)
    }

    /// Remove row `y`, shifting every row above it down by one.
    /// The top row becomes empty.
    fn collapse_row(&mut self, y: usize) {
        let width = self.width;
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, row * width);
        }
        self.cells[..width].fill(false);
    }

    /// Clear all full rows and return how many were removed
    ///
    /// Rows are scanned bottom to top. After a full row collapses, the same
    /// index is examined again since the row above has moved into it.
    pub fn clear_full_rows(&mut self) -> usize {
        if self.width == 0 {
            return 0;
        }
        let mut cleared = 0;
        let mut y = self.height;
        while y > 0 {
            if self.is_row_full(y - 1) {
                self.collapse_row(y - 1);
                cleared += 1;
                // Recheck the same index.
                continue;
            }
            y -= 1;
        }
        cleared
    }

    /// Empty the whole field
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Get the flat cell buffer (row-major)
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Build a field from text rows, `#` occupied and anything else empty
    ///
    /// Handy for tests and benches:
    ///
    /// ```
    /// use tui_blocks_core::Field;
    ///
    /// let field = Field::from_rows(&["..", "#."]);
    /// assert!(field.get(0, 1));
    /// assert!(!field.get(1, 1));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        let mut field = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.chars().count(), width, "ragged row {}", y);
            for (x, ch) in row.chars().enumerate() {
                field.set(x, y, ch == '#');
            }
        }
        field
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new(FIELD_WIDTH, FIELD_HEIGHT)
    }
}
