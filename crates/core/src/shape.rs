//! Shape module - square bitmasks describing one piece orientation
//!
//! Shapes are stored inline (no heap allocation) up to
//! [`MAX_SHAPE_SIZE`](crate::types::MAX_SHAPE_SIZE) cells per side.

use arrayvec::ArrayVec;

use crate::types::MAX_SHAPE_CELLS;

/// An immutable `size x size` grid of occupied flags, row-major
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    size: usize,
    cells: ArrayVec<bool, MAX_SHAPE_CELLS>,
}

impl Shape {
    /// Build a shape from row-major cells
    ///
    /// Returns `None` if `cells.len() != size * size` or the shape is larger
    /// than the supported maximum.
    pub fn from_cells(size: usize, cells: &[bool]) -> Option<Self> {
        if cells.len() != size * size || cells.len() > MAX_SHAPE_CELLS {
            return None;
        }
        let mut buf = ArrayVec::new();
        buf.try_extend_from_slice(cells).ok()?;
        Some(Self { size, cells: buf })
    }

    /// Build a shape from text rows, `#` occupied and anything else empty
    ///
    /// ```
    /// use tui_blocks_core::Shape;
    ///
    /// let t = Shape::from_rows(&[".#.", "###", "..."]).unwrap();
    /// assert_eq!(t.size(), 3);
    /// assert!(t.get(1, 0));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let size = rows.len();
        let mut cells: ArrayVec<bool, MAX_SHAPE_CELLS> = ArrayVec::new();
        for row in rows {
            if row.chars().count() != size {
                return None;
            }
            for ch in row.chars() {
                cells.try_push(ch == '#').ok()?;
            }
        }
        Some(Self { size, cells })
    }

    /// Side length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the cell at column `x`, row `y` is occupied
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[y * self.size + x]
    }

    /// Iterate occupied cells as (column, row) offsets from the top-left
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell)
            .map(move |(i, _)| (i % size, i / size))
    }

    /// Number of occupied cells
    pub fn block_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Rotate 90° clockwise: `new[j][n-1-i] = old[i][j]` (row, column)
    pub fn rotated_cw(&self) -> Self {
        let n = self.size;
        let mut cells: ArrayVec<bool, MAX_SHAPE_CELLS> = ArrayVec::new();
        // Row r, column c of the result comes from row n-1-c, column r.
        for r in 0..n {
            for c in 0..n {
                cells.push(self.cells[(n - 1 - c) * n + r]);
            }
        }
        Self { size: n, cells }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_l_shape() {
        let l = Shape::from_rows(&["#..", "#..", "##."]).unwrap();
        let rotated = l.rotated_cw();
        assert_eq!(rotated, Shape::from_rows(&["###", "#..", "..."]).unwrap());
    }

    #[test]
    fn test_rotate_matches_index_formula() {
        let shape = Shape::from_rows(&["#.#.", "##..", "...#", ".#.."]).unwrap();
        let rotated = shape.rotated_cw();
        let n = shape.size();
        for i in 0..n {
            for j in 0..n {
                // new[j][n-1-i] = old[i][j], indices are [row][column]
                assert_eq!(rotated.get(n - 1 - i, j), shape.get(j, i));
            }
        }
    }

    #[test]
    fn test_occupied_offsets() {
        let s = Shape::from_rows(&[".#", "#."]).unwrap();
        let cells: Vec<_> = s.occupied().collect();
        assert_eq!(cells, vec![(1, 0), (0, 1)]);
        assert_eq!(s.block_count(), 2);
    }

    #[test]
    fn test_from_cells_rejects_bad_length() {
        assert!(Shape::from_cells(2, &[true, false, true]).is_none());
        assert!(Shape::from_cells(9, &[false; 81]).is_none());
        assert!(Shape::from_cells(2, &[true; 4]).is_some());
    }

    #[test]
    fn test_from_rows_rejects_non_square() {
        assert!(Shape::from_rows(&["##", "#"]).is_none());
        assert!(Shape::from_rows(&["###", "###"]).is_none());
    }
}
