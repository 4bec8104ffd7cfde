//! Collision and placement rules
//!
//! Pure functions over a [`Field`] and a [`Figure`]. Every check is safe for
//! any anchor, including anchors that put part of the figure outside the
//! field.
//!
//! Moves follow a try/check/revert pattern: a candidate figure is built,
//! validated, and only then written back, so an illegal state is never
//! observable (or rendered).

use crate::field::Field;
use crate::figure::Figure;

/// No occupied figure cell overlaps an occupied field cell.
///
/// Cells outside the field are ignored here; see [`is_within_bounds`].
pub fn fits(field: &Field, figure: &Figure) -> bool {
    figure.cells().all(|(x, y)| !field.is_occupied(x, y))
}

/// Every occupied figure cell lies inside the field.
pub fn is_within_bounds(field: &Field, figure: &Figure) -> bool {
    figure.cells().all(|(x, y)| field.is_in_bounds(x, y))
}

/// The figure cannot descend any further: some occupied cell has the floor
/// or a settled block directly below it.
pub fn is_attached(field: &Field, figure: &Figure) -> bool {
    let height = field.height() as i32;
    figure
        .cells()
        .any(|(x, y)| y + 1 >= height || field.is_occupied(x, y + 1))
}

/// The figure may occupy its current position.
pub fn can_place(field: &Field, figure: &Figure) -> bool {
    is_within_bounds(field, figure) && fits(field, figure)
}

/// Move the figure horizontally by `dx` if the result can be placed.
/// Returns whether the move happened.
pub fn try_shift(field: &Field, figure: &mut Figure, dx: i32) -> bool {
    figure.x += dx;
    if can_place(field, figure) {
        return true;
    }
    figure.x -= dx;
    false
}

/// Move the figure one row down unless it is resting on something.
pub fn try_drop(field: &Field, figure: &mut Figure) -> bool {
    if is_attached(field, figure) {
        return false;
    }
    figure.y += 1;
    true
}

/// Rotate the figure clockwise in place if the rotated shape can be placed
/// at the same anchor. On rejection the figure is left untouched.
///
/// Stricter than the classic console rule, which rejected a rotation only
/// when the result was out of bounds and not attached. That rule let a
/// rotation overlap settled blocks, or stick out of the field while resting.
/// Here both are rejected through [`can_place`].
pub fn try_rotate(field: &Field, figure: &mut Figure) -> bool {
    let rotated = figure.rotated();
    if !can_place(field, &rotated) {
        return false;
    }
    *figure = rotated;
    true
}

/// Merge the figure's cells into the field.
///
/// Nothing is written unless [`can_place`] holds; returns whether the merge
/// happened.
pub fn attach(field: &mut Field, figure: &Figure) -> bool {
    if !can_place(field, figure) {
        return false;
    }
    for (x, y) in figure.cells() {
        field.set(x as usize, y as usize, true);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Shape;

    fn square() -> Shape {
        Shape::from_rows(&["##", "##"]).unwrap()
    }

    #[test]
    fn test_fits_ignores_out_of_bounds() {
        let field = Field::new(4, 4);
        let fig = Figure::new(square(), -1, -1);
        assert!(fits(&field, &fig));
        assert!(!is_within_bounds(&field, &fig));
    }

    #[test]
    fn test_fits_detects_overlap() {
        let field = Field::from_rows(&["....", "..#.", "....", "...."]);
        assert!(!fits(&field, &Figure::new(square(), 1, 0)));
        assert!(fits(&field, &Figure::new(square(), 0, 0)));
    }

    #[test]
    fn test_attached_on_floor_and_blocks() {
        let field = Field::from_rows(&["....", "....", "....", "#..."]);
        assert!(is_attached(&field, &Figure::new(square(), 2, 2)));
        assert!(is_attached(&field, &Figure::new(square(), 0, 1)));
        assert!(!is_attached(&field, &Figure::new(square(), 1, 0)));
    }

    #[test]
    fn test_empty_rows_of_shape_do_not_rest() {
        // Bottom row of the shape is empty, so the figure can hang one row
        // lower than its size suggests.
        let bar = Shape::from_rows(&["##", ".."]).unwrap();
        let field = Field::new(2, 3);
        let mut fig = Figure::new(bar, 0, 1);
        assert!(try_drop(&field, &mut fig));
        assert_eq!(fig.y, 2);
        assert!(!try_drop(&field, &mut fig));
    }

    #[test]
    fn test_rotation_rejected_out_of_bounds() {
        let bar = Shape::from_rows(&[".#..", ".#..", ".#..", ".#.."]).unwrap();
        let field = Field::new(6, 6);
        // Vertical bar near the left wall; the horizontal result still fits.
        let mut fig = Figure::new(bar.clone(), 0, 0);
        assert!(try_rotate(&field, &mut fig));

        // At the right wall, the horizontal result would stick out.
        let mut fig = Figure::new(bar, 4, 0);
        let before = fig.clone();
        assert!(!try_rotate(&field, &mut fig));
        assert_eq!(fig, before);
    }

    #[test]
    fn test_attach_is_all_or_nothing() {
        let mut field = Field::from_rows(&["...", ".#.", "..."]);
        let snapshot = field.clone();
        assert!(!attach(&mut field, &Figure::new(square(), 0, 0)));
        assert_eq!(field, snapshot);
        assert!(!attach(&mut field, &Figure::new(square(), 2, 1)));
        assert_eq!(field, snapshot);

        let column = Shape::from_rows(&["#.", "#."]).unwrap();
        assert!(attach(&mut field, &Figure::new(column, 0, 1)));
        assert_eq!(field, Field::from_rows(&["...", "##.", "#.."]));
    }
}
