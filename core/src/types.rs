use alloc::format;
use alloc::string::String;
use ndarray::Array2;

use crate::{GameError, Result};

/// Single coordinate axis used for board height, width, and press targets.
///
/// Signed on purpose: press targets arrive straight from the presentation
/// layer and may point anywhere, including off the board.
pub type Coord = i16;

/// Count type used for lit-cell counts and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [
            self.0.try_into().expect("coords must be validated"),
            self.1.try_into().expect("coords must be validated"),
        ]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = if a < 0 { 0 } else { a as CellCount };
    let b = if b < 0 { 0 } else { b as CellCount };
    a.saturating_mul(b)
}

pub(crate) const fn in_bounds(coords: Coord2, bounds: Coord2) -> bool {
    0 <= coords.0 && coords.0 < bounds.0 && 0 <= coords.1 && coords.1 < bounds.1
}

pub trait CrossIterExt {
    fn iter_cross(&self, center: Coord2) -> CrossIter;
}

impl<T> CrossIterExt for Array2<T> {
    fn iter_cross(&self, center: Coord2) -> CrossIter {
        let dim = self.dim();
        let bounds = (dim.0.try_into().unwrap(), dim.1.try_into().unwrap());
        CrossIter::new(center, bounds)
    }
}

const CROSS_DISPLACEMENTS: [(Coord, Coord); 5] = [
    (0, 0),
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (Coord, Coord), bounds: Coord2) -> Option<Coord2> {
    let next_row = coords.0.checked_add(delta.0)?;
    let next_col = coords.1.checked_add(delta.1)?;

    let next = (next_row, next_col);
    in_bounds(next, bounds).then_some(next)
}

/// Iterator over the in-bounds subset of the plus-shaped press neighborhood:
/// the center cell and its four orthogonal neighbors. Out-of-bounds candidates
/// are skipped silently, so the center itself may lie anywhere.
#[derive(Debug)]
pub struct CrossIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl CrossIter {
    fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for CrossIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= CROSS_DISPLACEMENTS.len() {
                return None;
            }

            let next_item = apply_delta(
                self.center,
                CROSS_DISPLACEMENTS[self.index as usize],
                self.bounds,
            );
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

/// Formats a cell position as the composite `"row-col"` key used by render
/// layers that need one stable string id per cell.
pub fn coord_key(coords: Coord2) -> String {
    format!("{}-{}", coords.0, coords.1)
}

/// Parses a `"row-col"` key back into coordinates. Keys only ever name cells
/// that were rendered, so both components must be non-negative integers.
pub fn parse_coord_key(key: &str) -> Result<Coord2> {
    let (row, col) = key.split_once('-').ok_or(GameError::InvalidCoordKey)?;
    let row = row.parse().map_err(|_| GameError::InvalidCoordKey)?;
    let col = col.parse().map_err(|_| GameError::InvalidCoordKey)?;
    if row < 0 || col < 0 {
        return Err(GameError::InvalidCoordKey);
    }
    Ok((row, col))
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn cross_of(size: Coord2, center: Coord2) -> Vec<Coord2> {
        let grid: Array2<bool> = Array2::default(size.to_nd_index());
        grid.iter_cross(center).collect()
    }

    #[test]
    fn interior_center_yields_all_five_cells() {
        let cells = cross_of((3, 3), (1, 1));
        assert_eq!(cells, [(1, 1), (0, 1), (2, 1), (1, 0), (1, 2)]);
    }

    #[test]
    fn corner_center_yields_three_cells() {
        let cells = cross_of((3, 3), (0, 0));
        assert_eq!(cells, [(0, 0), (1, 0), (0, 1)]);
    }

    #[test]
    fn edge_center_yields_four_cells() {
        let cells = cross_of((3, 3), (0, 1));
        assert_eq!(cells, [(0, 1), (1, 1), (0, 0), (0, 2)]);
    }

    #[test]
    fn far_out_of_bounds_center_yields_nothing() {
        assert!(cross_of((3, 3), (-100, 1)).is_empty());
        assert!(cross_of((3, 3), (1, 57)).is_empty());
        assert!(cross_of((3, 3), (Coord::MIN, Coord::MIN)).is_empty());
    }

    #[test]
    fn just_off_board_center_still_reaches_its_neighbor() {
        assert_eq!(cross_of((3, 3), (-1, 1)), [(0, 1)]);
        assert_eq!(cross_of((3, 3), (1, 3)), [(1, 2)]);
    }

    #[test]
    fn coord_key_roundtrip() {
        assert_eq!(coord_key((2, 7)), "2-7");
        assert_eq!(parse_coord_key("2-7"), Ok((2, 7)));
        assert_eq!(parse_coord_key("0-0"), Ok((0, 0)));
    }

    #[test]
    fn malformed_coord_keys_are_rejected() {
        for key in ["", "12", "a-2", "1-b", "1-2-3", "-1-2"] {
            assert_eq!(parse_coord_key(key), Err(GameError::InvalidCoordKey), "{key}");
        }
    }
}
