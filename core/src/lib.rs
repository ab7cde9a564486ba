#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod types;

/// Session configuration read once at game start: board size and the
/// independent chance that any given cell starts lit.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub size: Coord2,
    pub light_chance: f64,
}

impl BoardConfig {
    pub const DEFAULT_SIZE: Coord2 = (5, 5);
    pub const DEFAULT_LIGHT_CHANCE: f64 = 0.25;

    pub const fn new_unchecked(size: Coord2, light_chance: f64) -> Self {
        Self { size, light_chance }
    }

    /// Validated constructor: non-positive dimensions are rejected, while an
    /// out-of-domain `light_chance` is clamped into `[0.0, 1.0]` (NaN counts
    /// as 0.0) with a warning.
    pub fn new((rows, cols): Coord2, light_chance: f64) -> Result<Self> {
        if rows < 1 || cols < 1 {
            return Err(GameError::InvalidDimensions);
        }

        let light_chance = if light_chance.is_nan() {
            log::warn!("Light chance is NaN, treating as 0.0");
            0.0
        } else if !(0.0..=1.0).contains(&light_chance) {
            log::warn!("Light chance {} outside [0, 1], clamping", light_chance);
            light_chance.clamp(0.0, 1.0)
        } else {
            light_chance
        };

        Ok(Self::new_unchecked((rows, cols), light_chance))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new_unchecked(Self::DEFAULT_SIZE, Self::DEFAULT_LIGHT_CHANCE)
    }
}

/// One full grid of lit/unlit cells at a point in time.
///
/// A `Board` is an immutable value: [`Board::toggle`] returns a fresh board
/// and leaves the receiver untouched, so a render layer may keep the previous
/// board around while deciding what to redraw.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    lit: Array2<bool>,
}

impl Board {
    pub fn from_lit_mask(lit: Array2<bool>) -> Self {
        Self { lit }
    }

    pub fn from_lit_coords(size: Coord2, lit_coords: &[Coord2]) -> Result<Self> {
        if size.0 < 1 || size.1 < 1 {
            return Err(GameError::InvalidDimensions);
        }

        let mut lit: Array2<bool> = Array2::default(size.to_nd_index());
        for &coords in lit_coords {
            if !in_bounds(coords, size) {
                return Err(GameError::InvalidCoords);
            }
            lit[coords.to_nd_index()] = true;
        }

        Ok(Self::from_lit_mask(lit))
    }

    /// All-off board of the given size.
    pub fn unlit(size: Coord2) -> Result<Self> {
        Self::from_lit_coords(size, &[])
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.lit.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        self.lit.len().try_into().unwrap()
    }

    pub fn lit_count(&self) -> CellCount {
        self.lit
            .iter()
            .filter(|&&is_lit| is_lit)
            .count()
            .try_into()
            .unwrap()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if in_bounds(coords, self.size()) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn is_lit(&self, coords: Coord2) -> Result<bool> {
        Ok(self[self.validate_coords(coords)?])
    }

    /// Presses a cell: flips the target and its four orthogonal neighbors,
    /// skipping any of the five candidates that fall off the board. The
    /// target itself may lie anywhere, even far outside the grid, in which
    /// case the result equals the input board.
    pub fn toggle(&self, center: Coord2) -> Self {
        let mut lit = self.lit.clone();
        for coords in self.lit.iter_cross(center) {
            let cell = &mut lit[coords.to_nd_index()];
            *cell = !*cell;
        }
        Self { lit }
    }

    /// Win condition: every cell is off.
    pub fn is_cleared(&self) -> bool {
        self.lit.iter().all(|&is_lit| !is_lit)
    }

    pub(crate) fn iter_cross_cells(&self, center: Coord2) -> CrossIter {
        self.lit.iter_cross(center)
    }
}

impl Index<Coord2> for Board {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.lit[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ToggleOutcome {
    NoChange,
    Toggled,
    Won,
}

impl ToggleOutcome {
    pub const fn has_update(self) -> bool {
        use ToggleOutcome::*;
        match self {
            NoChange => false,
            Toggled => true,
            Won => true,
        }
    }
}
