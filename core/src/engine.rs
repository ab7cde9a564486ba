use serde::{Deserialize, Serialize};

use crate::*;

/// Observable game phase, recomputed from the grid on every query. There is
/// no loss condition and no move limit, so "won" is the only terminal phase.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    Won,
}

impl GameState {
    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }
}

/// Owns the current [`Board`] and runs the Lights Out rules over it.
///
/// Each accepted press swaps in a fresh board value produced by the pure
/// [`Board::toggle`], so callers holding a clone of an earlier board keep an
/// unchanged snapshot. The engine never refuses a press: it stays a total
/// function even when the board is already cleared, and leaves "stop playing
/// once won" to its consumer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameEngine {
    board: Board,
}

impl GameEngine {
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn lit_count(&self) -> CellCount {
        self.board.lit_count()
    }

    pub fn is_lit(&self, coords: Coord2) -> Result<bool> {
        self.board.is_lit(coords)
    }

    pub fn state(&self) -> GameState {
        if self.board.is_cleared() {
            GameState::Won
        } else {
            GameState::Playing
        }
    }

    pub fn has_won(&self) -> bool {
        self.state().is_won()
    }

    /// Applies one press at `coords`. A press whose whole plus-shaped
    /// neighborhood lies off the board changes nothing and reports
    /// [`ToggleOutcome::NoChange`]; otherwise the board is replaced and the
    /// outcome says whether the press cleared it.
    pub fn press(&mut self, coords: Coord2) -> ToggleOutcome {
        use ToggleOutcome::*;

        if self.board.iter_cross_cells(coords).next().is_none() {
            return NoChange;
        }

        self.board = self.board.toggle(coords);
        if self.board.is_cleared() { Won } else { Toggled }
    }
}
