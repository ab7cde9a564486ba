use ndarray::Array2;

use super::*;

/// Lights each cell independently with probability `light_chance`, drawing
/// from a seeded RNG so the same seed always produces the same board.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: BoardConfig) -> Board {
        use rand::prelude::*;

        let shape = config.size.to_nd_index();

        // optimize for the degenerate chances; this also pins the extremes
        // exactly, no float draw involved
        if config.light_chance <= 0.0 || config.light_chance.is_nan() {
            return Board::from_lit_mask(Array2::default(shape));
        }
        if config.light_chance >= 1.0 {
            return Board::from_lit_mask(Array2::from_elem(shape, true));
        }

        // row-major fill, one uniform draw in [0, 1) per cell
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let lit = Array2::from_shape_simple_fn(shape, || {
            rng.random::<f64>() < config.light_chance
        });
        Board::from_lit_mask(lit)
    }
}
