use rand::prelude::*;

use super::*;

/// Tile used for nine spawns out of ten.
pub const COMMON_SPAWN: Tile = 2;
/// Tile used for the remaining spawn.
pub const RARE_SPAWN: Tile = 4;

/// Places a 2 (90%) or a 4 (10%) on an empty cell picked uniformly at random.
#[derive(Clone, Debug)]
pub struct RandomTileSpawner {
    rng: SmallRng,
}

impl RandomTileSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    fn random_start_value(&mut self) -> Tile {
        if self.rng.random_range(0..10) == 9 {
            RARE_SPAWN
        } else {
            COMMON_SPAWN
        }
    }
}

impl TileSpawner for RandomTileSpawner {
    fn next_value(&mut self, board: &GameBoard<Tile>) -> Option<(Cell, Tile)> {
        let empty = board.empty_cells();
        if empty.is_empty() {
            return None;
        }

        let cell = empty[self.rng.random_range(0..empty.len())];
        Some((cell, self.random_start_value()))
    }
}

/// Uniformly shuffled starting layout, forced to even parity so the goal stays reachable.
#[derive(Clone, Debug)]
pub struct RandomPermutation {
    rng: SmallRng,
}

impl RandomPermutation {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl PermutationSource for RandomPermutation {
    fn initial_permutation(&mut self, len: usize) -> Vec<Tile> {
        let mut permutation: Vec<Tile> = (1..).take(len).collect();
        permutation.shuffle(&mut self.rng);

        if ensure_even_permutation(&mut permutation) {
            log::debug!("Shuffled permutation was odd, swapped one inversion");
        }
        permutation
    }
}
