use alloc::vec::Vec;

use crate::*;
pub use random::*;
pub use scripted::*;

mod random;
mod scripted;

/// Supplies the tiles the merge-slide game adds on start and after every effective move.
pub trait TileSpawner {
    /// Cell and value to place next, `None` when the board has no room.
    fn next_value(&mut self, board: &GameBoard<Tile>) -> Option<(Cell, Tile)>;
}

/// Supplies the starting layout of the sliding-tile puzzle.
pub trait PermutationSource {
    /// An ordering of `1..=len`, loaded row-major ahead of the hole.
    fn initial_permutation(&mut self, len: usize) -> Vec<Tile>;
}

impl<S: TileSpawner + ?Sized> TileSpawner for &mut S {
    fn next_value(&mut self, board: &GameBoard<Tile>) -> Option<(Cell, Tile)> {
        (**self).next_value(board)
    }
}

impl<P: PermutationSource + ?Sized> PermutationSource for &mut P {
    fn initial_permutation(&mut self, len: usize) -> Vec<Tile> {
        (**self).initial_permutation(len)
    }
}
