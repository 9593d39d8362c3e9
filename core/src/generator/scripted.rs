use alloc::collections::VecDeque;

use super::*;

/// Replays a fixed queue of spawns, then stops spawning.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScriptedTileSpawner {
    queue: VecDeque<(Cell, Tile)>,
}

impl ScriptedTileSpawner {
    pub fn new(spawns: impl IntoIterator<Item = (Cell, Tile)>) -> Self {
        Self {
            queue: spawns.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl TileSpawner for ScriptedTileSpawner {
    fn next_value(&mut self, board: &GameBoard<Tile>) -> Option<(Cell, Tile)> {
        let (cell, value) = self.queue.pop_front()?;
        if board.get(cell).is_some() {
            log::warn!("Scripted spawn at {cell:?} lands on an occupied cell, skipped");
            return None;
        }
        Some((cell, value))
    }
}

/// Always hands out the same starting layout.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedPermutation {
    permutation: Vec<Tile>,
}

impl FixedPermutation {
    pub fn new(permutation: Vec<Tile>) -> Self {
        Self { permutation }
    }

    /// The solved layout `1..=len`.
    pub fn sorted(len: usize) -> Self {
        Self::new((1..).take(len).collect())
    }
}

impl PermutationSource for FixedPermutation {
    fn initial_permutation(&mut self, len: usize) -> Vec<Tile> {
        if self.permutation.len() != len {
            log::warn!(
                "Fixed permutation has {} values, board expects {}",
                self.permutation.len(),
                len
            );
        }
        self.permutation.clone()
    }
}
