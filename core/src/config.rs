use serde::{Deserialize, Serialize};

use crate::*;

/// Smallest board either game is configured with.
pub const MIN_WIDTH: Coord = 2;

pub const DEFAULT_WIDTH: Coord = 4;

pub const DEFAULT_TARGET: Tile = 2048;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameKind {
    MergeSlide,
    Fifteen,
}

impl Default for GameKind {
    fn default() -> Self {
        Self::MergeSlide
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub kind: GameKind,
    pub width: Coord,
    /// Tile that wins the merge-slide game, ignored by the tile puzzle.
    pub target: Tile,
    pub seed: u64,
}

impl GameConfig {
    pub const fn new_unchecked(kind: GameKind, width: Coord, target: Tile, seed: u64) -> Self {
        Self {
            kind,
            width,
            target,
            seed,
        }
    }

    pub fn new(kind: GameKind, width: Coord, target: Tile, seed: u64) -> Self {
        let width = width.clamp(MIN_WIDTH, MAX_WIDTH);
        let target = target.max(4);
        Self::new_unchecked(kind, width, target, seed)
    }

    pub const fn merge_slide(seed: u64) -> Self {
        Self::new_unchecked(GameKind::MergeSlide, DEFAULT_WIDTH, DEFAULT_TARGET, seed)
    }

    pub const fn fifteen(seed: u64) -> Self {
        Self::new_unchecked(GameKind::Fifteen, DEFAULT_WIDTH, DEFAULT_TARGET, seed)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.width)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::merge_slide(0)
    }
}
