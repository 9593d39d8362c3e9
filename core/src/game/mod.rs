use serde::{Deserialize, Serialize};

use crate::*;
pub use fifteen::*;
pub use merge_slide::*;

mod fifteen;
mod merge_slide;

/// Inferred from the board on every query, never stored.
///
/// Valid transitions:
/// - Ready -> InProgress
/// - InProgress -> Won
/// - InProgress -> Stuck, merge-slide game only
///
/// The tile puzzle always keeps one hole, so it never reports `Stuck`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Board not initialized yet
    Ready,
    InProgress,
    /// Target tile reached, or tile puzzle solved
    Won,
    /// No empty cell left. Never reported by [`GameOfFifteen`].
    Stuck,
}

impl GameState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Stuck)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Ready
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    NoChange,
    Moved,
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Moved => true,
        }
    }
}

impl From<bool> for MoveOutcome {
    fn from(moved: bool) -> Self {
        if moved { Self::Moved } else { Self::NoChange }
    }
}

/// Either puzzle, picked when the game is created.
#[derive(Clone, Debug)]
pub enum AnyGame {
    MergeSlide(Game2048),
    Fifteen(GameOfFifteen),
}

impl AnyGame {
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        Ok(match config.kind {
            GameKind::MergeSlide => Self::MergeSlide(Game2048::with_target(
                config.width,
                config.target,
                RandomTileSpawner::new(config.seed),
            )?),
            GameKind::Fifteen => Self::Fifteen(GameOfFifteen::with_width(
                config.width,
                RandomPermutation::new(config.seed),
            )?),
        })
    }

    pub fn kind(&self) -> GameKind {
        match self {
            Self::MergeSlide(_) => GameKind::MergeSlide,
            Self::Fifteen(_) => GameKind::Fifteen,
        }
    }

    pub fn initialize(&mut self) -> Result<()> {
        match self {
            Self::MergeSlide(game) => {
                game.initialize();
                Ok(())
            }
            Self::Fifteen(game) => game.initialize(),
        }
    }

    pub fn can_move(&self) -> bool {
        match self {
            Self::MergeSlide(game) => game.can_move(),
            Self::Fifteen(game) => game.can_move(),
        }
    }

    pub fn has_won(&self) -> bool {
        match self {
            Self::MergeSlide(game) => game.has_won(),
            Self::Fifteen(game) => game.has_won(),
        }
    }

    pub fn process_move(&mut self, direction: Direction) -> MoveOutcome {
        match self {
            Self::MergeSlide(game) => game.process_move(direction),
            Self::Fifteen(game) => game.process_move(direction),
        }
    }

    pub fn get(&self, row: Coord, col: Coord) -> Result<Option<Tile>> {
        match self {
            Self::MergeSlide(game) => game.get(row, col),
            Self::Fifteen(game) => game.get(row, col),
        }
    }

    pub fn state(&self) -> GameState {
        match self {
            Self::MergeSlide(game) => game.state(),
            Self::Fifteen(game) => game.state(),
        }
    }

    pub fn board(&self) -> &GameBoard<Tile> {
        match self {
            Self::MergeSlide(game) => game.board(),
            Self::Fifteen(game) => game.board(),
        }
    }

    pub fn width(&self) -> Coord {
        self.board().width()
    }
}
