use thiserror::Error;

use crate::Coord;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board does not have any cell with coordinates ({row}, {col})")]
    InvalidCoordinate { row: Coord, col: Coord },
    #[error("Board width must be between 1 and {max}", max = crate::MAX_WIDTH)]
    InvalidWidth,
    #[error("Initial values are not a permutation of 1..={expected_len}")]
    InvalidPermutation { expected_len: usize },
    #[error("Board values do not match declared width")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;
