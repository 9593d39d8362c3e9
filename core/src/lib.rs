//! Square-grid puzzle engine: a 1-indexed [`SquareGrid`], an optional value per cell
//! ([`GameBoard`]), the slide-and-merge line collapse shared by the puzzles, and two games on
//! top of it, the 2048 merge-slide game ([`Game2048`]) and the sliding-tile puzzle
//! ([`GameOfFifteen`]).
#![no_std]

extern crate alloc;

pub use board::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use generator::*;
pub use grid::*;
pub use merge::*;
pub use parity::*;
pub use types::*;

mod board;
mod config;
mod error;
mod game;
mod generator;
mod grid;
mod merge;
mod parity;
mod types;
