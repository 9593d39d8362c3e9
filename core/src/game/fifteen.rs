use alloc::vec::Vec;

use crate::*;

/// Sliding-tile puzzle: `width² - 1` numbered tiles and a single hole.
#[derive(Clone, Debug)]
pub struct GameOfFifteen<P = RandomPermutation> {
    board: GameBoard<Tile>,
    source: P,
    moves: u32,
}

impl<P: PermutationSource> GameOfFifteen<P> {
    /// Classic 4x4 puzzle with tiles 1..=15.
    pub fn new(source: P) -> Self {
        Self::from_board(
            GameBoard::new(DEFAULT_WIDTH).expect("default width is valid"),
            source,
        )
    }

    pub fn with_width(width: Coord, source: P) -> Result<Self> {
        Ok(Self::from_board(GameBoard::new(width)?, source))
    }

    fn from_board(board: GameBoard<Tile>, source: P) -> Self {
        Self {
            board,
            source,
            moves: 0,
        }
    }

    pub fn board(&self) -> &GameBoard<Tile> {
        &self.board
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Number of tiles on the board, the hole excluded.
    pub fn tile_count(&self) -> usize {
        usize::from(self.board.grid().len()) - 1
    }

    /// Loads the source permutation row-major into all cells but the last.
    pub fn initialize(&mut self) -> Result<()> {
        let len = self.tile_count();
        let permutation = self.source.initial_permutation(len);
        validate_permutation(&permutation, len)?;
        if !is_even(&permutation) {
            log::warn!("Starting permutation is odd, the puzzle cannot be solved");
        }

        let cells = self.board.grid().all_cells().to_vec();
        let mut values = permutation.into_iter();
        for cell in cells {
            self.board.set(cell, values.next());
        }
        self.moves = 0;
        log::debug!("Initialized {0}x{0} sliding-tile board", self.board.width());
        Ok(())
    }

    pub fn can_move(&self) -> bool {
        self.board.any(|value| value.is_none())
    }

    /// Tiles read row-major count up from 1 and the hole is the last cell.
    pub fn has_won(&self) -> bool {
        let mut values = self.board.values_row_major();
        let tiles_in_order = values
            .by_ref()
            .take(self.tile_count())
            .zip(1..)
            .all(|(value, expected)| value == Some(&expected));
        tiles_in_order && values.next() == Some(None)
    }

    pub fn state(&self) -> GameState {
        if self.board.all(|value| value.is_none()) {
            GameState::Ready
        } else if self.has_won() {
            GameState::Won
        } else {
            GameState::InProgress
        }
    }

    /// Slides the tile next to the hole into it, so the hole travels against `direction`.
    ///
    /// A tile can only slide into the hole from the opposite side, so a move toward the board
    /// edge the hole already touches does nothing.
    pub fn process_move(&mut self, direction: Direction) -> MoveOutcome {
        let Some(hole) = self.hole() else {
            log::warn!("Board has no hole, ignoring move {direction:?}");
            return MoveOutcome::NoChange;
        };

        let Some(neighbor) = self.board.grid().neighbor(hole, direction.reversed()) else {
            return MoveOutcome::NoChange;
        };

        let tile = self.board.take(neighbor);
        self.board.set(hole, tile);
        self.moves += 1;
        log::trace!("Slid tile {tile:?} {direction:?} into {hole:?}");
        MoveOutcome::Moved
    }

    pub fn get(&self, row: Coord, col: Coord) -> Result<Option<Tile>> {
        Ok(self.board.get_at(row, col)?.copied())
    }

    /// The single empty cell, `None` before the board is loaded.
    pub fn hole(&self) -> Option<Cell> {
        let mut empty = self.board.filter(|value| value.is_none());
        if empty.len() == 1 { empty.pop() } else { None }
    }
}

fn validate_permutation(permutation: &[Tile], len: usize) -> Result<()> {
    let mut sorted: Vec<Tile> = permutation.to_vec();
    sorted.sort_unstable();
    let complete = sorted.len() == len && sorted.iter().copied().eq((1..).take(len));
    if complete {
        Ok(())
    } else {
        Err(GameError::InvalidPermutation { expected_len: len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn game(permutation: Vec<Tile>) -> GameOfFifteen<FixedPermutation> {
        let mut game = GameOfFifteen::new(FixedPermutation::new(permutation));
        game.initialize().unwrap();
        game
    }

    fn solved() -> GameOfFifteen<FixedPermutation> {
        game((1..=15).collect())
    }

    #[test]
    fn loads_permutation_row_major_with_hole_last() {
        let game = game((1..=15).rev().collect());

        assert_eq!(game.get(1, 1), Ok(Some(15)));
        assert_eq!(game.get(1, 4), Ok(Some(12)));
        assert_eq!(game.get(4, 3), Ok(Some(1)));
        assert_eq!(game.get(4, 4), Ok(None));
        assert_eq!(game.hole(), Some(Cell::new(4, 4)));
    }

    #[test]
    fn rejects_incomplete_permutation() {
        let mut missing = GameOfFifteen::new(FixedPermutation::new(vec![1, 2, 3]));
        let mut repeated = GameOfFifteen::new(FixedPermutation::new(vec![1; 15]));

        assert_eq!(
            missing.initialize(),
            Err(GameError::InvalidPermutation { expected_len: 15 })
        );
        assert_eq!(
            repeated.initialize(),
            Err(GameError::InvalidPermutation { expected_len: 15 })
        );
        assert_eq!(missing.state(), GameState::Ready);
    }

    #[test]
    fn sorted_layout_is_won() {
        let game = solved();

        assert!(game.has_won());
        assert_eq!(game.state(), GameState::Won);
        assert!(game.can_move());
    }

    #[test]
    fn any_other_even_layout_is_not_won() {
        let mut permutation: Vec<Tile> = (1..=15).collect();
        permutation.swap(0, 1);
        permutation.swap(1, 2);
        assert!(is_even(&permutation));

        let game = game(permutation);

        assert!(!game.has_won());
        assert_eq!(game.state(), GameState::InProgress);
    }

    #[test]
    fn move_pulls_tile_from_opposite_side() {
        let mut game = solved();

        // hole at (4, 4): moving right slides tile 15 from (4, 3) into it
        assert_eq!(game.process_move(Direction::Right), MoveOutcome::Moved);
        assert_eq!(game.get(4, 4), Ok(Some(15)));
        assert_eq!(game.hole(), Some(Cell::new(4, 3)));

        // moving down slides tile 11 from (3, 3)
        assert_eq!(game.process_move(Direction::Down), MoveOutcome::Moved);
        assert_eq!(game.get(4, 3), Ok(Some(11)));
        assert_eq!(game.hole(), Some(Cell::new(3, 3)));
        assert_eq!(game.moves(), 2);
    }

    #[test]
    fn move_against_boundary_is_a_no_op() {
        let mut game = solved();
        let before = game.board().clone();

        assert_eq!(game.process_move(Direction::Left), MoveOutcome::NoChange);
        assert_eq!(game.process_move(Direction::Up), MoveOutcome::NoChange);

        assert_eq!(game.board(), &before);
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn undoing_moves_solves_again() {
        let mut game = solved();

        for direction in [Direction::Right, Direction::Down, Direction::Right] {
            game.process_move(direction);
        }
        assert!(!game.has_won());

        for direction in [Direction::Left, Direction::Up, Direction::Left] {
            game.process_move(direction);
        }
        assert!(game.has_won());
    }

    #[test]
    fn odd_permutation_loads_but_cannot_win() {
        let mut permutation: Vec<Tile> = (1..=15).collect();
        permutation.swap(0, 1);
        assert!(!is_even(&permutation));

        let mut game = GameOfFifteen::new(FixedPermutation::new(permutation));

        assert_eq!(game.initialize(), Ok(()));
        assert_eq!(game.get(1, 1), Ok(Some(2)));
        assert!(!game.has_won());
        assert_eq!(game.state(), GameState::InProgress);
    }

    #[test]
    fn loaded_puzzle_is_never_stuck() {
        let mut game = solved();

        for step in 0..40 {
            game.process_move(Direction::ALL[step % 4]);
            assert!(game.can_move());
            assert_ne!(game.state(), GameState::Stuck);
        }
    }

    #[test]
    fn moves_before_initialize_are_ignored() {
        let mut game = GameOfFifteen::new(FixedPermutation::sorted(15));

        assert_eq!(game.process_move(Direction::Down), MoveOutcome::NoChange);
        assert_eq!(game.state(), GameState::Ready);
        assert!(!game.has_won());
    }

    #[test]
    fn random_start_is_solvable_parity() {
        let mut game = GameOfFifteen::new(RandomPermutation::new(2024));
        game.initialize().unwrap();

        let tiles: Vec<Tile> = game.board().values_row_major().flatten().copied().collect();
        assert_eq!(tiles.len(), 15);
        assert!(is_even(&tiles));
        assert_eq!(game.hole(), Some(Cell::new(4, 4)));
    }

    #[test]
    fn smaller_board_uses_fewer_tiles() {
        let mut game = GameOfFifteen::with_width(3, FixedPermutation::sorted(8)).unwrap();
        game.initialize().unwrap();

        assert_eq!(game.tile_count(), 8);
        assert!(game.has_won());
        assert_eq!(game.get(3, 3), Ok(None));
    }
}
