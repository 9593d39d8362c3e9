use crate::*;

/// The 2048 merge-slide game over a square board.
#[derive(Clone, Debug)]
pub struct Game2048<S = RandomTileSpawner> {
    board: GameBoard<Tile>,
    spawner: S,
    target: Tile,
    score: u64,
    moves: u32,
    initialized: bool,
}

impl<S: TileSpawner> Game2048<S> {
    /// Classic 4x4 board played to 2048.
    pub fn new(spawner: S) -> Self {
        Self::from_board(
            GameBoard::new(DEFAULT_WIDTH).expect("default width is valid"),
            DEFAULT_TARGET,
            spawner,
        )
    }

    pub fn with_target(width: Coord, target: Tile, spawner: S) -> Result<Self> {
        Ok(Self::from_board(GameBoard::new(width)?, target, spawner))
    }

    fn from_board(board: GameBoard<Tile>, target: Tile, spawner: S) -> Self {
        Self {
            board,
            spawner,
            target,
            score: 0,
            moves: 0,
            initialized: false,
        }
    }

    pub fn board(&self) -> &GameBoard<Tile> {
        &self.board
    }

    pub fn target(&self) -> Tile {
        self.target
    }

    /// Sum of every tile produced by a merge so far.
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Number of moves that changed the board.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Starts a fresh game with two spawned tiles.
    pub fn initialize(&mut self) {
        self.board.clear();
        self.score = 0;
        self.moves = 0;
        self.spawn();
        self.spawn();
        self.initialized = true;
        log::debug!("Initialized {0}x{0} merge-slide board", self.board.width());
    }

    pub fn can_move(&self) -> bool {
        self.board.any(|value| value.is_none())
    }

    pub fn has_won(&self) -> bool {
        self.board.any(|value| value == Some(&self.target))
    }

    pub fn state(&self) -> GameState {
        if !self.initialized {
            GameState::Ready
        } else if self.has_won() {
            GameState::Won
        } else if !self.can_move() {
            GameState::Stuck
        } else {
            GameState::InProgress
        }
    }

    /// Slides every row or column toward `direction`, spawning one tile if anything moved.
    pub fn process_move(&mut self, direction: Direction) -> MoveOutcome {
        let outcome = MoveOutcome::from(self.move_values(direction));
        if outcome.has_update() {
            self.moves += 1;
            log::trace!("Moved {direction:?}, score {}", self.score);
            self.spawn();
        }
        outcome
    }

    pub fn get(&self, row: Coord, col: Coord) -> Result<Option<Tile>> {
        Ok(self.board.get_at(row, col)?.copied())
    }

    fn move_values(&mut self, direction: Direction) -> bool {
        let mut gained: u64 = 0;
        let mut changed = false;

        for index in 1..=self.board.width() {
            let line = self.board.grid().line(index, direction);
            changed |= self.board.move_line(&line, |value| {
                let merged = value.saturating_mul(2);
                gained = gained.saturating_add(u64::from(merged));
                merged
            });
        }

        self.score = self.score.saturating_add(gained);
        changed
    }

    fn spawn(&mut self) {
        match self.spawner.next_value(&self.board) {
            Some((cell, value)) => {
                log::debug!("Spawned {value} at {cell:?}");
                self.board.set(cell, Some(value));
            }
            None => log::warn!("No tile spawned, board has no room"),
        }
    }
}
