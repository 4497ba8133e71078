use serde::{Deserialize, Serialize};

use crate::*;

/// What a plain tap on a tile does.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlagMode {
    #[default]
    UncoverTile,
    PlantFlag,
}

impl FlagMode {
    pub const fn toggled(self) -> Self {
        match self {
            Self::UncoverTile => Self::PlantFlag,
            Self::PlantFlag => Self::UncoverTile,
        }
    }
}

/// Result of [`GameSession::act`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Selected(SelectOutcome),
    Flagged(FlagOutcome),
}

/// Observable state of a session, for renderers and persistence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub config: GameConfig,
    pub outcome: GameOutcome,
    pub mines_remaining: i32,
    pub board: Board,
}

/// Owns the board of the game being played and its derived outcome.
///
/// Once the game is won or lost, further moves are ignored until a new game
/// is started.
#[derive(Clone, Debug)]
pub struct GameSession<G = RandomGridGenerator> {
    generator: G,
    config: GameConfig,
    board: Board,
    outcome: GameOutcome,
    flag_mode: FlagMode,
    move_count: u32,
}

impl GameSession<RandomGridGenerator> {
    pub fn with_seed(config: GameConfig, seed: Seed) -> Result<Self> {
        Self::new(config, RandomGridGenerator::new(seed))
    }

    pub fn seed(&self) -> Seed {
        self.generator.seed()
    }
}

impl<G: GridGenerator> GameSession<G> {
    pub fn new(config: GameConfig, mut generator: G) -> Result<Self> {
        let board = generator.generate(config)?;
        let outcome = board.outcome();
        Ok(Self {
            generator,
            config,
            board,
            outcome,
            flag_mode: FlagMode::default(),
            move_count: 0,
        })
    }

    /// Replaces the board with a fresh one, the current game is kept on error.
    pub fn new_game(&mut self, config: GameConfig) -> Result<()> {
        let board = self.generator.generate(config)?;
        log::debug!(
            "New game: {}x{} with {} mines",
            config.width,
            config.height,
            config.mines
        );

        self.config = config;
        self.outcome = board.outcome();
        self.board = board;
        self.flag_mode = FlagMode::default();
        self.move_count = 0;
        Ok(())
    }

    pub fn restart(&mut self) -> Result<()> {
        self.new_game(self.config)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    pub fn flag_mode(&self) -> FlagMode {
        self.flag_mode
    }

    pub fn set_flag_mode(&mut self, flag_mode: FlagMode) {
        self.flag_mode = flag_mode;
    }

    pub fn toggle_flag_mode(&mut self) -> FlagMode {
        self.flag_mode = self.flag_mode.toggled();
        self.flag_mode
    }

    /// Moves applied while the game was running.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn mines_remaining(&self) -> i32 {
        self.board.mines_remaining()
    }

    pub fn select_tile(&mut self, point: Point) -> Result<SelectOutcome> {
        let point = self.board.validate(point)?;
        if self.is_finished() {
            log::debug!("Game already over, ignoring select at {point}");
            return Ok(SelectOutcome::no_change(self.outcome));
        }

        let result = self.board.select_tile(point)?;
        self.finish_move();
        Ok(result)
    }

    pub fn flag_tile(&mut self, point: Point) -> Result<FlagOutcome> {
        let point = self.board.validate(point)?;
        if self.is_finished() {
            log::debug!("Game already over, ignoring flag at {point}");
            return Ok(FlagOutcome::NoChange);
        }

        let result = self.board.flag_tile(point)?;
        self.finish_move();
        Ok(result)
    }

    /// Uncovers or flags `point` depending on the current [`FlagMode`].
    pub fn act(&mut self, point: Point) -> Result<MoveOutcome> {
        match self.flag_mode {
            FlagMode::UncoverTile => self.select_tile(point).map(MoveOutcome::Selected),
            FlagMode::PlantFlag => self.flag_tile(point).map(MoveOutcome::Flagged),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            config: self.config,
            outcome: self.outcome,
            mines_remaining: self.mines_remaining(),
            board: self.board.clone(),
        }
    }

    fn finish_move(&mut self) {
        self.move_count += 1;
        self.outcome = self.board.outcome();
        if self.outcome.is_finished() {
            log::debug!(
                "Game finished after {} moves: {:?}",
                self.move_count,
                self.outcome
            );
        }
    }
}
