use alloc::vec::Vec;
use rand::prelude::*;

use super::*;

/// Shuffles mines and empty tiles uniformly with a seeded generator.
///
/// Successive boards continue the same random stream, so a session replayed
/// from one seed sees the same sequence of boards.
#[derive(Clone, Debug)]
pub struct RandomGridGenerator {
    seed: Seed,
    rng: SmallRng,
}

impl RandomGridGenerator {
    pub fn new(seed: Seed) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed.value()),
        }
    }

    pub fn seed(&self) -> Seed {
        self.seed
    }
}

impl GridGenerator for RandomGridGenerator {
    fn generate(&mut self, config: GameConfig) -> Result<Board> {
        config.validate()?;

        let total_tiles = usize::from(config.total_tiles());
        let mut tiles = Vec::with_capacity(total_tiles);
        tiles.resize(config.mines.into(), Tile::MINE);
        tiles.resize(total_tiles, Tile::EMPTY);
        tiles.shuffle(&mut self.rng);

        let board = Grid::from_vec(config.width, config.height, tiles)?;

        // double check mine count
        let count = board.total_mine_count();
        if count != config.mines {
            log::warn!(
                "Generated board count mismatch, actual: {}, requested: {}",
                count,
                config.mines
            );
        }
        log::debug!(
            "Generated {}x{} board with {} mines from seed {}",
            config.width,
            config.height,
            count,
            self.seed
        );

        Ok(board)
    }
}
