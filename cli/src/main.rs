use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueEnum};
use minesweeper_core as game;

use game::{FlagMode, GameConfig, GameSession, MoveOutcome, Seed};
use moves::Move;

mod moves;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Preset {
    Beginner,
    Intermediate,
    Expert,
}

impl From<Preset> for GameConfig {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Beginner => GameConfig::BEGINNER,
            Preset::Intermediate => GameConfig::INTERMEDIATE,
            Preset::Expert => GameConfig::EXPERT,
        }
    }
}

/// Replays a scripted game of Minesweeper and prints the resulting board.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<String>,

    /// Board size and mine count
    #[arg(short, long, value_enum, default_value_t = Preset::Beginner)]
    preset: Preset,

    /// Custom board width, overrides the preset
    #[arg(long, requires_all = ["height", "mines"])]
    width: Option<game::Coord>,

    /// Custom board height
    #[arg(long, requires_all = ["width", "mines"])]
    height: Option<game::Coord>,

    /// Custom mine count
    #[arg(long, requires_all = ["width", "height"])]
    mines: Option<game::CellCount>,

    /// Print the final session as JSON
    #[arg(long)]
    json: bool,

    /// Moves to replay in order: `x,y` uncovers a tile, `f:x,y` cycles its flag
    moves: Vec<Move>,
}

impl Args {
    fn game_config(&self) -> Result<GameConfig> {
        match (self.width, self.height, self.mines) {
            (Some(width), Some(height), Some(mines)) => GameConfig::custom(width, height, mines)
                .with_context(|| format!("invalid custom board {width}x{height} with {mines} mines")),
            _ => Ok(self.preset.into()),
        }
    }

    fn seed(&self) -> Seed {
        match &self.seed {
            Some(text) => {
                let seed = Seed::from_text(text);
                log::info!("seed: {seed} ({text:?})");
                seed
            }
            None => {
                let seed = Seed::new(rand::random());
                log::info!("seed: {seed}");
                seed
            }
        }
    }
}

fn init_logging(verbose: &clap_verbosity_flag::Verbosity) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(verbose.tracing_level_filter())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!("could not initialize logging: {err}"))
}

/// Plays `moves` in order, switching the flag mode the way the toolbar does.
fn replay(config: GameConfig, seed: Seed, moves: &[Move]) -> Result<GameSession> {
    let mut session = GameSession::with_seed(config, seed).context("could not start game")?;

    for &next in moves {
        let mode = match next {
            Move::Uncover(_) => FlagMode::UncoverTile,
            Move::Flag(_) => FlagMode::PlantFlag,
        };
        session.set_flag_mode(mode);

        let outcome = session
            .act(next.point())
            .with_context(|| format!("could not play move {next}"))?;
        match outcome {
            MoveOutcome::Selected(selected) if selected.should_announce() => {
                log::info!("{next}: {} tiles revealed", selected.tiles_revealed)
            }
            outcome => log::debug!("{next}: {outcome:?}"),
        }
    }

    Ok(session)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.verbose)?;

    let config = args.game_config()?;
    let session = replay(config, args.seed(), &args.moves)?;

    if args.json {
        let json = serde_json::to_string_pretty(&session.snapshot())
            .context("could not serialize session")?;
        println!("{json}");
    } else {
        print!("{}", session.board());
        println!(
            "{:?}, {} mines remaining",
            session.outcome(),
            session.mines_remaining()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use game::{GameError, GameOutcome, Point, TileState};

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("minesweeper").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn preset_is_the_default_config() {
        assert_eq!(args(&[]).game_config().unwrap(), GameConfig::BEGINNER);
        assert_eq!(
            args(&["--preset", "expert"]).game_config().unwrap(),
            GameConfig::EXPERT
        );
    }

    #[test]
    fn custom_size_needs_all_three_values() {
        let custom = args(&["--width", "15", "--height", "15", "--mines", "5"]);
        assert_eq!(
            custom.game_config().unwrap(),
            GameConfig::new_unchecked(15, 15, 5)
        );

        assert!(Args::try_parse_from(["minesweeper", "--width", "15"]).is_err());
    }

    #[test]
    fn invalid_custom_size_is_reported() {
        let custom = args(&["--width", "3", "--height", "3", "--mines", "9"]);
        let err = custom.game_config().unwrap_err();

        assert!(matches!(
            err.downcast_ref::<GameError>(),
            Some(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn verbosity_maps_to_tracing_levels() {
        use tracing_subscriber::filter::LevelFilter;

        assert_eq!(args(&[]).verbose.tracing_level_filter(), LevelFilter::ERROR);
        assert_eq!(args(&["-vv"]).verbose.tracing_level_filter(), LevelFilter::INFO);
        assert_eq!(args(&["-q"]).verbose.tracing_level_filter(), LevelFilter::OFF);
    }

    #[test]
    fn moves_are_parsed_from_positionals() {
        let parsed = args(&["--seed", "testing", "0,0", "f:1,0"]);

        assert_eq!(
            parsed.moves,
            [
                Move::Uncover(Point::new(0, 0)),
                Move::Flag(Point::new(1, 0))
            ]
        );
        assert_eq!(parsed.seed(), Seed::from_text("testing"));
    }

    #[test]
    fn replay_is_deterministic_for_a_seed() {
        let moves: Vec<Move> = ["0,0", "0,1", "0,2"]
            .into_iter()
            .map(|m| m.parse().unwrap())
            .collect();
        let seed = Seed::from_text("testing");

        let a = replay(GameConfig::BEGINNER, seed, &moves).unwrap();
        let b = replay(GameConfig::BEGINNER, seed, &moves).unwrap();

        assert_eq!(a.board(), b.board());
        assert_eq!(a.board().descriptions(), b.board().descriptions());
        assert!(a.board()[Point::new(0, 0)].state.is_exposed());
    }

    #[test]
    fn replay_flags_without_uncovering() {
        let moves = [Move::Flag(Point::new(4, 4)), Move::Flag(Point::new(5, 5))];

        let session = replay(GameConfig::BEGINNER, Seed::new(3), &moves).unwrap();

        assert_eq!(session.board()[Point::new(4, 4)].state, TileState::Flagged);
        assert_eq!(session.mines_remaining(), 8);
        assert_eq!(session.outcome(), GameOutcome::Running);
        assert_eq!(session.flag_mode(), FlagMode::PlantFlag);
    }

    #[test]
    fn out_of_range_move_fails_the_replay() {
        let moves = [Move::Uncover(Point::new(9, 0))];

        let err = replay(GameConfig::BEGINNER, Seed::new(0), &moves).unwrap_err();

        assert!(err.to_string().contains("9,0"));
        assert!(matches!(
            err.downcast_ref::<GameError>(),
            Some(GameError::IndexOutOfBounds { .. })
        ));
    }
}
