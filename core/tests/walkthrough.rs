//! Scripted games played through the public session API.

use minesweeper_core::*;

#[derive(Copy, Clone)]
enum Step {
    Tap(Coord, Coord),
    Flagging,
    Uncovering,
}

use Step::*;

const WALKTHROUGH: &[Step] = &[
    Tap(0, 0),
    Tap(0, 1),
    Tap(0, 2),
    Flagging,
    Tap(1, 0),
    Uncovering,
    Tap(2, 0),
    Flagging,
    Tap(3, 0),
    Uncovering,
    Tap(4, 0),
    Tap(6, 4),
    Flagging,
    Tap(2, 1),
    Tap(0, 6),
    Tap(8, 6),
    Tap(7, 7),
    Uncovering,
    Tap(8, 7),
    Tap(7, 8),
    Flagging,
    Tap(8, 8),
    Uncovering,
    Tap(2, 4),
];

/// Plays the walkthrough and records every tile label after each tap.
fn play(seed: &str) -> (GameSession, Vec<Vec<String>>) {
    let mut session = GameSession::with_seed(GameConfig::BEGINNER, Seed::from_text(seed)).unwrap();
    let mut frames = Vec::new();

    for step in WALKTHROUGH {
        match *step {
            Tap(x, y) => {
                session.act(Point::new(x, y)).unwrap();
                frames.push(
                    session
                        .board()
                        .descriptions()
                        .into_iter()
                        .map(TileDescription::label)
                        .collect(),
                );
            }
            Flagging => session.set_flag_mode(FlagMode::PlantFlag),
            Uncovering => session.set_flag_mode(FlagMode::UncoverTile),
        }
    }

    (session, frames)
}

#[test]
fn walkthrough_replays_identically() {
    let (first, first_frames) = play("hakvoort!");
    let (second, second_frames) = play("hakvoort!");

    assert_eq!(first_frames, second_frames);
    assert_eq!(first.board(), second.board());
    assert_eq!(first.outcome(), second.outcome());
}

// `SmallRng` streams differ between 32 and 64-bit targets.
#[cfg(target_pointer_width = "64")]
#[test]
fn walkthrough_ends_on_third_tap() {
    let (session, frames) = play("hakvoort!");

    assert_eq!(session.outcome(), GameOutcome::Lost);
    assert_eq!(session.move_count(), 3);
    assert_eq!(session.mines_remaining(), 10);
    assert_eq!(frames[2][18], "Mine");
    assert_eq!(
        session.board().to_string(),
        "\
1*#####*#
3######*#
X*#######
#####*###
#########
#########
###*#####
#######*#
#*#*#####
"
    );
}

#[cfg(target_pointer_width = "64")]
#[test]
fn golden_path_first_three_taps() {
    let seed = Seed::from_text("testing");
    let mut board = generate_board(GameConfig::BEGINNER, seed).unwrap();
    assert_eq!((board.width(), board.height()), (9, 9));

    let mines = [
        (4, 0),
        (5, 0),
        (8, 0),
        (1, 1),
        (7, 1),
        (8, 1),
        (7, 3),
        (5, 4),
        (8, 6),
        (1, 8),
    ]
    .map(|(x, y)| Point::new(x, y));
    assert_eq!(board.filter(|_, tile| tile.is_mine()), mines);

    for y in 0..3 {
        let outcome = board.select_tile(Point::new(0, y)).unwrap();
        assert_eq!(outcome, SelectOutcome::no_change(GameOutcome::Running));
    }

    let labels: Vec<String> = board.descriptions().into_iter().map(TileDescription::label).collect();
    assert_eq!(labels[0], "1 mines nearby");
    assert_eq!(labels[9], "1 mines nearby");
    assert_eq!(labels[18], "1 mines nearby");
    assert_eq!(labels.iter().filter(|label| *label == "Covered").count(), 78);
    assert_eq!(
        board.to_string(),
        "\
1########
1########
1########
#########
#########
#########
#########
#########
#########
"
    );
}

#[test]
fn lost_game_shows_every_mine() {
    let mut session = GameSession::with_seed(GameConfig::INTERMEDIATE, Seed::new(11)).unwrap();
    session.select_tile(Point::new(0, 0)).unwrap();
    if session.is_finished() {
        return;
    }

    let mine = session.board().filter(|_, tile| tile.is_mine())[0];
    session.flag_tile(mine).unwrap();
    session.flag_tile(mine).unwrap();
    session.flag_tile(mine).unwrap();
    let outcome = session.select_tile(mine).unwrap();

    assert_eq!(outcome.outcome, GameOutcome::Lost);
    assert_eq!(session.outcome(), GameOutcome::Lost);
    let descriptions = session.board().descriptions();
    let count = |wanted: TileDescription| descriptions.iter().filter(|&&d| d == wanted).count();
    assert_eq!(count(TileDescription::UncoveredMine), 1);
    assert_eq!(count(TileDescription::Mine), 39);
    assert_eq!(descriptions[session.board().index_of(mine)], TileDescription::UncoveredMine);
}
