//! Exporting and reloading game records as JSON

use std::fs;

use tempfile::TempDir;
use tictactoe_minimax::{
    Action, Game, GameOutcome, Minimax,
    cli::commands::self_play::{self, SelfPlayArgs},
};

#[test]
fn test_self_play_export_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("game.json");
    let engine = Minimax::default();

    self_play::execute(
        SelfPlayArgs {
            export: Some(path.clone()),
        },
        &engine,
    )
    .unwrap();

    let loaded: Game = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let expected = engine.self_play().unwrap();

    assert_eq!(loaded.moves, expected.moves);
    assert_eq!(loaded.outcome, Some(GameOutcome::Draw));
    assert_eq!(loaded.outcome, expected.outcome);
    assert_eq!(loaded.current_state(), expected.current_state());
    assert_eq!(loaded.state_sequence(), expected.state_sequence());
}

#[test]
fn test_game_serde_round_trip_mid_game() {
    let mut game = Game::new();
    for index in [4, 0, 8] {
        game.play(Action::from_index(index).unwrap()).unwrap();
    }

    let json = serde_json::to_string(&game).unwrap();
    let loaded: Game = serde_json::from_str(&json).unwrap();

    assert_eq!(loaded.moves, game.moves);
    assert_eq!(loaded.outcome, None);
    assert_eq!(loaded.current_state().encode(), "O...X...X");
}

#[test]
fn test_out_of_range_move_is_rejected_on_load() {
    let mut game = Game::new();
    game.play(Action::new(0, 0).unwrap()).unwrap();
    let json = serde_json::to_string(&game)
        .unwrap()
        .replace(r#""row":0,"col":0"#, r#""row":0,"col":9"#);
    assert!(json.contains(r#""col":9"#));

    let err = serde_json::from_str::<Game>(&json).unwrap_err();
    assert!(err.to_string().contains("out of bounds"), "{err}");
}
