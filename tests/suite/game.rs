//! Chess demo driver tests

use std::fs;

use optio::{ChessBoard, Color, ThreadDice, run_game};
use optio_config::{DemoSettings, OptioConfig};

use crate::common::{ScriptedDice, capped_settings};

fn transcript(buffer: Vec<u8>) -> String {
    String::from_utf8(buffer).unwrap()
}

#[test]
fn prints_moves_until_empty() {
    let mut board = ChessBoard::new(capped_settings(2));
    let mut dice = ScriptedDice::new(&[0.5, 0.0]);
    let mut out = Vec::new();

    let moves = run_game(&mut board, &mut dice, &mut out).unwrap();

    assert_eq!(moves, 2);
    assert_eq!(
        transcript(out),
        "white rook a1-a3\nblack pawn a7-a1\nGame over\n"
    );
    assert_eq!(board.turn(), Color::White);
}

#[test]
fn immediate_checkmate_prints_only_game_over() {
    let settings = DemoSettings {
        checkmate_probability: 0.5,
        max_moves: None,
    };
    let mut board = ChessBoard::new(settings);
    let mut dice = ScriptedDice::new(&[0.1]);
    let mut out = Vec::new();

    let moves = run_game(&mut board, &mut dice, &mut out).unwrap();

    assert_eq!(moves, 0);
    assert_eq!(transcript(out), "Game over\n");
    assert_eq!(dice.rolls_used(), 1);
}

#[test]
fn settings_from_config_file_cap_the_game() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = tmp_dir.path().join("config.toml");
    fs::write(&path, "[demo]\ncheckmate_probability = 0.0\nmax_moves = 3\n").unwrap();

    let config = OptioConfig::load_from(&path).unwrap();
    let settings = DemoSettings::resolve(config.as_ref(), None).unwrap();
    let mut board = ChessBoard::new(settings);
    let mut out = Vec::new();

    let moves = run_game(&mut board, &mut ScriptedDice::new(&[0.4]), &mut out).unwrap();

    let text = transcript(out);
    assert_eq!(moves, 3);
    assert_eq!(text.lines().count(), 4);
    assert_eq!(text.lines().last(), Some("Game over"));
}

#[test]
fn random_game_terminates() {
    let settings = DemoSettings {
        checkmate_probability: 0.1,
        max_moves: Some(50),
    };
    let mut board = ChessBoard::new(settings);
    let mut out = Vec::new();

    let moves = run_game(&mut board, &mut ThreadDice, &mut out).unwrap();

    assert!(moves <= 50);
    assert_eq!(transcript(out).lines().count(), moves as usize + 1);
}
