//! Tests for loading game configuration from disk.

use std::io::Write;

use strictly_tictactoe::{GameConfig, PlayerColor, Seat, SetupErrorKind};

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn test_from_file_builds_named_players() {
    let file = write_config(
        r##"
        board_size = 5

        [[players]]
        label = "@"
        color = "cyan"
        name = "Ada"

        [[players]]
        label = "#"
        color = "white"
        "##,
    );

    let game = GameConfig::from_file(file.path())
        .expect("config loads")
        .build()
        .expect("config is valid");

    assert_eq!(game.board_size(), 5);
    assert_eq!(game.player(Seat::First).name(), "Ada");
    assert_eq!(*game.player(Seat::First).color(), PlayerColor::Cyan);
    assert_eq!(game.player(Seat::Second).name(), "Player 2");
    assert_eq!(*game.current_player().label(), '@');
}

#[test]
fn test_missing_file_is_config_error() {
    let err = GameConfig::from_file("/definitely/not/here.toml").unwrap_err();
    assert!(err.message.contains("Failed to read"));
}

#[test]
fn test_three_players_rejected() {
    let config = GameConfig::from_toml(
        r#"
        [[players]]
        label = "X"
        color = "blue"

        [[players]]
        label = "O"
        color = "red"

        [[players]]
        label = "Z"
        color = "green"
        "#,
    )
    .expect("parses");

    let err = config.build().unwrap_err();
    assert_eq!(err.kind, SetupErrorKind::PlayerCount(3));
}

#[test]
fn test_board_size_override_is_validated() {
    let err = GameConfig::default().with_board_size(1).build().unwrap_err();
    assert_eq!(err.kind, SetupErrorKind::BoardTooSmall(1));

    let game = GameConfig::default().with_board_size(6).build().expect("valid");
    assert_eq!(game.winning_combos().len(), 14);
}
