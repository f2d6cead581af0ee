use clap::Parser;
use tempfile::tempdir;
use xnos::cli::commands::{
    moves::{self, MovesArgs},
    self_play::{self, SelfPlayArgs},
    status::{self, StatusArgs},
};
use xnos::pipeline::SelfPlayReport;
use xnos::tictactoe::Player;

#[test]
fn self_play_exports_a_loadable_report() {
    let tmp = tempdir().unwrap();
    let export = tmp.path().join("r.json");

    let args = SelfPlayArgs::parse_from([
        "xnos-self-play",
        "--sets",
        "1",
        "--games",
        "5",
        "--seed",
        "1",
        "--no-progress",
        "--export",
        export.to_str().unwrap(),
    ]);

    self_play::execute(args).expect("self-play with export should succeed");

    let report = SelfPlayReport::load(&export).unwrap();
    assert_eq!(report.sets.len(), 1);
    assert_eq!(report.totals.games(), 5);
    assert_eq!(report.config.seed, Some(1));
    assert_eq!(report.config.first_player, Player::X);
}

#[test]
fn self_play_accepts_o_first() {
    let args = SelfPlayArgs::parse_from([
        "xnos-self-play",
        "--sets",
        "2",
        "--games",
        "3",
        "--first",
        "o",
        "--no-demo",
        "--no-progress",
    ]);
    self_play::execute(args).expect("o may move first");
}

#[test]
fn self_play_rejects_unknown_first_player() {
    let args = SelfPlayArgs::parse_from(["xnos-self-play", "--first", "z", "--no-progress"]);
    assert!(self_play::execute(args).is_err());
}

#[test]
fn self_play_rejects_zero_games() {
    let args = SelfPlayArgs::parse_from(["xnos-self-play", "--games", "0", "--no-progress"]);
    assert!(self_play::execute(args).is_err());
}

#[test]
fn status_accepts_slash_separated_board() {
    let args = StatusArgs::parse_from(["xnos-status", "OOO/XX./..."]);
    status::execute(args).expect("valid board");
}

#[test]
fn status_rejects_malformed_boards() {
    for bad in ["XX", "OOO/XX./..Z", "OOO/XX./..../"] {
        let args = StatusArgs::parse_from(["xnos-status", bad]);
        assert!(status::execute(args).is_err(), "accepted {bad:?}");
    }
}

#[test]
fn moves_lists_replies_for_either_side() {
    let args = MovesArgs::parse_from(["xnos-moves", "XX./XO./..O"]);
    moves::execute(args).expect("o to move");

    let args = MovesArgs::parse_from(["xnos-moves", "O../.../...", "--side", "x"]);
    moves::execute(args).expect("x to move");
}

#[test]
fn moves_rejects_bad_side_and_board() {
    let args = MovesArgs::parse_from(["xnos-moves", "XX./XO./..O", "--side", "z"]);
    assert!(moves::execute(args).is_err());

    let args = MovesArgs::parse_from(["xnos-moves", "XX./XO"]);
    assert!(moves::execute(args).is_err());
}
