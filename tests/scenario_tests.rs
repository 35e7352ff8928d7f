//! Whole-game scenarios played through the public API.

use fishwar::square::consts::*;
use fishwar::{
    DrawReason, GameResult, Move, MoveError, MoveResult, Piece, PieceType, PlayError, Player,
    Position, RuleConfig, WinReason,
};

// =============================================================================
// Opening captures
// =============================================================================

#[test]
fn first_player_takes_inada() {
    let mut pos = Position::new();
    let outcome = pos.play("い↑B3B2").unwrap();

    assert_eq!(None, outcome.result);
    assert_eq!(vec![PieceType::Inada], pos.hand_pieces(Player::First));
    assert_eq!(
        Some(Piece::new(PieceType::Inada, Player::First)),
        pos.piece_at(SQ_B2)
    );
    assert_eq!(Player::Second, pos.side_to_move());
}

#[test]
fn second_player_recaptures_with_maguro() {
    let mut pos = Position::new();
    pos.play("い↑B3B2").unwrap();
    let outcome = pos.play("ま↓B1B2").unwrap();

    assert_eq!(None, outcome.result);
    assert_eq!(vec![PieceType::Inada], pos.hand_pieces(Player::Second));
    assert_eq!(Player::First, pos.side_to_move());
}

// =============================================================================
// Invasion
// =============================================================================

#[test]
fn surviving_invasion_wins() {
    let mut pos = Position::from_setup("k2/1M1/2m/2K f - 5").unwrap();

    let outcome = pos.play("ま↑B2B1").unwrap();
    assert_eq!(None, outcome.result);

    let outcome = pos.play("ま↓C3C2").unwrap();
    assert_eq!(
        Some(GameResult::Win {
            winner: Player::First,
            reason: WinReason::Invasion,
        }),
        outcome.result
    );
}

#[test]
fn captured_invader_loses_by_capture() {
    let mut pos = Position::from_setup("k2/1M1/2m/2K f - 5").unwrap();
    pos.play("ま↑B2B1").unwrap();

    let outcome = pos.play("か↓A1B1").unwrap();
    assert_eq!(
        Some(GameResult::Win {
            winner: Player::Second,
            reason: WinReason::Capture,
        }),
        outcome.result
    );
}

#[test]
fn invasion_disabled_by_config() {
    let rules = RuleConfig::from_toml_str("invasion_win = false").unwrap();
    let mut pos = Position::from_setup_with_rules("k2/1M1/2m/2K f - 5", rules).unwrap();

    pos.play("ま↑B2B1").unwrap();
    let outcome = pos.play("ま↓C3C2").unwrap();
    assert_eq!(None, outcome.result);
    assert!(pos.invasion(Player::First).is_present());
}

// =============================================================================
// Notation
// =============================================================================

#[test]
fn malformed_notation_parses_to_nothing() {
    assert_eq!(None, Move::from_notation("XB3B2"));
    assert_eq!(None, Move::from_notation("い↑B3"));

    let mut pos = Position::new();
    assert!(matches!(pos.play("XB3B2"), Err(PlayError::Parse(_))));
    assert_eq!(Position::new(), pos);
}

// =============================================================================
// Full games
// =============================================================================

#[test]
fn full_game_ends_by_capture() {
    let mut pos = Position::new();
    let moves = [
        "い↑B3B2", "ま↓B1B2", "か↑C4C3", "か↓A1A2", "か↑C3C2", "か↓A2A3", "か↑C2B2",
    ];

    let outcome = pos.replay(&moves).unwrap();
    assert_eq!(
        Some(GameResult::Win {
            winner: Player::First,
            reason: WinReason::Capture,
        }),
        outcome.result
    );
    assert_eq!(8, pos.turn());
    assert_eq!(7, pos.move_history().len());
    assert_eq!(7, pos.history().len());

    let notations: Vec<String> = pos.move_history().iter().map(|r| r.to_notation()).collect();
    assert_eq!(moves.to_vec(), notations);

    let rejection = pos.play("た↓C1B2").unwrap_err();
    match rejection {
        PlayError::Rejected(r) => {
            assert_eq!(MoveError::GameFinished, r.reason());
            assert_eq!("game already finished", r.to_string());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn shuffling_karei_draws_by_repetition() {
    let mut pos = Position::new();
    let cycle = ["か↑C4C3", "か↓A1A2", "か↑C3C4", "か↓A2A1"];

    let moves: Vec<&str> = cycle.iter().cycle().take(8).copied().collect();
    let outcome = pos.replay(&moves).unwrap();

    assert_eq!(Some(GameResult::Draw(DrawReason::Repetition)), outcome.result);
    assert_eq!(2, pos.repetition_count());
}

#[test]
fn repetition_threshold_is_configurable() {
    let rules = RuleConfig::from_toml_str("repetition_prior_occurrences = 1").unwrap();
    let mut pos = Position::with_rules(rules);
    let cycle = ["か↑C4C3", "か↓A1A2", "か↑C3C4", "か↓A2A1"];

    let outcome = pos.replay(&cycle).unwrap();
    assert_eq!(Some(GameResult::Draw(DrawReason::Repetition)), outcome.result);
    assert_eq!(5, pos.turn());
}

#[test]
fn illegal_moves_report_transient_invalid_result() {
    let mut pos = Position::new();

    let cases = [
        ("い↓B2B3", MoveError::WrongTurn),
        ("い↑A3A2", MoveError::NoPieceAtOrigin),
        ("い↑B2B1", MoveError::OpponentPiece),
        ("た↑B3B2", MoveError::PieceMismatch),
        ("い↑B3A2", MoveError::IllegalDestination),
        ("か↑C4B4", MoveError::OwnPieceAtDestination),
        ("い↑A3★", MoveError::PieceNotInHand),
    ];

    for (i, (notation, reason)) in cases.iter().enumerate() {
        let m = Move::from_notation(notation).unwrap();
        let rejection = pos.make_move(m).unwrap_err();
        assert_eq!(*reason, rejection.reason(), "failed at #{i}");
        assert_eq!(Some(MoveResult::Invalid(*reason)), rejection.result());
        assert_eq!(None, pos.result(), "invalid result must not be stored");
    }

    assert_eq!(Position::new(), pos);
}

#[test]
fn placement_after_capture() {
    let mut pos = Position::new();
    pos.replay(&["い↑B3B2", "ま↓B1B2", "い↑A3★"]).unwrap();

    assert_eq!(
        Some(Piece::new(PieceType::Inada, Player::First)),
        pos.piece_at(SQ_A3)
    );
    assert!(pos.hand_pieces(Player::First).is_empty());
    assert_eq!("☗A3いなだ打", pos.move_history()[2].to_japanese());
}
