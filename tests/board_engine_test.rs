//! Tests for the board engine: move application, status and reset.

use noughts::{Game, GameStatus, Mark, MoveError, Position, Square};
use noughts_core::rules::LINES;
use std::collections::HashSet;

fn game(moves: &[usize]) -> Game {
    let positions: Vec<_> = moves.iter().map(|i| Position::ALL[*i]).collect();
    Game::replay(&positions).expect("Replay of legal moves")
}

#[test]
fn test_turn_alternates_until_game_ends() {
    let mut g = Game::new();
    let mut expected = Mark::First;

    for pos in [4, 0, 8, 2, 1, 7, 6, 3, 5].map(|i| Position::ALL[i]) {
        assert_eq!(g.to_move(), expected);
        g.play(pos).unwrap();
        if g.status().is_over() {
            break;
        }
        expected = expected.opponent();
    }

    assert_eq!(g.status(), GameStatus::Draw);
    assert_eq!(g.history().len(), 9);
}

#[test]
fn test_illegal_moves_leave_state_unchanged() {
    let mut g = game(&[4, 0]);
    let before = g.clone();

    assert_eq!(g.attempt_move(3, 0), Err(MoveError::OutOfBounds { row: 3, col: 0 }));
    assert_eq!(g.attempt_move(0, 7), Err(MoveError::OutOfBounds { row: 0, col: 7 }));
    assert_eq!(
        g.attempt_move(1, 1),
        Err(MoveError::CellOccupied(Position::CENTER))
    );
    assert_eq!(g, before);

    let mut finished = game(&[0, 3, 1, 4, 2]);
    let before = finished.clone();
    assert_eq!(finished.attempt_move(2, 2), Err(MoveError::NotPlaying));
    assert_eq!(finished, before);
}

#[test]
fn test_not_playing_is_reported_before_bounds() {
    let mut finished = game(&[0, 3, 1, 4, 2]);
    assert_eq!(finished.attempt_move(9, 9), Err(MoveError::NotPlaying));
}

#[test]
fn test_win_freezes_turn_on_winner() {
    let g = game(&[0, 3, 1, 4, 2]);
    assert_eq!(g.status(), GameStatus::Won(Mark::First));
    assert_eq!(g.winner(), Some(Mark::First));
    assert_eq!(g.to_move(), Mark::First);
    assert!(g.legal_moves().is_empty());
}

fn has_line(g: &Game, mark: Mark) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| g.board().get(*pos) == Square::Occupied(mark)))
}

fn visit(g: &Game, seen: &mut HashSet<noughts::Board>) {
    if !seen.insert(*g.board()) {
        return;
    }

    let x_line = has_line(g, Mark::First);
    let o_line = has_line(g, Mark::Second);
    let full = g.board().occupied() == 9;

    match g.status() {
        GameStatus::Won(mark) => {
            assert!(has_line(g, mark), "Won without a line:\n{}", g.board().display());
            assert!(!has_line(g, mark.opponent()));
        }
        GameStatus::Draw => assert!(full && !x_line && !o_line),
        GameStatus::InProgress => assert!(!full && !x_line && !o_line),
    }

    for pos in g.legal_moves() {
        let mut next = g.clone();
        next.play(pos).unwrap();
        visit(&next, seen);
    }
}

#[test]
fn test_status_matches_lines_on_every_reachable_board() {
    let mut seen = HashSet::new();
    visit(&Game::new(), &mut seen);
    assert_eq!(seen.len(), 5478);
}

#[test]
fn test_reset_restores_initial_state() {
    let mut g = game(&[4, 0, 8, 2, 1, 7]);
    g.reset();

    assert_eq!(g, Game::new());
    assert_eq!(g.status(), GameStatus::InProgress);
    assert_eq!(g.to_move(), Mark::First);
    assert!(g.history().is_empty());
    assert_eq!(g.board().occupied(), 0);

    let mut finished = game(&[0, 3, 1, 4, 2]);
    finished.reset();
    assert_eq!(finished, Game::new());
}
