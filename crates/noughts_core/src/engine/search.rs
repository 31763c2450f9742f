//! Exhaustive two-player minimax over disposable copies of a position.

use crate::board::Board;
use crate::game::Game;
use crate::position::Position;
use crate::rules;
use crate::types::{GameStatus, Mark, Square};

/// Base score of a decided game; remaining depth is added on top so faster
/// wins and slower losses score better.
pub const WIN_SCORE: i32 = 10;

/// A search position: grid, turn and status, without history.
///
/// `Copy`, so every simulated move produces an independent value owned by
/// the recursion frame that made it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    board: Board,
    to_move: Mark,
    status: GameStatus,
}

impl Node {
    /// Seeds a node from a live game.
    pub fn from_game(game: &Game) -> Self {
        Self {
            board: *game.board(),
            to_move: game.to_move(),
            status: game.status(),
        }
    }

    /// Returns the node reached by the side to move playing `pos`.
    ///
    /// `pos` must be one of [`Node::moves`].
    pub fn child(self, pos: Position) -> Self {
        let mut board = self.board;
        board.set(pos, Square::Occupied(self.to_move));
        let status = rules::evaluate(&board);
        let to_move = if status == GameStatus::InProgress {
            self.to_move.opponent()
        } else {
            self.to_move
        };
        Self { board, to_move, status }
    }

    /// Legal moves in row-major order; none once the game is decided.
    pub fn moves(&self) -> impl Iterator<Item = Position> + '_ {
        let open = self.status == GameStatus::InProgress;
        self.board.empty_positions().filter(move |_| open)
    }
}

/// Scores `node` from `me`'s perspective with `depth` plies left.
///
/// Terminal: win `10 + depth`, loss `-10 - depth`, draw `0`. An exhausted
/// horizon scores `0`. Otherwise maximise over children when `me` is to
/// move and minimise when the opponent is.
pub fn minimax(node: Node, depth: u32, me: Mark) -> i32 {
    match node.status {
        GameStatus::Won(mark) if mark == me => return WIN_SCORE + depth as i32,
        GameStatus::Won(_) => return -WIN_SCORE - depth as i32,
        GameStatus::Draw => return 0,
        GameStatus::InProgress => {}
    }

    if depth == 0 {
        return 0;
    }

    let scores = node.moves().map(|pos| minimax(node.child(pos), depth - 1, me));

    let best = if node.to_move == me {
        scores.max()
    } else {
        scores.min()
    };

    best.unwrap_or(0)
}

/// Picks the move whose resulting position scores highest for `me`.
///
/// Each candidate is played on a copy and scored with `depth` plies left.
/// Ties keep the earliest move in row-major order. Returns `None` only when
/// there is no candidate at all.
pub fn best_move(root: Node, depth: u32, me: Mark) -> Option<(Position, i32)> {
    let mut best: Option<(Position, i32)> = None;

    for pos in root.moves() {
        let score = minimax(root.child(pos), depth, me);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(moves: &[usize]) -> Node {
        let positions: Vec<_> = moves.iter().map(|i| Position::ALL[*i]).collect();
        Node::from_game(&Game::replay(&positions).unwrap())
    }

    #[test]
    fn test_terminal_scores() {
        // X wins the top row on move five.
        let won = node(&[0, 3, 1, 4, 2]);
        assert_eq!(minimax(won, 3, Mark::First), 13);
        assert_eq!(minimax(won, 3, Mark::Second), -13);
    }

    #[test]
    fn test_horizon_is_neutral() {
        assert_eq!(minimax(node(&[4]), 0, Mark::Second), 0);
    }

    #[test]
    fn test_child_does_not_touch_parent() {
        let parent = node(&[4]);
        let copy = parent;
        let _ = parent.child(Position::ALL[0]);
        assert_eq!(parent, copy);
    }

    #[test]
    fn test_best_move_takes_win() {
        // X: 0, 1  O: 3, 4  X to move
        let root = node(&[0, 3, 1, 4]);
        let (pos, score) = best_move(root, 10, Mark::First).unwrap();
        assert_eq!(pos, Position::ALL[2]);
        assert_eq!(score, WIN_SCORE + 10);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        assert_eq!(minimax(node(&[]), 9, Mark::First), 0);
    }

    #[test]
    fn test_decided_node_has_no_best_move() {
        assert_eq!(best_move(node(&[0, 3, 1, 4, 2]), 4, Mark::Second), None);
    }
}
