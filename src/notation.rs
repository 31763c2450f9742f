//! Plain-text board notation for the command line.

use anyhow::{Result, bail};
use noughts_core::{Board, Game, GameStatus, Mode, Position, Square};

/// Parses nine cells of `X`, `O` or `.` in row-major order.
///
/// `/`, `|` and whitespace are ignored, so `"X.O/.X./..."` and `"X.O.X...."`
/// read the same. `-` and `_` are accepted as empty.
pub fn parse_board(text: &str) -> Result<Board> {
    let cells: Vec<char> = text
        .chars()
        .filter(|c| !matches!(c, '/' | '|') && !c.is_whitespace())
        .collect();

    if cells.len() != Position::ALL.len() {
        bail!("Expected 9 cells, found {} in {:?}", cells.len(), text);
    }

    let mut board = Board::new();
    for (pos, c) in Position::ALL.into_iter().zip(cells) {
        let square = match c.to_ascii_uppercase() {
            'X' => Square::Occupied(noughts_core::Mark::First),
            'O' => Square::Occupied(noughts_core::Mark::Second),
            '.' | '-' | '_' => Square::Empty,
            other => bail!("Unexpected cell {:?} at {}", other, pos),
        };
        board.set(pos, square);
    }
    Ok(board)
}

/// Compact one-line form of a board, the inverse of [`parse_board`].
pub fn format_board(board: &Board) -> String {
    board
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|sq| sq.mark().map_or('.', |mark| mark.symbol()))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Board plus a status line, as shown between moves.
pub fn render(game: &Game) -> String {
    let status = match game.status() {
        GameStatus::InProgress => format!("{} to move", game.to_move()),
        GameStatus::Won(mark) => format!("Game over. {} wins!", mark),
        GameStatus::Draw => "Game over. Draw!".to_string(),
    };
    let mode = match game.mode() {
        Mode::HumanVsHuman => "Human vs Human",
        Mode::HumanVsComputer => "Human vs Computer",
    };
    format!("{}\n\n{} [{}]", game.board().display(), status, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_core::Mark;

    #[test]
    fn test_parse_and_format_agree() {
        let board = parse_board("X.O/.X./..o").unwrap();
        assert_eq!(board.get(Position::ALL[0]), Square::Occupied(Mark::First));
        assert_eq!(board.get(Position::ALL[8]), Square::Occupied(Mark::Second));
        assert_eq!(format_board(&board), "X.O/.X./..O");
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!(parse_board("X.O").is_err());
        assert!(parse_board("X.O.X.O.X.").is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_cell() {
        assert!(parse_board("X.O.Z....").is_err());
    }

    #[test]
    fn test_render_status_line() {
        let game = Game::replay(&[Position::CENTER]).unwrap();
        assert!(render(&game).ends_with("O to move [Human vs Human]"));
    }
}
