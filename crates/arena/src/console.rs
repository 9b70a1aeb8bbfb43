//! Terminal frontend: prints the board, reads moves like `c3-d4` from a line
//! reader.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use draughts_core::{coord_to_square, square_to_coord, turn_to_string, Board, Color, Move, Square};

use crate::frontend::{Command, Frontend};
use crate::results::GameOutcome;

/// Errors in a typed command line
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("empty input")]
    Empty,
    #[error("`{0}` is not a cell (expected a1..h8)")]
    BadCell(String),
}

/// Parse one input line into commands.
///
/// `c3` selects a cell, `c3-d4`, `c3:e5` or `c3 d4` select two,
/// `undo`, `replay` and `quit` map to the control commands.
pub fn parse_line(line: &str) -> Result<Vec<Command>, InputError> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "" => return Err(InputError::Empty),
        "u" | "undo" | "back" => return Ok(vec![Command::Undo]),
        "r" | "replay" => return Ok(vec![Command::Replay]),
        "q" | "quit" | "exit" => return Ok(vec![Command::Quit]),
        _ => {}
    }
    line.split(|c: char| c == '-' || c == ':' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .map(|p| {
            coord_to_square(p)
                .map(Command::Cell)
                .ok_or_else(|| InputError::BadCell(p.to_string()))
        })
        .collect()
}

pub struct ConsoleFrontend<R, W> {
    input: R,
    output: W,
    pending: VecDeque<Command>,
}

impl<R: BufRead, W: Write> ConsoleFrontend<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    fn hint_list(hints: &[Square]) -> String {
        hints
            .iter()
            .map(|&sq| square_to_coord(sq))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<R: BufRead, W: Write> Frontend for ConsoleFrontend<R, W> {
    fn command(&mut self, board: &Board, color: Color, hints: &[Square]) -> Command {
        loop {
            if let Some(cmd) = self.pending.pop_front() {
                return cmd;
            }
            writeln!(self.output, "{board}").ok();
            writeln!(self.output, "{} to play [{}]", color.name(), Self::hint_list(hints)).ok();
            write!(self.output, "> ").ok();
            self.output.flush().ok();

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => return Command::Quit,
                Ok(_) => {}
            }
            match parse_line(&line) {
                Ok(cmds) => self.pending.extend(cmds),
                Err(InputError::Empty) => {}
                Err(e) => {
                    writeln!(self.output, "{e}").ok();
                }
            }
        }
    }

    fn show_turn(&mut self, _board: &Board, color: Color, turn: &[Move]) {
        writeln!(self.output, "{} played {}", color.name(), turn_to_string(turn)).ok();
    }

    fn show_result(&mut self, board: &Board, outcome: GameOutcome) {
        writeln!(self.output, "{board}").ok();
        writeln!(self.output, "Game over: {}", outcome.describe()).ok();
        self.output.flush().ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_line_variants() {
        let c3 = Square::new(5, 2);
        let d4 = Square::new(4, 3);
        assert_eq!(parse_line("c3"), Ok(vec![Command::Cell(c3)]));
        assert_eq!(
            parse_line(" c3-d4 "),
            Ok(vec![Command::Cell(c3), Command::Cell(d4)])
        );
        assert_eq!(parse_line("C3 d4").unwrap().len(), 2);
        assert_eq!(parse_line("undo"), Ok(vec![Command::Undo]));
        assert_eq!(parse_line("Q"), Ok(vec![Command::Quit]));
        assert_eq!(parse_line("   "), Err(InputError::Empty));
        assert_eq!(parse_line("z9"), Err(InputError::BadCell("z9".into())));
    }

    #[test]
    fn test_console_skips_bad_lines_and_quits_at_eof() {
        let input = Cursor::new("bogus\nc3-d4\n");
        let mut out = Vec::new();
        let mut fe = ConsoleFrontend::new(input, &mut out);
        let board = Board::startpos();
        assert_eq!(
            fe.command(&board, Color::White, &[]),
            Command::Cell(Square::new(5, 2))
        );
        assert_eq!(
            fe.command(&board, Color::White, &[]),
            Command::Cell(Square::new(4, 3))
        );
        assert_eq!(fe.command(&board, Color::White, &[]), Command::Quit);
        drop(fe);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("is not a cell"));
    }
}
