use std::fmt;

use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub cells: [[Cell; 8]; 8],
}

/// Material tally for one side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Material {
    pub men: u32,
    pub kings: u32,
}

impl Material {
    pub fn total(&self) -> u32 {
        self.men + self.kings
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; 8]; 8],
        }
    }

    /// Standard opening: black men on the dark squares of rows 0-2,
    /// white men on rows 5-7.
    pub fn startpos() -> Self {
        let mut b = Board::empty();
        for row in 0..8i8 {
            for col in 0..8i8 {
                let sq = Square::new(row, col);
                if !sq.is_dark() {
                    continue;
                }
                if row < 3 {
                    b.set(sq, Cell::Man(Color::Black));
                } else if row > 4 {
                    b.set(sq, Cell::Man(Color::White));
                }
            }
        }
        b
    }

    /// Parse the eight-row text form used by tests and saved games.
    ///
    /// Rows are separated by `/` or newlines. Each row holds eight cells,
    /// either numeric codes (`0`-`4`) or symbols (`.` `w` `b` `W` `B`).
    /// Whitespace inside a row is ignored.
    pub fn from_text(text: &str) -> Self {
        let rows: Vec<&str> = text
            .split(|c| c == '/' || c == '\n')
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .collect();
        assert!(rows.len() == 8, "Invalid board text: expected 8 rows");

        let mut b = Board::empty();
        for (row, row_str) in rows.iter().enumerate() {
            let cells: Vec<Cell> = row_str
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|ch| match ch {
                    '.' | '-' => Cell::Empty,
                    'w' => Cell::Man(Color::White),
                    'b' => Cell::Man(Color::Black),
                    'W' => Cell::King(Color::White),
                    'B' => Cell::King(Color::Black),
                    d => d
                        .to_digit(10)
                        .and_then(|v| Cell::from_code(v as u8))
                        .unwrap_or_else(|| panic!("Invalid cell char in board text: {}", d)),
                })
                .collect();
            assert!(cells.len() == 8, "Row {} must hold 8 cells", row);
            for (col, cell) in cells.into_iter().enumerate() {
                b.cells[row][col] = cell;
            }
        }
        b
    }

    pub fn to_codes(&self) -> [[u8; 8]; 8] {
        let mut out = [[0u8; 8]; 8];
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                out[r][c] = cell.code();
            }
        }
        out
    }

    pub fn at(&self, sq: Square) -> Cell {
        self.cells[sq.row as usize][sq.col as usize]
    }

    pub fn set(&mut self, sq: Square, cell: Cell) {
        self.cells[sq.row as usize][sq.col as usize] = cell;
    }

    /// All squares holding a piece of `color`, in row-major order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        (0..8i8)
            .flat_map(|r| (0..8i8).map(move |c| Square::new(r, c)))
            .filter(move |&sq| self.at(sq).belongs_to(color))
    }

    pub fn material(&self, color: Color) -> Material {
        let mut m = Material::default();
        for row in &self.cells {
            for cell in row {
                match *cell {
                    Cell::Man(c) if c == color => m.men += 1,
                    Cell::King(c) if c == color => m.kings += 1,
                    _ => {}
                }
            }
        }
        m
    }

    /// Apply one step in place: remove the captured piece, crown a man that
    /// lands on its far row, then relocate it.
    pub fn apply(&mut self, mv: Move) {
        let moved = self.at(mv.from);
        assert!(!moved.is_empty(), "no piece on move source");
        if let Some(cap) = mv.captured {
            self.set(cap, Cell::Empty);
        }
        self.set(mv.from, Cell::Empty);
        self.set(mv.to, moved.promoted_at(mv.to.row));
    }

    /// Copy-and-apply, used by the search so siblings never share state.
    pub fn with_move(&self, mv: Move) -> Board {
        let mut next = *self;
        next.apply(mv);
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::startpos()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{}", 8 - r)?;
            for cell in row {
                write!(f, " {}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
