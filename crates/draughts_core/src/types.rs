/// Side of the board. White moves first and heads for row 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Row on which a man of this color is crowned.
    pub fn promotion_row(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Row delta of a forward step.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

/// Contents of a single board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Man(Color),
    King(Color),
}

impl Cell {
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Man(c) | Cell::King(c) => Some(c),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn is_king(self) -> bool {
        matches!(self, Cell::King(_))
    }

    pub fn is_man(self) -> bool {
        matches!(self, Cell::Man(_))
    }

    pub fn belongs_to(self, color: Color) -> bool {
        self.color() == Some(color)
    }

    pub fn is_opponent_of(self, color: Color) -> bool {
        self.color() == Some(color.other())
    }

    /// The cell after a piece lands on `row`: men on their far row are crowned.
    pub fn promoted_at(self, row: i8) -> Cell {
        match self {
            Cell::Man(c) if row == c.promotion_row() => Cell::King(c),
            other => other,
        }
    }

    /// Numeric code used by the text board format:
    /// 0 empty, 1 white man, 2 black man, 3 white king, 4 black king.
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Man(Color::White) => 1,
            Cell::Man(Color::Black) => 2,
            Cell::King(Color::White) => 3,
            Cell::King(Color::Black) => 4,
        }
    }

    pub fn from_code(code: u8) -> Option<Cell> {
        match code {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Man(Color::White)),
            2 => Some(Cell::Man(Color::Black)),
            3 => Some(Cell::King(Color::White)),
            4 => Some(Cell::King(Color::Black)),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Man(Color::White) => 'w',
            Cell::Man(Color::Black) => 'b',
            Cell::King(Color::White) => 'W',
            Cell::King(Color::Black) => 'B',
        }
    }
}

/// Board coordinate: `row` 0..8 from the top (black's side), `col` 0..8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    pub fn new(row: i8, col: i8) -> Self {
        debug_assert!(
            Self::in_bounds(row, col),
            "square ({row}, {col}) is off the board"
        );
        Self { row, col }
    }

    /// Checked constructor, `None` when off the board.
    pub fn at(row: i8, col: i8) -> Option<Self> {
        if Self::in_bounds(row, col) {
            Some(Self { row, col })
        } else {
            None
        }
    }

    pub fn in_bounds(row: i8, col: i8) -> bool {
        (0..8).contains(&row) && (0..8).contains(&col)
    }

    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        Square::at(self.row + dr, self.col + dc)
    }

    /// Playable squares are the dark ones.
    pub fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }
}

/// One atomic step of a turn. A capture chain is several of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// Cell of the piece removed by this step.
    pub captured: Option<Square>,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            captured: None,
        }
    }

    pub fn capture(from: Square, to: Square, captured: Square) -> Self {
        Self {
            from,
            to,
            captured: Some(captured),
        }
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// The four diagonal directions as (row, col) deltas.
pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
