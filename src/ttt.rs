use std::fmt;
use std::ops::Not;
use std::str::FromStr;

use itertools::{iproduct, Itertools};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, EnumIter, strum_macros::Display, clap::ValueEnum)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Player {
        !self
    }
}

impl Not for Player {
    type Output = Player;

    fn not(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// A cell address on the 3x3 board. Always in range once constructed.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Result<Coord, BoardError> {
        if row < 3 && col < 3 {
            Ok(Coord { row, col })
        } else {
            Err(BoardError::OutOfRange { row, col })
        }
    }

    /// All nine cells in row-major order.
    pub fn all() -> impl Iterator<Item=Coord> {
        iproduct!(0..3, 0..3).map(|(row, col)| Coord { row, col })
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn index(&self) -> usize {
        self.row * 3 + self.col
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum Outcome {
    Won(Player),
    Draw,
    Ongoing,
}

impl Outcome {
    pub fn is_finished(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Won(player) => write!(f, "{player} wins"),
            Outcome::Draw => write!(f, "draw"),
            Outcome::Ongoing => write!(f, "ongoing"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum BoardError {
    #[display("cell ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },

    #[display("cell ({row}, {col}) is outside the 3x3 board")]
    OutOfRange { row: usize, col: usize },

    #[display("unexpected {found:?} at position {position}, expected X, O or one of . - _")]
    InvalidSymbol { found: char, position: usize },

    #[display("expected 9 cells, found {found}")]
    WrongCellCount { found: usize },
}

impl std::error::Error for BoardError {}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    const WIN_INDICES: [[usize; 3]; 8] = [
        [0, 1, 2],
        [3, 4, 5],
        [6, 7, 8],
        [0, 3, 6],
        [1, 4, 7],
        [2, 5, 8],
        [0, 4, 8],
        [2, 4, 6],
    ];

    pub fn empty() -> Self {
        Self::new([Cell::Empty; 9])
    }

    pub fn new(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.index()]
    }

    pub fn is_empty_at(&self, coord: Coord) -> bool {
        self.get(coord) == Cell::Empty
    }

    /// Marks an empty cell for `player`. Occupied cells are left untouched.
    pub fn place(&mut self, coord: Coord, player: Player) -> Result<(), BoardError> {
        if !self.is_empty_at(coord) {
            return Err(BoardError::Occupied { row: coord.row, col: coord.col });
        }
        self.cells[coord.index()] = Cell::from(player);
        Ok(())
    }

    /// Copy of this board with `coord` marked for `player`; `coord` must be empty.
    pub(crate) fn with_mark(&self, coord: Coord, player: Player) -> Board {
        debug_assert!(self.is_empty_at(coord), "search tried to mark occupied cell {coord}");
        let mut next = *self;
        next.cells[coord.index()] = Cell::from(player);
        next
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item=Coord> + '_ {
        Coord::all().filter(|&coord| self.is_empty_at(coord))
    }

    pub fn has_won(&self, player: Player) -> bool {
        let mark = Cell::from(player);
        Self::WIN_INDICES.iter().any(|line| line.iter().all(|&index| self.cells[index] == mark))
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    pub fn status(&self) -> Outcome {
        match Player::iter().find(|&player| self.has_won(player)) {
            Some(player) => Outcome::Won(player),
            None if self.is_full() => Outcome::Draw,
            None => Outcome::Ongoing,
        }
    }

    /// The player whose turn it is, assuming X opened the game.
    pub fn next_player(&self) -> Player {
        let count = |mark: Cell| self.cells.iter().filter(|&&cell| cell == mark).count();
        if count(Cell::X) > count(Cell::O) {
            Player::O
        } else {
            Player::X
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.cells.chunks(3)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .join("\n");
        f.write_str(&rows)
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses nine cells in row-major order, e.g. `XO./.X./..O`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols = s.chars()
            .filter(|c| *c != '/' && !c.is_whitespace())
            .collect_vec();
        if symbols.len() != 9 {
            return Err(BoardError::WrongCellCount { found: symbols.len() });
        }
        let mut cells = [Cell::Empty; 9];
        for (position, (cell, &symbol)) in cells.iter_mut().zip(&symbols).enumerate() {
            *cell = match symbol {
                'X' | 'x' => Cell::X,
                'O' | 'o' => Cell::O,
                '.' | '-' | '_' => Cell::Empty,
                found => return Err(BoardError::InvalidSymbol { found, position }),
            };
        }
        Ok(Board::new(cells))
    }
}
