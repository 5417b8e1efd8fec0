use crate::board::{Board, Cell, GameOutcome, Mark};
use crate::error::BoardError;
use crate::random::RandomGenerator;
use std::fmt;
use std::str::FromStr;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// The 8 winning triples: rows, then columns, then diagonals.
pub const LINES: [[u8; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A 3x3 Tic-Tac-Toe board.
///
/// Cells are stored row-major, so the cell at `row`, `col` has index `row * 3 + col`.
/// A move is represented by a `u8` from 0 to 8. The board is `Copy`, so every copy is a fully
/// independent value.
#[derive(Debug, Default, PartialEq, Eq, Hash, Copy, Clone)]
pub struct TicTacToeBoard {
    field: [Cell; CELL_COUNT],
}

impl TicTacToeBoard {
    /// Creates a board from its cells in row-major order.
    pub const fn from_cells(field: [Cell; CELL_COUNT]) -> Self {
        Self { field }
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.field
    }

    /// Returns the cell at `index`, or `None` if the index is out of range.
    pub fn get(&self, index: u8) -> Option<Cell> {
        self.field.get(index as usize).copied()
    }

    /// Overwrites the cell at `index`.
    pub fn set(&mut self, index: u8, cell: Cell) -> Result<(), BoardError> {
        let slot = self
            .field
            .get_mut(index as usize)
            .ok_or(BoardError::OutOfRange(index))?;
        *slot = cell;
        Ok(())
    }

    /// Puts `mark` on an empty cell.
    pub fn play(&mut self, index: u8, mark: Mark) -> Result<(), BoardError> {
        match self.get(index) {
            None => Err(BoardError::OutOfRange(index)),
            Some(Cell::Marked(_)) => Err(BoardError::Occupied(index)),
            Some(Cell::Empty) => self.set(index, Cell::Marked(mark)),
        }
    }

    pub fn is_full(&self) -> bool {
        self.field.iter().all(|cell| !cell.is_empty())
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.field
            .iter()
            .filter(|cell| cell.mark() == Some(mark))
            .count()
    }

    /// Returns the first completed line together with its owner.
    pub fn winning_line(&self) -> Option<(Mark, [u8; 3])> {
        LINES.iter().find_map(|&line| {
            let [a, b, c] = line.map(|i| self.field[i as usize]);
            match a {
                Cell::Marked(mark) if a == b && a == c => Some((mark, line)),
                _ => None,
            }
        })
    }

    /// Returns the player whose turn it is, assuming `X` moved first.
    pub fn next_mark(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    /// Checks that the board could arise from alternating play with `X` moving first.
    pub fn is_well_formed(&self) -> bool {
        let x = self.count(Mark::X);
        let o = self.count(Mark::O);
        if x != o && x != o + 1 {
            return false;
        }

        let x_wins = self.has_line(Mark::X);
        let o_wins = self.has_line(Mark::O);
        match (x_wins, o_wins) {
            (true, true) => false,
            (true, false) => x == o + 1,
            (false, true) => x == o,
            (false, false) => true,
        }
    }

    /// Plays up to `plies` random legal moves from the empty board, `X` first, stopping early
    /// if the game ends.
    pub fn random_position<R: RandomGenerator>(random: &mut R, plies: usize) -> Self {
        let mut board = Self::default();
        let mut mark = Mark::X;
        for _ in 0..plies {
            if board.get_outcome().is_terminal() {
                break;
            }
            let moves = board.get_available_moves();
            let Some(&index) = random.choose(&moves) else {
                break;
            };
            board.place(index, mark);
            mark = mark.opponent();
        }
        board
    }

    fn has_line(&self, mark: Mark) -> bool {
        let cell = Cell::Marked(mark);
        LINES
            .iter()
            .any(|line| line.iter().all(|&i| self.field[i as usize] == cell))
    }
}

impl Board for TicTacToeBoard {
    type Move = u8;

    fn get_outcome(&self) -> GameOutcome {
        if let Some((mark, _)) = self.winning_line() {
            return GameOutcome::Winner(mark);
        }

        if self.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }

    fn get_available_moves(&self) -> Vec<Self::Move> {
        self.field
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(i, _)| i as u8)
            .collect()
    }

    fn place(&mut self, b_move: Self::Move, mark: Mark) {
        self.field[b_move as usize] = Cell::Marked(mark);
    }

    fn clear(&mut self, b_move: Self::Move) {
        self.field[b_move as usize] = Cell::Empty;
    }

    fn get_hash(&self) -> u128 {
        let mut hash = 0;
        for (i, &cell) in self.field.iter().enumerate() {
            let cell_value = match cell {
                Cell::Empty => 0,
                Cell::Marked(Mark::X) => 1,
                Cell::Marked(Mark::O) => 2,
            };
            hash += cell_value * 3u128.pow(i as u32);
        }
        hash
    }
}

impl FromStr for TicTacToeBoard {
    type Err = BoardError;

    /// Parses nine cells written as `X`, `O` or one of `.`, `-`, `_` for an empty cell.
    /// Whitespace, `|` and `/` are separators and are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|' && *c != '/')
            .map(|c| match c {
                'X' | 'x' => Ok(Cell::Marked(Mark::X)),
                'O' | 'o' => Ok(Cell::Marked(Mark::O)),
                '.' | '-' | '_' => Ok(Cell::Empty),
                other => Err(BoardError::InvalidCell(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let field: [Cell; CELL_COUNT] = cells
            .try_into()
            .map_err(|cells: Vec<Cell>| BoardError::InvalidLength(cells.len()))?;
        Ok(Self::from_cells(field))
    }
}

impl fmt::Display for TicTacToeBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.field.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in cells {
                let symbol = cell.mark().map_or('.', Mark::symbol);
                write!(f, "{symbol}")?;
            }
        }
        Ok(())
    }
}
