/// The interface the minimax search is written against.
///
/// A board knows its terminal state, its legal moves in a fixed order, and how to place and
/// clear a mark. The search owns turn order, so a board never tracks whose move it is.
pub trait Board: Default + Clone {
    /// The type representing a move in the game, e.g. a cell index.
    type Move: Copy + PartialEq + std::fmt::Debug;

    /// Returns the current outcome of the game.
    fn get_outcome(&self) -> GameOutcome;

    /// Returns all legal moves in ascending order. The order is the search's tie-break order.
    fn get_available_moves(&self) -> Vec<Self::Move>;

    /// Puts `mark` on the board at `b_move`.
    fn place(&mut self, b_move: Self::Move, mark: Mark);

    /// Removes whatever mark sits at `b_move`, undoing a previous [`Board::place`].
    fn clear(&mut self, b_move: Self::Move);

    /// Returns a hash value for the current board state.
    fn get_hash(&self) -> u128;
}

/// One of the two players.
///
/// `X` always moves first and is the human side; `O` is the AI and the maximizing side of the
/// search.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Returns the other player.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Returns the mark played by the given side of the search.
    pub fn for_side(maximizing: bool) -> Self {
        if maximizing { Mark::O } else { Mark::X }
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// A single cell of a board.
#[derive(Debug, Default, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Mark),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        Cell::Marked(mark)
    }
}

/// Represents the possible outcomes of a game.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum GameOutcome {
    /// The game is still ongoing.
    InProgress,
    /// The given player has completed a line.
    Winner(Mark),
    /// The board is full and nobody has completed a line.
    Draw,
}

impl GameOutcome {
    /// Returns `true` if the game has ended, either by a win or by a draw.
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Cell, GameOutcome, Mark};

    #[test]
    fn opponent_swaps_marks() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn maximizing_side_plays_o() {
        assert_eq!(Mark::for_side(true), Mark::O);
        assert_eq!(Mark::for_side(false), Mark::X);
    }

    #[test]
    fn cell_reports_its_mark() {
        assert!(Cell::default().is_empty());
        assert_eq!(Cell::Empty.mark(), None);
        assert_eq!(Cell::from(Mark::O).mark(), Some(Mark::O));
    }

    #[test]
    fn only_in_progress_is_not_terminal() {
        assert!(!GameOutcome::InProgress.is_terminal());
        assert!(GameOutcome::Draw.is_terminal());
        assert!(GameOutcome::Winner(Mark::X).is_terminal());
    }
}
