/// Errors raised when building or editing a [`TicTacToeBoard`](crate::boards::tic_tac_toe::TicTacToeBoard).
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum BoardError {
    #[error("cell index {0} is out of range 0..9")]
    OutOfRange(u8),
    #[error("cell {0} is already occupied")]
    Occupied(u8),
    #[error("expected 9 cells, found {0}")]
    InvalidLength(usize),
    #[error("invalid cell character {0:?}")]
    InvalidCell(char),
}

/// Errors raised by a [`GameSession`](crate::game::GameSession) when a move cannot be applied.
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum GameError {
    #[error("the game is over")]
    GameOver,
    #[error("it is the AI's turn")]
    NotYourTurn,
    #[error("it is not the AI's turn")]
    NotAiTurn,
    #[error("the search found no move to play")]
    NoMoveAvailable,
    #[error(transparent)]
    Board(#[from] BoardError),
}
