//! A small and simple library for picking Tic-Tac-Toe moves with minimax.
//!
//! The AI always plays `O` and is the maximizing side; the human plays `X` and moves first.
//! Scores are depth-weighted (`10 - depth` for a win, `depth - 10` for a loss, `0` for a draw),
//! so the search prefers the fastest win and the slowest loss. Among equal scores the lowest
//! cell index is kept.
//!
//! # Example
//!
//! ```rust
//! use minimax_lib::boards::tic_tac_toe::TicTacToeBoard;
//! use minimax_lib::minimax::{MinimaxSearch, SearchStrategy, select_move};
//!
//! // X holds 0 and 1, O to move
//! let board: TicTacToeBoard = "XX./.../...".parse().unwrap();
//!
//! // One-off call with the default exhaustive search
//! assert_eq!(select_move(&board), Some(2));
//!
//! // Or configure the search with the builder
//! let mut search = MinimaxSearch::builder()
//!     .with_strategy(SearchStrategy::MutateRestore)
//!     .with_alpha_beta_pruning(true)
//!     .build();
//! let result = search.minimax(&board, 0, true);
//! assert_eq!(result.best_move, Some(2));
//!
//! // A finished game has no move to offer
//! let draw: TicTacToeBoard = "XOX/XOO/OXX".parse().unwrap();
//! assert_eq!(select_move(&draw), None);
//! ```

/// Contains the `Board` trait and the enums that describe cells, players and outcomes.
pub mod board;
/// Contains implementations of the `Board` trait.
pub mod boards;
/// Error types for board edits and game sessions.
pub mod error;
/// A caller-owned game session with turn handling, scores and observer hooks.
pub mod game;
/// The core module of the library, containing the minimax search.
pub mod minimax;
/// Contains traits and implementations for random number generation.
pub mod random;
