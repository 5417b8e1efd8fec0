use crate::board::{Board, GameOutcome, Mark};
use crate::boards::tic_tac_toe::TicTacToeBoard;
use log::{debug, warn};

/// Score of a win found at the root. Every ply of depth costs one point, so faster wins
/// and slower losses score better.
pub const WIN_SCORE: i32 = 10;

/// How the search explores hypothetical moves.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub enum SearchStrategy {
    /// Every branch gets its own copy of the board.
    #[default]
    CopyPerBranch,
    /// A single working board is mutated in place, and each move is cleared again before the
    /// next sibling is explored.
    MutateRestore,
}

/// The value of a position together with the move that achieves it.
///
/// `score` is from the maximizing side's point of view (`O`, the AI). `best_move` is `None` when
/// the position is already terminal, which is the sentinel callers must check for.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct SearchResult<M = u8> {
    pub score: i32,
    pub best_move: Option<M>,
}

impl<M> SearchResult<M> {
    fn terminal(score: i32) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

/// Exhaustive depth-weighted minimax.
///
/// `O` is always the maximizing side. The search keeps no state between calls apart from its
/// configuration and the node count of the last search.
#[derive(Debug, Default)]
pub struct MinimaxSearch {
    strategy: SearchStrategy,
    use_alpha_beta_pruning: bool,
    nodes_visited: u64,
}

/// A builder for creating instances of `MinimaxSearch`.
#[derive(Debug, Default)]
pub struct MinimaxSearchBuilder {
    strategy: SearchStrategy,
    use_alpha_beta_pruning: bool,
}

impl MinimaxSearchBuilder {
    /// Creates a builder for an exhaustive, copy-per-branch search.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how hypothetical moves are applied during the search.
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enables or disables alpha-beta pruning. Pruning changes how many nodes are visited, never
    /// the chosen move or its score.
    pub fn with_alpha_beta_pruning(mut self, use_abp: bool) -> Self {
        self.use_alpha_beta_pruning = use_abp;
        self
    }

    pub fn build(self) -> MinimaxSearch {
        MinimaxSearch {
            strategy: self.strategy,
            use_alpha_beta_pruning: self.use_alpha_beta_pruning,
            nodes_visited: 0,
        }
    }
}

impl MinimaxSearch {
    /// Returns a new builder for `MinimaxSearch`.
    pub fn builder() -> MinimaxSearchBuilder {
        MinimaxSearchBuilder::new()
    }

    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    /// Returns the number of positions evaluated by the last search.
    pub fn get_nodes_visited(&self) -> u64 {
        self.nodes_visited
    }

    /// Returns the best move for `O` on `board`, or `None` if the game is already over.
    pub fn select_move<T: Board>(&mut self, board: &T) -> Option<T::Move> {
        if board.get_outcome().is_terminal() {
            warn!("move requested on a finished game");
            return None;
        }
        self.minimax(board, 0, true).best_move
    }

    /// Evaluates `board` with `depth` plies already played and the given side to move.
    ///
    /// The caller's board is never modified; the search runs on a private copy.
    pub fn minimax<T: Board>(
        &mut self,
        board: &T,
        depth: i32,
        maximizing: bool,
    ) -> SearchResult<T::Move> {
        self.nodes_visited = 0;
        let mut working = board.clone();
        let result = self.search(&mut working, depth, maximizing, i32::MIN, i32::MAX);
        debug!(
            "minimax: score {} move {:?} after {} nodes ({:?}, pruning: {})",
            result.score,
            result.best_move,
            self.nodes_visited,
            self.strategy,
            self.use_alpha_beta_pruning
        );
        result
    }

    fn search<T: Board>(
        &mut self,
        board: &mut T,
        depth: i32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> SearchResult<T::Move> {
        self.nodes_visited += 1;
        match board.get_outcome() {
            GameOutcome::Winner(Mark::O) => return SearchResult::terminal(WIN_SCORE - depth),
            GameOutcome::Winner(Mark::X) => return SearchResult::terminal(depth - WIN_SCORE),
            GameOutcome::Draw => return SearchResult::terminal(0),
            GameOutcome::InProgress => {}
        }

        let mark = Mark::for_side(maximizing);
        let mut best = SearchResult {
            score: if maximizing { i32::MIN } else { i32::MAX },
            best_move: None,
        };

        for b_move in board.get_available_moves() {
            let score = match self.strategy {
                SearchStrategy::CopyPerBranch => {
                    let mut child = board.clone();
                    child.place(b_move, mark);
                    self.search(&mut child, depth + 1, !maximizing, alpha, beta).score
                }
                SearchStrategy::MutateRestore => {
                    board.place(b_move, mark);
                    let score = self.search(board, depth + 1, !maximizing, alpha, beta).score;
                    board.clear(b_move);
                    score
                }
            };

            // strict comparison keeps the lowest index among equal scores
            let improves = if maximizing {
                score > best.score
            } else {
                score < best.score
            };
            if improves {
                best = SearchResult {
                    score,
                    best_move: Some(b_move),
                };
            }

            if self.use_alpha_beta_pruning {
                if maximizing {
                    alpha = alpha.max(best.score);
                } else {
                    beta = beta.min(best.score);
                }
                if alpha >= beta {
                    break;
                }
            }
        }

        best
    }
}

/// Picks the AI's move on `board` with a default exhaustive search.
///
/// Returns `None` when the board has no legal move or is already won; callers must not treat
/// that as a cell index.
pub fn select_move(board: &TicTacToeBoard) -> Option<u8> {
    MinimaxSearch::default().select_move(board)
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, GameOutcome, Mark};
    use crate::boards::tic_tac_toe::TicTacToeBoard;
    use crate::minimax::{MinimaxSearch, SearchResult, SearchStrategy, select_move};
    use crate::random::{CustomNumberGenerator, RandomGenerator};
    use std::collections::HashSet;

    const STRATEGIES: [SearchStrategy; 2] =
        [SearchStrategy::CopyPerBranch, SearchStrategy::MutateRestore];

    fn board(s: &str) -> TicTacToeBoard {
        s.parse().unwrap()
    }

    fn search(strategy: SearchStrategy, use_abp: bool) -> MinimaxSearch {
        MinimaxSearch::builder()
            .with_strategy(strategy)
            .with_alpha_beta_pruning(use_abp)
            .build()
    }

    /// Game-theoretic value for `O` (1 win, 0 draw, -1 loss) with `to_move` playing next.
    fn oracle_value(board: &TicTacToeBoard, to_move: Mark) -> i32 {
        match board.get_outcome() {
            GameOutcome::Winner(Mark::O) => return 1,
            GameOutcome::Winner(Mark::X) => return -1,
            GameOutcome::Draw => return 0,
            GameOutcome::InProgress => {}
        }
        let values = board.get_available_moves().into_iter().map(|index| {
            let mut child = *board;
            child.place(index, to_move);
            oracle_value(&child, to_move.opponent())
        });
        match to_move {
            Mark::O => values.max().unwrap(),
            Mark::X => values.min().unwrap(),
        }
    }

    /// Every reachable, unfinished position with `O` to move.
    fn reachable_o_to_move() -> Vec<TicTacToeBoard> {
        fn walk(
            board: TicTacToeBoard,
            to_move: Mark,
            seen: &mut HashSet<u128>,
            out: &mut Vec<TicTacToeBoard>,
        ) {
            if !seen.insert(board.get_hash()) || board.get_outcome().is_terminal() {
                return;
            }
            if to_move == Mark::O {
                out.push(board);
            }
            for index in board.get_available_moves() {
                let mut child = board;
                child.place(index, to_move);
                walk(child, to_move.opponent(), seen, out);
            }
        }

        let mut seen = HashSet::new();
        let mut out = Vec::new();
        walk(TicTacToeBoard::default(), Mark::X, &mut seen, &mut out);
        out
    }

    #[test]
    fn empty_board_is_a_draw_and_keeps_lowest_index() {
        for strategy in STRATEGIES {
            // arrange
            let board = TicTacToeBoard::default();
            let mut search = search(strategy, false);

            // act
            let result = search.minimax(&board, 0, true);

            // assert
            assert_eq!(result, SearchResult { score: 0, best_move: Some(0) });
            assert_eq!(search.get_nodes_visited(), 549_946);
        }
    }

    #[test]
    fn blocks_immediate_threat() {
        // arrange
        let board = board("XX./.../...");

        // act
        let result = MinimaxSearch::default().minimax(&board, 0, true);

        // assert
        assert_eq!(result, SearchResult { score: -6, best_move: Some(2) });
        assert_eq!(select_move(&board), Some(2));
    }

    #[test]
    fn completes_own_line() {
        // arrange
        let board = board("OO./.../...");

        // act
        let result = MinimaxSearch::default().minimax(&board, 0, true);

        // assert
        assert_eq!(result, SearchResult { score: 9, best_move: Some(2) });
    }

    #[test]
    fn prefers_winning_now_over_blocking() {
        // X threatens 5, but O wins at 2 first
        let board = board("OO./XX./X..");
        assert_eq!(select_move(&board), Some(2));
    }

    #[test]
    fn forced_loss_picks_lowest_index() {
        for strategy in STRATEGIES {
            // arrange
            let board = board("XXO/OX./...");
            let mut search = search(strategy, false);

            // act
            let result = search.minimax(&board, 0, true);

            // assert
            assert_eq!(result, SearchResult { score: -8, best_move: Some(5) });
        }
    }

    #[test]
    fn minimizing_side_takes_its_win() {
        let board = board("XX./OO./...");
        let result = MinimaxSearch::default().minimax(&board, 0, false);
        assert_eq!(result, SearchResult { score: -9, best_move: Some(2) });
    }

    #[test]
    fn terminal_boards_return_no_move() {
        let draw = board("XOX/XOO/OXX");
        let x_won = board("XXX/OO./...");
        let o_won = board("OOO/XX./X.X");

        let mut search = MinimaxSearch::default();
        assert_eq!(search.minimax(&draw, 0, true), SearchResult { score: 0, best_move: None });
        assert_eq!(search.minimax(&x_won, 0, true), SearchResult { score: -10, best_move: None });
        assert_eq!(search.minimax(&o_won, 3, true), SearchResult { score: 7, best_move: None });
        assert_eq!(search.get_nodes_visited(), 1);
        assert_eq!(select_move(&draw), None);
        assert_eq!(select_move(&x_won), None);
    }

    #[test]
    fn never_picks_occupied_cell_and_leaves_board_untouched() {
        let mut random = CustomNumberGenerator::new(7);
        for strategy in STRATEGIES {
            for _ in 0..100 {
                // arrange
                let plies = random.next_range(0, 8) as usize;
                let board = TicTacToeBoard::random_position(&mut random, plies);
                let before = board;
                let mut search = search(strategy, false);

                // act
                let chosen = search.select_move(&board);

                // assert
                assert_eq!(board, before);
                match chosen {
                    Some(index) => assert!(board.get(index).unwrap().is_empty(), "{board}"),
                    None => assert!(board.get_outcome().is_terminal()),
                }
            }
        }
    }

    #[test]
    fn matches_brute_force_oracle() {
        let mut random = CustomNumberGenerator::new(2024);
        let mut checked = 0;
        while checked < 200 {
            // arrange: an odd number of plies leaves O to move
            let plies = [1, 3, 5, 7][random.next_range(0, 4) as usize];
            let board = TicTacToeBoard::random_position(&mut random, plies);
            if board.get_outcome().is_terminal() || board.next_mark() != Mark::O {
                continue;
            }
            let best_value = oracle_value(&board, Mark::O);

            // act
            let chosen = select_move(&board).unwrap();

            // assert
            let mut after = board;
            after.place(chosen, Mark::O);
            assert_eq!(oracle_value(&after, Mark::X), best_value, "{board}");
            checked += 1;
        }
    }

    #[test]
    fn alpha_beta_keeps_every_choice() {
        let positions = reachable_o_to_move();
        assert!(!positions.is_empty());

        for strategy in STRATEGIES {
            let mut exhaustive = search(strategy, false);
            let mut pruned = search(strategy, true);
            for board in &positions {
                let full = exhaustive.minimax(board, 0, true);
                let cut = pruned.minimax(board, 0, true);
                assert_eq!(full, cut, "{board}");
                assert!(pruned.get_nodes_visited() <= exhaustive.get_nodes_visited());
            }
        }
    }

    #[test]
    fn alpha_beta_visits_fewer_nodes_on_empty_board() {
        let board = TicTacToeBoard::default();
        let mut pruned = search(SearchStrategy::CopyPerBranch, true);

        let result = pruned.minimax(&board, 0, true);

        assert_eq!(result, SearchResult { score: 0, best_move: Some(0) });
        assert!(pruned.get_nodes_visited() < 549_946);
    }
}
