use crate::board::{Board, GameOutcome, Mark};
use crate::boards::tic_tac_toe::TicTacToeBoard;
use crate::error::GameError;
use crate::minimax::MinimaxSearch;
use log::info;

/// Who plays `O`.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub enum GameMode {
    /// `O` is played by the minimax search.
    #[default]
    VsAi,
    /// Both marks are played by people.
    VsHuman,
}

/// Games won by each player since the last score reset.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub struct Scores {
    pub x: u32,
    pub o: u32,
}

impl Scores {
    fn record_win(&mut self, winner: Mark) {
        match winner {
            Mark::X => self.x += 1,
            Mark::O => self.o += 1,
        }
    }
}

/// The result of one applied move.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct MoveEvent {
    pub index: u8,
    pub mark: Mark,
    pub outcome: GameOutcome,
}

/// Hooks invoked synchronously after each state transition, in registration order.
///
/// Front ends attach sound, animation or rendering here. Every method defaults to doing nothing.
pub trait GameObserver {
    fn on_move(&mut self, _index: u8, _mark: Mark) {}

    fn on_win(&mut self, _winner: Mark, _line: [u8; 3]) {}

    fn on_draw(&mut self) {}
}

/// A key press translated into a session command.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Command {
    Play(u8),
    Reset,
}

impl Command {
    /// Maps `1`..`9` to cells 0..8 and `r`/`R` to a reset.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '1'..='9' => key.to_digit(10).map(|digit| Command::Play(digit as u8 - 1)),
            'r' | 'R' => Some(Command::Reset),
            _ => None,
        }
    }
}

/// A caller-owned game: board, turn, scores and the AI opponent.
pub struct GameSession {
    board: TicTacToeBoard,
    current: Mark,
    active: bool,
    scores: Scores,
    mode: GameMode,
    winning_line: Option<[u8; 3]>,
    search: MinimaxSearch,
    observers: Vec<Box<dyn GameObserver>>,
}

impl Default for GameSession {
    fn default() -> Self {
        GameSessionBuilder::new().build()
    }
}

/// A builder for creating instances of `GameSession`.
#[derive(Default)]
pub struct GameSessionBuilder {
    mode: GameMode,
    search: MinimaxSearch,
    observers: Vec<Box<dyn GameObserver>>,
}

impl GameSessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the search the AI uses to pick its moves.
    pub fn with_search(mut self, search: MinimaxSearch) -> Self {
        self.search = search;
        self
    }

    pub fn with_observer(mut self, observer: Box<dyn GameObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn build(self) -> GameSession {
        GameSession {
            board: TicTacToeBoard::default(),
            current: Mark::X,
            active: true,
            scores: Scores::default(),
            mode: self.mode,
            winning_line: None,
            search: self.search,
            observers: self.observers,
        }
    }
}

impl GameSession {
    pub fn builder() -> GameSessionBuilder {
        GameSessionBuilder::new()
    }

    pub fn board(&self) -> &TicTacToeBoard {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// The line completed by the winner of the current game, if any.
    pub fn winning_line(&self) -> Option<[u8; 3]> {
        self.winning_line
    }

    pub fn is_ai_turn(&self) -> bool {
        self.active && self.mode == GameMode::VsAi && self.current == Mark::O
    }

    pub fn add_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    /// Plays the current player's mark at `index` on behalf of a person.
    pub fn play(&mut self, index: u8) -> Result<MoveEvent, GameError> {
        if !self.active {
            return Err(GameError::GameOver);
        }
        if self.is_ai_turn() {
            return Err(GameError::NotYourTurn);
        }
        self.apply(index)
    }

    /// Lets the search pick and play `O`'s move.
    pub fn play_ai(&mut self) -> Result<MoveEvent, GameError> {
        if !self.active {
            return Err(GameError::GameOver);
        }
        if !self.is_ai_turn() {
            return Err(GameError::NotAiTurn);
        }
        let index = self
            .search
            .select_move(&self.board)
            .ok_or(GameError::NoMoveAvailable)?;
        self.apply(index)
    }

    /// Executes a key command. A reset produces no move event.
    pub fn handle(&mut self, command: Command) -> Result<Option<MoveEvent>, GameError> {
        match command {
            Command::Play(index) => self.play(index).map(Some),
            Command::Reset => {
                self.reset_game();
                Ok(None)
            }
        }
    }

    /// Clears the board and gives the first move back to `X`. Scores are kept.
    pub fn reset_game(&mut self) {
        self.board = TicTacToeBoard::default();
        self.current = Mark::X;
        self.active = true;
        self.winning_line = None;
        info!("game reset");
    }

    pub fn reset_scores(&mut self) {
        self.scores = Scores::default();
    }

    /// Switches between playing the AI and playing another person, starting a new game.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            GameMode::VsAi => GameMode::VsHuman,
            GameMode::VsHuman => GameMode::VsAi,
        };
        info!("mode switched to {:?}", self.mode);
        self.reset_game();
    }

    fn apply(&mut self, index: u8) -> Result<MoveEvent, GameError> {
        let mark = self.current;
        self.board.play(index, mark)?;
        for observer in &mut self.observers {
            observer.on_move(index, mark);
        }

        let outcome = self.board.get_outcome();
        match outcome {
            GameOutcome::Winner(winner) => {
                self.active = false;
                self.scores.record_win(winner);
                self.winning_line = self.board.winning_line().map(|(_, line)| line);
                info!("{winner:?} wins, score X {} - O {}", self.scores.x, self.scores.o);
                if let Some(line) = self.winning_line {
                    for observer in &mut self.observers {
                        observer.on_win(winner, line);
                    }
                }
            }
            GameOutcome::Draw => {
                self.active = false;
                info!("draw");
                for observer in &mut self.observers {
                    observer.on_draw();
                }
            }
            GameOutcome::InProgress => self.current = mark.opponent(),
        }

        Ok(MoveEvent {
            index,
            mark,
            outcome,
        })
    }
}
