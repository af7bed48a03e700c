use crate::games::SessionRng;
use crate::{log, log_debug, log_warn};
use super::board::{BOARD_CELLS, Board};
use super::bot_controller::{BotInput, calculate_move};
use super::settings::GameConfig;
use super::types::{Difficulty, FirstPlayerMode, GameMode, Mark, Outcome, WinningLine};
use super::win_detector::{check_win_with_line, check_winner};

pub const HUMAN_MARK: Mark = Mark::X;
pub const COMPUTER_MARK: Mark = Mark::O;

/// Turn sequencing for a single board. Computer replies go through the same
/// [`apply_move`](Self::apply_move) path as human clicks.
#[derive(Debug)]
pub struct TicTacToeGame {
    board: Board,
    current_mark: Mark,
    config: GameConfig,
    rng: SessionRng,
    last_move: Option<usize>,
}

impl TicTacToeGame {
    pub fn new(config: GameConfig, rng: SessionRng) -> Self {
        let mut game = Self {
            board: Board::new(),
            current_mark: HUMAN_MARK,
            config,
            rng,
            last_move: None,
        };
        game.reset();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn outcome(&self) -> Outcome {
        check_winner(&self.board)
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    pub fn is_computer_turn(&self) -> bool {
        self.config.vs_computer() && self.current_mark == COMPUTER_MARK && !self.is_over()
    }

    fn first_mark(&self) -> Mark {
        if self.config.vs_computer() && self.config.first_player == FirstPlayerMode::Computer {
            COMPUTER_MARK
        } else {
            HUMAN_MARK
        }
    }

    /// Returns `false` without touching the board when the move is not allowed.
    pub fn apply_move(&mut self, index: usize) -> bool {
        if let Err(reason) = self.place_mark(index) {
            log_debug!("Rejected move at {}: {}", index, reason);
            return false;
        }

        if self.is_computer_turn() {
            self.trigger_computer_turn();
        }
        true
    }

    fn place_mark(&mut self, index: usize) -> Result<(), String> {
        if self.is_over() {
            return Err("Game is already over".to_string());
        }

        if index >= BOARD_CELLS {
            return Err("Position out of bounds".to_string());
        }

        if !self.board.is_cell_empty(index) {
            return Err("Cell is already marked".to_string());
        }

        self.board.set(index, self.current_mark);
        self.last_move = Some(index);
        log_debug!("{} placed at {}", self.current_mark, index);

        let outcome = self.outcome();
        if outcome.is_terminal() {
            log!("Game over: {}", self.status_message());
        } else {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == Mark::X { Mark::O } else { Mark::X };
    }

    fn trigger_computer_turn(&mut self) {
        let difficulty = self.config.difficulty;
        let input = BotInput::from_game_state(self);

        match calculate_move(difficulty, input, &mut self.rng) {
            Some(index) => {
                log_debug!("Computer ({}) chose {}", difficulty.label(), index);
                self.apply_move(index);
            }
            None => log_warn!("Computer had no move to play"),
        }
    }

    pub fn reset(&mut self) {
        self.board.clear();
        self.current_mark = self.first_mark();
        self.last_move = None;
        log_debug!(
            "New game: {}, {}, {} moves first",
            self.config.mode.label(),
            self.config.difficulty.label(),
            self.current_mark
        );

        if self.is_computer_turn() {
            self.trigger_computer_turn();
        }
    }

    pub fn configure(&mut self, mode: GameMode, difficulty: Difficulty) {
        self.config.mode = mode;
        self.config.difficulty = difficulty;
        self.reset();
    }

    /// Only a real mode change restarts the game.
    pub fn set_mode(&mut self, mode: GameMode) {
        if self.config.mode != mode {
            self.config.mode = mode;
            self.reset();
        }
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
        self.reset();
    }

    pub fn status_message(&self) -> String {
        let outcome = self.outcome();
        if let Some(mark) = outcome.winner() {
            return format!("{} wins!", mark);
        }

        if outcome == Outcome::Draw {
            "The game is a draw.".to_string()
        } else {
            format!("{}'s turn", self.current_mark)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::get_available_moves;

    fn pvp() -> TicTacToeGame {
        TicTacToeGame::new(
            GameConfig::new(GameMode::PlayerVsPlayer, Difficulty::Hard),
            SessionRng::new(1),
        )
    }

    fn pvc(difficulty: Difficulty) -> TicTacToeGame {
        TicTacToeGame::new(
            GameConfig::new(GameMode::PlayerVsComputer, difficulty),
            SessionRng::new(1),
        )
    }

    #[test]
    fn test_new_game_starts_empty_with_human() {
        let game = pvc(Difficulty::Hard);
        assert_eq!(*game.board(), Board::new());
        assert_eq!(game.current_mark(), HUMAN_MARK);
        assert_eq!(game.outcome(), Outcome::Undecided);
        assert_eq!(game.status_message(), "X's turn");
    }

    #[test]
    fn test_pvp_alternates_turns() {
        let mut game = pvp();
        assert!(game.apply_move(4));
        assert_eq!(game.current_mark(), Mark::O);
        assert!(game.apply_move(0));
        assert_eq!(game.current_mark(), Mark::X);
        assert_eq!(game.board().get(4), Some(Mark::X));
        assert_eq!(game.board().get(0), Some(Mark::O));
        assert_eq!(game.last_move(), Some(0));
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let mut game = pvp();
        assert!(game.apply_move(4));
        let before = *game.board();
        assert!(!game.apply_move(4));
        assert_eq!(*game.board(), before);
        assert_eq!(game.current_mark(), Mark::O);
        assert_eq!(game.place_mark(4), Err("Cell is already marked".to_string()));
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut game = pvp();
        assert!(!game.apply_move(BOARD_CELLS));
        assert_eq!(*game.board(), Board::new());
    }

    #[test]
    fn test_moves_after_win_are_rejected() {
        let mut game = pvp();
        for index in [0, 3, 1, 4, 2] {
            assert!(game.apply_move(index));
        }
        assert_eq!(game.outcome(), Outcome::XWon);
        assert_eq!(game.status_message(), "X wins!");
        assert_eq!(game.winning_line().map(|l| l.cells), Some([0, 1, 2]));
        assert_eq!(game.current_mark(), Mark::X);

        let before = *game.board();
        assert!(!game.apply_move(8));
        assert_eq!(*game.board(), before);
    }

    #[test]
    fn test_draw_status() {
        let mut game = pvp();
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            assert!(game.apply_move(index));
        }
        assert_eq!(game.outcome(), Outcome::Draw);
        assert_eq!(game.status_message(), "The game is a draw.");
    }

    #[test]
    fn test_reset_after_finished_game() {
        let mut game = pvp();
        for index in [0, 3, 1, 4, 2] {
            game.apply_move(index);
        }
        assert!(game.is_over());

        game.reset();
        assert_eq!(*game.board(), Board::new());
        assert_eq!(game.outcome(), Outcome::Undecided);
        assert_eq!(game.current_mark(), HUMAN_MARK);
        assert_eq!(game.last_move(), None);
    }

    #[test]
    fn test_computer_replies_to_human_move() {
        let mut game = pvc(Difficulty::Hard);
        assert!(game.apply_move(0));
        assert_eq!(game.board().empty_count(), 7);
        assert_eq!(game.current_mark(), HUMAN_MARK);
        assert_eq!(game.board().cells().iter().filter(|&&m| m == COMPUTER_MARK).count(), 1);
    }

    #[test]
    fn test_human_moves_never_place_computer_mark() {
        for difficulty in Difficulty::ALL {
            for seed in 0..10 {
                let mut game = pvc(difficulty);
                let mut human_rng = SessionRng::new(seed);
                while !game.is_over() {
                    assert_eq!(game.current_mark(), HUMAN_MARK);
                    assert!(!game.is_computer_turn());
                    assert_eq!(game.status_message(), "X's turn");

                    let moves = get_available_moves(game.board());
                    let index = moves[human_rng.random_range(0..moves.len())];
                    assert!(game.apply_move(index));
                    assert_eq!(game.board().get(index), Some(HUMAN_MARK));

                    let computer_cells = game.board().cells().iter().filter(|&&m| m == COMPUTER_MARK).count();
                    let human_cells = game.board().cells().iter().filter(|&&m| m == HUMAN_MARK).count();
                    assert!(human_cells == computer_cells || human_cells == computer_cells + 1);
                }
            }
        }
    }

    #[test]
    fn test_computer_blocks_immediate_threat() {
        let mut game = pvc(Difficulty::Hard);
        game.apply_move(0);
        let reply = game.last_move().unwrap();
        // Threaten the top row unless the computer already sits on it.
        let threat = if reply == 1 { 3 } else { 1 };
        game.apply_move(threat);
        let block = if threat == 1 { 2 } else { 6 };
        assert_eq!(game.board().get(block), Some(COMPUTER_MARK));
    }

    #[test]
    fn test_computer_moves_first_when_configured() {
        let config = GameConfig {
            first_player: FirstPlayerMode::Computer,
            ..GameConfig::new(GameMode::PlayerVsComputer, Difficulty::Hard)
        };
        let mut game = TicTacToeGame::new(config, SessionRng::new(5));
        assert_eq!(game.board().empty_count(), 8);
        assert_eq!(game.current_mark(), HUMAN_MARK);

        game.reset();
        assert_eq!(game.board().empty_count(), 8);
        assert_eq!(game.board().get(0), Some(COMPUTER_MARK));
    }

    #[test]
    fn test_first_player_is_ignored_in_pvp() {
        let config = GameConfig {
            first_player: FirstPlayerMode::Computer,
            ..GameConfig::new(GameMode::PlayerVsPlayer, Difficulty::Hard)
        };
        let game = TicTacToeGame::new(config, SessionRng::new(5));
        assert_eq!(*game.board(), Board::new());
        assert_eq!(game.current_mark(), Mark::X);
    }

    #[test]
    fn test_configure_resets_board() {
        let mut game = pvp();
        game.apply_move(4);
        game.configure(GameMode::PlayerVsComputer, Difficulty::Easy);
        assert_eq!(*game.board(), Board::new());
        assert_eq!(game.config().mode, GameMode::PlayerVsComputer);
        assert_eq!(game.config().difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_set_mode_only_resets_on_change() {
        let mut game = pvp();
        game.apply_move(4);
        game.set_mode(GameMode::PlayerVsPlayer);
        assert_eq!(game.board().get(4), Some(Mark::X));

        game.set_mode(GameMode::PlayerVsComputer);
        assert_eq!(*game.board(), Board::new());
    }

    #[test]
    fn test_set_difficulty_always_resets() {
        let mut game = pvc(Difficulty::Medium);
        game.apply_move(4);
        game.set_difficulty(Difficulty::Medium);
        assert_eq!(*game.board(), Board::new());
    }

    #[test]
    fn test_hard_computer_never_loses_to_random_human() {
        for seed in 0..20 {
            let mut game = pvc(Difficulty::Hard);
            let mut human_rng = SessionRng::new(seed);
            while !game.is_over() {
                let moves = get_available_moves(game.board());
                let index = moves[human_rng.random_range(0..moves.len())];
                assert!(game.apply_move(index));
            }
            assert_ne!(game.outcome(), Outcome::XWon, "seed {}", seed);
        }
    }

    #[test]
    fn test_easy_game_always_finishes() {
        let mut game = pvc(Difficulty::Easy);
        let mut human_rng = SessionRng::new(9);
        let mut turns = 0;
        while !game.is_over() {
            let moves = get_available_moves(game.board());
            game.apply_move(moves[human_rng.random_range(0..moves.len())]);
            turns += 1;
        }
        assert!(turns <= 5);
        assert!(game.outcome().is_terminal());
    }
}
