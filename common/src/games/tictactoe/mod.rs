mod board;
mod bot_controller;
mod game_state;
mod settings;
mod types;
mod win_detector;

pub use board::{BOARD_CELLS, BOARD_SIDE, Board, get_available_moves, to_index, to_position};
pub use bot_controller::{BotInput, MEDIUM_DEPTH_LIMIT, SearchResult, best_move, calculate_move};
pub use game_state::{COMPUTER_MARK, HUMAN_MARK, TicTacToeGame};
pub use settings::GameConfig;
pub use types::{Difficulty, FirstPlayerMode, GameMode, Mark, Outcome, WinningLine};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line, check_winner};
