use crate::games::SessionRng;
use super::board::{Board, get_available_moves};
use super::game_state::TicTacToeGame;
use super::types::{Difficulty, Mark};
use super::win_detector::check_win;

/// Ply cap used by [`Difficulty::Medium`] unless the config overrides it.
pub const MEDIUM_DEPTH_LIMIT: usize = 3;

const WIN_SCORE: i32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub best_move: Option<usize>,
}

impl SearchResult {
    fn terminal(score: i32) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
    pub medium_depth_limit: usize,
}

impl BotInput {
    pub fn new(board: Board, bot_mark: Mark) -> Self {
        Self {
            board,
            bot_mark,
            medium_depth_limit: MEDIUM_DEPTH_LIMIT,
        }
    }

    pub fn from_game_state(game: &TicTacToeGame) -> Self {
        Self {
            board: *game.board(),
            bot_mark: game.current_mark(),
            medium_depth_limit: game.config().medium_depth_limit,
        }
    }
}

pub fn calculate_move(
    difficulty: Difficulty,
    input: BotInput,
    rng: &mut SessionRng,
) -> Option<usize> {
    let available_moves = get_available_moves(&input.board);
    if available_moves.is_empty() {
        return None;
    }

    let depth_limit = match difficulty {
        Difficulty::Easy => return calculate_random_move(&available_moves, rng),
        Difficulty::Medium => Some(input.medium_depth_limit),
        Difficulty::Hard => None,
    };

    best_move(&input.board, input.bot_mark, true, depth_limit)
        .best_move
        .or_else(|| calculate_random_move(&available_moves, rng))
}

fn calculate_random_move(available_moves: &[usize], rng: &mut SessionRng) -> Option<usize> {
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

/// Minimax over a private copy of `board`; the caller's board is left untouched.
///
/// Scores are from `bot_mark`'s point of view: a win found `d` plies below
/// this call scores `10 - d`, a loss `d - 10`, a draw or an unexplored
/// position past `depth_limit` scores 0.
pub fn best_move(
    board: &Board,
    bot_mark: Mark,
    is_maximizing: bool,
    depth_limit: Option<usize>,
) -> SearchResult {
    let mut scratch = *board;
    minimax(&mut scratch, bot_mark, is_maximizing, depth_limit, 0)
}

pub(crate) fn minimax(
    board: &mut Board,
    bot_mark: Mark,
    is_maximizing: bool,
    depth_limit: Option<usize>,
    depth: usize,
) -> SearchResult {
    let Some(opponent_mark) = bot_mark.opponent() else {
        return SearchResult::terminal(0);
    };

    let ply = depth as i32;
    match check_win(board) {
        Some(winner) if winner == bot_mark => return SearchResult::terminal(WIN_SCORE - ply),
        Some(_) => return SearchResult::terminal(ply - WIN_SCORE),
        None if board.is_full() => return SearchResult::terminal(0),
        None => {}
    }

    if depth_limit.is_some_and(|limit| depth >= limit) {
        return SearchResult::terminal(0);
    }

    let mark = if is_maximizing { bot_mark } else { opponent_mark };
    let mut best: Option<SearchResult> = None;

    for index in get_available_moves(board) {
        board.set(index, mark);
        let score = minimax(board, bot_mark, !is_maximizing, depth_limit, depth + 1).score;
        board.set(index, Mark::Empty);

        let improves = match best {
            None => true,
            Some(current) if is_maximizing => score > current.score,
            Some(current) => score < current.score,
        };
        if improves {
            best = Some(SearchResult {
                score,
                best_move: Some(index),
            });
        }
    }

    best.unwrap_or(SearchResult::terminal(0))
}
