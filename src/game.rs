//! Game session
//!
//! Tracks whose turn it is, the pass counter and the move history on top of a
//! [`Board`]. Both front ends drive their turn loop through [`Game`].

use crate::board::{Board, Pos, Side};
use crate::error::RuleError;
use crate::rules::{self, GameOutcome};

/// What happened when a stone was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub pos: Pos,
    pub side: Side,
    /// Opponent stones turned over by the move
    pub flipped: u32,
}

/// A game in progress.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Side,
    consecutive_passes: u32,
    moves: Vec<(Pos, Side)>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard starting position, Black to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Side::Black,
            consecutive_passes: 0,
            moves: Vec::new(),
        }
    }

    /// Resume from an arbitrary position.
    pub fn from_position(board: Board, to_move: Side) -> Self {
        Self {
            board,
            to_move,
            consecutive_passes: 0,
            moves: Vec::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    #[inline]
    pub fn consecutive_passes(&self) -> u32 {
        self.consecutive_passes
    }

    /// Placed stones in order. Passes are not recorded.
    #[inline]
    pub fn moves(&self) -> &[(Pos, Side)] {
        &self.moves
    }

    /// Most recent placement, if any.
    pub fn last_move(&self) -> Option<Pos> {
        self.moves.last().map(|&(pos, _)| pos)
    }

    /// Legal moves for the side to move, row-major.
    pub fn legal_moves(&self) -> Vec<Pos> {
        rules::legal_moves(&self.board, self.to_move)
    }

    /// The side to move has nothing to play and the game is not over.
    pub fn must_pass(&self) -> bool {
        !self.is_over() && !rules::has_legal_move(&self.board, self.to_move)
    }

    /// Place a stone for the side to move.
    pub fn play(&mut self, pos: Pos) -> Result<TurnReport, RuleError> {
        if self.is_over() {
            log::warn!("rejected {}: game is over", pos);
            return Err(RuleError::GameOver);
        }
        let side = self.to_move;
        let before = self.board.count(side.opponent());
        self.board = rules::try_apply(&self.board, pos, side).map_err(|e| {
            log::warn!("rejected move: {}", e);
            e
        })?;
        let flipped = before - self.board.count(side.opponent());

        self.moves.push((pos, side));
        self.consecutive_passes = 0;
        self.to_move = side.opponent();

        if self.is_over() {
            self.log_result();
        }
        Ok(TurnReport { pos, side, flipped })
    }

    /// Pass the turn. Only allowed when the side to move has no legal move.
    pub fn pass(&mut self) -> Result<(), RuleError> {
        if self.is_over() {
            return Err(RuleError::GameOver);
        }
        let side = self.to_move;
        if rules::has_legal_move(&self.board, side) {
            log::warn!("{} tried to pass with legal moves available", side);
            return Err(RuleError::PassNotAllowed(side));
        }
        log::info!("{} has no legal move and passes", side);
        self.consecutive_passes += 1;
        self.to_move = side.opponent();

        if self.is_over() {
            self.log_result();
        }
        Ok(())
    }

    pub fn is_over(&self) -> bool {
        let black = rules::legal_moves(&self.board, Side::Black);
        let white = rules::legal_moves(&self.board, Side::White);
        rules::is_game_over(&black, &white, self.consecutive_passes)
    }

    /// Result by stone count. Meaningful once [`Game::is_over`] holds.
    pub fn outcome(&self) -> GameOutcome {
        rules::outcome(&self.board)
    }

    /// (black, white)
    pub fn stone_counts(&self) -> (u32, u32) {
        self.board.stone_counts()
    }

    fn log_result(&self) {
        let (black, white) = self.stone_counts();
        match self.outcome() {
            GameOutcome::Winner(side) => {
                log::info!("game over: {} wins {}-{}", side, black.max(white), black.min(white))
            }
            GameOutcome::Draw => log::info!("game over: draw {}-{}", black, white),
        }
    }
}
