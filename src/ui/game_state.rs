//! Game state management for the Othello GUI

use crate::config::EngineConfig;
use crate::{AIEngine, Game, GameOutcome, MoveResult, Pos, Side};
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::{Duration, Instant};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human_side: Side },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE {
            human_side: Side::Black,
        }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game state
pub struct GameState {
    pub game: Game,
    pub mode: GameMode,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,

    engine_config: EngineConfig,
}

impl GameState {
    pub fn new(mode: GameMode, engine_config: EngineConfig) -> Self {
        Self {
            game: Game::new(),
            mode,
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            engine_config,
        }
    }

    pub fn reset(&mut self) {
        self.game = Game::new();
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.move_timer = MoveTimer::default();
        self.suggested_move = None;
        self.message = None;
    }

    #[inline]
    pub fn current_turn(&self) -> Side {
        self.game.to_move()
    }

    /// Final result once neither side can continue
    pub fn game_over(&self) -> Option<GameOutcome> {
        self.game.is_over().then(|| self.game.outcome())
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_side } => self.current_turn() == human_side,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_side } => self.current_turn() != human_side,
            GameMode::PvP => false,
        }
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Legal moves to hint on the board for a human player
    pub fn hint_moves(&self) -> Vec<Pos> {
        if self.is_human_turn() && !self.is_ai_thinking() {
            self.game.legal_moves()
        } else {
            Vec::new()
        }
    }

    /// Attempt to place a stone at the given position
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if self.game.is_over() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.execute_move(pos).map_err(|e| e.to_string())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, pos: Pos) -> Result<(), crate::RuleError> {
        self.game.play(pos)?;
        self.suggested_move = None;
        self.move_timer.stop();
        self.message = None;
        self.resolve_passes();
        if !self.game.is_over() {
            self.move_timer.start();
        }
        Ok(())
    }

    /// Pass for every side that has no legal move, leaving a note for the player.
    pub fn resolve_passes(&mut self) {
        while self.game.must_pass() {
            let side = self.game.to_move();
            if self.game.pass().is_err() {
                break;
            }
            self.message = Some(format!("{} has no legal move and passes", side.name()));
        }
    }

    /// Start AI thinking
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game.is_over() {
            return;
        }

        let board = *self.game.board();
        let side = self.current_turn();
        let config = self.engine_config.clone();

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::from_config(&config);
            let result = engine.get_move_with_stats(&board, side);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
            } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(std::sync::mpsc::TryRecvError::Empty) => None,
                Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.last_ai_result = Some(move_result.clone());
            self.move_timer.set_ai_time(elapsed);

            match move_result.best_move {
                Some(pos) => {
                    if let Err(e) = self.execute_move(pos) {
                        self.message = Some(format!("AI move rejected: {e}"));
                    }
                }
                None => self.resolve_passes(),
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Request move suggestion for PvP mode
    pub fn request_suggestion(&mut self) {
        if self.game.is_over() || self.is_ai_thinking() {
            return;
        }

        // Quick suggestion at a shallower depth
        let mut engine = AIEngine::from_config(&self.engine_config);
        engine.set_depth(self.engine_config.depth.min(3));
        let result = engine.get_move_with_stats(self.game.board(), self.current_turn());

        self.suggested_move = result.best_move;
        self.last_ai_result = Some(result);
    }

    pub fn engine_config(&self) -> &EngineConfig {
        &self.engine_config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pvp() -> GameState {
        GameState::new(GameMode::PvP, EngineConfig::default())
    }

    #[test]
    fn test_turn_ownership() {
        let state = GameState::new(
            GameMode::PvE {
                human_side: Side::White,
            },
            EngineConfig::default(),
        );
        assert!(state.is_ai_turn());
        assert!(!state.is_human_turn());
        assert!(state.hint_moves().is_empty());
    }

    #[test]
    fn test_human_move_and_errors() {
        let mut state = pvp();
        assert_eq!(state.hint_moves().len(), 4);
        assert!(state.try_place_stone(Pos::new(0, 0)).is_err());
        assert!(state.try_place_stone(Pos::new(2, 3)).is_ok());
        assert_eq!(state.current_turn(), Side::White);
        assert_eq!(state.game.last_move(), Some(Pos::new(2, 3)));
        assert!(state.game_over().is_none());
    }

    #[test]
    fn test_suggestion_is_legal() {
        let mut state = pvp();
        state.request_suggestion();
        let pos = state.suggested_move.unwrap();
        assert!(state.game.legal_moves().contains(&pos));
    }

    #[test]
    fn test_move_timer_records_last_move() {
        let mut state = pvp();
        assert!(state.move_timer.last_move_duration.is_none());
        state.try_place_stone(Pos::new(2, 3)).unwrap();
        assert!(state.move_timer.last_move_duration.is_some());
        // Restarted for the next player
        assert!(state.move_timer.start_time.is_some());
    }

    #[test]
    fn test_reset() {
        let mut state = pvp();
        state.try_place_stone(Pos::new(2, 3)).unwrap();
        state.reset();
        assert_eq!(state.game.stone_counts(), (2, 2));
        assert_eq!(state.current_turn(), Side::Black);
    }
}
