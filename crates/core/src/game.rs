//! Game session - ties the board, clock and pointer handling together
//!
//! The session is what the terminal front end drives each frame:
//!
//! - **Pointer moved**: hover follows the pointer
//! - **Pointer released on a highlighted tile** with a piece selected: the
//!   move is applied and the selection cleared
//! - **Any other release**: the tile under the pointer becomes the sole selection
//!
//! Rejected moves are reported through the returned `Result` and recorded on
//! the info line; they never end the session.

use tracing::{debug, info, warn};

use crate::board::{Board, MoveOutcome};
use crate::clock::GameClock;
use crate::interaction::BoardGeometry;
use crate::types::{ChessError, GameAction, PointerEvent, PointerKind, Position, DEFAULT_CLOCK_MS};

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    clock: GameClock,
    white_name: String,
    black_name: String,
    info: String,
}

impl Game {
    pub fn new(
        white_name: impl Into<String>,
        black_name: impl Into<String>,
        clock_ms: u32,
    ) -> Self {
        let white_name = white_name.into();
        let black_name = black_name.into();
        info!(white = %white_name, black = %black_name, clock_ms, "new game");
        Self {
            board: Board::with_players(white_name.clone(), black_name.clone()),
            clock: GameClock::new(clock_ms),
            white_name,
            black_name,
            info: String::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    /// Last move or error, for the status line
    pub fn info(&self) -> &str {
        &self.info
    }

    /// Route a pointer event through the interaction state machine.
    ///
    /// Returns the applied move when a release completes one.
    pub fn handle_pointer(
        &mut self,
        event: PointerEvent,
        geometry: &BoardGeometry,
    ) -> Result<Option<MoveOutcome>, ChessError> {
        match event.kind {
            PointerKind::Moved => {
                self.board.hover_at(geometry, event.x, event.y);
                Ok(None)
            }
            PointerKind::Released => {
                let Some(target) = geometry.position_at(event.x, event.y) else {
                    debug!(x = event.x, y = event.y, "release outside board ignored");
                    return Ok(None);
                };

                match self.board.selected() {
                    Some(from) if self.board.tile_at(target).is_potential_move() => {
                        self.make_move(from, target).map(Some)
                    }
                    _ => {
                        self.board.select(target);
                        Ok(None)
                    }
                }
            }
        }
    }

    fn make_move(&mut self, from: Position, to: Position) -> Result<MoveOutcome, ChessError> {
        match self.board.apply_move(from, to) {
            Ok(outcome) => {
                self.board.clear_selection();
                let piece = self.board.piece(outcome.piece);
                let sep = if outcome.captured.is_some() { 'x' } else { '-' };
                self.info = format!("{}{}{}{}", piece.notation(), from, sep, to);
                Ok(outcome)
            }
            Err(err) => {
                warn!(%err, "move failed");
                self.info = err.to_string();
                Err(err)
            }
        }
    }

    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::Restart => self.restart(),
            GameAction::ToggleClock => self.clock.toggle_pause(),
        }
    }

    /// Fresh standard layout, same players, full clock.
    pub fn restart(&mut self) {
        self.board = Board::with_players(self.white_name.clone(), self.black_name.clone());
        self.clock.reset();
        self.info.clear();
        info!("game restarted");
    }

    /// Advance the clock by one fixed timestep.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.clock.tick(elapsed_ms) {
            info!("clock expired");
            self.info = "time up".to_string();
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new("White", "Black", DEFAULT_CLOCK_MS)
    }
}
