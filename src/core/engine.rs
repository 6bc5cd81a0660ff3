//! Engine module - orchestrates one play session
//!
//! Owns the board, the active piece, and the score. The shell drives it with
//! discrete commands (move, rotate, drop step) and reads snapshots back; the
//! engine never touches I/O.

use crate::core::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::core::{Board, PieceSource, Shape, UniformSource};
use crate::types::{GameAction, POINTS_PER_LINE, SPAWN_X, SPAWN_Y};

/// Active falling piece: a working shape copy plus its board-space offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a new piece at the spawn position
    pub fn spawn(shape: Shape) -> Self {
        Self {
            shape,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }
}

/// Lock/game-over event, consumed by the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A piece merged into the board
    Locked { lines_cleared: u32, points: u32 },
    /// A fresh spawn collided; carries the score before the reset
    GameOver { final_score: u32 },
}

/// Complete state of one play session
pub struct GameEngine {
    board: Board,
    active: Option<ActivePiece>,
    score: u32,
    game_over: bool,
    started: bool,
    source: Box<dyn PieceSource>,
    /// Last lock/game-over event (consumed by the shell).
    last_event: Option<GameEvent>,
}

impl GameEngine {
    /// Create a new engine with the default uniform random piece source
    pub fn new(seed: u32) -> Self {
        Self::with_source(Box::new(UniformSource::new(seed)))
    }

    /// Create a new engine with an injected piece source
    pub fn with_source(source: Box<dyn PieceSource>) -> Self {
        Self {
            board: Board::new(),
            active: None,
            score: 0,
            game_over: false,
            started: false,
            source,
            last_event: None,
        }
    }

    /// Start the session and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for test harnesses and scenario setup
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Whether `shape` collides at board offset (x, y).
    ///
    /// Collision is horizontal out-of-range, past the bottom row, or overlap
    /// with an occupied cell. Cells above row 0 never collide (above-board
    /// exemption): a shape may extend past the top edge while spawning or
    /// rotating without ending the game.
    pub fn collides(&self, shape: &Shape, x: i8, y: i8) -> bool {
        for (px, py) in shape.offsets() {
            let bx = x + px;
            let by = y + py;
            if bx < 0 || bx >= self.board.width() as i8 {
                return true;
            }
            if by >= self.board.height() as i8 {
                return true;
            }
            if by < 0 {
                continue;
            }
            if self.board.is_occupied(bx, by) {
                return true;
            }
        }
        false
    }

    /// Spawn the next piece at (3, 0).
    ///
    /// Returns false when the fresh piece collides at spawn, which is the
    /// game-over condition. The board is left untouched either way; the
    /// caller handles the game-over transition.
    fn spawn(&mut self) -> bool {
        let shape = Shape::template(self.source.next_kind());
        let piece = ActivePiece::spawn(shape);

        if self.collides(&piece.shape, piece.x, piece.y) {
            self.game_over = true;
            self.active = None;
            return false;
        }

        self.active = Some(piece);
        true
    }

    /// Game-over handler: notify, then reset board and score immediately.
    /// The session stays over until an explicit restart.
    fn enter_game_over(&mut self) {
        self.last_event = Some(GameEvent::GameOver {
            final_score: self.score,
        });
        self.board.reset();
        self.score = 0;
    }

    /// Shift the active piece horizontally; dir is -1 or +1.
    /// A colliding shift is rolled back with no further signal.
    pub fn move_piece(&mut self, dir: i8) -> bool {
        if self.game_over {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        if self.collides(&active.shape, active.x + dir, active.y) {
            return false;
        }

        self.active = Some(ActivePiece {
            x: active.x + dir,
            ..active
        });
        true
    }

    /// Rotate the active piece clockwise.
    /// A colliding rotation is discarded and the prior shape kept. No kicks.
    pub fn rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let rotated = active.shape.rotated();
        if self.collides(&rotated, active.x, active.y) {
            return false;
        }

        self.active = Some(ActivePiece {
            shape: rotated,
            ..active
        });
        true
    }

    /// One gravity step: the fixed-period timer and the soft-drop command
    /// both land here with identical semantics.
    ///
    /// Returns true when the step locked the piece.
    pub fn tick(&mut self) -> bool {
        if self.game_over || !self.started {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        if !self.collides(&active.shape, active.x, active.y + 1) {
            self.active = Some(ActivePiece {
                y: active.y + 1,
                ..active
            });
            return false;
        }

        // Blocked below: lock at the last valid position
        self.lock(active);
        true
    }

    /// Merge the piece into the board, clear full rows, score, and respawn
    fn lock(&mut self, piece: ActivePiece) {
        for (px, py) in piece.shape.offsets() {
            self.board
                .set(piece.x + px, piece.y + py, Some(piece.shape.kind));
        }
        self.active = None;

        let cleared = self.board.clear_full_rows();
        let lines_cleared = cleared.len() as u32;
        let points = lines_cleared * POINTS_PER_LINE;
        self.score += points;

        self.last_event = Some(GameEvent::Locked {
            lines_cleared,
            points,
        });

        if !self.spawn() {
            self.enter_game_over();
        }
    }

    /// Re-enter the spawning state after a game over (or start a fresh
    /// session at any point)
    pub fn restart(&mut self) {
        self.board.reset();
        self.score = 0;
        self.game_over = false;
        self.started = true;
        self.last_event = None;
        self.spawn();
    }

    /// Apply a shell command
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_piece(-1),
            GameAction::MoveRight => self.move_piece(1),
            GameAction::SoftDrop => self.tick(),
            GameAction::Rotate => self.rotate(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Take and clear the last lock/game-over event
    pub fn take_last_event(&mut self) -> Option<GameEvent> {
        self.last_event.take()
    }

    /// Write the render state into an existing snapshot
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.score = self.score;
        out.game_over = self.game_over;
    }

    /// Read-only render state: everything the shell needs to paint a frame
    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
