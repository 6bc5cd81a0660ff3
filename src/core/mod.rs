//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI or I/O.

pub mod board;
pub mod engine;
pub mod rng;
pub mod shapes;
pub mod snapshot;

// Re-export commonly used types
pub use board::Board;
pub use engine::{ActivePiece, GameEngine, GameEvent};
pub use rng::{PieceSource, SequenceSource, SimpleRng, UniformSource};
pub use shapes::Shape;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
