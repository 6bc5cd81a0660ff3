//! Terminal falling-block puzzle game.
//!
//! The crate splits into a pure game-state engine ([`core`]) and a thin
//! terminal shell ([`input`], [`term`], the `blockfall` binary). The engine
//! owns the board, the active piece and the score, exposes discrete commands
//! (move, rotate, drop step) plus a read-only snapshot, and never performs
//! I/O. The shell wires a fixed-period drop timer and keyboard events into
//! those commands and paints snapshots.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
