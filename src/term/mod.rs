//! Terminal rendering module.
//!
//! Renders engine snapshots into a character framebuffer and flushes it to a
//! terminal backend. Pure view logic lives in [`game_view`] so it stays
//! unit-testable; only [`renderer`] touches the terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
