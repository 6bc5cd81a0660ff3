//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::term::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal view for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render a snapshot into a freshly cleared framebuffer (full repaint).
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Locked board cells.
        for y in 0..BOARD_HEIGHT as usize {
            for x in 0..BOARD_WIDTH as usize {
                if let Some(kind) = snap.board[y][x] {
                    self.fill_board_cell(&mut fb, start_x, start_y, x as u16, y as u16, kind);
                }
            }
        }

        // Active piece overlay.
        if let Some(active) = snap.active {
            for (dx, dy) in active.shape.offsets() {
                let x = active.x + dx;
                let y = active.y + dy;
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    self.fill_board_cell(
                        &mut fb,
                        start_x,
                        start_y,
                        x as u16,
                        y as u16,
                        active.shape.kind,
                    );
                }
            }
        }

        // Score line under the frame.
        let score_y = start_y + frame_h;
        fb.put_str(
            start_x,
            score_y,
            &format!("score: {}", snap.score),
            CellStyle::default(),
        );

        // Game-over banner across the middle of the board.
        if snap.game_over {
            let banner = " GAME OVER - press r ";
            let bx = start_x + frame_w.saturating_sub(banner.len() as u16) / 2;
            let by = start_y + frame_h / 2;
            let style = CellStyle {
                fg: Rgb::new(255, 80, 80),
                bg: Rgb::new(0, 0, 0),
                bold: true,
            };
            fb.put_str(bx, by, banner, style);
        }

        fb
    }

    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        kind: PieceKind,
    ) {
        let style = CellStyle {
            fg: kind_color(kind),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        let px = start_x + 1 + x * self.cell_w;
        let py = start_y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
    }

    fn draw_border(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        style: CellStyle,
    ) {
        if w < 2 || h < 2 {
            return;
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }
}

fn kind_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0, 240, 240),
        PieceKind::O => Rgb::new(240, 240, 0),
        PieceKind::T => Rgb::new(160, 0, 240),
        PieceKind::S => Rgb::new(0, 240, 0),
        PieceKind::Z => Rgb::new(240, 0, 0),
        PieceKind::J => Rgb::new(0, 0, 240),
        PieceKind::L => Rgb::new(240, 160, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameEngine, SequenceSource};

    fn snapshot() -> GameSnapshot {
        let mut engine =
            GameEngine::with_source(Box::new(SequenceSource::new(vec![PieceKind::O])));
        engine.start();
        engine.snapshot()
    }

    #[test]
    fn test_render_paints_active_piece() {
        let view = GameView::default();
        let fb = view.render(&snapshot(), Viewport::new(40, 30));

        let filled = fb.cells().iter().filter(|c| c.ch == '█').count();
        // O piece is 2x2 board cells, each 2 columns wide.
        assert_eq!(filled, 8);
    }

    #[test]
    fn test_render_respects_cell_size() {
        let view = GameView::new(1, 1);
        let fb = view.render(&snapshot(), Viewport::new(40, 30));

        let filled = fb.cells().iter().filter(|c| c.ch == '█').count();
        // One terminal column per board cell.
        assert_eq!(filled, 4);
    }

    #[test]
    fn test_render_shows_game_over_banner() {
        let mut snap = snapshot();
        snap.game_over = true;

        let view = GameView::default();
        let fb = view.render(&snap, Viewport::new(40, 30));
        let text: String = fb.cells().iter().map(|c| c.ch).collect();
        assert!(text.contains("GAME OVER"));
    }

    #[test]
    fn test_render_shows_score() {
        let mut snap = snapshot();
        snap.score = 40;

        let view = GameView::default();
        let fb = view.render(&snap, Viewport::new(40, 30));
        let text: String = fb.cells().iter().map(|c| c.ch).collect();
        assert!(text.contains("score: 40"));
    }
}
