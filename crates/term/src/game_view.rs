//! GameView: maps a [`core::GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Three screens share one view: the size-select screen, the live board
//! (with score panel), and the game-over overlay on top of the board.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::GameStatus;

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

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Board cell width in terminal columns. Wide enough for a 4-digit tile.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 6x3 keeps tiles roughly square in typical terminal glyphs and
        // fits "2048" with a margin.
        Self {
            cell_w: 6,
            cell_h: 3,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when
    /// the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell::default());

        if snap.status == GameStatus::Select {
            self.render_select(snap, viewport, fb);
            return;
        }

        self.render_board(snap, viewport, fb);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn render_select(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        let title = CellStyle {
            fg: Rgb::new(240, 220, 80),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let label = CellStyle::default();
        let dim = CellStyle {
            dim: true,
            ..CellStyle::default()
        };

        let mid_y = viewport.height / 2;
        fb.put_str_centered(0, mid_y.saturating_sub(3), viewport.width, "2 0 4 8", title);

        // "< 4 x 4 >" size picker line.
        let mut picker = String::with_capacity(16);
        picker.push_str("<  ");
        picker.push_str(&snap.size.to_string());
        picker.push_str(" x ");
        picker.push_str(&snap.size.to_string());
        picker.push_str("  >");
        fb.put_str_centered(0, mid_y, viewport.width, &picker, label);

        fb.put_str_centered(
            0,
            mid_y + 2,
            viewport.width,
            "left/right: size   enter: start   q: quit",
            dim,
        );
    }

    fn render_board(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        let size = snap.size as u16;
        let board_px_w = size * self.cell_w;
        let board_px_h = size * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(30, 30, 40),
            bold: false,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for y in 0..size {
            for x in 0..size {
                let rank = snap.board[y as usize][x as usize];
                if rank > 0 {
                    let fresh = snap.last_seed == Some((x as u8, y as u8));
                    self.draw_tile(fb, start_x, start_y, x, y, rank, fresh);
                } else {
                    self.draw_empty_cell(fb, start_x, start_y, x, y);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if snap.status == GameStatus::GameOver {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle {
            fg: Rgb::new(90, 90, 100),
            bg: Rgb::new(30, 30, 40),
            bold: false,
            dim: true,
        };
        let px = start_x + 1 + x * self.cell_w;
        let py = start_y + 1 + y * self.cell_h;
        fb.put_char(px + self.cell_w / 2, py + self.cell_h / 2, '·', style);
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        rank: u8,
        fresh: bool,
    ) {
        let style = CellStyle {
            fg: Rgb::new(30, 30, 30),
            bg: rank_color(rank),
            bold: rank >= 7,
            dim: false,
        };
        let px = start_x + 1 + x * self.cell_w;
        let py = start_y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);

        let value = 1u32 << rank;
        let mut digits: u16 = 1;
        let mut v = value;
        while v >= 10 {
            v /= 10;
            digits += 1;
        }
        let vx = px + self.cell_w.saturating_sub(digits) / 2;
        let vy = py + self.cell_h / 2;
        fb.put_u32(vx, vy, value, style);

        if fresh && self.cell_w >= 2 {
            // Mark the freshly seeded tile.
            fb.put_char(px, py, '*', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 10 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let dim = CellStyle { dim: true, ..value };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.move_count, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "UNDO", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, if snap.is_cancelable { "u" } else { "-" }, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "esc: exit", dim);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str_centered(start_x, mid_y, frame_w, text, style);
    }
}

/// Background color for a tile rank, following the classic 2048 ramp from
/// beige toward orange/red, then gold for 2048 and beyond.
fn rank_color(rank: u8) -> Rgb {
    match rank {
        1 => Rgb::new(238, 228, 218),  // 2
        2 => Rgb::new(237, 224, 200),  // 4
        3 => Rgb::new(242, 177, 121),  // 8
        4 => Rgb::new(245, 149, 99),   // 16
        5 => Rgb::new(246, 124, 95),   // 32
        6 => Rgb::new(246, 94, 59),    // 64
        7 => Rgb::new(237, 207, 114),  // 128
        8 => Rgb::new(237, 204, 97),   // 256
        9 => Rgb::new(237, 200, 80),   // 512
        10 => Rgb::new(237, 197, 63),  // 1024
        _ => Rgb::new(237, 194, 46),   // 2048+
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_2048_types::GameStatus;

    fn snapshot_with_board() -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        snap.status = GameStatus::Playing;
        snap.size = 4;
        snap.board[0][0] = 1;
        snap.board[2][3] = 5;
        snap.score = 128;
        snap.move_count = 9;
        snap
    }

    fn find_str(fb: &FrameBuffer, needle: &str) -> bool {
        for y in 0..fb.height() {
            let row: String = (0..fb.width()).map(|x| fb.get(x, y).unwrap().ch).collect();
            if row.contains(needle) {
                return true;
            }
        }
        false
    }

    #[test]
    fn test_select_screen_shows_size_picker() {
        let mut snap = GameSnapshot::default();
        snap.size = 6;
        let fb = GameView::default().render(&snap, Viewport::new(80, 24));

        assert!(find_str(&fb, "2 0 4 8"));
        assert!(find_str(&fb, "<  6 x 6  >"));
    }

    #[test]
    fn test_board_shows_tile_values_and_score() {
        let snap = snapshot_with_board();
        let fb = GameView::default().render(&snap, Viewport::new(80, 30));

        // Rank 1 renders as 2, rank 5 as 32.
        assert!(find_str(&fb, "2"));
        assert!(find_str(&fb, "32"));
        assert!(find_str(&fb, "SCORE"));
        assert!(find_str(&fb, "128"));
        assert!(find_str(&fb, "MOVES"));
    }

    #[test]
    fn test_game_over_overlay() {
        let mut snap = snapshot_with_board();
        snap.status = GameStatus::GameOver;
        let fb = GameView::default().render(&snap, Viewport::new(80, 30));
        assert!(find_str(&fb, "GAME OVER"));
    }

    #[test]
    fn test_no_overlay_while_playing() {
        let snap = snapshot_with_board();
        let fb = GameView::default().render(&snap, Viewport::new(80, 30));
        assert!(!find_str(&fb, "GAME OVER"));
    }

    #[test]
    fn test_render_survives_tiny_viewport() {
        let snap = snapshot_with_board();
        // Must not panic even when nothing fits.
        let _ = GameView::default().render(&snap, Viewport::new(5, 3));
    }
}
