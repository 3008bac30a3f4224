//! GameView: maps a `core::Game` into a terminal framebuffer.
//!
//! This module is pure (no I/O). The same [`BoardGeometry`] it draws with is
//! handed to the session to resolve pointer events, so what is under the
//! mouse is always what was drawn there.

use crate::core::{Board, BoardGeometry, Game, Tile};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, DEFAULT_TILE_HEIGHT, DEFAULT_TILE_WIDTH};

const DARK_TILE: Rgb = Rgb::ansi(235);
const LIGHT_TILE: Rgb = Rgb::ansi(247);
const POTENTIAL_MOVE: Rgb = Rgb::ansi(42);
const SELECTED: Rgb = Rgb::ansi(6);
const HOVERED: Rgb = Rgb::ansi(2);
const LABEL_FG: Rgb = Rgb::ansi(240);
const WHITE_PIECE: Rgb = Rgb::ansi(15);
const BLACK_PIECE: Rgb = Rgb::ansi(243);
const BORDER: Rgb = Rgb::ansi(245);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// Side panel is skipped when narrower than this.
const MIN_PANEL_W: u16 = 12;

const HELP: &str = "q quit  r restart  p pause";

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

/// Board renderer with a fixed tile size in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    tile_w: u16,
    tile_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(DEFAULT_TILE_WIDTH, DEFAULT_TILE_HEIGHT)
    }
}

impl GameView {
    /// Tile dimensions are clamped to at least one cell.
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w: tile_w.max(1),
            tile_h: tile_h.max(1),
        }
    }

    /// Where the 8x8 grid lands for this viewport: centered, inside a
    /// one-cell border.
    pub fn geometry(&self, viewport: Viewport) -> BoardGeometry {
        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;
        BoardGeometry::new(start_x + 1, start_y + 1, self.tile_w, self.tile_h)
    }

    fn frame_size(&self) -> (u16, u16) {
        (
            self.tile_w.saturating_mul(8).saturating_add(2),
            self.tile_h.saturating_mul(8).saturating_add(2),
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, game: &Game, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let geom = self.geometry(viewport);
        let (frame_w, frame_h) = self.frame_size();
        let frame_x = geom.origin_x.saturating_sub(1);
        let frame_y = geom.origin_y.saturating_sub(1);

        draw_border(fb, frame_x, frame_y, frame_w, frame_h);

        let board = game.board();
        for tile in board.tiles() {
            self.draw_tile(fb, &geom, board, tile);
        }

        let help_y = frame_y.saturating_add(frame_h);
        if help_y < viewport.height {
            let dim = CellStyle::new(LABEL_FG, SCREEN_BG);
            fb.put_str(frame_x, help_y, HELP, dim);
        }

        self.draw_side_panel(fb, game, viewport, frame_x.saturating_add(frame_w), frame_y);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &Game, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, geom: &BoardGeometry, board: &Board, tile: &Tile) {
        let (x, y) = geom.tile_origin(tile.position());
        let bg = tile_background(tile);
        fb.fill_rect(x, y, self.tile_w, self.tile_h, ' ', CellStyle::new(LABEL_FG, bg));

        // Coordinate labels share the top row with nothing else, so they are
        // dropped when the tile is a single row tall.
        if self.tile_h > 1 {
            let (file, rank) = tile.edge_label();
            let label = [file, rank].into_iter().flatten();
            for (dx, ch) in (0..self.tile_w).zip(label) {
                fb.put_char(x.saturating_add(dx), y, ch, CellStyle::new(LABEL_FG, bg));
            }
        }

        if let Some(id) = tile.occupant() {
            let piece = board.piece(id);
            let fg = match piece.color() {
                Color::White => WHITE_PIECE,
                Color::Black => BLACK_PIECE,
            };
            fb.put_str(
                x.saturating_add(self.tile_w / 2),
                y.saturating_add(self.tile_h / 2),
                piece.glyph(),
                CellStyle::new(fg, bg).bold(),
            );
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        game: &Game,
        viewport: Viewport,
        frame_right: u16,
        top: u16,
    ) {
        let panel_x = frame_right.saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < MIN_PANEL_W {
            return;
        }

        let label = CellStyle::new(Rgb::ansi(252), SCREEN_BG).bold();
        let value = CellStyle::new(Rgb::ansi(250), SCREEN_BG);
        let board = game.board();
        let mut y = top;

        fb.put_str(panel_x, y, "CLOCK", label);
        y += 1;
        fb.put_str(panel_x, y, &game.clock().to_string(), value);
        if game.clock().is_paused() {
            fb.put_str(panel_x + 6, y, "paused", value);
        }
        y += 2;

        fb.put_str(panel_x, y, "PLAYERS", label);
        y += 1;
        for player in board.players() {
            let marker = if player.is_active { '>' } else { ' ' };
            fb.put_char(panel_x, y, marker, value);
            fb.put_str(panel_x + 2, y, &player.name, value);
            y += 1;
        }
        y += 1;

        fb.put_str(panel_x, y, "HOVER", label);
        y += 1;
        put_square(fb, panel_x, y, board.hovered(), value);
        y += 2;

        fb.put_str(panel_x, y, "SELECTED", label);
        y += 1;
        put_square(fb, panel_x, y, board.selected(), value);
        if let Some(piece) = board.selected().and_then(|p| board.piece_at(p).ok()) {
            fb.put_str(panel_x + 3, y, piece.glyph(), value);
        }
        y += 2;

        if !game.info().is_empty() {
            fb.put_str(panel_x, y, "INFO", label);
            fb.put_str(panel_x, y + 1, game.info(), value);
        }
    }
}

/// Highlight precedence: potential move, then selection, then hover, then parity.
fn tile_background(tile: &Tile) -> Rgb {
    if tile.is_potential_move() {
        POTENTIAL_MOVE
    } else if tile.is_selected() {
        SELECTED
    } else if tile.is_hovered() {
        HOVERED
    } else if tile.is_dark() {
        DARK_TILE
    } else {
        LIGHT_TILE
    }
}

fn put_square(
    fb: &mut FrameBuffer,
    x: u16,
    y: u16,
    square: Option<crate::types::Position>,
    style: CellStyle,
) {
    match square {
        Some(p) => fb.put_str(x, y, &p.to_string(), style),
        None => fb.put_char(x, y, '-', style),
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let style = CellStyle::new(BORDER, SCREEN_BG);
    let right = x.saturating_add(w - 1);
    let bottom = y.saturating_add(h - 1);

    fb.put_char(x, y, '╭', style);
    fb.put_char(right, y, '╮', style);
    fb.put_char(x, bottom, '╰', style);
    fb.put_char(right, bottom, '╯', style);
    for cx in x + 1..right.min(fb.width()) {
        fb.put_char(cx, y, '─', style);
        fb.put_char(cx, bottom, '─', style);
    }
    for cy in y + 1..bottom.min(fb.height()) {
        fb.put_char(x, cy, '│', style);
        fb.put_char(right, cy, '│', style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_precedence() {
        let mut board = Board::new();
        let e2 = "e2".parse().unwrap();
        let e3 = "e3".parse().unwrap();
        board.set_hovered(Some(e2));
        board.select(e2);
        assert_eq!(tile_background(board.tile_at(e2)), SELECTED);
        assert_eq!(tile_background(board.tile_at(e3)), POTENTIAL_MOVE);

        board.clear_selection();
        assert_eq!(tile_background(board.tile_at(e2)), HOVERED);
        assert_eq!(tile_background(board.tile_at(e3)), DARK_TILE);
    }

    #[test]
    fn tile_size_is_clamped() {
        let view = GameView::new(0, 0);
        let g = view.geometry(Viewport::new(10, 10));
        assert_eq!((g.tile_w, g.tile_h), (1, 1));
    }
}
