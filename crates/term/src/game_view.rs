//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: a status title line, then the bordered maze. Each
//! tile covers `cell_w x cell_h` terminal cells; the actor's pixel position
//! is scaled into that grid and rounded to the nearest terminal cell.

use crate::core::{GameSnapshot, Rect};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::Direction;

/// Title shown while the session runs.
pub const RUNNING_TITLE: &str = "Pac-Man Game";

/// Title shown once the session is over.
pub const GAME_OVER_TITLE: &str = "Game Over";

const BACKGROUND: Rgb = Rgb::new(0, 0, 0);
const WALL: CellStyle = CellStyle::new(Rgb::new(40, 60, 230), BACKGROUND);
const ACTOR: CellStyle = CellStyle::new(Rgb::new(255, 225, 0), BACKGROUND).bold();
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), BACKGROUND);
const TITLE: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), BACKGROUND).bold();
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), BACKGROUND).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), BACKGROUND);

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the maze.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

/// Where the maze frame sits inside the viewport.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Terminal size needed to show the whole maze, title line included.
    pub fn required_size(&self, snap: &GameSnapshot<'_>) -> Viewport {
        let w = (snap.columns as u16).saturating_mul(self.cell_w).saturating_add(2);
        let h = (snap.rows as u16).saturating_mul(self.cell_h).saturating_add(3);
        Viewport::new(w, h)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let needed = self.required_size(snap);
        let x = viewport.width.saturating_sub(needed.width) / 2;
        let top = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(needed.height) / 2,
            AnchorY::Top => 0,
        };
        let frame = Frame {
            x,
            y: top.saturating_add(1),
            w: needed.width,
            h: needed.height - 1,
        };

        let title = if snap.game_over() {
            GAME_OVER_TITLE
        } else {
            RUNNING_TITLE
        };
        fb.put_str(frame.x, top, title, TITLE);

        self.draw_border(fb, frame);

        for wall in snap.walls {
            self.draw_wall(fb, frame, snap.tile_size, wall);
        }

        self.draw_actor(fb, frame, snap);
        self.draw_side_panel(fb, frame, snap, viewport);

        if snap.game_over() {
            let text = "GAME OVER";
            let tx = frame.x + frame.w.saturating_sub(text.len() as u16) / 2;
            fb.put_str(tx, frame.y + frame.h / 2, text, TITLE);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, f: Frame) {
        if f.w < 2 || f.h < 2 {
            return;
        }
        let right = f.x + f.w - 1;
        let bottom = f.y + f.h - 1;

        fb.put_char(f.x, f.y, '┌', BORDER);
        fb.put_char(right, f.y, '┐', BORDER);
        fb.put_char(f.x, bottom, '└', BORDER);
        fb.put_char(right, bottom, '┘', BORDER);
        for x in f.x + 1..right {
            fb.put_char(x, f.y, '─', BORDER);
            fb.put_char(x, bottom, '─', BORDER);
        }
        for y in f.y + 1..bottom {
            fb.put_char(f.x, y, '│', BORDER);
            fb.put_char(right, y, '│', BORDER);
        }
    }

    fn draw_wall(&self, fb: &mut FrameBuffer, f: Frame, tile_size: i32, wall: &Rect) {
        let (Some(cx), Some(cy)) = (
            self.to_cells(wall.x, tile_size, self.cell_w),
            self.to_cells(wall.y, tile_size, self.cell_h),
        ) else {
            return;
        };
        let w = self.span(wall.width, tile_size, self.cell_w);
        let h = self.span(wall.height, tile_size, self.cell_h);
        fb.fill_rect(
            f.x.saturating_add(1).saturating_add(cx),
            f.y.saturating_add(1).saturating_add(cy),
            w,
            h,
            '█',
            WALL,
        );
    }

    fn draw_actor(&self, fb: &mut FrameBuffer, f: Frame, snap: &GameSnapshot<'_>) {
        let (Some(cx), Some(cy)) = (
            self.to_cells(snap.actor.x, snap.tile_size, self.cell_w),
            self.to_cells(snap.actor.y, snap.tile_size, self.cell_h),
        ) else {
            return;
        };
        // Keep the glyph inside the frame even if the maze has open edges.
        let inner_w = f.w.saturating_sub(2);
        let inner_h = f.h.saturating_sub(2);
        if cx >= inner_w || cy >= inner_h {
            return;
        }
        let w = self.cell_w.min(inner_w - cx);
        let h = self.cell_h.min(inner_h - cy);
        fb.fill_rect(
            f.x + 1 + cx,
            f.y + 1 + cy,
            w,
            h,
            actor_glyph(snap.actor.direction),
            ACTOR,
        );
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, f: Frame, snap: &GameSnapshot<'_>, viewport: Viewport) {
        let panel_x = f.x.saturating_add(f.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let mut y = f.y;
        fb.put_str(panel_x, y, "DIR", LABEL);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, snap.actor.direction.as_str(), VALUE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "STATE", LABEL);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, snap.status.as_str(), VALUE);
        y = y.saturating_add(2);

        // One line per axis: coordinates on open maps can be any width.
        fb.put_str(panel_x, y, "POS", LABEL);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "x", LABEL);
        fb.put_i64(panel_x.saturating_add(2), y, snap.actor.x as i64, VALUE);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "y", LABEL);
        fb.put_i64(panel_x.saturating_add(2), y, snap.actor.y as i64, VALUE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "TICK", LABEL);
        y = y.saturating_add(1);
        fb.put_i64(panel_x, y, snap.tick as i64, VALUE);
    }

    /// Pixel coordinate -> terminal cell offset, rounded to nearest.
    fn to_cells(&self, px: i32, tile_size: i32, cells_per_tile: u16) -> Option<u16> {
        if px < 0 || tile_size <= 0 {
            return None;
        }
        let scaled = (px as i64 * cells_per_tile as i64 + tile_size as i64 / 2) / tile_size as i64;
        u16::try_from(scaled).ok()
    }

    fn span(&self, px: i32, tile_size: i32, cells_per_tile: u16) -> u16 {
        self.to_cells(px, tile_size, cells_per_tile)
            .unwrap_or(0)
            .max(1)
    }
}

/// Glyph for the actor, pointing the way it faces.
pub fn actor_glyph(direction: Direction) -> char {
    match direction {
        Direction::Up => '▲',
        Direction::Down => '▼',
        Direction::Left => '◀',
        Direction::Right => '▶',
    }
}
