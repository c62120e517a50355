//! GameView: maps the board and a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Board, GameSnapshot};
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{Cell, FlowState, WALL_GLYPH};

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

const PANEL_MIN_WIDTH: u16 = 12;

const PLAY_BG: Rgb = Rgb::new(12, 16, 12);
const HEAD_STYLE: Style = Style::fg(Rgb::new(140, 255, 140)).on(PLAY_BG).bold();
const BODY_STYLE: Style = Style::fg(Rgb::new(60, 190, 80)).on(PLAY_BG);
const FOOD_STYLE: Style = Style::fg(Rgb::new(240, 80, 80)).on(PLAY_BG).bold();
const EMPTY_STYLE: Style = Style::fg(Rgb::new(60, 60, 60)).on(PLAY_BG).dim();
const WALL_STYLE: Style = Style::fg(Rgb::new(150, 150, 160));
const LABEL_STYLE: Style = Style::fg(Rgb::new(220, 220, 220)).bold();
const VALUE_STYLE: Style = Style::fg(Rgb::new(200, 200, 200));
const OVERLAY_STYLE: Style = Style::fg(Rgb::new(255, 255, 255)).bold();
const HINT_STYLE: Style = Style::fg(Rgb::new(180, 180, 180));

/// Screen-space placement of the board frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal renderer for the Snake game.
#[derive(Debug, Clone, Default)]
pub struct GameView {
    /// Hide the board behind the menu instead of showing the last round.
    blank_menu: bool,
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blank_menu(mut self, blank_menu: bool) -> Self {
        self.blank_menu = blank_menu;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        board: &Board,
        snap: &GameSnapshot,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.blank(Style::default());

        let frame = self.frame_for(board, viewport);

        fb.fill_rect(frame.x + 1, frame.y + 1, frame.w - 2, frame.h - 2, ' ', EMPTY_STYLE);
        self.draw_wall(fb, frame);

        let show_board = !(self.blank_menu && snap.flow == FlowState::Menu);
        if show_board {
            for y in 0..board.height() {
                for x in 0..board.width() {
                    let cell = board.get(x, y).unwrap_or_default();
                    let style = match cell {
                        Cell::Head => HEAD_STYLE,
                        Cell::Body => BODY_STYLE,
                        Cell::Food => FOOD_STYLE,
                        Cell::Empty => EMPTY_STYLE,
                    };
                    fb.put_char(frame.x + 1 + x as u16, frame.y + 1 + y as u16, cell.glyph(), style);
                }
            }
        }

        self.draw_stats(fb, snap, viewport, frame);

        match snap.flow {
            FlowState::Menu => self.draw_overlay(
                fb,
                frame,
                &[
                    ("SNAKE", OVERLAY_STYLE),
                    ("", HINT_STYLE),
                    ("Enter to start", HINT_STYLE),
                    ("Arrows/WASD move  Space pause  Q quit", HINT_STYLE),
                ],
            ),
            FlowState::Paused => self.draw_overlay(
                fb,
                frame,
                &[("PAUSED", OVERLAY_STYLE), ("Space to resume", HINT_STYLE)],
            ),
            FlowState::GameOver => {
                let lines = [
                    ("GAME OVER", OVERLAY_STYLE),
                    ("", HINT_STYLE),
                    ("Enter for menu  Q quit", HINT_STYLE),
                ];
                self.draw_overlay(fb, frame, &lines);
                // Final score goes on the blank line.
                let y = overlay_top(frame, lines.len()) + 1;
                let width = "Score ".len() as u16 + digit_count(snap.score);
                let x = frame.x + frame.w.saturating_sub(width) / 2;
                let x = fb.put_str(x, y, "Score ", VALUE_STYLE);
                fb.put_u32(x, y, snap.score, VALUE_STYLE);
            }
            FlowState::Playing | FlowState::Exit => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, board: &Board, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(board, snap, viewport, &mut fb);
        fb
    }

    fn frame_for(&self, board: &Board, viewport: Viewport) -> Frame {
        let w = board.width().max(0) as u16 + 2;
        let h = board.height().max(0) as u16 + 2;
        let room_for_panel = viewport.width >= w + 2 + PANEL_MIN_WIDTH;
        let used_w = if room_for_panel { w + 2 + PANEL_MIN_WIDTH } else { w };
        Frame {
            x: viewport.width.saturating_sub(used_w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        }
    }

    fn draw_wall(&self, fb: &mut FrameBuffer, frame: Frame) {
        let Frame { x, y, w, h } = frame;
        for dx in 0..w {
            fb.put_char(x + dx, y, WALL_GLYPH, WALL_STYLE);
            fb.put_char(x + dx, y + h - 1, WALL_GLYPH, WALL_STYLE);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, WALL_GLYPH, WALL_STYLE);
            fb.put_char(x + w - 1, y + dy, WALL_GLYPH, WALL_STYLE);
        }
    }

    /// Side panel when there is room, otherwise a single status line under the wall.
    fn draw_stats(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, frame: Frame) {
        let panel_x = frame.x + frame.w + 2;
        if panel_x + PANEL_MIN_WIDTH <= viewport.width {
            let mut y = frame.y;
            for (label, value) in [
                ("SCORE", snap.score),
                ("LENGTH", snap.length() as u32),
                ("SPEED MS", snap.speed_ms),
            ] {
                fb.put_str(panel_x, y, label, LABEL_STYLE);
                fb.put_u32(panel_x, y + 1, value, VALUE_STYLE);
                y += 3;
            }
            return;
        }

        let status_y = frame.y + frame.h;
        if status_y < viewport.height {
            let x = fb.put_str(frame.x, status_y, "Score ", LABEL_STYLE);
            let x = fb.put_u32(x, status_y, snap.score, VALUE_STYLE);
            let x = fb.put_str(x, status_y, "  Length ", LABEL_STYLE);
            fb.put_u32(x, status_y, snap.length() as u32, VALUE_STYLE);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, frame: Frame, lines: &[(&str, Style)]) {
        let top = overlay_top(frame, lines.len());
        let inner_x = frame.x + 1;
        let inner_w = frame.w - 2;
        for (i, (text, style)) in lines.iter().enumerate() {
            let y = top + i as u16;
            fb.fill_rect(inner_x, y, inner_w, 1, ' ', EMPTY_STYLE);
            fb.put_centered(inner_x, inner_w, y, text, *style);
        }
    }
}

fn overlay_top(frame: Frame, lines: usize) -> u16 {
    (frame.y + frame.h / 2).saturating_sub(lines as u16 / 2)
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
