//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! A snake frame differs from the previous one in a handful of cells (new head, old
//! head turned body, vacated tail, food, panel digits). The renderer therefore keeps
//! the last frame, collects the changed runs per row and only emits those. A size
//! change or an explicit [`TerminalRenderer::invalidate`] falls back to a full redraw.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Color, Colors, Print, ResetColor, SetAttribute, SetColors},
    terminal, QueueableCommand,
};
use tracing::debug;

use crate::fb::{FrameBuffer, Glyph, Rgb, Style};

/// A horizontal stretch of changed cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub x: u16,
    pub y: u16,
    pub len: u16,
}

/// What one `draw_swap` call wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub full: bool,
    pub runs: usize,
    pub cells: usize,
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    runs: Vec<Run>,
    entered: bool,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
            runs: Vec::with_capacity(64),
            entered: false,
        }
    }

    /// True between a successful [`enter`](Self::enter) and [`exit`](Self::exit).
    pub fn is_active(&self) -> bool {
        self.entered
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf
            .queue(terminal::EnterAlternateScreen)?
            .queue(cursor::Hide)?
            .queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        self.entered = true;
        self.last = None;
        Ok(())
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        if !std::mem::take(&mut self.entered) {
            return Ok(());
        }
        self.buf.clear();
        self.buf
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?
            .queue(terminal::EnableLineWrap)?
            .queue(cursor::Show)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to repaint the whole screen, e.g. after a resize.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb`, then swap it with the previous frame.
    ///
    /// Afterwards `fb` holds stale content; callers repaint it fully each frame, which
    /// lets the two buffers alternate without cloning.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<FrameStats> {
        self.buf.clear();
        let stats = match self.last.take() {
            Some(mut prev) if same_size(&prev, fb) => {
                changed_runs(&prev, fb, &mut self.runs);
                encode_runs_into(fb, &self.runs, &mut self.buf)?;
                std::mem::swap(&mut prev, fb);
                self.last = Some(prev);
                FrameStats {
                    full: false,
                    runs: self.runs.len(),
                    cells: self.runs.iter().map(|r| r.len as usize).sum(),
                }
            }
            stale => {
                let (width, height) = (fb.width(), fb.height());
                encode_full_into(fb, &mut self.buf)?;
                debug!(width, height, "full redraw");
                let mut prev = stale.unwrap_or_else(|| FrameBuffer::new(0, 0));
                prev.resize(width, height);
                std::mem::swap(&mut prev, fb);
                self.last = Some(prev);
                FrameStats {
                    full: true,
                    runs: height as usize,
                    cells: width as usize * height as usize,
                }
            }
        };
        if !self.buf.is_empty() {
            self.flush_buf()?;
        }
        Ok(stats)
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

fn same_size(a: &FrameBuffer, b: &FrameBuffer) -> bool {
    a.width() == b.width() && a.height() == b.height()
}

/// Collect the runs of cells that differ between two equally sized frames.
pub fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer, runs: &mut Vec<Run>) {
    runs.clear();
    for y in 0..next.height() {
        let (old, new) = (prev.row(y), next.row(y));
        if old == new {
            continue;
        }
        let mut start: Option<usize> = None;
        for (x, (a, b)) in old.iter().zip(new).enumerate() {
            match (a != b, start) {
                (true, None) => start = Some(x),
                (false, Some(s)) => {
                    runs.push(Run {
                        x: s as u16,
                        y,
                        len: (x - s) as u16,
                    });
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            runs.push(Run {
                x: s as u16,
                y,
                len: (new.len() - s) as u16,
            });
        }
    }
}

/// Encode a full repaint of `fb` into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut pen = Pen::default();
    for y in 0..fb.height() {
        pen.write_row(out, 0, y, fb.row(y))?;
    }
    pen.finish(out)
}

/// Encode only the cells of `next` that differ from `prev`.
///
/// Frames of different sizes are repainted in full.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    if !same_size(prev, next) {
        return encode_full_into(next, out);
    }
    let mut runs = Vec::new();
    changed_runs(prev, next, &mut runs);
    encode_runs_into(next, &runs, out)
}

fn encode_runs_into(fb: &FrameBuffer, runs: &[Run], out: &mut Vec<u8>) -> Result<()> {
    if runs.is_empty() {
        return Ok(());
    }
    let mut pen = Pen::default();
    for run in runs {
        let row = fb.row(run.y);
        let cells = &row[run.x as usize..(run.x + run.len) as usize];
        pen.write_row(out, run.x, run.y, cells)?;
    }
    pen.finish(out)
}

/// Tracks the terminal's cursor and style so redundant commands are skipped.
#[derive(Debug, Default)]
struct Pen {
    cursor: Option<(u16, u16)>,
    style: Option<Style>,
}

impl Pen {
    fn write_row(&mut self, out: &mut Vec<u8>, x: u16, y: u16, cells: &[Glyph]) -> Result<()> {
        if self.cursor != Some((x, y)) {
            out.queue(cursor::MoveTo(x, y))?;
        }
        for glyph in cells {
            self.set_style(out, glyph.style)?;
            out.queue(Print(glyph.ch))?;
        }
        self.cursor = Some((x + cells.len() as u16, y));
        Ok(())
    }

    fn set_style(&mut self, out: &mut Vec<u8>, style: Style) -> Result<()> {
        let prev = self.style.replace(style);
        if prev.map(|p| (p.fg, p.bg)) != Some((style.fg, style.bg)) {
            out.queue(SetColors(Colors::new(color(style.fg), color(style.bg))))?;
        }
        if prev.map(|p| (p.bold, p.dim)) != Some((style.bold, style.dim)) {
            out.queue(SetAttribute(Attribute::NormalIntensity))?;
            if style.bold {
                out.queue(SetAttribute(Attribute::Bold))?;
            }
            if style.dim {
                out.queue(SetAttribute(Attribute::Dim))?;
            }
        }
        Ok(())
    }

    fn finish(self, out: &mut Vec<u8>) -> Result<()> {
        if self.style.is_some() {
            out.queue(ResetColor)?.queue(SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
