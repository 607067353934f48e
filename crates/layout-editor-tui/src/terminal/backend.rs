//! Terminal backend wrapping crossterm operations

use crate::buffer::{Buffer, Cell};
use crate::geometry::{Rect, Size};
use crossterm::{
    cursor::{Hide, MoveTo},
    event::{EnableBracketedPaste, EnableMouseCapture},
    execute, queue,
    style::{Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, enable_raw_mode, EnterAlternateScreen},
};
use std::io::{self, Stdout, Write};

use super::RawModeGuard;

/// Terminal backend wrapping crossterm operations
pub struct Terminal {
    stdout: Stdout,
    /// Current terminal size
    size: Size,
    /// Previous buffer for diff rendering
    prev_buffer: Option<Buffer>,
}

impl Terminal {
    /// Create a new terminal instance
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout: io::stdout(),
            size: Size::new(width, height),
            prev_buffer: None,
        })
    }

    /// Enter raw mode with RAII guard
    ///
    /// Enables raw mode, switches to the alternate screen, hides the cursor
    /// and turns on bracketed paste and mouse capture (press, release, drag
    /// and motion reports). The returned guard undoes all of it when dropped.
    pub fn enter_raw_mode(&mut self) -> io::Result<RawModeGuard> {
        enable_raw_mode()?;
        let guard = RawModeGuard::new();
        execute!(
            self.stdout,
            EnterAlternateScreen,
            Hide,
            EnableBracketedPaste,
            EnableMouseCapture
        )?;
        Ok(guard)
    }

    /// Get current terminal size
    pub fn size(&self) -> Size {
        self.size
    }

    /// Refresh size from terminal (call after resize event)
    pub fn refresh_size(&mut self) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        self.size = Size::new(width, height);
        Ok(())
    }

    /// Get a full-screen rect
    pub fn full_rect(&self) -> Rect {
        Rect::sized(self.size.width, self.size.height)
    }

    fn queue_cell(&mut self, x: u16, y: u16, cell: &Cell) -> io::Result<()> {
        queue!(
            self.stdout,
            MoveTo(x, y),
            SetForegroundColor(cell.fg.into()),
            SetBackgroundColor(cell.bg.into())
        )?;
        for attr in cell.modifier.attributes() {
            queue!(self.stdout, SetAttribute(attr))?;
        }
        queue!(self.stdout, Print(&cell.symbol))?;
        if !cell.modifier.is_empty() {
            queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }

    /// Draw an entire buffer with diff optimization
    ///
    /// Only cells that have changed since the last draw are written.
    pub fn draw(&mut self, buffer: &Buffer) -> io::Result<()> {
        let changes: Vec<(u16, u16, Cell)> = match self.prev_buffer.as_ref() {
            Some(prev) if prev.area() == buffer.area() => buffer
                .diff(prev)
                .map(|(x, y, cell)| (x, y, cell.clone()))
                .collect(),
            _ => buffer.iter().map(|(x, y, cell)| (x, y, cell.clone())).collect(),
        };

        for (x, y, cell) in &changes {
            self.queue_cell(*x, *y, cell)?;
        }

        self.prev_buffer = Some(buffer.clone());
        self.stdout.flush()
    }

    /// Paint only the cells of `buffer` inside `area`, bypassing the diff
    ///
    /// Used by modal dialogs drawn on top of the last frame. Call
    /// [`Terminal::invalidate`] on the main terminal afterwards.
    pub fn draw_region(&mut self, buffer: &Buffer, area: Rect) -> io::Result<()> {
        let region = buffer.area().intersect(&area);
        for (x, y) in region.positions() {
            if let Some(cell) = buffer.get(x, y) {
                let cell = cell.clone();
                self.queue_cell(x, y, &cell)?;
            }
        }
        self.stdout.flush()
    }

    /// Force clear the previous buffer, causing next draw to be a full redraw
    pub fn invalidate(&mut self) {
        self.prev_buffer = None;
    }
}
