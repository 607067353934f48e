//! 2D buffer of cells for rendering

use super::{Cell, DrawError, Surface};
use crate::geometry::{Rect, Size};
use crate::style::Style;

/// 2D buffer of cells for rendering
#[derive(Debug, Clone)]
pub struct Buffer {
    /// The area this buffer represents
    area: Rect,
    /// Flat array of cells (row-major order)
    cells: Vec<Cell>,
}

impl Buffer {
    /// Create a new buffer for the given area
    pub fn new(area: Rect) -> Self {
        Self::filled(area, Cell::empty())
    }

    /// Create a buffer filled with a specific cell
    pub fn filled(area: Rect, cell: Cell) -> Self {
        Self {
            area,
            cells: vec![cell; area.area() as usize],
        }
    }

    /// Get the buffer area
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Convert absolute (x, y) to index in the cells array
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if self.area.contains(x, y) {
            let local_x = (x - self.area.x) as usize;
            let local_y = (y - self.area.y) as usize;
            Some(local_y * self.area.width as usize + local_x)
        } else {
            None
        }
    }

    /// Get a cell at position (returns None if out of bounds)
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Get a mutable cell at position (returns None if out of bounds)
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Set a string starting at position with the given style, clipped to the buffer
    pub fn set_string(&mut self, x: u16, y: u16, s: &str, style: Style) {
        let _ = self.put_str(i32::from(x), i32::from(y), s, style);
    }

    /// Fill an area with a cell
    pub fn fill(&mut self, area: Rect, cell: Cell) {
        let clipped = self.area.intersect(&area);
        for (x, y) in clipped.positions() {
            if let Some(target) = self.get_mut(x, y) {
                *target = cell.clone();
            }
        }
    }

    /// Text of one row, for assertions and debugging
    pub fn row_text(&self, y: u16) -> String {
        (self.area.x..self.area.right())
            .filter_map(|x| self.get(x, y))
            .map(|cell| cell.symbol.as_str())
            .collect()
    }

    /// Iterate over all cells with their positions
    pub fn iter(&self) -> impl Iterator<Item = (u16, u16, &Cell)> {
        self.cells.iter().enumerate().map(move |(i, cell)| {
            let x = self.area.x + (i % self.area.width as usize) as u16;
            let y = self.area.y + (i / self.area.width as usize) as u16;
            (x, y, cell)
        })
    }

    /// Iterate over cells that differ from another buffer
    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.iter()
            .filter(move |(x, y, cell)| other.get(*x, *y).map(|c| c != *cell).unwrap_or(true))
    }
}

impl Surface for Buffer {
    fn size(&self) -> Size {
        self.area.size()
    }

    fn put_char(&mut self, x: i32, y: i32, ch: char, style: Style) -> Result<(), DrawError> {
        let cell = match (u16::try_from(x), u16::try_from(y)) {
            (Ok(ux), Ok(uy)) => self.get_mut(ux, uy),
            _ => None,
        };
        match cell {
            Some(cell) => {
                cell.symbol = ch.to_string();
                cell.set_style(style);
                Ok(())
            }
            None => Err(DrawError::OutOfBounds { x, y }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    #[test]
    fn test_buffer_bounds() {
        let buf = Buffer::new(Rect::new(5, 5, 10, 10));
        assert!(buf.get(5, 5).is_some());
        assert!(buf.get(14, 14).is_some());
        assert!(buf.get(4, 5).is_none());
        assert!(buf.get(15, 5).is_none());
    }

    #[test]
    fn test_put_char_rejects_out_of_bounds() {
        let mut buf = Buffer::new(Rect::sized(4, 2));
        assert_eq!(
            buf.put_char(-1, 0, 'x', Style::default()),
            Err(DrawError::OutOfBounds { x: -1, y: 0 })
        );
        assert_eq!(
            buf.put_char(0, 2, 'x', Style::default()),
            Err(DrawError::OutOfBounds { x: 0, y: 2 })
        );
        assert!(buf.put_char(3, 1, 'x', Style::default()).is_ok());
        assert_eq!(buf.get(3, 1).unwrap().symbol, "x");
    }

    #[test]
    fn test_put_str_writes_visible_part() {
        let mut buf = Buffer::new(Rect::sized(5, 1));
        let result = buf.put_str(-2, 0, "abcdefgh", Style::default());
        assert!(result.is_err());
        assert_eq!(buf.row_text(0), "cdefg");
    }

    #[test]
    fn test_buffer_set_string() {
        let mut buf = Buffer::new(Rect::sized(20, 1));
        buf.set_string(0, 0, "Hello", Style::new().fg(Color::Blue));
        assert_eq!(buf.get(0, 0).unwrap().symbol, "H");
        assert_eq!(buf.get(4, 0).unwrap().fg, Color::Blue);
        assert_eq!(buf.get(5, 0).unwrap().symbol, " ");
    }

    #[test]
    fn test_buffer_fill() {
        let mut buf = Buffer::new(Rect::sized(5, 5));
        buf.fill(Rect::new(1, 1, 3, 3), Cell::new("#"));
        assert_eq!(buf.get(0, 0).unwrap().symbol, " ");
        assert_eq!(buf.get(1, 1).unwrap().symbol, "#");
        assert_eq!(buf.get(3, 3).unwrap().symbol, "#");
        assert_eq!(buf.get(4, 4).unwrap().symbol, " ");
    }

    #[test]
    fn test_buffer_diff() {
        let area = Rect::sized(5, 5);
        let mut before = Buffer::new(area);
        let mut after = Buffer::new(area);
        before.set_string(1, 1, "A", Style::default());
        after.set_string(1, 1, "B", Style::default());
        after.set_string(2, 2, "C", Style::default());
        assert_eq!(after.diff(&before).count(), 2);
    }
}
