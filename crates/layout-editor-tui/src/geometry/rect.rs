//! Rectangular region in the terminal

use super::Size;

/// A rectangular region in the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle at origin with given size
    pub const fn sized(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Empty rectangle
    pub const fn empty() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Get the area (number of cells)
    pub const fn area(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// Check if the rectangle is empty
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Get the size
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get the right edge x coordinate (exclusive)
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Get the bottom edge y coordinate (exclusive)
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Check if a point is inside this rectangle
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Get the inner rectangle with the given margin on all sides
    pub fn inner(&self, margin: u16) -> Self {
        Self {
            x: self.x.saturating_add(margin),
            y: self.y.saturating_add(margin),
            width: self.width.saturating_sub(margin * 2),
            height: self.height.saturating_sub(margin * 2),
        }
    }

    /// A `width` x `height` rectangle centred in this one, clipped to fit
    pub fn centered(&self, width: u16, height: u16) -> Self {
        let width = width.min(self.width);
        let height = height.min(self.height);
        Self::new(
            self.x + (self.width - width) / 2,
            self.y + (self.height - height) / 2,
            width,
            height,
        )
    }

    /// Get the intersection of two rectangles
    pub fn intersect(&self, other: &Rect) -> Self {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x >= right || y >= bottom {
            Self::empty()
        } else {
            Self::new(x, y, right - x, bottom - y)
        }
    }

    /// Iterate over all positions in this rectangle
    pub fn positions(&self) -> impl Iterator<Item = (u16, u16)> {
        let (x_start, x_end) = (self.x, self.right());
        (self.y..self.bottom()).flat_map(move |y| (x_start..x_end).map(move |x| (x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(5, 5, 10, 10);
        assert!(r.contains(5, 5));
        assert!(r.contains(14, 14));
        assert!(!r.contains(4, 5));
        assert!(!r.contains(15, 5));
        assert!(!r.contains(5, 15));
    }

    #[test]
    fn test_rect_centered() {
        let r = Rect::sized(80, 24);
        assert_eq!(r.centered(30, 5), Rect::new(25, 9, 30, 5));
        // Clipped when the parent is too small
        assert_eq!(Rect::sized(10, 3).centered(30, 5), Rect::new(0, 0, 10, 3));
    }

    #[test]
    fn test_rect_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert_eq!(a.intersect(&b), Rect::new(5, 5, 5, 5));
        assert!(a.intersect(&Rect::new(20, 20, 10, 10)).is_empty());
    }

    #[test]
    fn test_rect_positions() {
        let positions: Vec<_> = Rect::new(0, 0, 3, 2).positions().collect();
        assert_eq!(positions, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }
}
