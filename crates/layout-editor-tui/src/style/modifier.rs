//! Text style modifiers (bold, reversed, ...)

use crossterm::style::Attribute;
use std::ops::BitOr;

/// Style modifiers as a bitfield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Modifier(u8);

impl Modifier {
    pub const NONE: Self = Self(0);
    pub const BOLD: Self = Self(1 << 0);
    pub const DIM: Self = Self(1 << 1);
    pub const UNDERLINED: Self = Self(1 << 2);
    /// Swap foreground and background
    pub const REVERSED: Self = Self(1 << 3);

    /// Create an empty modifier set
    pub const fn empty() -> Self {
        Self::NONE
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub const fn contains(&self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Get crossterm attributes for this modifier
    pub fn attributes(&self) -> Vec<Attribute> {
        [
            (Self::BOLD, Attribute::Bold),
            (Self::DIM, Attribute::Dim),
            (Self::UNDERLINED, Attribute::Underlined),
            (Self::REVERSED, Attribute::Reverse),
        ]
        .into_iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, attr)| attr)
        .collect()
    }
}

impl BitOr for Modifier {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}
