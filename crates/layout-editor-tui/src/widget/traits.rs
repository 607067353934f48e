//! Core widget traits

use crate::buffer::Buffer;
use crate::geometry::Rect;

/// Core widget trait for stateless rendering
///
/// Widgets render themselves to a buffer within a given area and must not
/// touch any state outside of the buffer.
pub trait Widget {
    /// Render the widget to a buffer within the given area
    fn render(&self, area: Rect, buf: &mut Buffer);
}

/// Stateful widget with associated state type
///
/// Used for widgets that keep state across renders, such as a text input
/// with its cursor and scroll offset.
pub trait StatefulWidget {
    /// The state type for this widget
    type State;

    /// Render with mutable state access
    fn render(&self, area: Rect, buf: &mut Buffer, state: &mut Self::State);
}
