//! Ordered widget collection with a single selection

use crate::widget::Widget;

/// The widgets on the canvas, in z-order, plus the current selection
///
/// Later widgets sit on top. The selection is an index into the sequence
/// and each widget's `selected` flag mirrors it.
#[derive(Debug, Clone, Default)]
pub struct CanvasState {
    widgets: Vec<Widget>,
    selected: Option<usize>,
}

impl CanvasState {
    pub fn new(widgets: Vec<Widget>) -> Self {
        Self {
            widgets,
            selected: None,
        }
    }

    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Widget> {
        self.widgets.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Widget> {
        self.widgets.get_mut(index)
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&Widget> {
        self.selected.and_then(|i| self.widgets.get(i))
    }

    pub fn selected_mut(&mut self) -> Option<&mut Widget> {
        self.selected.and_then(|i| self.widgets.get_mut(i))
    }

    /// Select the widget at `index`; returns false if there is none
    ///
    /// Only the `selected` flags change. Drag and resize flags on the
    /// previously selected widget are left as they are.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.widgets.len() {
            return false;
        }
        if let Some(prev) = self.selected_mut() {
            prev.selected = false;
        }
        self.widgets[index].selected = true;
        self.selected = Some(index);
        true
    }

    pub fn clear_selection(&mut self) {
        if let Some(prev) = self.selected_mut() {
            prev.selected = false;
        }
        self.selected = None;
    }

    /// Append a widget on top of the others and return its index
    pub fn push(&mut self, widget: Widget) -> usize {
        self.widgets.push(widget);
        self.widgets.len() - 1
    }

    /// Remove the widget at `index`, keeping the selection on the same widget
    pub fn remove(&mut self, index: usize) -> Option<Widget> {
        if index >= self.widgets.len() {
            return None;
        }
        let mut removed = self.widgets.remove(index);
        self.selected = match self.selected {
            Some(sel) if sel == index => {
                removed.selected = false;
                None
            }
            Some(sel) if sel > index => Some(sel - 1),
            other => other,
        };
        Some(removed)
    }

    /// Remove the selected widget and clear the selection
    pub fn remove_selected(&mut self) -> Option<Widget> {
        self.selected.and_then(|index| self.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> CanvasState {
        CanvasState::new(vec![
            Widget::label(0, 0, 10, "a"),
            Widget::label(0, 4, 10, "b"),
            Widget::label(0, 8, 10, "c"),
        ])
    }

    #[test]
    fn test_select_mirrors_flags() {
        let mut canvas = canvas();
        assert!(canvas.select(1));
        assert!(canvas.widgets()[1].selected);

        assert!(canvas.select(2));
        assert!(!canvas.widgets()[1].selected);
        assert!(canvas.widgets()[2].selected);
        assert_eq!(canvas.selected().map(|w| w.text()), Some("c"));
    }

    #[test]
    fn test_select_out_of_range() {
        let mut canvas = canvas();
        canvas.select(0);
        assert!(!canvas.select(3));
        assert_eq!(canvas.selected_index(), Some(0));
    }

    #[test]
    fn test_remove_selected_clears_selection() {
        let mut canvas = canvas();
        canvas.select(1);
        let removed = canvas.remove_selected().unwrap();
        assert_eq!(removed.text(), "b");
        assert!(!removed.selected);
        assert_eq!(canvas.len(), 2);
        assert!(canvas.selected().is_none());
        assert!(canvas.widgets().iter().all(|w| !w.selected));
    }

    #[test]
    fn test_remove_before_selection_shifts_index() {
        let mut canvas = canvas();
        canvas.select(2);
        canvas.remove(0);
        assert_eq!(canvas.selected_index(), Some(1));
        assert_eq!(canvas.selected().map(|w| w.text()), Some("c"));
    }

    #[test]
    fn test_remove_after_selection_keeps_index() {
        let mut canvas = canvas();
        canvas.select(0);
        canvas.remove(2);
        assert_eq!(canvas.selected().map(|w| w.text()), Some("a"));
    }

    #[test]
    fn test_remove_selected_without_selection() {
        let mut canvas = canvas();
        assert!(canvas.remove_selected().is_none());
        assert_eq!(canvas.len(), 3);
    }
}
