//! In-memory layout store

use super::{LayoutResult, LayoutStore};
use crate::widget::Widget;

/// Keeps the last saved layout in memory, for tests and scratch sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    saved: Option<Vec<Widget>>,
    save_count: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl LayoutStore for MemoryStore {
    fn save(&mut self, widgets: &[Widget]) -> LayoutResult<()> {
        // Stored the way a load would see it: transient flags cleared
        let stored = widgets.iter().map(|w| Widget::from_record(&w.to_record())).collect();
        self.saved = Some(stored);
        self.save_count += 1;
        Ok(())
    }

    fn load(&self) -> LayoutResult<Vec<Widget>> {
        Ok(self.saved.clone().unwrap_or_default())
    }
}
