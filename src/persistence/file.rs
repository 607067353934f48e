//! Layout file on disk

use super::{from_json, to_json, LayoutError, LayoutResult, LayoutStore};
use crate::widget::Widget;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Layout stored as a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LayoutStore for JsonFileStore {
    fn save(&mut self, widgets: &[Widget]) -> LayoutResult<()> {
        let json = to_json(widgets)?;
        fs::write(&self.path, json).map_err(|e| {
            LayoutError::Io(format!("Failed to write {}: {}", self.path.display(), e))
        })?;
        tracing::info!(path = %self.path.display(), widgets = widgets.len(), "Layout saved");
        Ok(())
    }

    fn load(&self) -> LayoutResult<Vec<Widget>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No layout file, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(LayoutError::Io(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };
        let widgets = from_json(&json).map_err(|e| match e {
            LayoutError::Serialization(msg) => LayoutError::Serialization(format!(
                "Failed to parse {}: {}",
                self.path.display(),
                msg
            )),
            other => other,
        })?;
        tracing::info!(path = %self.path.display(), widgets = widgets.len(), "Layout loaded");
        Ok(widgets)
    }
}
