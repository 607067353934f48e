//! Prompt answered from a queue

use super::{Field, Prompt};
use std::collections::VecDeque;
use std::io;

/// Answers edit dialogs from queued entries and records every message shown
///
/// Entries are raw user input: an empty entry keeps the field's current
/// value. Missing entries count as empty.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    entries: VecDeque<Vec<String>>,
    messages: Vec<(String, Vec<String>)>,
    edits: Vec<(String, Vec<Field>)>,
}

impl ScriptedPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the entries for the next edit dialog
    pub fn push_entries<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.push_back(entries.into_iter().map(Into::into).collect());
    }

    /// Messages shown so far as `(title, lines)`
    pub fn messages(&self) -> &[(String, Vec<String>)] {
        &self.messages
    }

    /// Edit dialogs opened so far as `(title, fields)`
    pub fn edits(&self) -> &[(String, Vec<Field>)] {
        &self.edits
    }
}

impl Prompt for ScriptedPrompt {
    fn edit_fields(&mut self, title: &str, fields: &[Field]) -> io::Result<Vec<String>> {
        self.edits.push((title.to_string(), fields.to_vec()));
        let entries = self.entries.pop_front().unwrap_or_default();
        Ok(fields
            .iter()
            .enumerate()
            .map(|(i, field)| field.resolve(entries.get(i).map_or("", String::as_str)))
            .collect())
    }

    fn show_message(&mut self, title: &str, lines: &[&str]) -> io::Result<()> {
        self.messages
            .push((title.to_string(), lines.iter().map(|l| l.to_string()).collect()));
        Ok(())
    }
}
