//! List State
//!
//! Ordered labels plus the single item (if any) being edited.
//!
//! `add` refuses a label that is already present. An edit may still produce
//! a repeat, and a repeat read back from storage is kept as it was saved.
//!
//! Empty checks look at the trimmed input, but the label that gets stored
//! is always the raw input, surrounding whitespace included.

use crate::domain::{is_blank, DomainError, DomainResult};

/// The item currently in edit mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCursor {
    index: usize,
    label: String,
}

impl EditCursor {
    /// Position of the edited item in the list
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    labels: Vec<String>,
    cursor: Option<EditCursor>,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from stored labels, in stored order and repeats included
    pub fn from_labels(stored: Vec<String>) -> Self {
        Self {
            labels: stored,
            cursor: None,
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn cursor(&self) -> Option<&EditCursor> {
        self.cursor.as_ref()
    }

    /// Label of the item being edited
    pub fn editing(&self) -> Option<&str> {
        self.cursor.as_ref().map(EditCursor::label)
    }

    /// Exact, case-sensitive membership
    pub fn exists(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    fn position(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Append a new label
    pub fn add(&mut self, label: &str) -> DomainResult<()> {
        if is_blank(label) {
            return Err(DomainError::EmptyInput);
        }
        if self.exists(label) {
            return Err(DomainError::Duplicate(label.to_string()));
        }
        self.labels.push(label.to_string());
        self.cursor = None;
        Ok(())
    }

    /// Remove the entry matching `label`
    pub fn remove(&mut self, label: &str) -> DomainResult<()> {
        let index = self
            .position(label)
            .ok_or_else(|| DomainError::NotFound(label.to_string()))?;
        self.labels.remove(index);
        self.cursor = None;
        Ok(())
    }

    /// Put `label` in edit mode, replacing any previous edit target
    pub fn begin_edit(&mut self, label: &str) -> DomainResult<()> {
        let index = self
            .position(label)
            .ok_or_else(|| DomainError::NotFound(label.to_string()))?;
        self.cursor = Some(EditCursor {
            index,
            label: label.to_string(),
        });
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.cursor = None;
    }

    /// Replace the edited label in place. No duplicate check is made here.
    pub fn commit_edit(&mut self, new_label: &str) -> DomainResult<()> {
        if is_blank(new_label) {
            return Err(DomainError::EmptyInput);
        }
        let cursor = self.cursor.take().ok_or(DomainError::NoEditInProgress)?;
        // Any mutation clears the cursor, so the index is still current.
        match self.labels.get_mut(cursor.index) {
            Some(slot) if *slot == cursor.label => *slot = new_label.to_string(),
            _ => return Err(DomainError::NotFound(cursor.label)),
        }
        Ok(())
    }

    /// Drop every label and any edit in progress
    pub fn clear(&mut self) {
        self.labels.clear();
        self.cursor = None;
    }
}
