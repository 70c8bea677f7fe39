//! Output of a layout pass.

use std::fmt;

use tessera_core::collections::map::HashMap;
use tessera_ui_graphics::Rect;

/// Absolute rectangle per node key, produced fresh by every layout pass.
///
/// Entries are keyed by the node's own key, not a path. When two nodes in
/// one tree share a key, the one recorded last wins and the key is listed in
/// [`LayoutResult::duplicate_keys`].
#[derive(Clone, Default, PartialEq)]
pub struct LayoutResult {
    rects: HashMap<String, Rect>,
    duplicates: Vec<String>,
}

impl LayoutResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<Rect> {
        self.rects.get(key).copied()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.rects.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Rect)> {
        self.rects.iter().map(|(key, rect)| (key.as_str(), *rect))
    }

    /// Entries sorted by key.
    pub fn sorted(&self) -> Vec<(&str, Rect)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Keys written more than once during the pass, in first-collision order.
    pub fn duplicate_keys(&self) -> &[String] {
        &self.duplicates
    }

    pub fn has_duplicates(&self) -> bool {
        !self.duplicates.is_empty()
    }

    /// Stores `rect` under `key`; returns true when it replaced an entry.
    pub(crate) fn record(&mut self, key: &str, rect: Rect) -> bool {
        let replaced = self.rects.insert(key.to_owned(), rect).is_some();
        if replaced && !self.duplicates.iter().any(|existing| existing == key) {
            self.duplicates.push(key.to_owned());
        }
        replaced
    }
}

impl fmt::Debug for LayoutResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.sorted()).finish()?;
        if self.has_duplicates() {
            write!(f, " duplicates: {:?}", self.duplicates)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Two nodes in one tree shared a key.
    DuplicateKey { key: String },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::DuplicateKey { key } => {
                write!(f, "duplicate node key '{key}' in layout tree")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
