//! Hash history stack.
//!
//! Each entry remembers the scroll offset the user had when leaving it, so
//! back/forward can offer that offset to the scroll hook.

use crate::routing::{Location, ScrollPosition};

/// One visited location.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub location: Location,
    pub scroll: ScrollPosition,
}

/// Session history for hash navigation.
#[derive(Debug, Default)]
pub struct HashHistory {
    entries: Vec<HistoryEntry>,
    index: usize,
}

impl HashHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.index)
    }

    /// Entry `delta` steps away from the current one.
    pub fn peek(&self, delta: isize) -> Option<&HistoryEntry> {
        let target = self.index.checked_add_signed(delta)?;
        self.entries.get(target)
    }

    /// Add a location after the current one, dropping any forward entries.
    pub fn push(&mut self, location: Location) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.index + 1);
        }
        self.entries.push(HistoryEntry {
            location,
            scroll: ScrollPosition::TOP,
        });
        self.index = self.entries.len() - 1;
    }

    /// Swap the current entry for `location`.
    pub fn replace(&mut self, location: Location) {
        match self.entries.get_mut(self.index) {
            Some(entry) => {
                *entry = HistoryEntry {
                    location,
                    scroll: ScrollPosition::TOP,
                }
            }
            None => self.push(location),
        }
    }

    /// Move `delta` steps. Returns false (and stays put) if out of range.
    pub fn go(&mut self, delta: isize) -> bool {
        match self.index.checked_add_signed(delta) {
            Some(target) if target < self.entries.len() => {
                self.index = target;
                true
            }
            _ => false,
        }
    }

    /// Remember the scroll offset of the current entry.
    pub fn save_scroll(&mut self, position: ScrollPosition) {
        if let Some(entry) = self.entries.get_mut(self.index) {
            entry.scroll = position;
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_go_back(&self) -> bool {
        self.peek(-1).is_some()
    }

    pub fn can_go_forward(&self) -> bool {
        self.peek(1).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(history: &HashHistory) -> Vec<&str> {
        history.entries.iter().map(|e| e.location.path.as_str()).collect()
    }

    #[test]
    fn test_push_and_go() {
        let mut history = HashHistory::new();
        assert!(history.current().is_none());

        history.push(Location::parse("/"));
        history.push(Location::parse("/research"));
        history.push(Location::parse("/aboutme"));
        assert_eq!(history.len(), 3);

        assert!(history.go(-2));
        assert_eq!(history.current().unwrap().location.path, "/");
        assert!(!history.go(-1));
        assert!(!history.can_go_back());
        assert!(history.can_go_forward());

        // Pushing drops forward entries
        history.push(Location::parse("/ena"));
        assert_eq!(paths(&history), vec!["/", "/ena"]);
        assert!(!history.can_go_forward());
    }

    #[test]
    fn test_replace() {
        let mut history = HashHistory::new();
        history.replace(Location::parse("/"));
        assert_eq!(history.len(), 1);

        history.push(Location::parse("/cdm"));
        history.replace(Location::parse("/ctt"));
        assert_eq!(paths(&history), vec!["/", "/ctt"]);
    }

    #[test]
    fn test_saved_scroll() {
        let mut history = HashHistory::new();
        history.push(Location::parse("/"));
        history.save_scroll(ScrollPosition::new(0.0, 420.0));
        history.push(Location::parse("/nlp"));

        assert_eq!(history.peek(-1).unwrap().scroll.top, 420.0);
        assert_eq!(history.current().unwrap().scroll, ScrollPosition::TOP);
    }
}
