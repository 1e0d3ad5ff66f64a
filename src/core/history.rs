//! # History
//!
//! Browser-style navigation stack. The reducer never touches this directly:
//! it returns `Effect::PushLocation` / `Effect::ReplaceLocation`, the
//! runtime applies them here, and back/forward moves are fed back into the
//! reducer as `Action::LocationChanged`.

use log::info;

use crate::core::location::Location;

#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Location>,
    index: usize,
}

impl History {
    pub fn new(initial: Location) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
        }
    }

    pub fn current(&self) -> &Location {
        &self.entries[self.index]
    }

    /// Adds a new entry after the current one, dropping any forward entries.
    ///
    /// Pushing the current location again is a no-op; returns whether an
    /// entry was added.
    pub fn push(&mut self, location: Location) -> bool {
        if *self.current() == location {
            return false;
        }
        self.entries.truncate(self.index + 1);
        info!("History push: {}", location);
        self.entries.push(location);
        self.index += 1;
        true
    }

    /// Overwrites the current entry (used for redirects).
    pub fn replace(&mut self, location: Location) {
        info!("History replace: {} -> {}", self.current(), location);
        self.entries[self.index] = location;
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn back(&mut self) -> Option<&Location> {
        if !self.can_go_back() {
            return None;
        }
        self.index -= 1;
        info!("History back: {}", self.current());
        Some(self.current())
    }

    pub fn forward(&mut self) -> Option<&Location> {
        if !self.can_go_forward() {
            return None;
        }
        self.index += 1;
        info!("History forward: {}", self.current());
        Some(self.current())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_back_forward() {
        let mut h = History::new(Location::home());
        assert!(h.push(Location::listing("a", None)));
        assert!(h.push(Location::listing("b", None)));

        assert_eq!(h.back(), Some(&Location::listing("a", None)));
        assert_eq!(h.back(), Some(&Location::home()));
        assert_eq!(h.back(), None);
        assert_eq!(h.forward(), Some(&Location::listing("a", None)));
        assert_eq!(h.current(), &Location::listing("a", None));
    }

    #[test]
    fn test_push_truncates_forward_entries() {
        let mut h = History::new(Location::home());
        h.push(Location::listing("a", None));
        h.push(Location::listing("b", None));
        h.back();
        h.push(Location::listing("c", None));
        assert!(!h.can_go_forward());
        assert_eq!(h.len(), 3);
        assert_eq!(h.back(), Some(&Location::listing("a", None)));
    }

    #[test]
    fn test_push_same_location_is_noop() {
        let mut h = History::new(Location::listing("a", None));
        assert!(!h.push(Location::listing("a", None)));
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn test_replace_keeps_length() {
        let mut h = History::new(Location::home());
        h.push(Location::listing("contact", None));
        h.replace(Location::detail("7", Some("contact")));
        assert_eq!(h.len(), 2);
        assert_eq!(h.back(), Some(&Location::home()));
    }
}
