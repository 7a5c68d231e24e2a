use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SavedPart {
    pub part_id: String,
    pub saved_at: DateTime<Utc>,
}

/// Parts the shopper saved for later, most recent first.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Wishlist {
    entries: Vec<SavedPart>,
}

impl Wishlist {
    pub fn new(entries: Vec<SavedPart>) -> Self {
        Wishlist { entries }
    }

    pub fn entries(&self) -> &[SavedPart] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, part_id: &str) -> bool {
        self.entries.iter().any(|entry| entry.part_id == part_id)
    }

    /// Saves the part unless it is already saved. Returns whether it was added.
    pub fn save(&mut self, part_id: &str, now: DateTime<Utc>) -> bool {
        if self.contains(part_id) {
            return false;
        }
        self.entries.insert(
            0,
            SavedPart {
                part_id: part_id.to_string(),
                saved_at: now,
            },
        );
        true
    }

    pub fn remove(&mut self, part_id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.part_id != part_id);
        self.entries.len() != before
    }

    /// Flips the saved state and returns the new state.
    pub fn toggle(&mut self, part_id: &str, now: DateTime<Utc>) -> bool {
        if self.remove(part_id) {
            false
        } else {
            self.save(part_id, now)
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_saves_and_unsaves() {
        let now = Utc::now();
        let mut wishlist = Wishlist::default();
        assert!(wishlist.toggle("a", now));
        assert!(wishlist.contains("a"));
        assert!(!wishlist.save("a", now));
        assert_eq!(wishlist.len(), 1);
        assert!(!wishlist.toggle("a", now));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn newest_first() {
        let now = Utc::now();
        let mut wishlist = Wishlist::default();
        wishlist.save("a", now);
        wishlist.save("b", now);
        let ids: Vec<_> = wishlist.entries().iter().map(|e| e.part_id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
        wishlist.clear();
        assert!(wishlist.is_empty());
    }
}
