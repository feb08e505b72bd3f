//! Which regions are picked for comparison. At most two, no duplicates, oldest evicted first.

use serde::Serialize;

pub const SELECTION_CAPACITY: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a click on `id`: deselect it if present, otherwise append it,
    /// evicting the oldest entry when already full.
    pub fn toggle(&mut self, id: &str) {
        if let Some(pos) = self.ids.iter().position(|s| s == id) {
            self.ids.remove(pos);
            return;
        }
        if self.ids.len() >= SELECTION_CAPACITY {
            self.ids.remove(0);
        }
        self.ids.push(id.to_string());
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Both picks in selection order, once two are chosen.
    pub fn pair(&self) -> Option<(&str, &str)> {
        match self.ids.as_slice() {
            [a, b] => Some((a.as_str(), b.as_str())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clicks(ids: &[&str]) -> Selection {
        let mut selection = Selection::new();
        for id in ids {
            selection.toggle(id);
        }
        selection
    }

    #[test]
    fn reclick_deselects_instead_of_evicting() {
        assert_eq!(clicks(&["CA", "TX", "CA"]).ids(), ["TX"]);
    }

    #[test]
    fn third_pick_evicts_oldest() {
        assert_eq!(clicks(&["CA", "TX", "NY"]).ids(), ["TX", "NY"]);
    }

    #[test]
    fn toggle_off_keeps_remaining_entry() {
        assert_eq!(clicks(&["CA", "TX", "TX"]).ids(), ["CA"]);
        assert!(clicks(&["CA", "CA"]).is_empty());
    }

    #[test]
    fn pair_only_when_full() {
        assert_eq!(clicks(&["CA"]).pair(), None);
        assert_eq!(clicks(&["CA", "TX"]).pair(), Some(("CA", "TX")));
    }
}
