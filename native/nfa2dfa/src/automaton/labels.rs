//! Interning of state and symbol labels into dense ids.

use indexmap::IndexSet;

/// Insertion-ordered table mapping labels to dense `u32` ids and back.
///
/// The id of a label is its insertion index, so ids are stable for the
/// lifetime of the table and iteration follows first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Labels {
    labels: IndexSet<String>,
}

impl Labels {
    /// Create an empty label table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the id for `label`, allocating the next id if it is new.
    pub fn intern(&mut self, label: &str) -> u32 {
        if let Some(id) = self.id_of(label) {
            return id;
        }
        let (id, _) = self.labels.insert_full(label.to_string());
        id as u32
    }

    /// Get the id of `label`, if it was interned.
    pub fn id_of(&self, label: &str) -> Option<u32> {
        self.labels.get_index_of(label).map(|id| id as u32)
    }

    /// Get the label for `id`.
    pub fn label(&self, id: u32) -> Option<&str> {
        self.labels.get_index(id as usize).map(String::as_str)
    }

    /// Check if `label` was interned.
    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    /// Get the number of labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate over `(id, label)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> + '_ {
        self.labels
            .iter()
            .enumerate()
            .map(|(id, label)| (id as u32, label.as_str()))
    }
}
