//! Insertion-ordered class arena with O(1) removal.
//!
//! Records are addressed by stable index. Removing a record only clears its
//! alive marker, so indices held by an ongoing traversal stay valid.

use crate::class::ClassRecord;

/// # Overview
///
/// Arena of [`ClassRecord`]s in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ClassStore {
    records: Vec<ClassRecord>,
    alive:   Vec<bool>
}

impl ClassStore {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Overview
    ///
    /// Appends a record and returns its index.
    pub fn push(&mut self, record: ClassRecord) -> usize {
        self.records.push(record);
        self.alive.push(true);
        self.records.len() - 1
    }

    /// Number of slots, removed ones included. Valid indices are `0..slots()`.
    #[inline]
    pub fn slots(&self) -> usize {
        self.records.len()
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.alive.iter().filter(|&&a| a).count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn is_alive(&self, index: usize) -> bool {
        self.alive.get(index).copied().unwrap_or(false)
    }

    /// Live record at `index`.
    pub fn get(&self, index: usize) -> Option<&ClassRecord> {
        if self.is_alive(index) {
            self.records.get(index)
        } else {
            None
        }
    }

    /// # Overview
    ///
    /// Marks the record at `index` removed. Returns `false` if it was already
    /// removed or out of range.
    pub fn remove(&mut self, index: usize) -> bool {
        match self.alive.get_mut(index) {
            Some(a) if *a => {
                *a = false;
                true
            }
            _ => false
        }
    }

    /// # Overview
    ///
    /// Merges `source` into `target` (see [`ClassRecord::merge`]) and removes
    /// `source`. Requires `target < source` and both alive.
    pub fn merge_into(&mut self, target: usize, source: usize) {
        assert!(target < source, "merge target must precede source");
        assert!(self.is_alive(target) && self.is_alive(source));

        let (head, tail) = self.records.split_at_mut(source);
        head[target].merge(&tail[0]);
        self.alive[source] = false;
    }

    /// Live records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ClassRecord> {
        self.records
            .iter()
            .zip(&self.alive)
            .filter_map(|(r, &a)| a.then_some(r))
    }

    /// # Overview
    ///
    /// Compacts the store into its live records, preserving order.
    pub fn into_records(self) -> Vec<ClassRecord> {
        self.records
            .into_iter()
            .zip(self.alive)
            .filter_map(|(r, a)| a.then_some(r))
            .collect()
    }
}

impl FromIterator<ClassRecord> for ClassStore {
    fn from_iter<I: IntoIterator<Item = ClassRecord>>(iter: I) -> Self {
        let mut store = Self::new();
        for record in iter {
            store.push(record);
        }
        store
    }
}
