//! Master record store
//!
//! Owns the master list of [`Record`]s and keeps it sorted ascending by
//! name at all times. Mutations go through this type so the sort and
//! validation rules cannot be bypassed.

use crate::error::{CoreError, CoreResult};
use crate::types::Record;

/// In-memory master list, always sorted ascending by name
/// (case-insensitive).
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from existing records, sorting them on the way in
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut store = Self { records };
        store.sort();
        store
    }

    /// All records in display order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by id
    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Look up a record by id, mutable
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.id == id)
    }

    /// Position of a record in the current display order
    pub fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    /// Insert a blank record named "New Item" and re-sort.
    ///
    /// Returns the new record's id; the caller is expected to open the
    /// name for editing right away.
    pub fn add(&mut self) -> String {
        let record = Record::blank();
        let id = record.id.clone();
        self.records.push(record);
        self.sort();
        log::debug!("record added: {id}");
        id
    }

    /// Rename a record. The new name is trimmed and must be non-empty;
    /// the list is re-sorted after the commit.
    pub fn rename(&mut self, id: &str, name: &str) -> CoreResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::Validation("record name must not be blank".into()));
        }
        let record = self
            .get_mut(id)
            .ok_or_else(|| CoreError::RecordNotFound(id.to_string()))?;
        record.name = name.to_string();
        self.sort();
        log::debug!("record renamed: {id} -> {name}");
        Ok(())
    }

    /// Remove a record, returning it so the caller can close any detail
    /// tab bound to the same id.
    pub fn remove(&mut self, id: &str) -> CoreResult<Record> {
        let index = self
            .position(id)
            .ok_or_else(|| CoreError::RecordNotFound(id.to_string()))?;
        let record = self.records.remove(index);
        log::debug!("record removed: {} ({})", record.name, record.id);
        Ok(record)
    }

    /// Records whose name contains `query` case-insensitively, in
    /// display order. An empty query yields the full list.
    pub fn filtered(&self, query: &str) -> Vec<&Record> {
        if query.is_empty() {
            return self.records.iter().collect();
        }
        let query = query.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&query))
            .collect()
    }

    /// Ids of the records matching `query`, in display order
    pub fn filtered_ids(&self, query: &str) -> Vec<String> {
        self.filtered(query).iter().map(|r| r.id.clone()).collect()
    }

    fn sort(&mut self) {
        self.records
            .sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DEFAULT_RECORD_NAME;

    fn sample_store() -> RecordStore {
        RecordStore::from_records(vec![
            Record::new("James", vec!["ro".into(), "nan".into(), "do".into()]),
            Record::new("David", vec!["rick".into(), "ky".into(), "na".into()]),
            Record::new("Taylor", vec!["man".into(), "zu".into(), "kick".into()]),
        ])
    }

    fn names(store: &RecordStore) -> Vec<&str> {
        store.records().iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn seed_order_is_sorted_ascending() {
        let store = sample_store();
        assert_eq!(names(&store), vec!["David", "James", "Taylor"]);
    }

    #[test]
    fn add_inserts_blank_record_and_resorts() {
        let mut store = sample_store();
        let id = store.add();

        let record = store.get(&id).unwrap();
        assert_eq!(record.name, DEFAULT_RECORD_NAME);
        assert!(record.values.is_empty());

        // "New Item" sorts between James and Taylor
        assert_eq!(names(&store), vec!["David", "James", "New Item", "Taylor"]);
    }

    #[test]
    fn rename_resorts_and_keeps_identity() {
        let mut store = sample_store();
        let id = store.records()[0].id.clone(); // David

        store.rename(&id, "Zoe").unwrap();

        assert_eq!(names(&store), vec!["James", "Taylor", "Zoe"]);
        // Same record, same id, new position
        assert_eq!(store.position(&id), Some(2));
    }

    #[test]
    fn rename_blank_is_rejected_and_leaves_state_unchanged() {
        let mut store = sample_store();
        let id = store.records()[0].id.clone();

        let result = store.rename(&id, "   ");

        assert!(matches!(result, Err(CoreError::Validation(_))));
        assert_eq!(store.get(&id).unwrap().name, "David");
    }

    #[test]
    fn rename_unknown_id_is_record_not_found() {
        let mut store = sample_store();
        let result = store.rename("nonexistent", "X");
        assert!(matches!(result, Err(CoreError::RecordNotFound(_))));
    }

    #[test]
    fn remove_returns_the_record() {
        let mut store = sample_store();
        let id = store.records()[1].id.clone(); // James

        let removed = store.remove(&id).unwrap();

        assert_eq!(removed.name, "James");
        assert_eq!(names(&store), vec!["David", "Taylor"]);
        assert!(store.get(&id).is_none());
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let store = sample_store();

        let hits = store.filtered("AV");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "David");

        // 'a' hits David, James and Taylor
        assert_eq!(store.filtered("a").len(), 3);
        assert!(store.filtered("xyz").is_empty());
    }

    #[test]
    fn clearing_the_filter_restores_the_full_sorted_list() {
        let store = sample_store();
        let filtered = store.filtered_ids("dav");
        assert_eq!(filtered.len(), 1);

        let all = store.filtered_ids("");
        assert_eq!(all.len(), 3);
        assert_eq!(names(&store), vec!["David", "James", "Taylor"]);
    }
}
