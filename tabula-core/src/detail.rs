//! Detail value-item session
//!
//! A [`DetailSession`] is the editable collection behind one open detail
//! tab. It is created lazily from the owning record's current `values`,
//! lives only while the tab is open, and is never persisted on its own.
//!
//! Synchronization is push-based and explicit: every mutating operation
//! ends by recomputing the record's `values` as the ordered projection
//! of the item texts and writing it back in a single assignment. There
//! is no observer wiring; a mutation path that skips the write-back
//! would silently desynchronize the detail view from the master list,
//! which is exactly the drift the combined operations here rule out.

use crate::error::{CoreError, CoreResult};
use crate::store::RecordStore;
use crate::types::{Record, ValueItem};

/// Editable value-item collection bound to one record by id
#[derive(Debug, Clone)]
pub struct DetailSession {
    record_id: String,
    items: Vec<ValueItem>,
}

impl DetailSession {
    /// Open a session for a record, mapping each value string to a
    /// [`ValueItem`] row.
    pub fn open(record: &Record) -> Self {
        Self {
            record_id: record.id.clone(),
            items: record.values.iter().map(ValueItem::new).collect(),
        }
    }

    /// Id of the record this session is bound to
    pub fn record_id(&self) -> &str {
        &self.record_id
    }

    /// Rows in display order
    pub fn items(&self) -> &[ValueItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Ordered projection of all item texts
    pub fn values(&self) -> Vec<String> {
        self.items.iter().map(|item| item.text.clone()).collect()
    }

    /// Append a value. Blank text is rejected; on success the new row's
    /// index is returned and the owning record is re-synchronized.
    pub fn add(&mut self, store: &mut RecordStore, text: &str) -> CoreResult<usize> {
        let text = Self::validated(text)?;
        self.items.push(ValueItem::new(text));
        self.sync_into(store)?;
        Ok(self.items.len() - 1)
    }

    /// Overwrite the row at `index`. Blank text is rejected; the owning
    /// record is re-synchronized after the commit.
    pub fn edit(&mut self, store: &mut RecordStore, index: usize, text: &str) -> CoreResult<()> {
        let text = Self::validated(text)?;
        let item = self
            .items
            .get_mut(index)
            .ok_or(CoreError::ValueItemNotFound { index })?;
        item.text = text;
        self.sync_into(store)
    }

    /// Remove the row at `index`, re-synchronizing the owning record
    pub fn remove(&mut self, store: &mut RecordStore, index: usize) -> CoreResult<ValueItem> {
        if index >= self.items.len() {
            return Err(CoreError::ValueItemNotFound { index });
        }
        let item = self.items.remove(index);
        self.sync_into(store)?;
        Ok(item)
    }

    /// Write the ordered text projection back into the owning record.
    ///
    /// This is a single assignment: the record's `values` is replaced
    /// wholesale rather than patched.
    pub fn sync_into(&self, store: &mut RecordStore) -> CoreResult<()> {
        let record = store
            .get_mut(&self.record_id)
            .ok_or_else(|| CoreError::RecordNotFound(self.record_id.clone()))?;
        record.values = self.values();
        log::debug!(
            "record synchronized: {} -> {:?}",
            record.name,
            record.values
        );
        Ok(())
    }

    fn validated(text: &str) -> CoreResult<String> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CoreError::Validation("value text must not be blank".into()));
        }
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(name: &str, values: &[&str]) -> (RecordStore, String) {
        let record = Record::new(name, values.iter().map(|v| (*v).to_string()).collect());
        let id = record.id.clone();
        (RecordStore::from_records(vec![record]), id)
    }

    fn record_values(store: &RecordStore, id: &str) -> Vec<String> {
        store.get(id).unwrap().values.clone()
    }

    #[test]
    fn open_maps_values_to_items() {
        let (store, id) = store_with("David", &["rick", "ky", "na"]);
        let session = DetailSession::open(store.get(&id).unwrap());

        assert_eq!(session.len(), 3);
        assert_eq!(session.values(), vec!["rick", "ky", "na"]);
    }

    #[test]
    fn record_matches_items_after_every_operation() {
        let (mut store, id) = store_with("James", &["ro", "nan", "do"]);
        let mut session = DetailSession::open(store.get(&id).unwrap());

        session.add(&mut store, "zz").unwrap();
        assert_eq!(record_values(&store, &id), session.values());

        session.edit(&mut store, 1, "NAN").unwrap();
        assert_eq!(record_values(&store, &id), session.values());

        session.remove(&mut store, 0).unwrap();
        assert_eq!(record_values(&store, &id), session.values());

        assert_eq!(record_values(&store, &id), vec!["NAN", "do", "zz"]);
    }

    #[test]
    fn removing_ky_from_david_updates_values() {
        let (mut store, id) = store_with("David", &["rick", "ky", "na"]);
        let mut session = DetailSession::open(store.get(&id).unwrap());

        let removed = session.remove(&mut store, 1).unwrap();

        assert_eq!(removed.text, "ky");
        assert_eq!(record_values(&store, &id), vec!["rick", "na"]);
    }

    #[test]
    fn add_trims_and_rejects_blank_text() {
        let (mut store, id) = store_with("David", &["rick"]);
        let mut session = DetailSession::open(store.get(&id).unwrap());

        assert!(matches!(
            session.add(&mut store, "   "),
            Err(CoreError::Validation(_))
        ));
        // Rejected input leaves both sides untouched
        assert_eq!(session.len(), 1);
        assert_eq!(record_values(&store, &id), vec!["rick"]);

        let index = session.add(&mut store, "  ky  ").unwrap();
        assert_eq!(index, 1);
        assert_eq!(record_values(&store, &id), vec!["rick", "ky"]);
    }

    #[test]
    fn edit_out_of_range_is_an_error() {
        let (mut store, id) = store_with("David", &["rick"]);
        let mut session = DetailSession::open(store.get(&id).unwrap());

        assert!(matches!(
            session.edit(&mut store, 5, "x"),
            Err(CoreError::ValueItemNotFound { index: 5 })
        ));
    }

    #[test]
    fn sync_into_missing_record_reports_not_found() {
        let (mut store, id) = store_with("David", &["rick"]);
        let session = DetailSession::open(store.get(&id).unwrap());

        store.remove(&id).unwrap();

        assert!(matches!(
            session.sync_into(&mut store),
            Err(CoreError::RecordNotFound(_))
        ));
    }

    #[test]
    fn session_survives_rename_of_the_owning_record() {
        // Tabs bind by id, so a rename must not strand the session
        let (mut store, id) = store_with("David", &["rick"]);
        let mut session = DetailSession::open(store.get(&id).unwrap());

        store.rename(&id, "Dave").unwrap();
        session.add(&mut store, "na").unwrap();

        let record = store.get(&id).unwrap();
        assert_eq!(record.name, "Dave");
        assert_eq!(record.values, vec!["rick", "na"]);
    }
}
