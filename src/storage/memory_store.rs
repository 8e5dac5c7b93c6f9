use std::collections::HashSet;

use chrono::{NaiveDate, Utc};
use tracing::info;

use super::seed::seed_records;
use crate::entity::{DocumentId, DocumentRecord, DraftRecord};
use crate::error::{RegistryError, Result};

/// Append-only, in-memory collection of document records.
///
/// Records are kept in insertion order. Display ordering is computed by
/// [`crate::view::project`] and never touches this order.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    documents: Vec<DocumentRecord>,
    last_id: u64,
}

impl DocumentStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the ten historical records.
    pub fn seeded() -> Self {
        Self::from_unique(seed_records())
    }

    /// Build a store over existing records. New ids continue after the
    /// highest id present.
    ///
    /// Rejects duplicate ids, and `u64::MAX`, which would leave no id for
    /// the next append.
    pub fn from_records(documents: Vec<DocumentRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(documents.len());
        for document in &documents {
            let id = document.id.get();
            if id == u64::MAX {
                return Err(RegistryError::IdOutOfRange(id));
            }
            if !seen.insert(id) {
                return Err(RegistryError::DuplicateId(id));
            }
        }
        Ok(Self::from_unique(documents))
    }

    fn from_unique(documents: Vec<DocumentRecord>) -> Self {
        let last_id = documents.iter().map(|d| d.id.get()).max().unwrap_or(0);
        Self { documents, last_id }
    }

    /// Get the next document id
    fn next_id(&mut self) -> DocumentId {
        // last_id starts below u64::MAX; reaching it takes 2^64 appends.
        self.last_id = self
            .last_id
            .checked_add(1)
            .expect("document id space exhausted");
        DocumentId(self.last_id)
    }

    /// Append a draft stamped with today's (UTC) date.
    ///
    /// Performs no validation; see [`DocumentStore::try_append`].
    pub fn append(&mut self, draft: DraftRecord) -> &DocumentRecord {
        self.append_dated(draft, Utc::now().date_naive())
    }

    /// Append a draft stamped with an explicit date.
    pub fn append_dated(&mut self, draft: DraftRecord, date: NaiveDate) -> &DocumentRecord {
        let id = self.next_id();
        let record = draft.into_record(id, date);
        info!(id = %record.id, category = %record.category, "appended document");

        self.documents.push(record);
        &self.documents[self.documents.len() - 1]
    }

    /// Validate required fields, then append with today's date.
    pub fn try_append(&mut self, draft: DraftRecord) -> Result<&DocumentRecord> {
        self.try_append_dated(draft, Utc::now().date_naive())
    }

    /// Validate required fields, then append with an explicit date.
    pub fn try_append_dated(
        &mut self,
        draft: DraftRecord,
        date: NaiveDate,
    ) -> Result<&DocumentRecord> {
        let fields = draft.missing_fields();
        if !fields.is_empty() {
            return Err(RegistryError::Validation { fields });
        }
        Ok(self.append_dated(draft, date))
    }

    /// All records in insertion order.
    pub fn snapshot(&self) -> &[DocumentRecord] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
