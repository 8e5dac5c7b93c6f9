use serde::Serialize;

use crate::entity::{DocumentId, DocumentRecord, Priority};

/// Look up one record for preview.
pub fn find(records: &[DocumentRecord], id: DocumentId) -> Option<&DocumentRecord> {
    records.iter().find(|record| record.id == id)
}

/// Detail view of a single record.
#[derive(Debug, Clone, Serialize)]
pub struct Preview<'a> {
    pub record: &'a DocumentRecord,
    pub display_size: &'a str,
    pub effective_priority: Priority,
    pub summary: String,
}

impl<'a> Preview<'a> {
    pub fn new(record: &'a DocumentRecord, size_fallback: &'a str) -> Self {
        let summary = format!(
            "This document contains important information regarding {} procedures and policies.",
            record.category.as_str().to_lowercase()
        );
        Self {
            record,
            display_size: record.display_size(size_fallback),
            effective_priority: record.effective_priority(),
            summary,
        }
    }
}
