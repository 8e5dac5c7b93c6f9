mod category;
mod document;
mod priority;

pub use category::Category;
pub use document::{DocumentRecord, DraftRecord, UNTITLED_FILE_NAME};
pub use priority::Priority;

use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a document record.
///
/// Identifiers come from a per-store counter, so they are unique within a
/// store and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(pub u64);

impl DocumentId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
