// src/entity/document.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Category, DocumentId, Priority};

/// File name recorded when a draft arrives without one.
pub const UNTITLED_FILE_NAME: &str = "Untitled";

/// Metadata of one registered document.
///
/// Optional attributes are `None` when unset; an empty string is never
/// stored in their place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: DocumentId,
    pub title: String,
    pub category: Category,
    pub date: NaiveDate,
    pub department: Option<String>,
    pub priority: Option<Priority>,
    pub description: Option<String>,
    pub file_name: Option<String>,
    /// Display-only. Never populated by an append.
    pub size: Option<String>,
}

impl DocumentRecord {
    pub fn new(id: DocumentId, title: String, category: Category, date: NaiveDate) -> Self {
        Self {
            id,
            title,
            category,
            date,
            department: None,
            priority: None,
            description: None,
            file_name: None,
            size: None,
        }
    }

    /// Priority with the Medium default applied.
    pub fn effective_priority(&self) -> Priority {
        self.priority.unwrap_or_default()
    }

    pub fn display_size<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.size.as_deref().unwrap_or(fallback)
    }
}

/// Caller-supplied input to an append, before the store stamps id and date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftRecord {
    pub title: String,
    pub category: Category,
    pub department: Option<String>,
    pub priority: Priority,
    pub description: Option<String>,
    pub file_name: Option<String>,
}

impl DraftRecord {
    pub fn new(title: String) -> Self {
        Self {
            title,
            ..Self::default()
        }
    }

    /// Names of required fields that are missing or blank.
    pub fn missing_fields(&self) -> Vec<String> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title".to_string());
        }
        if non_blank(self.file_name.as_deref()).is_none() {
            missing.push("file_name".to_string());
        }
        missing
    }

    /// Build the stored record. Blank optional strings collapse to `None`.
    pub(crate) fn into_record(self, id: DocumentId, date: NaiveDate) -> DocumentRecord {
        let file_name = non_blank(self.file_name.as_deref())
            .unwrap_or(UNTITLED_FILE_NAME)
            .to_string();

        DocumentRecord {
            id,
            title: self.title,
            category: self.category,
            date,
            department: non_blank(self.department.as_deref()).map(str::to_string),
            priority: Some(self.priority),
            description: non_blank(self.description.as_deref()).map(str::to_string),
            file_name: Some(file_name),
            size: None,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_draft_defaults_match_upload_form() {
        let draft = DraftRecord::new("Quarterly Review".to_string());
        assert_eq!(draft.category, Category::Hr);
        assert_eq!(draft.priority, Priority::Medium);
        assert!(draft.department.is_none());
        assert!(draft.description.is_none());
        assert!(draft.file_name.is_none());
    }

    #[test]
    fn test_missing_fields() {
        let draft = DraftRecord::new("  ".to_string());
        assert_eq!(draft.missing_fields(), vec!["title", "file_name"]);

        let mut draft = DraftRecord::new("Budget".to_string());
        draft.file_name = Some("budget.xlsx".to_string());
        assert!(draft.missing_fields().is_empty());
    }

    #[test]
    fn test_into_record_collapses_blank_optionals() {
        let mut draft = DraftRecord::new("Rota".to_string());
        draft.department = Some(String::new());
        draft.description = Some("   ".to_string());

        let record = draft.into_record(DocumentId(42), day("2025-10-01"));

        assert_eq!(record.id, DocumentId(42));
        assert_eq!(record.date, day("2025-10-01"));
        assert!(record.department.is_none());
        assert!(record.description.is_none());
        assert_eq!(record.file_name.as_deref(), Some(UNTITLED_FILE_NAME));
        assert_eq!(record.priority, Some(Priority::Medium));
        assert!(record.size.is_none());
    }

    #[test]
    fn test_display_size_fallback() {
        let mut record =
            DocumentRecord::new(DocumentId(1), "Plan".to_string(), Category::Legal, day("2025-09-10"));
        assert_eq!(record.display_size("2.4MB"), "2.4MB");

        record.size = Some("800KB".to_string());
        assert_eq!(record.display_size("2.4MB"), "800KB");
    }

    #[test]
    fn test_date_serializes_as_iso() {
        let record =
            DocumentRecord::new(DocumentId(7), "Budget".to_string(), Category::Finance, day("2025-09-09"));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "2025-09-09");
        assert_eq!(json["id"], 7);
        assert_eq!(json["category"], "Finance");
    }
}
