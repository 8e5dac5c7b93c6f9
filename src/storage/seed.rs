use chrono::NaiveDate;

use crate::entity::{Category, DocumentId, DocumentRecord};

/// Evaluated at compile time, so a bad day fails the build.
const fn september(day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(2025, 9, day) {
        Some(date) => date,
        None => panic!("seed day outside September 2025"),
    }
}

const SEED: [(u64, &str, Category, NaiveDate); 10] = [
    (1, "Safety Bulletin", Category::Hr, september(15)),
    (2, "Maintenance Report", Category::Engineering, september(14)),
    (3, "Contract Approval", Category::Finance, september(13)),
    (4, "New HR Policy", Category::Hr, september(12)),
    (5, "Depot Expansion Plan", Category::Engineering, september(11)),
    (6, "Legal Compliance Update", Category::Legal, september(10)),
    (7, "Annual Budget Report", Category::Finance, september(9)),
    (8, "Environmental Impact Study", Category::Engineering, september(8)),
    (9, "Staff Training Schedule", Category::Hr, september(7)),
    (10, "Incident Report Q3", Category::Engineering, september(6)),
];

/// The ten historical records every seeded store starts with, oldest id first.
pub fn seed_records() -> Vec<DocumentRecord> {
    SEED.iter()
        .map(|&(id, title, category, date)| {
            DocumentRecord::new(DocumentId(id), title.to_string(), category, date)
        })
        .collect()
}
