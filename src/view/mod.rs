//! Derived views over a store snapshot.
//!
//! Everything here is a pure function of its inputs. A projection is
//! recomputed from scratch on every query or store change; nothing is
//! cached between calls.

mod preview;


pub use preview::{find, Preview};

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::entity::{Category, DocumentRecord};
use crate::search::{QueryParams, SortKey};

/// Counts over the full, unfiltered collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryStats {
    pub total_count: usize,
    /// Only categories present in the data appear as keys.
    pub count_by_category: BTreeMap<Category, usize>,
    /// Records outside HR and Engineering.
    pub other_count: usize,
}

impl CategoryStats {
    pub fn count(&self, category: Category) -> usize {
        self.count_by_category.get(&category).copied().unwrap_or(0)
    }
}

/// Filtered and sorted records plus aggregate counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Projection<'a> {
    pub visible_records: Vec<&'a DocumentRecord>,
    #[serde(flatten)]
    pub stats: CategoryStats,
}

impl Projection<'_> {
    pub fn visible_count(&self) -> usize {
        self.visible_records.len()
    }

    /// An empty result is a normal outcome, rendered as an empty state.
    pub fn is_empty(&self) -> bool {
        self.visible_records.is_empty()
    }
}

/// Filter, sort and aggregate `records` for display.
pub fn project<'a>(records: &'a [DocumentRecord], params: &QueryParams) -> Projection<'a> {
    let mut visible_records: Vec<&DocumentRecord> = records
        .iter()
        .filter(|record| matches(record, params))
        .collect();
    sort_records(&mut visible_records, params.sort_key);

    let stats = aggregate(records);
    debug!(
        visible = visible_records.len(),
        total = stats.total_count,
        "projected documents"
    );

    Projection {
        visible_records,
        stats,
    }
}

/// Check whether a record passes both the category filter and the search text.
pub fn matches(record: &DocumentRecord, params: &QueryParams) -> bool {
    params.category_filter.matches(record.category)
        && params.matches_text(&record.title, record.category)
}

/// Stable sort by the given key.
pub fn sort_records(records: &mut [&DocumentRecord], key: SortKey) {
    match key {
        SortKey::Newest => records.sort_by(|a, b| b.date.cmp(&a.date)),
        SortKey::Oldest => records.sort_by(|a, b| a.date.cmp(&b.date)),
        SortKey::Title => records.sort_by(|a, b| compare_titles(&a.title, &b.title)),
    }
}

/// Title order ignoring accents and case, as a dictionary would list them.
///
/// Ties are broken by accents (unaccented first), then by case (lowercase
/// first).
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| with_accents(a).cmp(with_accents(b)))
        .then_with(|| b.cmp(a))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn with_accents(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

/// Count records per category over the whole collection.
pub fn aggregate(records: &[DocumentRecord]) -> CategoryStats {
    let mut count_by_category = BTreeMap::new();
    for record in records {
        *count_by_category.entry(record.category).or_insert(0) += 1;
    }

    let other_count = count_by_category
        .iter()
        .filter(|(category, _)| !matches!(category, Category::Hr | Category::Engineering))
        .map(|(_, count)| count)
        .sum();

    CategoryStats {
        total_count: records.len(),
        count_by_category,
        other_count,
    }
}
