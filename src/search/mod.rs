//! Query parameters for the document view and the query-string parser.

use serde::{Deserialize, Serialize};

use crate::entity::Category;
use crate::error::{RegistryError, Result};

/// Which categories a projection keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = RegistryError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.to_string()
    }
}

/// Display order of a projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SortKey {
    /// Latest date first.
    #[default]
    Newest,
    /// Earliest date first.
    Oldest,
    /// Title A-Z.
    Title,
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Newest => write!(f, "newest"),
            SortKey::Oldest => write!(f, "oldest"),
            SortKey::Title => write!(f, "title"),
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "newest" => Ok(SortKey::Newest),
            "oldest" => Ok(SortKey::Oldest),
            "title" => Ok(SortKey::Title),
            _ => Err(RegistryError::InvalidSortKey(s.to_string())),
        }
    }
}

impl TryFrom<String> for SortKey {
    type Error = RegistryError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<SortKey> for String {
    fn from(key: SortKey) -> Self {
        key.to_string()
    }
}

/// Search text, category filter and sort key for one projection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    pub search_text: String,
    pub category_filter: CategoryFilter,
    pub sort_key: SortKey,
}

impl QueryParams {
    /// Build parameters from raw strings, rejecting unknown categories and
    /// sort keys.
    pub fn new(search_text: impl Into<String>, category_filter: &str, sort_key: &str) -> Result<Self> {
        Ok(Self {
            search_text: search_text.into(),
            category_filter: category_filter.parse()?,
            sort_key: sort_key.parse()?,
        })
    }

    /// Check whether a title/category pair passes the search text.
    ///
    /// Empty search text matches everything; otherwise either field must
    /// contain it, ignoring case.
    pub fn matches_text(&self, title: &str, category: Category) -> bool {
        if self.search_text.is_empty() {
            return true;
        }
        let needle = self.search_text.to_lowercase();
        title.to_lowercase().contains(&needle)
            || category.as_str().to_lowercase().contains(&needle)
    }
}

/// Parse a raw query string into parameters, starting from the defaults.
///
/// Prefixed tokens set the filter and order:
/// - `type:HR` or `category:HR` - category filter (`all` clears it)
/// - `sort:title` - sort key
///
/// Every other word becomes part of the search text.
///
/// # Examples
///
/// ```ignore
/// let params = parse_query("type:finance sort:oldest budget report")?;
/// assert_eq!(params.search_text, "budget report");
/// assert_eq!(params.sort_key, SortKey::Oldest);
/// ```
pub fn parse_query(raw: &str) -> Result<QueryParams> {
    parse_query_with_defaults(raw, QueryParams::default())
}

/// Like [`parse_query`], but unset parts keep the values from `defaults`.
pub fn parse_query_with_defaults(raw: &str, defaults: QueryParams) -> Result<QueryParams> {
    let mut params = defaults;
    let mut remaining = Vec::new();

    for token in raw.split_whitespace() {
        if let Some(value) = token
            .strip_prefix("type:")
            .or_else(|| token.strip_prefix("category:"))
        {
            params.category_filter = value.parse()?;
        } else if let Some(value) = token.strip_prefix("sort:") {
            params.sort_key = value.parse()?;
        } else {
            remaining.push(token);
        }
    }

    if !remaining.is_empty() {
        params.search_text = remaining.join(" ");
    }

    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = QueryParams::default();
        assert_eq!(params.search_text, "");
        assert_eq!(params.category_filter, CategoryFilter::All);
        assert_eq!(params.sort_key, SortKey::Newest);
    }

    #[test]
    fn test_new_accepts_known_values() {
        let params = QueryParams::new("budget", "Finance", "title").unwrap();
        assert_eq!(params.category_filter, CategoryFilter::Only(Category::Finance));
        assert_eq!(params.sort_key, SortKey::Title);
    }

    #[test]
    fn test_new_rejects_unknown_sort_key() {
        let err = QueryParams::new("", "all", "size").unwrap_err();
        assert!(matches!(err, RegistryError::InvalidSortKey(ref s) if s == "size"));
    }

    #[test]
    fn test_new_rejects_unknown_category() {
        let err = QueryParams::new("", "Financial", "newest").unwrap_err();
        assert!(matches!(err, RegistryError::InvalidCategory(_)));
    }

    #[test]
    fn test_category_filter_matches() {
        assert!(CategoryFilter::All.matches(Category::Legal));
        assert!(CategoryFilter::Only(Category::Hr).matches(Category::Hr));
        assert!(!CategoryFilter::Only(Category::Hr).matches(Category::Engineering));
    }

    #[test]
    fn test_matches_text_on_title_or_category() {
        let params = QueryParams::new("eng", "all", "newest").unwrap();
        assert!(params.matches_text("Maintenance Report", Category::Engineering));
        assert!(!params.matches_text("Maintenance Report", Category::Finance));

        let params = QueryParams::new("BUDGET", "all", "newest").unwrap();
        assert!(params.matches_text("Annual Budget Report", Category::Finance));
    }

    #[test]
    fn test_parse_query_no_prefixes() {
        let params = parse_query("annual budget").unwrap();
        assert_eq!(params.search_text, "annual budget");
        assert_eq!(params.category_filter, CategoryFilter::All);
        assert_eq!(params.sort_key, SortKey::Newest);
    }

    #[test]
    fn test_parse_query_combined() {
        let params = parse_query("type:hr sort:title staff").unwrap();
        assert_eq!(params.search_text, "staff");
        assert_eq!(params.category_filter, CategoryFilter::Only(Category::Hr));
        assert_eq!(params.sort_key, SortKey::Title);
    }

    #[test]
    fn test_parse_query_category_alias_and_all() {
        let params = parse_query("category:legal").unwrap();
        assert_eq!(params.category_filter, CategoryFilter::Only(Category::Legal));
        assert_eq!(params.search_text, "");

        let defaults = QueryParams::new("", "HR", "oldest").unwrap();
        let params = parse_query_with_defaults("type:all", defaults).unwrap();
        assert_eq!(params.category_filter, CategoryFilter::All);
        assert_eq!(params.sort_key, SortKey::Oldest);
    }

    #[test]
    fn test_parse_query_rejects_bad_prefix_value() {
        assert!(parse_query("sort:random").is_err());
        assert!(parse_query("type:marketing").is_err());
    }

    #[test]
    fn test_filter_serde_roundtrip() {
        let json = serde_json::to_string(&CategoryFilter::Only(Category::Hr)).unwrap();
        assert_eq!(json, "\"HR\"");
        let parsed: CategoryFilter = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(parsed, CategoryFilter::All);
        assert!(serde_json::from_str::<CategoryFilter>("\"Marketing\"").is_err());
    }

    #[test]
    fn test_sort_key_serde_matches_parse() {
        assert_eq!(serde_json::to_string(&SortKey::Oldest).unwrap(), "\"oldest\"");
        for raw in ["title", "Title", "TITLE"] {
            let parsed: SortKey = serde_json::from_str(&format!("\"{}\"", raw)).unwrap();
            assert_eq!(parsed, raw.parse::<SortKey>().unwrap());
        }
        assert!(serde_json::from_str::<SortKey>("\"size\"").is_err());
    }
}
