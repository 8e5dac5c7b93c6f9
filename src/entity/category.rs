use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// Fixed document classification.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Category {
    #[default]
    #[serde(rename = "HR")]
    Hr,
    Engineering,
    Finance,
    Legal,
    Safety,
    Operations,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Hr,
        Category::Engineering,
        Category::Finance,
        Category::Legal,
        Category::Safety,
        Category::Operations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Hr => "HR",
            Category::Engineering => "Engineering",
            Category::Finance => "Finance",
            Category::Legal => "Legal",
            Category::Safety => "Safety",
            Category::Operations => "Operations",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hr" => Ok(Category::Hr),
            "engineering" => Ok(Category::Engineering),
            "finance" => Ok(Category::Finance),
            "legal" => Ok(Category::Legal),
            "safety" => Ok(Category::Safety),
            "operations" => Ok(Category::Operations),
            _ => Err(RegistryError::InvalidCategory(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("hr".parse::<Category>().unwrap(), Category::Hr);
        assert_eq!("ENGINEERING".parse::<Category>().unwrap(), Category::Engineering);
        assert_eq!("Legal".parse::<Category>().unwrap(), Category::Legal);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "Financial".parse::<Category>().unwrap_err();
        assert!(matches!(err, RegistryError::InvalidCategory(ref s) if s == "Financial"));
    }

    #[test]
    fn test_display_matches_serialized_name() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category));
        }
    }
}
