use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Invalid category: '{0}'. Valid categories: HR, Engineering, Finance, Legal, Safety, Operations")]
    InvalidCategory(String),

    #[error("Invalid priority: '{0}'. Valid priorities: Low, Medium, High, Urgent")]
    InvalidPriority(String),

    #[error("Invalid sort key: '{0}'. Valid keys: newest, oldest, title")]
    InvalidSortKey(String),

    #[error("Invalid date '{0}'. Expected ISO 8601 (YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Missing required field(s): {}", fields.join(", "))]
    Validation { fields: Vec<String> },

    #[error("Document not found: {0}")]
    DocumentNotFound(u64),

    #[error("Duplicate document id: {0}")]
    DuplicateId(u64),

    #[error("Document id out of range: {0}")]
    IdOutOfRange(u64),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
