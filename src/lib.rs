pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod search;
pub mod storage;
pub mod view;

pub use config::RegistryConfig;
pub use entity::{Category, DocumentId, DocumentRecord, DraftRecord, Priority};
pub use error::{RegistryError, Result};
pub use search::{parse_query, CategoryFilter, QueryParams, SortKey};
pub use storage::DocumentStore;
pub use view::{project, CategoryStats, Projection};
