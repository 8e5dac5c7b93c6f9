mod memory_store;
mod seed;

pub use memory_store::DocumentStore;
pub use seed::seed_records;
