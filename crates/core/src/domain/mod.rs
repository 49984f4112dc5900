// Domain Layer - Pure business logic and entities

pub mod error;
pub mod filter;
pub mod geo;
pub mod job;

// Re-exports
pub use error::DomainError;
pub use filter::{parse_keywords, FilterState, SortKey};
pub use job::JobRecord;
