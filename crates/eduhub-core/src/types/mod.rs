//! Shared value types used across the console crates.

pub mod id;
pub mod pagination;
pub mod response;
pub mod sorting;

pub use id::*;
pub use pagination::{PageRequest, Paginated};
pub use response::ApiEnvelope;
pub use sorting::{SortDirection, SortUpdate};
