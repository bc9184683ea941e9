//! Shared domain-agnostic types.

pub mod pagination;

pub use pagination::{PageRequest, PaginationState};
