//! # List Errors
//!
//! This module defines the error type shared by every list operation.
//! None of these conditions is fatal: each one leaves the list in a valid state
//! and is meant to be reported to the operator before carrying on.

/// Errors that can occur within an [`OrderedList`](crate::OrderedList).
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ListError {
    /// No node could be obtained for a new record. The list is unchanged.
    #[error("Not enough memory for new nodes (limit {limit})")]
    AllocationFailure { limit: usize },
    /// No record with the given name exists.
    #[error("{0} is not in the list")]
    NotFound(String),
    /// The operation needs at least one record.
    #[error("There aren't any nodes in the list")]
    Empty,
}
