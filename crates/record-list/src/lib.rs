//! # Record List
//!
//! This crate provides an ordered, singly-linked collection of named records.
//! Records are kept sorted by a **case-insensitive** name, and the list exposes a
//! small, uniform API: insert-in-order, find by name, delete by name, traversal,
//! and bulk clear.
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into three layers:
//!
//! 1. **Record Layer** ([`Record`]) - A name plus an opaque payload owned by the caller
//! 2. **Ordering Layer** ([`caseless`]) - How names compare (`"amy" == "AMY"`)
//! 3. **Storage Layer** ([`OrderedList`]) - Node ownership, ordering invariant, lifecycle
//!
//! The list is generic over the payload type `P`. A pet tracker stores
//! `Record<Pet>`, a fundraiser stores `Record<Organization>`, and both share the
//! exact same insert/delete/search contract.
//!
//! ```rust
//! use record_list::{OrderedList, Record};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Pet {
//!     age: u32,
//! }
//!
//! let mut pets = OrderedList::new();
//! pets.insert(Record::new("Charlie", Pet { age: 3 })).unwrap();
//! pets.insert(Record::new("amy", Pet { age: 1 })).unwrap();
//! pets.insert(Record::new("Shirly", Pet { age: 7 })).unwrap();
//!
//! let names: Vec<&str> = pets.iter().map(Record::name).collect();
//! assert_eq!(names, ["amy", "Charlie", "Shirly"]);
//!
//! let removed = pets.delete_by_name("CHARLIE").unwrap();
//! assert_eq!(removed.payload().age, 3);
//! assert_eq!(pets.len(), 2);
//! ```
//!
//! ## Ownership Model
//!
//! Every node is exclusively owned by its predecessor (or by the list head for
//! the first node). No node is shared and no cycles are ever created, so plain
//! `Box` links are enough. Deletion and [`clear`](OrderedList::clear) release
//! nodes head to tail.
//!
//! ## Concurrency Model
//!
//! None. Every operation runs to completion and performs no I/O. If a list must
//! be shared between threads, wrap the whole list in a single `Mutex`.
//!
//! ## Error Handling
//!
//! Failures are reported as [`ListError`] values and are always recoverable.
//! An insert that cannot get a node leaves the list untouched.
//!
//! ## Observability
//!
//! Operations emit `tracing` events with structured fields. See the
//! [`tracing`](crate::tracing) module for subscriber setup.

pub mod caseless;
pub mod error;
pub mod list;
pub mod record;
pub mod tracing;

// Re-export core types for convenience
pub use error::ListError;
pub use list::{Iter, ListState, OrderedList};
pub use record::{Record, MAX_NAME_CHARS};
