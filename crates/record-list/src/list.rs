//! # Ordered List
//!
//! This module defines [`OrderedList`], a singly-linked list of [`Record`]s kept in
//! non-decreasing caseless order of their names.
//!
//! ## Operations
//!
//! * **Insert**:
//!     1. Checks the node budget (if any) and fails with [`ListError::AllocationFailure`] when it is spent.
//!     2. Walks from the head past every record whose name is less than *or equal to* the new name.
//!     3. Links the new node in at that position.
//!
//! * **Find**:
//!     1. Walks from the head and returns the first record whose name caselessly equals the key.
//!
//! * **Delete**:
//!     1. Reports [`ListError::Empty`] on an empty list.
//!     2. Walks from the head to the first caseless match, keeping a handle on the predecessor link.
//!     3. Re-points that link past the match and hands the removed record back.
//!     4. Reports [`ListError::NotFound`] if the walk reaches the end.
//!
//! * **Clear**:
//!     1. Detaches the head and releases nodes one by one, head to tail.
//!
//! ## Ties
//!
//! Records with equal names keep their insertion order: a new record goes after
//! the existing ones with the same name. Lookups by name therefore always reach
//! the oldest of them first.

use crate::caseless;
use crate::error::ListError;
use crate::record::Record;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use tracing::{debug, info, warn};

type Link<P> = Option<Box<Node<P>>>;

/// A list element wrapping one record and the link to the next node.
struct Node<P> {
    record: Record<P>,
    next: Link<P>,
}

/// The two macroscopic states of a list.
///
/// `insert` is the only way from `Empty` to `NonEmpty`; deleting the last
/// record or clearing the list are the only ways back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListState {
    Empty,
    NonEmpty,
}

/// An ordered singly-linked collection of named records.
///
/// The list owns every node reachable from its head. Nodes are created only by
/// [`insert`](Self::insert) and destroyed only by [`delete_by_name`](Self::delete_by_name),
/// [`clear`](Self::clear), or dropping the list.
pub struct OrderedList<P> {
    head: Link<P>,
    len: usize,
    node_limit: Option<usize>,
}

impl<P> OrderedList<P> {
    /// Creates an empty list with no node budget.
    pub fn new() -> Self {
        Self {
            head: None,
            len: 0,
            node_limit: None,
        }
    }

    /// Creates an empty list that will hold at most `limit` nodes.
    ///
    /// Inserts beyond the budget fail with [`ListError::AllocationFailure`],
    /// exactly as if the allocator had run dry.
    pub fn with_node_limit(limit: usize) -> Self {
        Self {
            head: None,
            len: 0,
            node_limit: Some(limit),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn state(&self) -> ListState {
        if self.is_empty() {
            ListState::Empty
        } else {
            ListState::NonEmpty
        }
    }

    pub fn node_limit(&self) -> Option<usize> {
        self.node_limit
    }

    /// Inserts `record` at its sorted position and returns a reference to it.
    ///
    /// # Errors
    ///
    /// [`ListError::AllocationFailure`] when the node budget is spent. The record
    /// is dropped and the list is left exactly as it was.
    pub fn insert(&mut self, record: Record<P>) -> Result<&Record<P>, ListError> {
        debug!(record_type = record_type::<P>(), name = record.name(), "Insert");

        if let Some(limit) = self.node_limit {
            if self.len >= limit {
                warn!(record_type = record_type::<P>(), limit, "Not enough memory for new nodes");
                return Err(ListError::AllocationFailure { limit });
            }
        }

        let mut cursor = &mut self.head;
        while cursor
            .as_ref()
            .is_some_and(|node| caseless::cmp(node.record.name(), record.name()) != Ordering::Greater)
        {
            if let Some(node) = cursor {
                cursor = &mut node.next;
            }
        }

        let next = cursor.take();
        let node = cursor.insert(Box::new(Node { record, next }));
        self.len += 1;
        info!(record_type = record_type::<P>(), name = node.record.name(), size = self.len, "Inserted");
        Ok(&node.record)
    }

    /// Returns the first record whose name caselessly equals `name`.
    pub fn find_by_name(&self, name: &str) -> Option<&Record<P>> {
        let found = self.iter().find(|record| caseless::eq(record.name(), name));
        debug!(record_type = record_type::<P>(), name, found = found.is_some(), "Find");
        found
    }

    /// Mutable variant of [`find_by_name`](Self::find_by_name).
    ///
    /// Only the payload of the returned record can change, so the list stays sorted.
    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Record<P>> {
        debug!(record_type = record_type::<P>(), name, "Find (mut)");
        let mut cursor = self.head.as_deref_mut();
        while let Some(node) = cursor {
            if caseless::eq(node.record.name(), name) {
                return Some(&mut node.record);
            }
            cursor = node.next.as_deref_mut();
        }
        None
    }

    /// Removes the first record whose name caselessly equals `name`.
    ///
    /// Exactly zero or one record is removed per call; the remaining records
    /// keep their relative order.
    ///
    /// # Errors
    ///
    /// - [`ListError::Empty`] if the list has no records.
    /// - [`ListError::NotFound`] if no record matches after a full scan.
    pub fn delete_by_name(&mut self, name: &str) -> Result<Record<P>, ListError> {
        debug!(record_type = record_type::<P>(), name, "Delete");

        if self.is_empty() {
            warn!(record_type = record_type::<P>(), name, "List empty");
            return Err(ListError::Empty);
        }

        let mut cursor = &mut self.head;
        while cursor
            .as_ref()
            .is_some_and(|node| !caseless::eq(node.record.name(), name))
        {
            if let Some(node) = cursor {
                cursor = &mut node.next;
            }
        }

        match cursor.take() {
            Some(node) => {
                let Node { record, next } = *node;
                *cursor = next;
                self.len -= 1;
                info!(record_type = record_type::<P>(), name = record.name(), size = self.len, "Deleted");
                Ok(record)
            }
            None => {
                warn!(record_type = record_type::<P>(), name, "Not found");
                Err(ListError::NotFound(name.to_string()))
            }
        }
    }

    /// Releases every node and resets the list to empty.
    ///
    /// Returns how many records were released. Calling this on an empty list
    /// is a no-op that returns `0`.
    pub fn clear(&mut self) -> usize {
        let mut released = 0;
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
            released += 1;
        }
        self.len = 0;
        if released > 0 {
            info!(record_type = record_type::<P>(), released, "Cleared");
        }
        released
    }

    /// Iterates over the records in sorted order, head to tail.
    pub fn iter(&self) -> Iter<'_, P> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }
}

impl<P> Default for OrderedList<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Drop for OrderedList<P> {
    fn drop(&mut self) {
        // Unlink iteratively; the default recursive drop could overflow the stack on long lists.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<P: fmt::Debug> fmt::Debug for OrderedList<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<P> Extend<Record<P>> for OrderedList<P> {
    /// Inserts records until one is refused for lack of nodes; that one and the
    /// rest are dropped, and a `warn` event reports how many.
    ///
    /// Use [`insert`](OrderedList::insert) directly to handle each refusal.
    fn extend<I: IntoIterator<Item = Record<P>>>(&mut self, records: I) {
        let mut records = records.into_iter();
        while let Some(record) = records.next() {
            if let Err(err) = self.insert(record) {
                let dropped = 1 + records.count();
                warn!(record_type = record_type::<P>(), dropped, error = %err, "Extend stopped");
                return;
            }
        }
    }
}

/// Collects into a list with no node budget, so no record is ever refused.
impl<P> FromIterator<Record<P>> for OrderedList<P> {
    fn from_iter<I: IntoIterator<Item = Record<P>>>(records: I) -> Self {
        let mut list = Self::new();
        list.extend(records);
        list
    }
}

impl<'a, P> IntoIterator for &'a OrderedList<P> {
    type Item = &'a Record<P>;
    type IntoIter = Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over an [`OrderedList`], yielding records head to tail.
///
/// Created by [`OrderedList::iter`]. Restart a traversal by calling `iter()` again.
pub struct Iter<'a, P> {
    next: Option<&'a Node<P>>,
    remaining: usize,
}

impl<'a, P> Iterator for Iter<'a, P> {
    type Item = &'a Record<P>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.record
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<P> ExactSizeIterator for Iter<'_, P> {}

impl<P> FusedIterator for Iter<'_, P> {}

impl<P> Clone for Iter<'_, P> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            remaining: self.remaining,
        }
    }
}

// Extract just the type name (e.g., "Pet" instead of "record_sample::model::pet::Pet")
fn record_type<P>() -> &'static str {
    std::any::type_name::<P>()
        .rsplit("::")
        .next()
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<P>(list: &OrderedList<P>) -> Vec<&str> {
        list.iter().map(Record::name).collect()
    }

    fn sample() -> OrderedList<u32> {
        let mut list = OrderedList::new();
        list.insert(Record::new("Charlie", 3)).unwrap();
        list.insert(Record::new("Amy", 1)).unwrap();
        list.insert(Record::new("Shirly", 7)).unwrap();
        list
    }

    #[test]
    fn test_insert_keeps_caseless_order() {
        let list = sample();
        assert_eq!(names(&list), ["Amy", "Charlie", "Shirly"]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.state(), ListState::NonEmpty);
    }

    #[test]
    fn test_insert_returns_stored_record() {
        let mut list = OrderedList::new();
        let stored = list.insert(Record::new("bella", 2u32)).unwrap();
        assert_eq!(stored.name(), "bella");
        assert_eq!(*stored.payload(), 2);
    }

    #[test]
    fn test_equal_names_keep_insertion_order() {
        let mut list = OrderedList::new();
        list.insert(Record::new("max", 1u32)).unwrap();
        list.insert(Record::new("Max", 2)).unwrap();
        list.insert(Record::new("MAX", 3)).unwrap();
        list.insert(Record::new("Abby", 4)).unwrap();

        let ages: Vec<u32> = list.iter().map(|r| *r.payload()).collect();
        assert_eq!(ages, [4, 1, 2, 3]);
        assert_eq!(*list.find_by_name("mAx").unwrap().payload(), 1);

        let removed = list.delete_by_name("max").unwrap();
        assert_eq!(*removed.payload(), 1);
        assert_eq!(*list.find_by_name("max").unwrap().payload(), 2);
    }

    #[test]
    fn test_find_ignores_case() {
        let list = sample();
        let found = list.find_by_name("sHIRLY").unwrap();
        assert_eq!(found.name(), "Shirly");
        assert!(list.find_by_name("Zed").is_none());
    }

    #[test]
    fn test_find_mut_updates_payload() {
        let mut list = sample();
        *list.find_by_name_mut("amy").unwrap().payload_mut() = 2;
        assert_eq!(*list.find_by_name("Amy").unwrap().payload(), 2);
        assert!(list.find_by_name_mut("Zed").is_none());
    }

    #[test]
    fn test_delete_head_middle_and_tail() {
        let mut list = sample();
        assert_eq!(list.delete_by_name("charlie").unwrap().name(), "Charlie");
        assert_eq!(names(&list), ["Amy", "Shirly"]);

        assert_eq!(list.delete_by_name("AMY").unwrap().name(), "Amy");
        assert_eq!(names(&list), ["Shirly"]);

        assert_eq!(list.delete_by_name("shirly").unwrap().name(), "Shirly");
        assert!(list.is_empty());
        assert_eq!(list.state(), ListState::Empty);
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_delete_missing_name_is_noop() {
        let mut list = sample();
        list.delete_by_name("Charlie").unwrap();

        let err = list.delete_by_name("Zed").unwrap_err();
        assert_eq!(err, ListError::NotFound("Zed".to_string()));
        assert_eq!(names(&list), ["Amy", "Shirly"]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_delete_on_empty_list() {
        let mut list: OrderedList<u32> = OrderedList::new();
        assert_eq!(list.delete_by_name("Amy").unwrap_err(), ListError::Empty);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut list = sample();
        assert_eq!(list.clear(), 3);
        assert!(list.is_empty());
        assert_eq!(list.iter().count(), 0);
        assert_eq!(list.clear(), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn test_node_limit_reports_allocation_failure() {
        let mut list = OrderedList::with_node_limit(2);
        list.insert(Record::new("b", ())).unwrap();
        list.insert(Record::new("c", ())).unwrap();

        let err = list.insert(Record::new("a", ())).unwrap_err();
        assert_eq!(err, ListError::AllocationFailure { limit: 2 });
        assert_eq!(names(&list), ["b", "c"]);

        // Deleting frees budget for another insert.
        list.delete_by_name("b").unwrap();
        list.insert(Record::new("a", ())).unwrap();
        assert_eq!(names(&list), ["a", "c"]);
    }

    #[test]
    fn test_extend_stops_at_node_budget() {
        let mut list = OrderedList::with_node_limit(2);
        list.extend(["d", "c", "b", "a"].map(|name| Record::new(name, ())));
        let names: Vec<&str> = list.iter().map(Record::name).collect();
        assert_eq!(names, ["c", "d"]);

        let collected: OrderedList<()> = (0..5).map(|i| Record::new(i.to_string(), ())).collect();
        assert_eq!(collected.len(), 5);
        assert_eq!(collected.node_limit(), None);
    }

    #[test]
    fn test_iter_is_exact_size_and_restartable() {
        let list = sample();
        let mut iter = list.iter();
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);

        let again: Vec<&str> = (&list).into_iter().map(Record::name).collect();
        assert_eq!(again, ["Amy", "Charlie", "Shirly"]);
    }

    #[test]
    fn test_long_list_drops_without_recursion() {
        let mut list = OrderedList::new();
        // Inserting in descending order keeps every insert at the head.
        for i in (0..100_000u32).rev() {
            list.insert(Record::new(format!("{i:06}"), i)).unwrap();
        }
        assert_eq!(list.len(), 100_000);
        drop(list);
    }

    #[test]
    fn test_record_type_strips_module_path() {
        assert_eq!(record_type::<ListState>(), "ListState");
    }
}
