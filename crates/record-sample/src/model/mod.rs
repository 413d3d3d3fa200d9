//! Record payloads for the trackers.
//!
//! Each payload is stored in an [`OrderedList`](record_list::OrderedList) as a
//! [`Record`](record_list::Record), which supplies the name.

pub mod donor;
pub mod organization;
pub mod pet;

pub use donor::*;
pub use organization::*;
pub use pet::*;
