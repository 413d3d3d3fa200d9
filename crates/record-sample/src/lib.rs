//! # Record Sample
//!
//! Console trackers built on [`record_list`].
//!
//! ## Core Components
//!
//! - **[input]**: The validated console ([`Console`](input::Console)) and the input predicates.
//! - **[model]**: Record payloads ([`Pet`](model::Pet), [`Organization`](model::Organization)).
//! - **[report]**: Listings, receipts and summaries, on screen or on file.
//! - **[lifecycle]**: The programs themselves ([`PetSession`](lifecycle::PetSession), [`FundraiserSystem`](lifecycle::FundraiserSystem)).
//! - **[config]**: File locations, fee and limits ([`TrackerConfig`](config::TrackerConfig)).
//!
//! The binary in `main.rs` wires these to `stdin`/`stdout`.

pub mod config;
pub mod error;
pub mod input;
pub mod lifecycle;
pub mod model;
pub mod report;
