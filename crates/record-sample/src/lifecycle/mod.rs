//! The two console programs built on the record list.
//!
//! - [`PetSession`]: build, prune and empty a list of pets.
//! - [`FundraiserSystem`]: register organizations, take donations, report.
//!
//! Both own a [`Console`](crate::input::Console) and their list for the whole
//! run, and both leave the list empty when they return.

pub mod fundraiser;
pub mod pet_session;

pub use fundraiser::{Clock, FundraiserSystem, Mode};
pub use pet_session::PetSession;
