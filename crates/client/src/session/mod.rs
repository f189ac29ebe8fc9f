//! Client-local session persistence.
//!
//! The resolved principal is stored under the
//! [`keys::CURRENT_USER`](crate::models::session::keys::CURRENT_USER) slot as
//! a JSON document and restored on process start; an absent slot means
//! unauthenticated.

mod store;

pub use store::{FileSlotStore, MemorySlotStore, SlotError, SlotStore};
