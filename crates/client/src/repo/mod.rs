//! In-memory repositories for the aggregation service.
//!
//! The durable system of record lives behind the REST backend; the client
//! core works on local collections seeded from the bulk reads. Both
//! repositories keep insertion order, which is the default listing order and
//! the tie-breaker for every stable sort above them.

mod ratings;
mod stores;

pub use ratings::RatingRepository;
pub use stores::StoreRepository;
