//! Domain types for the client core.

pub mod session;
pub mod store;
pub mod user;

pub use session::Session;
pub use store::{Rating, Store};
pub use user::User;
