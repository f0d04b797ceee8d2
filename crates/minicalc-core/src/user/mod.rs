//! User domain module.
//!
//! The signed-in user is a placeholder identity: its `uid` partitions stored
//! history and nothing else.

mod model;

pub use model::User;
