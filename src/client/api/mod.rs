//! API trait definitions
//!
//! - [`GroupApi`] - Group creation, lookup and membership management

mod group;

pub use group::GroupApi;
