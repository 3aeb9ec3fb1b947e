//! Request models for the group API
//!
//! Responses are passed through as opaque JSON; only the shapes the client
//! has to build are modelled here.

mod group;

pub use group::{CreateGroup, GroupRole, MemberChange, MemberChanges};
