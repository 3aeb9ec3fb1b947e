//! Client for the group REST API of an OAE tenant
//!
//! ```ignore
//! use oae_rest::client::{CreateGroup, Credentials, GroupApi, RestClient, RestContext, Tenant};
//!
//! let client = RestClient::new()?;
//! let ctx = RestContext::as_user(
//!     Tenant::new("cam.oae.com"),
//!     Credentials::new("u:cam:alice", "secret"),
//! );
//!
//! if !client.exists(&ctx, "eng-team").await? {
//!     if let Some(group) = client.create_group(&ctx, &CreateGroup::new("eng-team")).await? {
//!         println!("{}", group["id"]);
//!     }
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use error::{ApiError, Error, Result};
