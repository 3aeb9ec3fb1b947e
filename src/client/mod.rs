//! OAE REST client
//!
//! Calls flow through three layers:
//! - [`GroupApi`] wrappers shape a [`Payload`] from named parameters
//! - [`RestClient::dispatch`] switches user, sends the request and classifies
//!   the response against the [`Endpoint`] table
//! - [`Transport`] and [`Authenticator`] do the actual I/O and can be replaced

pub mod api;
pub mod auth;
pub mod context;
pub mod dispatch;
pub mod endpoint;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;
pub mod payload;
pub mod transport;

pub use api::GroupApi;
pub use auth::{Authenticator, LoginAuthenticator, Session};
pub use context::{Credentials, RestContext, Tenant};
pub use dispatch::{Reply, RestClient};
pub use endpoint::Endpoint;
pub use models::{CreateGroup, GroupRole, MemberChange, MemberChanges};
pub use pagination::PageParams;
pub use payload::{FieldValue, Payload};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
