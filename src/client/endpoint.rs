//! Per-operation request configuration
//!
//! Every wrapper names its [`Endpoint`]; the dispatcher reads the HTTP method,
//! the accepted status codes and the failure message from this table instead
//! of each call-site carrying its own status checks.

use reqwest::{Method, StatusCode};

/// Group API operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// POST /api/group/create
    CreateGroup,
    /// GET /api/group/{groupId}
    GetGroup,
    /// POST /api/group/{groupId}
    UpdateGroup,
    /// GET /api/group/{groupId}/members
    GetGroupMembers,
    /// POST /api/group/{groupId}/members
    SetGroupMembers,
    /// GET /api/group/memberships/{userId}
    GetMembershipForUser,
    /// GET /api/group/exists/{alias}
    GroupExists,
}

impl Endpoint {
    pub const ALL: [Endpoint; 7] = [
        Endpoint::CreateGroup,
        Endpoint::GetGroup,
        Endpoint::UpdateGroup,
        Endpoint::GetGroupMembers,
        Endpoint::SetGroupMembers,
        Endpoint::GetMembershipForUser,
        Endpoint::GroupExists,
    ];

    pub fn method(&self) -> Method {
        match self {
            Endpoint::CreateGroup | Endpoint::UpdateGroup | Endpoint::SetGroupMembers => {
                Method::POST
            }
            Endpoint::GetGroup
            | Endpoint::GetGroupMembers
            | Endpoint::GetMembershipForUser
            | Endpoint::GroupExists => Method::GET,
        }
    }

    /// Status codes that count as success for this operation
    pub fn accepted(&self) -> &'static [StatusCode] {
        match self {
            Endpoint::CreateGroup => &[StatusCode::CREATED],
            Endpoint::GroupExists => &[StatusCode::OK, StatusCode::NOT_FOUND],
            _ => &[StatusCode::OK],
        }
    }

    pub fn accepts(&self, status: StatusCode) -> bool {
        self.accepted().contains(&status)
    }

    /// Whether a successful response body is parsed and handed back.
    ///
    /// Updates only report success, and the existence check answers with its
    /// status code, so their bodies are ignored.
    pub fn parses_body(&self) -> bool {
        !matches!(
            self,
            Endpoint::UpdateGroup | Endpoint::SetGroupMembers | Endpoint::GroupExists
        )
    }

    /// Prefix for the error raised on an unexpected status
    pub fn failure_message(&self) -> &'static str {
        match self {
            Endpoint::CreateGroup => "Could not create group",
            Endpoint::GetGroup => "Could not get the group",
            Endpoint::UpdateGroup => "Could not update the group",
            Endpoint::GetGroupMembers => "Could not get the group members",
            Endpoint::SetGroupMembers => "Could not update the group members",
            Endpoint::GetMembershipForUser => "Could not get the memberships of the user",
            Endpoint::GroupExists => "Could not verify this group",
        }
    }
}
