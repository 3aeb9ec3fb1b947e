//! Group API trait and its REST implementation

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use crate::client::context::RestContext;
use crate::client::dispatch::{Reply, RestClient};
use crate::client::endpoint::Endpoint;
use crate::client::models::{CreateGroup, MemberChanges};
use crate::client::pagination::PageParams;
use crate::client::payload::Payload;
use crate::error::Result;

/// Group management operations.
///
/// Every call is a single request/response round trip made as the context's
/// user. Group records and member lists are returned as the server sent them,
/// or `None` when an accepted response carried no body.
#[async_trait]
pub trait GroupApi: Send + Sync {
    // ========================================================================
    // Read Operations
    // ========================================================================

    /// Get a group by id.
    async fn get_group(&self, ctx: &RestContext, group_id: &str) -> Result<Option<Value>>;

    /// Get one page of the direct members of a group.
    async fn get_group_members(
        &self,
        ctx: &RestContext,
        group_id: &str,
        page: Option<&PageParams>,
    ) -> Result<Option<Value>>;

    /// Get all groups a user is a direct or indirect member of.
    ///
    /// Paging parameters are forwarded, but the server does not honour them yet.
    async fn get_membership_for_user(
        &self,
        ctx: &RestContext,
        user_id: &str,
        page: Option<&PageParams>,
    ) -> Result<Option<Value>>;

    /// Check whether a group alias is taken.
    async fn exists(&self, ctx: &RestContext, alias: &str) -> Result<bool>;

    // ========================================================================
    // Write Operations
    // ========================================================================

    /// Create a group, returning the created record if the server sent one.
    async fn create_group(
        &self,
        ctx: &RestContext,
        request: &CreateGroup,
    ) -> Result<Option<Value>>;

    /// Update profile fields of a group.
    ///
    /// `fields` maps field names to their new values, e.g. `name`,
    /// `description`, `visibility`, `joinable`. An empty payload is sent as is.
    async fn update_group(
        &self,
        ctx: &RestContext,
        group_id: &str,
        fields: &Payload,
    ) -> Result<()>;

    /// Add, re-role or remove members of a group.
    async fn set_group_members(
        &self,
        ctx: &RestContext,
        group_id: &str,
        changes: &MemberChanges,
    ) -> Result<()>;
}

#[async_trait]
impl GroupApi for RestClient {
    async fn get_group(&self, ctx: &RestContext, group_id: &str) -> Result<Option<Value>> {
        self.dispatch(ctx, Endpoint::GetGroup, &["api", "group", group_id], None)
            .await
            .map(Reply::into_body)
    }

    async fn get_group_members(
        &self,
        ctx: &RestContext,
        group_id: &str,
        page: Option<&PageParams>,
    ) -> Result<Option<Value>> {
        let query = page.map(PageParams::to_payload);
        self.dispatch(
            ctx,
            Endpoint::GetGroupMembers,
            &["api", "group", group_id, "members"],
            query.as_ref(),
        )
        .await
        .map(Reply::into_body)
    }

    async fn get_membership_for_user(
        &self,
        ctx: &RestContext,
        user_id: &str,
        page: Option<&PageParams>,
    ) -> Result<Option<Value>> {
        let query = page.map(PageParams::to_payload);
        self.dispatch(
            ctx,
            Endpoint::GetMembershipForUser,
            &["api", "group", "memberships", user_id],
            query.as_ref(),
        )
        .await
        .map(Reply::into_body)
    }

    async fn exists(&self, ctx: &RestContext, alias: &str) -> Result<bool> {
        let reply = self
            .dispatch(
                ctx,
                Endpoint::GroupExists,
                &["api", "group", "exists", alias],
                None,
            )
            .await?;
        Ok(reply.status == StatusCode::OK)
    }

    async fn create_group(
        &self,
        ctx: &RestContext,
        request: &CreateGroup,
    ) -> Result<Option<Value>> {
        let payload = request.to_payload();
        self.dispatch(
            ctx,
            Endpoint::CreateGroup,
            &["api", "group", "create"],
            Some(&payload),
        )
        .await
        .map(Reply::into_body)
    }

    async fn update_group(
        &self,
        ctx: &RestContext,
        group_id: &str,
        fields: &Payload,
    ) -> Result<()> {
        self.dispatch(
            ctx,
            Endpoint::UpdateGroup,
            &["api", "group", group_id],
            Some(fields),
        )
        .await?;
        Ok(())
    }

    async fn set_group_members(
        &self,
        ctx: &RestContext,
        group_id: &str,
        changes: &MemberChanges,
    ) -> Result<()> {
        let payload = changes.to_payload();
        self.dispatch(
            ctx,
            Endpoint::SetGroupMembers,
            &["api", "group", group_id, "members"],
            Some(&payload),
        )
        .await?;
        Ok(())
    }
}
