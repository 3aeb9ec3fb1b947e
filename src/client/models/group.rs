//! Group creation and membership models

use std::fmt;
use std::str::FromStr;

use crate::client::payload::{FieldValue, Payload};

/// Parameters for `POST /api/group/create`.
///
/// Only `alias` is required. Every optional field that is set ends up in the
/// form, including `joinable(false)` and empty member lists.
///
/// # Example
/// ```ignore
/// let request = CreateGroup::new("eng-team")
///     .name("Engineering")
///     .visibility("private")
///     .managers(vec!["u:cam:alice".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateGroup {
    pub alias: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub visibility: Option<String>,
    pub joinable: Option<FieldValue>,
    pub managers: Option<Vec<String>>,
    pub members: Option<Vec<String>>,
}

impl CreateGroup {
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            name: None,
            description: None,
            visibility: None,
            joinable: None,
            managers: None,
            members: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn visibility(mut self, visibility: impl Into<String>) -> Self {
        self.visibility = Some(visibility.into());
        self
    }

    /// Joinable policy, sent as is (`"yes"`, `"request"`, `false`, ...)
    pub fn joinable(mut self, joinable: impl Into<FieldValue>) -> Self {
        self.joinable = Some(joinable.into());
        self
    }

    /// Principal ids to make managers
    pub fn managers(mut self, managers: Vec<String>) -> Self {
        self.managers = Some(managers);
        self
    }

    /// Principal ids to make members
    pub fn members(mut self, members: Vec<String>) -> Self {
        self.members = Some(members);
        self
    }

    pub fn to_payload(&self) -> Payload {
        let mut payload = Payload::new();
        payload
            .insert("alias", self.alias.clone())
            .insert_opt("name", self.name.clone())
            .insert_opt("description", self.description.clone())
            .insert_opt("visibility", self.visibility.clone())
            .insert_opt("joinable", self.joinable.clone())
            .insert_opt("managers", self.managers.clone())
            .insert_opt("members", self.members.clone());
        payload
    }
}

/// Role of a principal inside a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupRole {
    Manager,
    Member,
}

impl GroupRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupRole::Manager => "manager",
            GroupRole::Member => "member",
        }
    }
}

impl fmt::Display for GroupRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a membership update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberChange {
    /// Add the principal, or change its role
    Role(GroupRole),
    /// Remove the principal from the group
    Remove,
}

impl From<MemberChange> for FieldValue {
    fn from(change: MemberChange) -> Self {
        match change {
            MemberChange::Role(role) => FieldValue::Text(role.as_str().to_string()),
            MemberChange::Remove => FieldValue::Bool(false),
        }
    }
}

impl FromStr for MemberChange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manager" => Ok(MemberChange::Role(GroupRole::Manager)),
            "member" => Ok(MemberChange::Role(GroupRole::Member)),
            "remove" | "false" => Ok(MemberChange::Remove),
            other => Err(format!(
                "unknown membership change '{}', expected manager, member or remove",
                other
            )),
        }
    }
}

/// Ordered set of membership changes keyed by principal id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberChanges {
    changes: Vec<(String, MemberChange)>,
}

impl MemberChanges {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a change; a later change for the same principal wins
    pub fn set(mut self, principal_id: impl Into<String>, change: MemberChange) -> Self {
        let principal_id = principal_id.into();
        match self.changes.iter_mut().find(|(id, _)| *id == principal_id) {
            Some((_, existing)) => *existing = change,
            None => self.changes.push((principal_id, change)),
        }
        self
    }

    pub fn role(self, principal_id: impl Into<String>, role: GroupRole) -> Self {
        self.set(principal_id, MemberChange::Role(role))
    }

    pub fn remove(self, principal_id: impl Into<String>) -> Self {
        self.set(principal_id, MemberChange::Remove)
    }

    pub fn get(&self, principal_id: &str) -> Option<MemberChange> {
        self.changes
            .iter()
            .find(|(id, _)| id == principal_id)
            .map(|(_, change)| *change)
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Form payload: principal id → role name, or `false` for removal
    pub fn to_payload(&self) -> Payload {
        self.changes
            .iter()
            .map(|(id, change)| (id.clone(), *change))
            .collect()
    }
}

impl<K: Into<String>> FromIterator<(K, MemberChange)> for MemberChanges {
    fn from_iter<I: IntoIterator<Item = (K, MemberChange)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(MemberChanges::new(), |changes, (id, change)| changes.set(id, change))
    }
}
