//! Group management commands

use log::debug;
use oae_rest::client::{CreateGroup, GroupApi, MemberChanges, Payload};
use oae_rest::error::Result;

use crate::cli::{CommandContext, GlobalOptions, GroupCommands};
use crate::output;

/// Run a group subcommand
pub async fn run(command: GroupCommands, opts: &GlobalOptions) -> Result<()> {
    let cmd = CommandContext::new(opts)?;
    debug!("Running {:?} as {}", command, cmd.ctx.principal());

    match command {
        GroupCommands::Create {
            alias,
            name,
            description,
            visibility,
            joinable,
            managers,
            members,
        } => {
            let request = build_create(
                alias,
                name,
                description,
                visibility,
                joinable,
                managers,
                members,
            );
            let group = cmd.client.create_group(&cmd.ctx, &request).await?;
            output::print_value(group.as_ref(), &cmd)
        }
        GroupCommands::Get { group_id } => {
            let group = cmd.client.get_group(&cmd.ctx, &group_id).await?;
            output::print_value(group.as_ref(), &cmd)
        }
        GroupCommands::Update { group_id, fields } => {
            let fields: Payload = fields.into_iter().collect();
            cmd.client
                .update_group(&cmd.ctx, &group_id, &fields)
                .await?;
            output::print_updated(&group_id, "profile", &cmd)
        }
        GroupCommands::Members { group_id, page } => {
            let members = cmd
                .client
                .get_group_members(&cmd.ctx, &group_id, page.to_params().as_ref())
                .await?;
            output::print_value(members.as_ref(), &cmd)
        }
        GroupCommands::SetMembers { group_id, changes } => {
            let changes: MemberChanges = changes.into_iter().collect();
            cmd.client
                .set_group_members(&cmd.ctx, &group_id, &changes)
                .await?;
            output::print_updated(&group_id, "members", &cmd)
        }
        GroupCommands::Memberships { user_id, page } => {
            let groups = cmd
                .client
                .get_membership_for_user(&cmd.ctx, &user_id, page.to_params().as_ref())
                .await?;
            output::print_value(groups.as_ref(), &cmd)
        }
        GroupCommands::Exists { alias } => {
            let exists = cmd.client.exists(&cmd.ctx, &alias).await?;
            output::print_exists(&alias, exists, &cmd)
        }
    }
}

/// Repeated `--manager`/`--member` flags that were never given stay unset
fn build_create(
    alias: String,
    name: Option<String>,
    description: Option<String>,
    visibility: Option<String>,
    joinable: Option<String>,
    managers: Vec<String>,
    members: Vec<String>,
) -> CreateGroup {
    let mut request = CreateGroup::new(alias);
    request.name = name;
    request.description = description;
    request.visibility = visibility;
    request.joinable = joinable.map(Into::into);
    request.managers = (!managers.is_empty()).then_some(managers);
    request.members = (!members.is_empty()).then_some(members);
    request
}
