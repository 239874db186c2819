//! Global organization commands

use crate::cli::CommandContext;
use crate::cli::args::{ListQueryArgs, OrgFormArgs};
use crate::cli::handlers::record::{
    confirm_delete, describe, print_deleted, print_dry_run, print_record, print_saved,
};
use crate::cli::handlers::{ListView, run_list};
use crate::error::Result;
use crate::forms::{self, OrgForm};
use crate::output::{Column, progress};

/// Columns of the organization list
pub const COLUMNS: &[Column] = &[
    Column::new("id", "ID"),
    Column::new("name", "Name").sortable().searchable().highlighted(),
    Column::new("hrms_org_id", "HRMS Org ID"),
    Column::new("propeak_org_id", "Propeak Org ID"),
    Column::new("skillzengine_org_id", "SkillzEngine Org ID"),
];

pub const VIEW: ListView = ListView {
    resource: "organizations",
    title: "Global Organizations",
    columns: COLUMNS,
    selects: &[],
    actions: &["update", "delete"],
};

/// Run the org list command
pub async fn list(ctx: &CommandContext, args: &ListQueryArgs) -> Result<()> {
    let client = ctx.client.clone();
    run_list(ctx, &VIEW, args, |params| async move {
        client.list_orgs(&params).await
    })
    .await
}

/// Show a single organization
pub async fn get(ctx: &CommandContext, id: &str) -> Result<()> {
    let org = progress::track(
        "Loading organization...",
        ctx.interactive(),
        ctx.client.get_org(id),
    )
    .await?;
    print_record(ctx.format, &org, COLUMNS)
}

/// Create an organization from the form fields
pub async fn create(ctx: &CommandContext, fields: &OrgFormArgs, dry_run: bool) -> Result<()> {
    let mut form = OrgForm::default();
    fields.apply(&mut form);

    if dry_run {
        let payload = form.to_payload()?;
        return print_dry_run("create organization", &payload);
    }

    let org = progress::track(
        "Creating organization...",
        ctx.interactive(),
        forms::create_org(ctx.client.as_ref(), &form),
    )
    .await?;
    print_saved(ctx.format, "Organization created", &org, COLUMNS)
}

/// Update an organization; omitted fields keep their current values
pub async fn update(
    ctx: &CommandContext,
    id: &str,
    fields: &OrgFormArgs,
    dry_run: bool,
) -> Result<()> {
    let current = ctx.client.get_org(id).await?;
    let mut form = OrgForm::from_record(&current);
    fields.apply(&mut form);

    if dry_run {
        let payload = form.to_payload()?;
        return print_dry_run(
            &format!("update organization {}", describe(&current)),
            &payload,
        );
    }

    let org = progress::track(
        "Updating organization...",
        ctx.interactive(),
        forms::update_org(ctx.client.as_ref(), id, &form),
    )
    .await?;
    print_saved(ctx.format, "Organization updated", &org, COLUMNS)
}

/// Delete an organization, confirming first unless `yes`
pub async fn delete(ctx: &CommandContext, id: &str, yes: bool, dry_run: bool) -> Result<()> {
    if dry_run {
        let org = ctx.client.get_org(id).await?;
        return print_dry_run(&format!("delete organization {}", describe(&org)), &org);
    }

    if !yes {
        let org = ctx.client.get_org(id).await?;
        if !confirm_delete(&format!("organization {}", describe(&org)))? {
            return Ok(());
        }
    }

    progress::track(
        "Deleting organization...",
        ctx.interactive(),
        ctx.client.delete_org(id),
    )
    .await?;
    print_deleted(ctx.format, "Organization deleted", id)
}
