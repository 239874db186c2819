//! Global user commands

use crate::cli::CommandContext;
use crate::cli::args::{ListQueryArgs, UserFormArgs};
use crate::cli::handlers::record::{
    confirm_delete, describe, print_deleted, print_dry_run, print_record, print_saved,
};
use crate::cli::handlers::{ListView, run_list};
use crate::error::Result;
use crate::forms::{self, UserForm};
use crate::output::{Column, progress};

/// Columns of the user list
pub const COLUMNS: &[Column] = &[
    Column::new("id", "ID"),
    Column::new("name", "Name").sortable().searchable().highlighted(),
    Column::new("email", "Email").sortable(),
    Column::new("hrms_user_id", "HRMS User ID"),
    Column::new("propeak_user_id", "Propeak User ID"),
    Column::new("skillzengine_user_id", "SkillzEngine User ID"),
];

pub const VIEW: ListView = ListView {
    resource: "users",
    title: "Global Users",
    columns: COLUMNS,
    selects: &[],
    actions: &["update", "delete"],
};

/// Run the user list command
pub async fn list(ctx: &CommandContext, args: &ListQueryArgs) -> Result<()> {
    let client = ctx.client.clone();
    run_list(ctx, &VIEW, args, |params| async move {
        client.list_users(&params).await
    })
    .await
}

/// Show a single user
pub async fn get(ctx: &CommandContext, id: &str) -> Result<()> {
    let user = progress::track("Loading user...", ctx.interactive(), ctx.client.get_user(id)).await?;
    print_record(ctx.format, &user, COLUMNS)
}

/// Create a user from the form fields
pub async fn create(ctx: &CommandContext, fields: &UserFormArgs, dry_run: bool) -> Result<()> {
    let mut form = UserForm::default();
    fields.apply(&mut form);

    if dry_run {
        let payload = form.to_payload()?;
        return print_dry_run("create user", &payload);
    }

    let user = progress::track(
        "Creating user...",
        ctx.interactive(),
        forms::create_user(ctx.client.as_ref(), &form),
    )
    .await?;
    print_saved(ctx.format, "User created", &user, COLUMNS)
}

/// Update a user; omitted fields keep their current values
pub async fn update(
    ctx: &CommandContext,
    id: &str,
    fields: &UserFormArgs,
    dry_run: bool,
) -> Result<()> {
    let current = ctx.client.get_user(id).await?;
    let mut form = UserForm::from_record(&current);
    fields.apply(&mut form);

    if dry_run {
        let payload = form.to_payload()?;
        return print_dry_run(&format!("update user {}", describe(&current)), &payload);
    }

    let user = progress::track(
        "Updating user...",
        ctx.interactive(),
        forms::update_user(ctx.client.as_ref(), id, &form),
    )
    .await?;
    print_saved(ctx.format, "User updated", &user, COLUMNS)
}

/// Delete a user, confirming first unless `yes`
pub async fn delete(ctx: &CommandContext, id: &str, yes: bool, dry_run: bool) -> Result<()> {
    if dry_run {
        let user = ctx.client.get_user(id).await?;
        return print_dry_run(&format!("delete user {}", describe(&user)), &user);
    }

    if !yes {
        let user = ctx.client.get_user(id).await?;
        if !confirm_delete(&format!("user {}", describe(&user)))? {
            return Ok(());
        }
    }

    progress::track("Deleting user...", ctx.interactive(), ctx.client.delete_user(id)).await?;
    print_deleted(ctx.format, "User deleted", id)
}
