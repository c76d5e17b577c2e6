//! Update user command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;

use usuarios_core::{Outcome, UserId};
use usuarios_http::ApiUrl;

use crate::output;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// User id
    pub id: String,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,
}

pub async fn run(args: UpdateArgs, api: ApiUrl) -> Result<()> {
    let id: UserId = args.id.parse().context("Invalid user id")?;

    if args.name.is_none() && args.description.is_none() {
        bail!("Nothing to update: pass --name and/or --description");
    }

    let mut controller = super::controller(api);

    if !controller.init().await.is_completed() {
        bail!("Failed to load users");
    }

    let Some(index) = controller.position(id) else {
        bail!("User {} not found", id);
    };
    let Some(original) = controller.user(index) else {
        bail!("User {} not found", id);
    };

    controller.begin_edit(&original);
    controller.edit_row(index, |row| {
        if let Some(name) = args.name {
            row.name = name;
        }
        if let Some(description) = args.description {
            row.description = description;
        }
    });

    let Some(edited) = controller.user(index) else {
        bail!("User {} not found", id);
    };

    match controller.save_edit(edited.clone()).await {
        Outcome::Completed => {
            output::field("Name", &edited.name);
            output::field("Description", &edited.description);
            Ok(())
        }
        _ => {
            // Leave edit mode with the row back to what the server has.
            controller.cancel_edit(&edited, index);
            bail!("Failed to update user {}", id)
        }
    }
}
