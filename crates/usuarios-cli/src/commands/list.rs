//! List users command implementation.

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;

use usuarios_http::ApiUrl;

use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print users as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ListArgs, api: ApiUrl) -> Result<()> {
    let mut controller = super::controller(api);

    if !controller.reload().await.is_completed() {
        bail!("Failed to list users");
    }

    let users = controller.users();

    if args.json {
        return output::json_pretty(&users);
    }

    if users.is_empty() {
        eprintln!("{}", "No users found.".dimmed());
        return Ok(());
    }

    output::users_table(&users);
    Ok(())
}
