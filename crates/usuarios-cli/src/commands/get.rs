//! Get user command implementation.

use anyhow::{Context, Result};
use clap::Args;

use usuarios_core::UserId;
use usuarios_http::{ApiUrl, HttpUserStore};

use crate::output;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// User id
    pub id: String,

    /// Print the user as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: GetArgs, api: ApiUrl) -> Result<()> {
    let id: UserId = args.id.parse().context("Invalid user id")?;
    let store = HttpUserStore::new(api);

    let user = store.get(id).await.context("Failed to get user")?;

    if args.json {
        return output::json_pretty(&user);
    }

    output::field("ID", &user.id.to_string());
    output::field("Name", &user.name);
    output::field("Description", &user.description);
    Ok(())
}
