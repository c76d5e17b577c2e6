//! Delete user command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;

use usuarios_core::{Outcome, UserId};
use usuarios_http::ApiUrl;

use crate::confirm::StdinConfirm;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// User id
    pub id: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,
}

pub async fn run(args: DeleteArgs, api: ApiUrl) -> Result<()> {
    let id: UserId = args.id.parse().context("Invalid user id")?;
    let mut controller = super::controller(api);

    let outcome = if args.force {
        controller.delete(id, &true).await
    } else {
        controller.delete(id, &StdinConfirm).await
    };

    match outcome {
        // Backing out is not an error.
        Outcome::Completed | Outcome::Cancelled => Ok(()),
        Outcome::Failed | Outcome::Invalid(_) => bail!("Failed to delete user {}", id),
    }
}
