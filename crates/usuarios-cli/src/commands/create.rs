//! Create user command implementation.

use anyhow::{Result, bail};
use clap::Args;

use usuarios_core::{Outcome, UserForm};
use usuarios_http::ApiUrl;

use crate::output;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Name (1-100 characters)
    #[arg(long)]
    pub name: String,

    /// Description (1-400 characters)
    #[arg(long)]
    pub description: String,
}

pub async fn run(args: CreateArgs, api: ApiUrl) -> Result<()> {
    let mut controller = super::controller(api);

    controller.open_create_dialog();
    match controller
        .create(UserForm::new(args.name, args.description))
        .await
    {
        Outcome::Completed => {}
        Outcome::Invalid(errors) => {
            output::field_errors(&errors);
            bail!("Invalid user");
        }
        Outcome::Failed | Outcome::Cancelled => bail!("Failed to create user"),
    }

    if let Some(user) = controller.last_created() {
        output::field("ID", &user.id.to_string());
    }

    Ok(())
}
