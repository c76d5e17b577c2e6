//! Subcommand implementations.

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod ping;
pub mod update;

use anyhow::{Context, Result};

use usuarios_core::Controller;
use usuarios_http::{ApiUrl, HttpUserStore};

use crate::cli::Commands;
use crate::output::TerminalNotifier;

/// Controller wired to the REST backend and the terminal.
pub type CliController = Controller<HttpUserStore, TerminalNotifier>;

pub async fn handle(cmd: Commands, api_url: &str) -> Result<()> {
    let api = ApiUrl::new(api_url).context("Invalid API URL")?;

    match cmd {
        Commands::List(args) => list::run(args, api).await,
        Commands::Get(args) => get::run(args, api).await,
        Commands::Create(args) => create::run(args, api).await,
        Commands::Update(args) => update::run(args, api).await,
        Commands::Delete(args) => delete::run(args, api).await,
        Commands::Ping(args) => ping::run(args, api).await,
    }
}

fn controller(api: ApiUrl) -> CliController {
    Controller::new(HttpUserStore::new(api), TerminalNotifier)
}
