//! CLI argument definitions.

use clap::{Parser, Subcommand};

use usuarios_http::DEFAULT_API_URL;

use crate::commands::{create, delete, get, list, ping, update};

/// Manage users on a usuarios backend.
#[derive(Parser, Debug)]
#[command(name = "usuarios")]
#[command(author, version = env!("USUARIOS_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Base URL of the users backend
    #[arg(long, env = "USUARIOS_API_URL", default_value = DEFAULT_API_URL, global = true)]
    pub api_url: String,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all users
    List(list::ListArgs),

    /// Show a single user
    Get(get::GetArgs),

    /// Create a user
    Create(create::CreateArgs),

    /// Update a user's name and/or description
    Update(update::UpdateArgs),

    /// Delete a user
    Delete(delete::DeleteArgs),

    /// Check that the backend is reachable
    Ping(ping::PingArgs),
}
