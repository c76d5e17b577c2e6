//! Ping command implementation.

use anyhow::{Context, Result};
use clap::Args;

use usuarios_http::{ApiUrl, HttpUserStore};

use crate::output;

#[derive(Args, Debug)]
pub struct PingArgs {}

pub async fn run(_args: PingArgs, api: ApiUrl) -> Result<()> {
    let store = HttpUserStore::new(api);

    store
        .ping()
        .await
        .with_context(|| format!("Backend at {} is not answering", store.api()))?;

    output::success(&format!("Backend at {} is up", store.api()));
    if let Some(host) = store.api().host() {
        output::field("Host", host);
    }
    Ok(())
}
