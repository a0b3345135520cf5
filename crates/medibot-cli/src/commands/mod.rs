//! CLI command implementations.

use std::time::Duration;

use anyhow::Result;
use medibot_gateway::Client;
use medibot_resilience::BackoffPolicy;

use crate::cli::Cli;

pub mod chat;
pub mod doctors;
pub mod hospitals;
pub mod symptoms;

/// Build the gateway client from global CLI options.
///
/// A missing API key is not an error here: the client reports it as a
/// configuration failure on first use, which the commands render as a
/// friendly message.
pub fn build_client(cli: &Cli) -> Result<Client> {
    let mut builder = Client::builder().model(cli.model.as_str());

    if let Some(ref url) = cli.base_url {
        builder = builder.base_url(url.as_str());
    }
    if let Some(ref key) = cli.api_key {
        builder = builder.api_key(key.as_str());
    }
    if let Some(attempts) = cli.max_attempts {
        builder = builder.backoff(BackoffPolicy::new(attempts, Duration::from_millis(1000)));
    }

    Ok(builder.build()?)
}
