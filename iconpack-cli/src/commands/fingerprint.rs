//! `iconpack fingerprint`: print the fingerprint of the current icon set.

use iconpack::{Aggregator, Fingerprint, IntegrationConfig};

use crate::error::CliError;

pub async fn run(config: &IntegrationConfig) -> Result<(), CliError> {
    let aggregator = Aggregator::from_config(config)?;
    let collections = aggregator.collect(config).await?;

    println!("{}", Fingerprint::compute(collections.collections()));
    Ok(())
}
