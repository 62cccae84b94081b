//! `iconpack build`: load all sources and update the declaration file.

use iconpack::{Aggregator, ArtifactCache, IntegrationConfig};

use crate::error::CliError;

pub async fn run(config: &IntegrationConfig) -> Result<(), CliError> {
    let aggregator = Aggregator::from_config(config)?;
    let collections = aggregator.collect(config).await?;

    let artifacts = ArtifactCache::from_config(config);
    let outcome = artifacts.reconcile(collections.collections()).await?;

    let prefixes: Vec<&str> = collections.prefixes().collect();
    println!(
        "Collections: {}",
        if prefixes.is_empty() {
            "(none)".to_string()
        } else {
            prefixes.join(", ")
        }
    );
    println!("Icons:       {}", collections.total_icons());
    println!("Fingerprint: {}", outcome.fingerprint());
    if outcome.was_written() {
        println!("Wrote {}", artifacts.path().display());
    } else {
        println!("Up to date: {}", artifacts.path().display());
    }

    Ok(())
}
