//! `iconpack check`: fail when the declaration file is out of date.

use iconpack::{Aggregator, ArtifactCache, ArtifactStatus, IntegrationConfig};

use crate::error::CliError;

pub async fn run(config: &IntegrationConfig) -> Result<(), CliError> {
    let aggregator = Aggregator::from_config(config)?;
    let collections = aggregator.collect(config).await?;

    let artifacts = ArtifactCache::from_config(config);
    match artifacts.status(collections.collections()).await {
        ArtifactStatus::Fresh(fingerprint) => {
            println!("Up to date ({})", fingerprint.short());
            Ok(())
        }
        ArtifactStatus::Stale { current, previous } => {
            match previous {
                Some(previous) => println!(
                    "Fingerprint changed: {} -> {}",
                    previous.short(),
                    current.short()
                ),
                None => println!("No generated declaration found"),
            }
            Err(CliError::Stale {
                path: artifacts.path().to_path_buf(),
            })
        }
    }
}
